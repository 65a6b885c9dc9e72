//! Public key validation

use tracing::debug;

use crate::codec::{decode_key, parse_public_key, PublicKey};
use crate::encoding::KeyEncoding;
use crate::error::CryptoError;

/// Check that `key` is a well-formed public key under `encoding`
///
/// Returns `Ok(true)` when the key parses as an RSA or P-256 public key.
/// Anything else is an error, never `Ok(false)`: a malformed key is
/// reported with the reason it failed.
pub fn validate_public_key(key: &str, encoding: KeyEncoding) -> Result<bool, CryptoError> {
    let parsed = decode_key(key, encoding)
        .and_then(|canonical| parse_public_key(&canonical))
        .map_err(|e| e.logged("validate_public_key"))?;

    let key_type = match parsed {
        PublicKey::Rsa(_) => "rsa",
        PublicKey::Ec(_) => "ec-p256",
    };
    debug!(key_type, %encoding, "public key is valid");
    Ok(true)
}
