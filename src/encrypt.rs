//! Envelope encryption to a recipient's RSA public key
//!
//! A fresh AES-256-CBC key and IV are drawn for every call. The payload is
//! encrypted under them, then the key, IV, and algorithm identifier are each
//! wrapped separately with RSA PKCS#1 v1.5 and everything is base58-encoded.
//!
//! # Example
//!
//! ```no_run
//! use did_crypto::{encrypt, generate_rsa_key_pair, KeyEncoding};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pair = generate_rsa_key_pair(KeyEncoding::Pem)?;
//! let envelope = encrypt(
//!     "did:example:123#key-1",
//!     &pair.public_key,
//!     &json!({ "credential": "abc" }),
//!     KeyEncoding::Pem,
//! )?;
//! assert_eq!(envelope.key.did, "did:example:123#key-1");
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::debug;

use crate::codec::{decode_key, parse_rsa_public_key};
use crate::encoding::KeyEncoding;
use crate::error::CryptoError;
use crate::types::{EncryptedEnvelope, SymmetricEnvelope, WrappedKeyInfo};
use crate::wrap::{KeyWrap, RsaPkcs1v15Wrap};

/// Serialize `payload` to JSON with object keys in sorted order
///
/// Going through [`serde_json::Value`] sorts every map by key, so two
/// payloads that differ only in field order produce identical bytes.
pub fn to_deterministic_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, CryptoError> {
    let value = serde_json::to_value(payload)?;
    Ok(serde_json::to_string(&value)?)
}

/// Encrypt a JSON-serializable payload for the holder of `public_key`
///
/// # Arguments
///
/// * `did` - Recipient tag copied into the envelope unauthenticated
/// * `public_key` - RSA public key, PEM or base58 per `encoding`
/// * `payload` - Any `Serialize` value; serialized deterministically
/// * `encoding` - Encoding of `public_key`
pub fn encrypt<T: Serialize + ?Sized>(
    did: &str,
    public_key: &str,
    payload: &T,
    encoding: KeyEncoding,
) -> Result<EncryptedEnvelope, CryptoError> {
    let serialized = to_deterministic_json(payload).map_err(|e| e.logged("encrypt"))?;
    encrypt_bytes(did, public_key, serialized.as_bytes(), encoding)
}

/// Encrypt raw bytes for the holder of `public_key`
///
/// Same envelope format as [`encrypt`], without the JSON step. Pairs with
/// [`crate::decrypt_bytes`].
pub fn encrypt_bytes(
    did: &str,
    public_key: &str,
    data: &[u8],
    encoding: KeyEncoding,
) -> Result<EncryptedEnvelope, CryptoError> {
    seal(did, public_key, data, encoding).map_err(|e| e.logged("encrypt"))
}

fn seal(
    did: &str,
    public_key: &str,
    data: &[u8],
    encoding: KeyEncoding,
) -> Result<EncryptedEnvelope, CryptoError> {
    let canonical = decode_key(public_key, encoding)?;
    let public_key = parse_rsa_public_key(&canonical)?;

    let symmetric = SymmetricEnvelope::generate();
    let ciphertext = symmetric.seal(data)?;

    let wrapper = RsaPkcs1v15Wrap;
    let wrapped_iv = wrapper.wrap(symmetric.iv(), &public_key)?;
    let wrapped_key = wrapper.wrap(symmetric.key(), &public_key)?;
    let wrapped_algorithm = wrapper.wrap(symmetric.algorithm().identifier().as_bytes(), &public_key)?;

    debug!(
        did,
        %encoding,
        plaintext_len = data.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted envelope"
    );

    Ok(EncryptedEnvelope {
        data: bs58::encode(ciphertext).into_string(),
        key: WrappedKeyInfo {
            iv: bs58::encode(wrapped_iv).into_string(),
            key: bs58::encode(wrapped_key).into_string(),
            algorithm: bs58::encode(wrapped_algorithm).into_string(),
            did: did.to_string(),
        },
    })
}
