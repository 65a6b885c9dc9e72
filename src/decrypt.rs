//! Envelope decryption with the recipient's RSA private key
//!
//! Decryption is all-or-nothing: any failure along the way (bad key,
//! corrupted field, unsupported algorithm, non-JSON plaintext) returns an
//! error and no partial output.

use serde_json::Value;
use tracing::debug;

use crate::codec::{decode_key, parse_rsa_private_key};
use crate::encoding::KeyEncoding;
use crate::error::CryptoError;
use crate::types::{EncryptedEnvelope, SymmetricAlgorithm, SymmetricEnvelope};
use crate::wrap::{KeyWrap, RsaPkcs1v15Wrap};

/// Decrypt an envelope produced by [`crate::encrypt`] back into its JSON value
///
/// `encoding` names the encoding of `private_key`.
pub fn decrypt(
    private_key: &str,
    envelope: &EncryptedEnvelope,
    encoding: KeyEncoding,
) -> Result<Value, CryptoError> {
    let plaintext = decrypt_bytes(private_key, envelope, encoding)?;
    parse_plaintext(plaintext).map_err(|e| e.logged("decrypt"))
}

/// Decrypt an envelope back into raw bytes
pub fn decrypt_bytes(
    private_key: &str,
    envelope: &EncryptedEnvelope,
    encoding: KeyEncoding,
) -> Result<Vec<u8>, CryptoError> {
    open(private_key, envelope, encoding).map_err(|e| e.logged("decrypt"))
}

fn open(
    private_key: &str,
    envelope: &EncryptedEnvelope,
    encoding: KeyEncoding,
) -> Result<Vec<u8>, CryptoError> {
    let canonical = decode_key(private_key, encoding)?;
    let private_key = parse_rsa_private_key(&canonical)?;

    let wrapped_iv = decode_field("key.iv", &envelope.key.iv)?;
    let wrapped_key = decode_field("key.key", &envelope.key.key)?;
    let wrapped_algorithm = decode_field("key.algorithm", &envelope.key.algorithm)?;
    let ciphertext = decode_field("data", &envelope.data)?;

    let wrapper = RsaPkcs1v15Wrap;
    let iv = wrapper.unwrap(&wrapped_iv, &private_key)?;
    let key = wrapper.unwrap(&wrapped_key, &private_key)?;
    let algorithm_bytes = wrapper.unwrap(&wrapped_algorithm, &private_key)?;

    let algorithm: SymmetricAlgorithm = std::str::from_utf8(&algorithm_bytes)
        .map_err(|_| CryptoError::cipher_configuration("algorithm identifier is not UTF-8"))?
        .parse()?;

    let symmetric = SymmetricEnvelope::from_parts(algorithm, &key, &iv)?;
    let plaintext = symmetric.open(&ciphertext)?;

    debug!(
        did = envelope.key.did.as_str(),
        %encoding,
        %algorithm,
        plaintext_len = plaintext.len(),
        "decrypted envelope"
    );
    Ok(plaintext)
}

fn decode_field(name: &str, value: &str) -> Result<Vec<u8>, CryptoError> {
    bs58::decode(value).into_vec().map_err(|e| {
        let mapped = CryptoError::from(e);
        CryptoError::with_code(
            mapped.kind(),
            format!("envelope field {}: {}", name, mapped.message()),
            mapped.code().unwrap_or_default(),
        )
    })
}

fn parse_plaintext(plaintext: Vec<u8>) -> Result<Value, CryptoError> {
    let text = String::from_utf8(plaintext)?;
    Ok(serde_json::from_str(&text)?)
}
