//! Key-pair generation in either external encoding
//!
//! Public halves are SubjectPublicKeyInfo DER, private halves PKCS#8 DER,
//! rendered as PEM or base58 per the requested [`KeyEncoding`].

use pkcs8::{EncodePrivateKey, EncodePublicKey};
use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;

use crate::codec::{encode_key, CanonicalKey, KeyKind};
use crate::encoding::KeyEncoding;
use crate::error::CryptoError;
use crate::types::{KeyPair, RSA_KEY_BITS};

/// Generate a 2048-bit RSA key pair for envelope encryption
pub fn generate_rsa_key_pair(encoding: KeyEncoding) -> Result<KeyPair, CryptoError> {
    let private_key = RsaPrivateKey::new(&mut OsRng, RSA_KEY_BITS)
        .map_err(|e| CryptoError::operation(format!("RSA key generation failed: {}", e)))?;
    let public_key = RsaPublicKey::from(&private_key);

    let private_der = private_key
        .to_pkcs8_der()
        .map_err(|e| CryptoError::key_format(format!("failed to encode RSA private key: {}", e)))?;
    let public_der = public_key
        .to_public_key_der()
        .map_err(|e| CryptoError::key_format(format!("failed to encode RSA public key: {}", e)))?;

    debug!(bits = RSA_KEY_BITS, %encoding, "generated RSA key pair");
    Ok(render_pair(public_der.as_bytes(), private_der.as_bytes(), encoding))
}

/// Generate a P-256 key pair
///
/// EC keys cannot open envelopes; they are produced for signing workflows
/// and are accepted by [`crate::validate_public_key`].
pub fn generate_ecc_key_pair(encoding: KeyEncoding) -> Result<KeyPair, CryptoError> {
    let secret = p256::SecretKey::random(&mut OsRng);

    let private_der = secret
        .to_pkcs8_der()
        .map_err(|e| CryptoError::key_format(format!("failed to encode EC private key: {}", e)))?;
    let public_der = secret
        .public_key()
        .to_public_key_der()
        .map_err(|e| CryptoError::key_format(format!("failed to encode EC public key: {}", e)))?;

    debug!(curve = "P-256", %encoding, "generated EC key pair");
    Ok(render_pair(public_der.as_bytes(), private_der.as_bytes(), encoding))
}

fn render_pair(public_der: &[u8], private_der: &[u8], encoding: KeyEncoding) -> KeyPair {
    let public = CanonicalKey::from_der(public_der.to_vec());
    let private = CanonicalKey::from_der(private_der.to_vec());

    KeyPair {
        public_key: encode_key(&public, KeyKind::Public, encoding),
        private_key: encode_key(&private, KeyKind::Private, encoding),
        encoding,
    }
}
