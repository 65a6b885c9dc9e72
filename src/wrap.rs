//! Asymmetric wrapping of symmetric key material
//!
//! Each field of the symmetric envelope (key, IV, algorithm identifier) is
//! wrapped in its own RSA operation. Padding is PKCS#1 v1.5, which mobile
//! implementations of the same envelope format expect; OAEP envelopes will
//! not open on those platforms.

use rand::rngs::OsRng;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Wraps and unwraps short secrets under an asymmetric key pair
pub trait KeyWrap {
    /// Public key type
    type PublicKey;

    /// Private key type
    type PrivateKey;

    /// Wrap `secret` under `public_key`
    fn wrap(&self, secret: &[u8], public_key: &Self::PublicKey) -> Result<Vec<u8>, CryptoError>;

    /// Recover a secret wrapped by [`KeyWrap::wrap`]
    fn unwrap(
        &self,
        wrapped: &[u8],
        private_key: &Self::PrivateKey,
    ) -> Result<Zeroizing<Vec<u8>>, CryptoError>;
}

/// RSA encryption with PKCS#1 v1.5 padding
#[derive(Debug, Clone, Copy, Default)]
pub struct RsaPkcs1v15Wrap;

impl KeyWrap for RsaPkcs1v15Wrap {
    type PublicKey = RsaPublicKey;
    type PrivateKey = RsaPrivateKey;

    fn wrap(&self, secret: &[u8], public_key: &RsaPublicKey) -> Result<Vec<u8>, CryptoError> {
        Ok(public_key.encrypt(&mut OsRng, Pkcs1v15Encrypt, secret)?)
    }

    fn unwrap(
        &self,
        wrapped: &[u8],
        private_key: &RsaPrivateKey,
    ) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        // RSA blinding keeps decryption timing independent of the ciphertext
        let secret = private_key.decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, wrapped)?;
        Ok(Zeroizing::new(secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rsa::traits::PublicKeyParts;

    fn generate_test_keypair() -> (RsaPublicKey, RsaPrivateKey) {
        let private_key = RsaPrivateKey::new(&mut OsRng, 2048).unwrap();
        (RsaPublicKey::from(&private_key), private_key)
    }

    #[test]
    fn test_wrap_roundtrip() {
        let (public_key, private_key) = generate_test_keypair();
        let wrapper = RsaPkcs1v15Wrap;

        let secret = b"test_payload_key_32_bytes_long!!";
        let wrapped = wrapper.wrap(secret, &public_key).unwrap();
        assert_eq!(wrapped.len(), public_key.size());

        let unwrapped = wrapper.unwrap(&wrapped, &private_key).unwrap();
        assert_eq!(secret.as_slice(), unwrapped.as_slice());
    }

    #[test]
    fn test_wrap_is_randomized() {
        let (public_key, _) = generate_test_keypair();
        let wrapper = RsaPkcs1v15Wrap;

        let first = wrapper.wrap(b"aes-256-cbc", &public_key).unwrap();
        let second = wrapper.wrap(b"aes-256-cbc", &public_key).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_unwrap_with_wrong_key_fails() {
        let (public_key, _) = generate_test_keypair();
        let (_, other_private) = generate_test_keypair();
        let wrapper = RsaPkcs1v15Wrap;

        let wrapped = wrapper.wrap(&[7u8; 16], &public_key).unwrap();
        let err = wrapper.unwrap(&wrapped, &other_private).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicOperation);
    }

    #[test]
    fn test_oversized_secret_is_key_size_error() {
        let (public_key, _) = generate_test_keypair();
        let wrapper = RsaPkcs1v15Wrap;

        // PKCS#1 v1.5 leaves room for at most size - 11 bytes
        let too_long = vec![0u8; public_key.size() - 10];
        let err = wrapper.wrap(&too_long, &public_key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeySizeOrFormat);
    }
}
