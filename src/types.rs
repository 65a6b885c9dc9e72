//! Envelope types and the per-call symmetric key material
//!
//! [`EncryptedEnvelope`] is the only structure meant to leave the process.
//! [`SymmetricEnvelope`] holds the AES key and IV for one call and zeroizes
//! itself on drop.

use std::fmt;
use std::str::FromStr;

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES-256 key length in bytes
pub const AES_KEY_LEN: usize = 32;

/// AES-CBC IV length in bytes
pub const AES_IV_LEN: usize = 16;

/// Identifier of the only symmetric cipher this crate produces
pub const SYMMETRIC_ALGORITHM: &str = "aes-256-cbc";

/// Modulus size for generated RSA keys
pub const RSA_KEY_BITS: usize = 2048;

/// Symmetric cipher named inside an envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetricAlgorithm {
    #[default]
    Aes256Cbc,
}

impl SymmetricAlgorithm {
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Aes256Cbc => SYMMETRIC_ALGORITHM,
        }
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for SymmetricAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(SYMMETRIC_ALGORITHM) {
            Ok(Self::Aes256Cbc)
        } else {
            Err(CryptoError::cipher_configuration(format!(
                "unsupported symmetric algorithm: {}",
                s
            )))
        }
    }
}

/// Symmetric key material for a single envelope
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SymmetricEnvelope {
    key: [u8; AES_KEY_LEN],
    iv: [u8; AES_IV_LEN],
    #[zeroize(skip)]
    algorithm: SymmetricAlgorithm,
}

impl SymmetricEnvelope {
    /// Generate a fresh key and IV from the OS random source
    pub fn generate() -> Self {
        let mut envelope = Self {
            key: [0u8; AES_KEY_LEN],
            iv: [0u8; AES_IV_LEN],
            algorithm: SymmetricAlgorithm::Aes256Cbc,
        };
        OsRng.fill_bytes(&mut envelope.key);
        OsRng.fill_bytes(&mut envelope.iv);
        envelope
    }

    /// Rebuild key material recovered from an envelope
    pub fn from_parts(
        algorithm: SymmetricAlgorithm,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Self, CryptoError> {
        if key.len() != AES_KEY_LEN {
            return Err(CryptoError::cipher_configuration(format!(
                "invalid {} key length: expected {}, got {}",
                algorithm,
                AES_KEY_LEN,
                key.len()
            )));
        }
        if iv.len() != AES_IV_LEN {
            return Err(CryptoError::cipher_configuration(format!(
                "invalid {} IV length: expected {}, got {}",
                algorithm,
                AES_IV_LEN,
                iv.len()
            )));
        }

        let mut envelope = Self {
            key: [0u8; AES_KEY_LEN],
            iv: [0u8; AES_IV_LEN],
            algorithm,
        };
        envelope.key.copy_from_slice(key);
        envelope.iv.copy_from_slice(iv);
        Ok(envelope)
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    pub fn algorithm(&self) -> SymmetricAlgorithm {
        self.algorithm
    }

    /// Encrypt with PKCS#7 block padding
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self.algorithm {
            SymmetricAlgorithm::Aes256Cbc => {
                let cipher = Aes256CbcEnc::new_from_slices(&self.key, &self.iv)?;
                Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
            }
        }
    }

    /// Decrypt and strip PKCS#7 padding
    pub fn open(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self.algorithm {
            SymmetricAlgorithm::Aes256Cbc => {
                let cipher = Aes256CbcDec::new_from_slices(&self.key, &self.iv)?;
                Ok(cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)?)
            }
        }
    }
}

/// Encrypted payload plus the wrapped key material needed to open it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    /// base58 of the AES-256-CBC ciphertext
    pub data: String,
    pub key: WrappedKeyInfo,
}

/// RSA-wrapped symmetric key material, each field base58-encoded
///
/// `did` is copied through in plaintext and is not bound to the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedKeyInfo {
    pub iv: String,
    pub key: String,
    pub algorithm: String,
    pub did: String,
}

/// A generated key pair in one external encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
    pub encoding: crate::encoding::KeyEncoding,
}
