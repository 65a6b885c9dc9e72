//! Error type shared by every operation in the crate
//!
//! All failures from the underlying primitives (base58, PEM/DER parsing,
//! RSA, AES-CBC, JSON) are normalized into a single [`CryptoError`] at the
//! boundary of the component that observed them. Callers never see the
//! primitive library's own error types.
//!
//! # Example
//!
//! ```
//! use did_crypto::{decode_key, ErrorKind, KeyEncoding};
//!
//! let err = decode_key("0OIl", KeyEncoding::Base58).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::KeyDecoding);
//! assert!(err.code().is_some());
//! ```

use std::fmt;

use thiserror::Error;
use tracing::warn;

/// Category of a [`CryptoError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed base58, PEM, or DER input
    KeyDecoding,

    /// Key parsed but is the wrong type (public vs private, RSA vs EC) or an unsupported size
    KeySizeOrFormat,

    /// Recovered symmetric algorithm, key, or IV is not a supported configuration
    CipherConfiguration,

    /// The RSA or AES operation itself failed (wrong key, corrupted ciphertext,
    /// bad padding, plaintext that is not UTF-8)
    CryptographicOperation,

    /// Payload could not be serialized, or decrypted UTF-8 text is not JSON
    Serialization,
}

impl ErrorKind {
    /// Stable machine-readable code for this kind
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::KeyDecoding => "ERR_KEY_DECODING",
            Self::KeySizeOrFormat => "ERR_KEY_SIZE_OR_FORMAT",
            Self::CipherConfiguration => "ERR_CIPHER_CONFIGURATION",
            Self::CryptographicOperation => "ERR_CRYPTOGRAPHIC_OPERATION",
            Self::Serialization => "ERR_SERIALIZATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeyDecoding => "key decoding error",
            Self::KeySizeOrFormat => "key size or format error",
            Self::CipherConfiguration => "cipher configuration error",
            Self::CryptographicOperation => "cryptographic operation error",
            Self::Serialization => "serialization error",
        };
        f.write_str(name)
    }
}

/// The single error type returned by this crate
///
/// Carries the kind, the original message from the failing primitive, and
/// a machine-readable code. The code is the primitive's own code when one
/// is known, otherwise the code of the kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct CryptoError {
    kind: ErrorKind,
    message: String,
    code: Option<String>,
}

impl CryptoError {
    /// Create an error carrying the default code for `kind`
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: Some(kind.as_code().to_string()),
        }
    }

    /// Create an error with an explicit machine code
    pub fn with_code(kind: ErrorKind, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: Some(code.into()),
        }
    }

    pub fn key_decoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyDecoding, message)
    }

    pub fn key_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeySizeOrFormat, message)
    }

    pub fn cipher_configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CipherConfiguration, message)
    }

    pub fn operation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CryptographicOperation, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Log the error at the boundary where it was mapped and hand it back
    pub(crate) fn logged(self, operation: &'static str) -> Self {
        warn!(
            operation,
            kind = ?self.kind,
            code = self.code.as_deref().unwrap_or_default(),
            "{}",
            self.message
        );
        self
    }
}

impl From<bs58::decode::Error> for CryptoError {
    fn from(e: bs58::decode::Error) -> Self {
        let code = match &e {
            bs58::decode::Error::InvalidCharacter { .. } => "ERR_BASE58_INVALID_CHARACTER",
            bs58::decode::Error::NonAsciiCharacter { .. } => "ERR_BASE58_NON_ASCII",
            _ => ErrorKind::KeyDecoding.as_code(),
        };
        CryptoError::with_code(
            ErrorKind::KeyDecoding,
            format!("base58 decode failed: {}", e),
            code,
        )
    }
}

impl From<pem::PemError> for CryptoError {
    fn from(e: pem::PemError) -> Self {
        CryptoError::with_code(
            ErrorKind::KeyDecoding,
            format!("failed to parse PEM: {}", e),
            "ERR_PEM_PARSE",
        )
    }
}

impl From<rsa::Error> for CryptoError {
    fn from(e: rsa::Error) -> Self {
        match &e {
            rsa::Error::Decryption => CryptoError::with_code(
                ErrorKind::CryptographicOperation,
                "RSA decryption failed",
                "ERR_RSA_DECRYPTION",
            ),
            rsa::Error::MessageTooLong | rsa::Error::ModulusTooLarge => {
                CryptoError::key_format(format!("RSA key size unsuitable: {}", e))
            }
            _ => CryptoError::operation(format!("RSA operation failed: {}", e)),
        }
    }
}

impl From<aes::cipher::block_padding::UnpadError> for CryptoError {
    fn from(_: aes::cipher::block_padding::UnpadError) -> Self {
        CryptoError::with_code(
            ErrorKind::CryptographicOperation,
            "AES-CBC decryption failed: bad padding or corrupted ciphertext",
            "ERR_BAD_DECRYPT",
        )
    }
}

impl From<aes::cipher::InvalidLength> for CryptoError {
    fn from(_: aes::cipher::InvalidLength) -> Self {
        CryptoError::cipher_configuration("invalid AES key or IV length")
    }
}

impl From<serde_json::Error> for CryptoError {
    fn from(e: serde_json::Error) -> Self {
        CryptoError::serialization(format!("JSON error: {}", e))
    }
}

// Envelopes only ever carry UTF-8 JSON, so non-UTF-8 plaintext means the
// ciphertext or the unwrapped key was corrupted.
impl From<std::string::FromUtf8Error> for CryptoError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        CryptoError::with_code(
            ErrorKind::CryptographicOperation,
            format!("decrypted bytes are not UTF-8: {}", e),
            "ERR_BAD_DECRYPT",
        )
    }
}
