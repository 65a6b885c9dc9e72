//! External key encodings
//!
//! Keys cross the crate boundary either as PEM text or as base58 text of
//! the DER bytes. [`KeyEncoding`] names which one a caller is handing over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Encoding of a key string passed across the crate boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEncoding {
    /// PEM text with `-----BEGIN ...-----` armor
    #[default]
    Pem,

    /// base58 text of the DER bytes
    Base58,
}

impl KeyEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pem => "pem",
            Self::Base58 => "base58",
        }
    }
}

impl fmt::Display for KeyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyEncoding {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pem" => Ok(Self::Pem),
            "base58" => Ok(Self::Base58),
            other => Err(CryptoError::key_format(format!(
                "unsupported key encoding: {}",
                other
            ))),
        }
    }
}

/// Infer the encoding of a key string from its textual shape
///
/// PEM armor wins; anything else is treated as base58. The result is a
/// guess, the actual decode still validates the content.
pub fn detect_encoding(key: &str) -> KeyEncoding {
    if key.trim_start().starts_with("-----BEGIN") {
        KeyEncoding::Pem
    } else {
        KeyEncoding::Base58
    }
}
