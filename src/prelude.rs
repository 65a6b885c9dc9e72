//! Commonly used items in one import
//!
//! ```rust
//! use did_crypto::prelude::*;
//!
//! # fn example() -> Result<(), CryptoError> {
//! let pair = generate_rsa_key_pair(KeyEncoding::Pem)?;
//! assert!(validate_public_key(&pair.public_key, detect_encoding(&pair.public_key))?);
//! # Ok(())
//! # }
//! ```

pub use crate::decrypt::{decrypt, decrypt_bytes};
pub use crate::encoding::{detect_encoding, KeyEncoding};
pub use crate::encrypt::{encrypt, encrypt_bytes};
pub use crate::error::{CryptoError, ErrorKind};
pub use crate::keygen::{generate_ecc_key_pair, generate_rsa_key_pair};
pub use crate::types::{EncryptedEnvelope, KeyPair, WrappedKeyInfo};
pub use crate::validate::validate_public_key;
