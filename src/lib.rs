//! Hybrid envelope encryption for DID workflows
//!
//! Payloads are encrypted to a recipient's RSA public key with a fresh
//! AES-256-CBC key per call; the key, IV, and algorithm identifier are each
//! wrapped with RSA PKCS#1 v1.5 and every field is base58-encoded. Keys are
//! accepted as PEM text or as base58 text of their DER bytes.
//!
//! # Example
//!
//! ```
//! use did_crypto::{decrypt, encrypt, generate_rsa_key_pair, KeyEncoding};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), did_crypto::CryptoError> {
//! let pair = generate_rsa_key_pair(KeyEncoding::Base58)?;
//! let payload = json!({ "name": "Alice", "age": 30 });
//!
//! let envelope = encrypt("did:example:alice#key-1", &pair.public_key, &payload, KeyEncoding::Base58)?;
//! let decrypted = decrypt(&pair.private_key, &envelope, KeyEncoding::Base58)?;
//! assert_eq!(decrypted, payload);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Logging
//!
//! Operations emit `tracing` events at `debug` on success and `warn` when
//! an error is returned. Key material and plaintext are never logged.

pub mod codec;
pub mod decrypt;
pub mod encoding;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod prelude;
pub mod types;
pub mod validate;
pub mod wrap;

pub use codec::{decode_key, encode_key, to_pem, CanonicalKey, KeyKind, PublicKey};
pub use decrypt::{decrypt, decrypt_bytes};
pub use encoding::{detect_encoding, KeyEncoding};
pub use encrypt::{encrypt, encrypt_bytes, to_deterministic_json};
pub use error::{CryptoError, ErrorKind};
pub use keygen::{generate_ecc_key_pair, generate_rsa_key_pair};
pub use types::{
    EncryptedEnvelope, KeyPair, SymmetricAlgorithm, SymmetricEnvelope, WrappedKeyInfo,
    AES_IV_LEN, AES_KEY_LEN, RSA_KEY_BITS, SYMMETRIC_ALGORITHM,
};
pub use validate::validate_public_key;
pub use wrap::{KeyWrap, RsaPkcs1v15Wrap};
