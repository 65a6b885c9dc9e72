//! Shared fixtures for the integration tests
//!
//! RSA key generation is slow in debug builds, so each fixture pair is
//! generated once per test binary and reused.

#![allow(dead_code)]

use did_crypto::{decode_key, encode_key, generate_rsa_key_pair, KeyEncoding, KeyKind, KeyPair};
use lazy_static::lazy_static;

pub const TEST_DID: &str = "did:example:123#key-1";

lazy_static! {
    static ref RECIPIENT_PEM: KeyPair =
        generate_rsa_key_pair(KeyEncoding::Pem).expect("generate recipient key pair");
    static ref OTHER_PEM: KeyPair =
        generate_rsa_key_pair(KeyEncoding::Pem).expect("generate second key pair");
}

/// Install a subscriber once so `RUST_LOG=did_crypto=debug` shows library events
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The recipient key pair, PEM-encoded
pub fn recipient_pem() -> &'static KeyPair {
    &RECIPIENT_PEM
}

/// The recipient key pair re-encoded as base58 (same key material)
pub fn recipient_base58() -> KeyPair {
    reencode(&RECIPIENT_PEM, KeyEncoding::Base58)
}

/// An unrelated key pair, PEM-encoded
pub fn other_pem() -> &'static KeyPair {
    &OTHER_PEM
}

fn reencode(pair: &KeyPair, encoding: KeyEncoding) -> KeyPair {
    let public = decode_key(&pair.public_key, pair.encoding).expect("decode public key");
    let private = decode_key(&pair.private_key, pair.encoding).expect("decode private key");
    KeyPair {
        public_key: encode_key(&public, KeyKind::Public, encoding),
        private_key: encode_key(&private, KeyKind::Private, encoding),
        encoding,
    }
}

/// Flip every bit of one byte inside a base58 field and re-encode it
pub fn flip_byte(field: &str, index: usize) -> String {
    let mut bytes = bs58::decode(field).into_vec().expect("field is base58");
    bytes[index] ^= 0xFF;
    bs58::encode(bytes).into_string()
}
