//! Cryptographic primitives for SealToken.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - The zeroize-on-drop `DerivedKey` wrapper (`keys`)
//! - AES-256-GCM seal/open with a detached tag (`encryption`)
//!
//! The parameters are fixed; every token ever produced uses the same
//! values, so none of them are configurable.

pub mod encryption;
pub mod kdf;
pub mod keys;

pub use encryption::{generate_iv, open, seal, IV_LEN, TAG_LEN};
pub use kdf::{derive_key, generate_salt, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};
pub use keys::DerivedKey;
