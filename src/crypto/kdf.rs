//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is fixed at 100 000 so a token produced today can
//! be opened by any later build without storing KDF parameters in it.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use super::keys::DerivedKey;

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Number of PBKDF2 rounds.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 32-byte key from a password and salt.
///
/// The same password + salt always produce the same key. An empty
/// password is derivable here; rejecting it is the caller's job.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);

    let derived = DerivedKey::new(key);
    key.zeroize();
    derived
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}
