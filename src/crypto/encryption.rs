//! AES-256-GCM authenticated encryption with a detached tag.
//!
//! The ciphertext carries no padding and no embedded nonce: it is exactly
//! as long as the plaintext. The 12-byte IV and the 16-byte tag travel
//! separately inside the token. Associated data is always empty.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{AeadInPlace, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce, Tag};

use super::keys::DerivedKey;
use crate::errors::{Result, SealTokenError};

/// Size of the AES-256-GCM nonce in bytes.
pub const IV_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// Generate a random 12-byte IV. Called once per encryption.
pub fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Encrypt `plaintext` under `key` and `iv`.
///
/// Returns the ciphertext (same length as the plaintext) and the detached
/// authentication tag.
pub fn seal(
    key: &DerivedKey,
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN])> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SealTokenError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(iv), b"", &mut buffer)
        .map_err(|e| SealTokenError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);
    Ok((buffer, tag_bytes))
}

/// Decrypt and verify a ciphertext produced by [`seal`].
///
/// A wrong key and a modified ciphertext, IV or tag all produce the same
/// `AuthenticationFailure`; GCM cannot tell them apart.
pub fn open(
    key: &DerivedKey,
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| SealTokenError::AuthenticationFailure)?;

    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(iv),
            b"",
            &mut buffer,
            Tag::from_slice(tag),
        )
        .map_err(|_| SealTokenError::AuthenticationFailure)?;

    Ok(buffer)
}
