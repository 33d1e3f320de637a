//! Encrypt/decrypt pipelines for files and text.
//!
//! Encrypt: salt → iv → derive key → seal → payload → token.
//! Decrypt: classify → decode → derive key → open → file bytes or text.
//!
//! Every entry point is a pure function of its arguments plus the OS
//! random source. Nothing is cached between calls, so independent calls
//! can run concurrently on separate threads.

pub mod file;
pub mod text;

pub use file::{decrypt_file, encrypt_file, DecryptedFile, FileEncryption, PlainFile};
pub use text::{decrypt_text, encrypt_text, TextEncryption};

use crate::crypto::{self, DerivedKey, IV_LEN, SALT_LEN};
use crate::errors::{Result, SealTokenError};
use crate::token::{self, EncryptedPayload, PayloadKind, Token, TokenKind};

/// Largest file the CLI accepts by default (100 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Either kind of decrypted content, as picked by [`decrypt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decrypted {
    Text(String),
    File(DecryptedFile),
}

/// Decrypt any token, routing on its `isText` discriminant.
pub fn decrypt(token: &str, password: &str) -> Result<Decrypted> {
    match token::classify(token) {
        TokenKind::Text => decrypt_text(token, password).map(Decrypted::Text),
        TokenKind::File => decrypt_file(token, password).map(Decrypted::File),
        TokenKind::Unknown => Err(SealTokenError::MalformedToken),
    }
}

/// Reject inputs larger than the caller's limit.
///
/// The core never calls this on its own; the front-end decides the limit.
pub fn ensure_within_limit(len: u64, max: u64) -> Result<()> {
    if len > max {
        return Err(SealTokenError::InvalidInput(format!(
            "input is {len} bytes, larger than the {max}-byte limit"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Shared steps
// ---------------------------------------------------------------------------

fn ensure_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(SealTokenError::InvalidInput(
            "password must not be empty".into(),
        ));
    }
    Ok(())
}

/// Fresh salt + iv, derive, seal, serialize.
fn seal_to_token(plaintext: &[u8], password: &str, kind: PayloadKind) -> Result<Token> {
    ensure_password(password)?;

    let salt: [u8; SALT_LEN] = crypto::generate_salt();
    let iv: [u8; IV_LEN] = crypto::generate_iv();

    let (ciphertext, tag) = {
        let key: DerivedKey = crypto::derive_key(password.as_bytes(), &salt);
        crypto::seal(&key, &iv, plaintext)?
    };

    let payload = EncryptedPayload {
        ciphertext,
        tag,
        iv,
        salt,
        kind,
    };
    tracing::debug!(
        kind = %payload_kind_name(&payload.kind),
        plaintext_len = plaintext.len(),
        "sealed payload"
    );
    token::encode(&payload)
}

/// Decode, derive, open. Returns the plaintext and the payload metadata.
fn open_token(token: &str, password: &str) -> Result<(Vec<u8>, PayloadKind)> {
    ensure_password(password)?;

    let payload = token::decode(token)?;
    let plaintext = {
        let key = crypto::derive_key(password.as_bytes(), &payload.salt);
        crypto::open(&key, &payload.iv, &payload.ciphertext, &payload.tag)
    };

    match plaintext {
        Ok(plaintext) => {
            tracing::debug!(
                kind = %payload_kind_name(&payload.kind),
                plaintext_len = plaintext.len(),
                "opened payload"
            );
            Ok((plaintext, payload.kind))
        }
        Err(e) => {
            tracing::debug!("tag verification failed");
            Err(e)
        }
    }
}

fn payload_kind_name(kind: &PayloadKind) -> TokenKind {
    match kind {
        PayloadKind::File { .. } => TokenKind::File,
        PayloadKind::Text => TokenKind::Text,
    }
}
