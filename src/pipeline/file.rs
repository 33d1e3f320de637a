//! File pipeline.

use crate::errors::Result;
use crate::token::{PayloadKind, Token};

use super::{open_token, seal_to_token};

/// Name used when a token carries no filename.
pub const DEFAULT_FILENAME: &str = "decrypted_file";

/// MIME type used when a token carries none.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A file handed over by the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Outcome of [`encrypt_file`].
#[derive(Debug, Clone)]
pub struct FileEncryption {
    pub token: Token,
    pub filename: String,
    /// Plaintext size in bytes.
    pub size: u64,
}

/// A decrypted file with the metadata stored in its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedFile {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

/// Encrypt a file into a token.
///
/// The whole file is held in memory; callers should bound its size with
/// [`super::ensure_within_limit`] first.
pub fn encrypt_file(file: &PlainFile, password: &str) -> Result<FileEncryption> {
    let kind = PayloadKind::File {
        filename: file.name.clone(),
        mime_type: file.mime_type.clone(),
    };
    let token = seal_to_token(&file.bytes, password, kind)?;

    Ok(FileEncryption {
        token,
        filename: file.name.clone(),
        size: file.bytes.len() as u64,
    })
}

/// Decrypt a token back into file bytes.
///
/// Missing metadata falls back to [`DEFAULT_FILENAME`] and
/// [`DEFAULT_MIME_TYPE`].
pub fn decrypt_file(token: &str, password: &str) -> Result<DecryptedFile> {
    let (bytes, kind) = open_token(token, password)?;

    let (filename, mime_type) = match kind {
        PayloadKind::File {
            filename,
            mime_type,
        } => (filename, mime_type),
        PayloadKind::Text => (String::new(), String::new()),
    };

    Ok(DecryptedFile {
        bytes,
        filename: non_empty_or(filename, DEFAULT_FILENAME),
        mime_type: non_empty_or(mime_type, DEFAULT_MIME_TYPE),
    })
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
