//! Text pipeline.

use crate::errors::Result;
use crate::token::{PayloadKind, Token};

use super::{open_token, seal_to_token};

/// Outcome of [`encrypt_text`].
#[derive(Debug, Clone)]
pub struct TextEncryption {
    pub token: Token,
    /// Length of the input in characters (not bytes).
    pub text_length: usize,
}

/// Encrypt a UTF-8 string into a token. The empty string is allowed.
pub fn encrypt_text(text: &str, password: &str) -> Result<TextEncryption> {
    let token = seal_to_token(text.as_bytes(), password, PayloadKind::Text)?;

    Ok(TextEncryption {
        token,
        text_length: text.chars().count(),
    })
}

/// Decrypt a token back into text.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing; the tag has already proven the bytes are what was sealed.
pub fn decrypt_text(token: &str, password: &str) -> Result<String> {
    let (bytes, _kind) = open_token(token, password)?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
