//! Token serialization.
//!
//! A token is two layers of standard base64:
//!
//! ```text
//! base64( JSON { "ciphertext": b64, "iv": b64, "salt": b64, "tag": b64,
//!                "filename": str, "mimeType": str }        // file payload
//!         JSON { "ciphertext": b64, "iv": b64, "salt": b64, "tag": b64,
//!                "isText": true }                          // text payload
//! )
//! ```
//!
//! - The JSON object is keyed, so decoders ignore fields they do not know.
//! - A missing `isText` means a file payload.
//! - The outer layer has no separators and survives a plain-text paste.

use std::fmt;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD, STANDARD as BASE64};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::crypto::{IV_LEN, SALT_LEN, TAG_LEN};
use crate::errors::{Result, SealTokenError};

/// Decoder that accepts what a browser's `atob` accepts: padding optional,
/// non-canonical trailing bits allowed.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// What was encrypted, plus the metadata that travels with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadKind {
    /// A file. Both strings are user-controlled and purely advisory.
    File { filename: String, mime_type: String },
    /// A block of UTF-8 text.
    Text,
}

/// The decoded form of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    /// Ciphertext without the tag; as long as the plaintext.
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
    pub iv: [u8; IV_LEN],
    pub salt: [u8; SALT_LEN],
    pub kind: PayloadKind,
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    File,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::File => "file",
            Self::Unknown => "unknown",
        })
    }
}

/// An encoded token: one opaque base64 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Wrap a string received from the user. No validation happens here;
    /// [`decode`] does that.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// The JSON object inside the outer base64 layer.
///
/// Every field is optional at this level so the structural parse can
/// succeed on tokens that are later rejected by [`decode`]. A field of the
/// wrong JSON type reads as absent rather than failing the parse.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TokenBody {
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    ciphertext: Option<String>,

    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    iv: Option<String>,

    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    salt: Option<String>,

    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    tag: Option<String>,

    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    filename: Option<String>,

    #[serde(
        rename = "mimeType",
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    mime_type: Option<String>,

    #[serde(
        rename = "isText",
        default,
        deserialize_with = "bool_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    is_text: Option<bool>,
}

impl TokenBody {
    fn kind(&self) -> TokenKind {
        if self.is_text == Some(true) {
            TokenKind::Text
        } else {
            TokenKind::File
        }
    }
}

impl From<&EncryptedPayload> for TokenBody {
    fn from(payload: &EncryptedPayload) -> Self {
        let mut body = TokenBody {
            ciphertext: Some(BASE64.encode(&payload.ciphertext)),
            iv: Some(BASE64.encode(payload.iv)),
            salt: Some(BASE64.encode(payload.salt)),
            tag: Some(BASE64.encode(payload.tag)),
            ..TokenBody::default()
        };
        match &payload.kind {
            PayloadKind::File {
                filename,
                mime_type,
            } => {
                body.filename = Some(filename.clone());
                body.mime_type = Some(mime_type.clone());
            }
            PayloadKind::Text => body.is_text = Some(true),
        }
        body
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Serialize a payload into a token.
pub fn encode(payload: &EncryptedPayload) -> Result<Token> {
    let body = TokenBody::from(payload);
    let json = serde_json::to_vec(&body)
        .map_err(|e| SealTokenError::SerializationError(format!("token JSON: {e}")))?;
    Ok(Token(BASE64.encode(json)))
}

/// Parse a token back into a payload.
///
/// Fails with `MalformedToken` when the outer base64, the JSON object, or
/// any binary field is invalid. Runs no cryptography.
///
/// An empty `ciphertext` is accepted (only `iv`, `salt` and `tag` must be
/// non-empty) so a token for the empty plaintext decodes and round-trips.
pub fn decode(token: &str) -> Result<EncryptedPayload> {
    let body = parse_body(token)?;
    let kind = body.kind();

    // The ciphertext of an empty plaintext is legitimately empty, so only
    // its presence is required.
    let ciphertext = binary_field(body.ciphertext.as_deref(), "ciphertext", true)?;
    let iv = fixed_field::<IV_LEN>(body.iv.as_deref(), "iv")?;
    let salt = fixed_field::<SALT_LEN>(body.salt.as_deref(), "salt")?;
    let tag = fixed_field::<TAG_LEN>(body.tag.as_deref(), "tag")?;

    let kind = match kind {
        TokenKind::Text => PayloadKind::Text,
        _ => PayloadKind::File {
            filename: body.filename.unwrap_or_default(),
            mime_type: body.mime_type.unwrap_or_default(),
        },
    };

    Ok(EncryptedPayload {
        ciphertext,
        tag,
        iv,
        salt,
        kind,
    })
}

/// Report whether a token holds text or a file without validating the
/// binary fields. Never fails: anything unparsable is `Unknown`.
pub fn classify(token: &str) -> TokenKind {
    match parse_body(token) {
        Ok(body) => body.kind(),
        Err(_) => TokenKind::Unknown,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Outer base64 + JSON object parse, shared by `classify` and `decode`.
fn parse_body(token: &str) -> Result<TokenBody> {
    // Pasted tokens may be wrapped or carry a trailing newline.
    let compact: String = token
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return Err(malformed("empty token"));
    }

    let json = LENIENT_BASE64
        .decode(compact.as_bytes())
        .map_err(|e| malformed(format_args!("outer base64: {e}")))?;

    // Parse as a map first so arrays and scalars are rejected even though
    // serde would accept a sequence for a struct.
    let object: Map<String, Value> =
        serde_json::from_slice(&json).map_err(|e| malformed(format_args!("JSON: {e}")))?;
    serde_json::from_value(Value::Object(object))
        .map_err(|e| malformed(format_args!("JSON fields: {e}")))
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn bool_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

fn binary_field(value: Option<&str>, name: &str, allow_empty: bool) -> Result<Vec<u8>> {
    let encoded = value.ok_or_else(|| malformed(format_args!("missing {name}")))?;
    if encoded.is_empty() && !allow_empty {
        return Err(malformed(format_args!("empty {name}")));
    }
    LENIENT_BASE64
        .decode(encoded)
        .map_err(|e| malformed(format_args!("{name} base64: {e}")))
}

fn fixed_field<const N: usize>(value: Option<&str>, name: &str) -> Result<[u8; N]> {
    let bytes = binary_field(value, name, false)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        malformed(format_args!(
            "{name} is {} bytes, expected {N}",
            bytes.len()
        ))
    })
}

/// Log the precise reason locally and return the generic error.
fn malformed(reason: impl fmt::Display) -> SealTokenError {
    tracing::debug!(%reason, "rejected malformed token");
    SealTokenError::MalformedToken
}
