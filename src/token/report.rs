//! Saved token reports.
//!
//! When a token is written to disk it is wrapped in a short human-readable
//! report so the file explains itself:
//!
//! ```text
//! AES256GCM Encryption Token
//! ========================
//!
//! Filename: photo.jpg
//! Size: 1.5 MB
//! Created: 2026-10-19 14:03:11
//!
//! TOKEN (keep this secure):
//! eyJjaXBoZXJ0ZXh0Ijoi...
//! ```

use std::fmt::Write;

use chrono::{DateTime, TimeZone};

use crate::errors::{Result, SealTokenError};
use crate::token::Token;

/// Title line of every report.
const TITLE: &str = "AES256GCM Encryption Token";

/// Line that precedes the token itself.
const TOKEN_MARKER: &str = "TOKEN (keep this secure):";

/// Report file name used for text tokens (before the suffix).
const TEXT_REPORT_STEM: &str = "encrypted_text";

/// What the token inside a report protects.
#[derive(Debug, Clone, Copy)]
pub enum ReportSubject<'a> {
    Text { characters: usize },
    File { filename: &'a str, size: u64 },
}

impl ReportSubject<'_> {
    /// Default file name for the report, e.g. `photo.jpg.token.txt`.
    pub fn report_file_name(&self, suffix: &str) -> String {
        match self {
            Self::Text { .. } => format!("{TEXT_REPORT_STEM}{suffix}"),
            Self::File { filename, .. } => format!("{filename}{suffix}"),
        }
    }
}

/// Render the report text for `token`.
pub fn render_report<Tz>(
    token: &Token,
    subject: &ReportSubject<'_>,
    created: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "========================");
    let _ = writeln!(out);
    match subject {
        ReportSubject::Text { characters } => {
            let _ = writeln!(out, "Type: Text");
            let _ = writeln!(out, "Characters: {characters}");
        }
        ReportSubject::File { filename, size } => {
            let _ = writeln!(out, "Filename: {filename}");
            let _ = writeln!(out, "Size: {}", format_file_size(*size));
        }
    }
    let _ = writeln!(out, "Created: {}", created.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out);
    let _ = writeln!(out, "{TOKEN_MARKER}");
    let _ = writeln!(out, "{token}");
    out
}

/// Pull the token out of a saved report, or accept a bare token file.
pub fn extract_token(contents: &str) -> Result<Token> {
    let body = match contents.find(TOKEN_MARKER) {
        Some(pos) => &contents[pos + TOKEN_MARKER.len()..],
        None => contents,
    };

    // The token may have been re-wrapped by an editor; join its lines.
    let token: String = body.split_whitespace().collect();
    if token.is_empty() {
        return Err(SealTokenError::MalformedToken);
    }
    Ok(Token::new(token))
}

/// Format a byte count for display (`0 Bytes`, `1.5 KB`, `100 MB`).
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // Two decimals, trailing zeros dropped.
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}
