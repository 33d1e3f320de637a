//! The portable token: codec and saved-report format.

pub mod format;
pub mod report;

pub use format::{classify, decode, encode, EncryptedPayload, PayloadKind, Token, TokenKind};
pub use report::{extract_token, format_file_size, render_report, ReportSubject};
