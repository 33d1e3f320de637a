//! `sealtoken encrypt` — turn a file or text into a token.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::cli::output;
use crate::cli::{clipboard, load_settings, prompt_new_password, TokenSink};
use crate::config::Settings;
use crate::errors::{Result, SealTokenError};
use crate::pipeline::{self, PlainFile};
use crate::token::{render_report, ReportSubject, Token};

/// Execute `encrypt file`.
pub fn execute_file(path: &str, mime_type: Option<&str>, sink: &TokenSink) -> Result<()> {
    let settings = load_settings()?;
    let path = Path::new(path);

    // Check the size before reading anything into memory.
    let metadata = fs::metadata(path).map_err(|e| {
        SealTokenError::InvalidInput(format!("cannot read {}: {e}", path.display()))
    })?;
    if !metadata.is_file() {
        return Err(SealTokenError::InvalidInput(format!(
            "{} is not a file",
            path.display()
        )));
    }
    pipeline::ensure_within_limit(metadata.len(), settings.max_file_size_bytes())?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SealTokenError::InvalidInput(format!("{} has no file name", path.display()))
        })?;
    let mime_type = mime_type
        .map(str::to_string)
        .unwrap_or_else(|| guess_mime_type(path).to_string());

    let file = PlainFile {
        name,
        mime_type,
        bytes: fs::read(path)?,
    };

    let password = prompt_new_password(settings.min_password_length)?;
    let result = pipeline::encrypt_file(&file, &password)?;

    output::success(&format!("Encrypted {}", result.filename));
    output::print_summary(&output::file_rows(&result.filename, &file.mime_type, result.size));

    let subject = ReportSubject::File {
        filename: &result.filename,
        size: result.size,
    };
    deliver(&result.token, &subject, sink, &settings)
}

/// Execute `encrypt text`.
pub fn execute_text(text: Option<&str>, sink: &TokenSink) -> Result<()> {
    let settings = load_settings()?;

    let text = if let Some(t) = text {
        // Source 1: Inline text on the command line.
        output::warning("Text provided on command line — it may appear in shell history.");
        t.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input, taken byte-for-byte.
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        // Source 3: Interactive prompt.
        dialoguer::Input::<String>::new()
            .with_prompt("Text to encrypt")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| SealTokenError::CommandFailed(format!("input prompt: {e}")))?
    };

    let password = prompt_new_password(settings.min_password_length)?;
    let result = pipeline::encrypt_text(&text, &password)?;

    output::success(&format!("Encrypted {} characters", result.text_length));

    let subject = ReportSubject::Text {
        characters: result.text_length,
    };
    deliver(&result.token, &subject, sink, &settings)
}

/// Send the token wherever the user asked; stdout when nowhere else.
fn deliver(
    token: &Token,
    subject: &ReportSubject<'_>,
    sink: &TokenSink,
    settings: &Settings,
) -> Result<()> {
    let report_path = match (&sink.output, sink.save) {
        (Some(dest), _) => Some(PathBuf::from(dest)),
        (None, true) => Some(PathBuf::from(
            subject.report_file_name(&settings.token_file_suffix),
        )),
        (None, false) => None,
    };

    if let Some(dest) = &report_path {
        if dest.exists() {
            return Err(SealTokenError::CommandFailed(format!(
                "refusing to overwrite existing file {}",
                dest.display()
            )));
        }
        let report = render_report(token, subject, &Local::now());
        fs::write(dest, report).map_err(|e| {
            SealTokenError::CommandFailed(format!("failed to write token file: {e}"))
        })?;
        output::success(&format!("Token saved to {}", dest.display()));
    }

    if sink.copy {
        clipboard::copy(token.as_str())?;
        output::success("Token copied to clipboard");
    }

    if report_path.is_none() && !sink.copy {
        println!("{token}");
    }

    output::tip("Keep the token and the password: both are needed to decrypt.");
    Ok(())
}

/// Best-effort MIME type from the file extension. Unknown types are
/// recorded as empty and decrypt as `application/octet-stream`.
fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "txt" | "log" | "md" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_common_types_case_insensitively() {
        assert_eq!(guess_mime_type(Path::new("scan.PDF")), "application/pdf");
        assert_eq!(guess_mime_type(Path::new("a/b/photo.jpeg")), "image/jpeg");
        assert_eq!(guess_mime_type(Path::new("notes.txt")), "text/plain");
    }

    #[test]
    fn unknown_or_missing_extension_is_empty() {
        assert_eq!(guess_mime_type(Path::new("archive.xyz")), "");
        assert_eq!(guess_mime_type(Path::new("Makefile")), "");
    }
}
