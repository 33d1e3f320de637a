//! `sealtoken decrypt` — recover a file or text from a token.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::{clipboard, prompt_password, read_token};
use crate::errors::{Result, SealTokenError};
use crate::pipeline::{self, file::DEFAULT_FILENAME, Decrypted, DecryptedFile};

/// Options for the `decrypt` command.
#[derive(Debug, Default)]
pub struct DecryptArgs<'a> {
    pub token: Option<&'a str>,
    pub token_file: Option<&'a str>,
    pub output: Option<&'a str>,
    pub force: bool,
    pub copy: bool,
}

/// Execute the `decrypt` command.
pub fn execute(args: &DecryptArgs<'_>) -> Result<()> {
    let token = read_token(args.token, args.token_file)?;
    let password = prompt_password()?;

    match pipeline::decrypt(token.as_str(), &password)? {
        Decrypted::Text(text) => write_text(&text, args),
        Decrypted::File(file) => write_file(&file, args),
    }
}

fn write_text(text: &str, args: &DecryptArgs<'_>) -> Result<()> {
    if args.copy {
        clipboard::copy(text)?;
        output::success("Decrypted text copied to clipboard");
        return Ok(());
    }

    match args.output {
        Some(dest) => {
            let dest = Path::new(dest);
            ensure_writable(dest, args.force)?;
            fs::write(dest, text)?;
            output::success(&format!("Decrypted text written to {}", dest.display()));
        }
        None => {
            // Piped output must be the plaintext byte for byte.
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if stdout.is_terminal() {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

fn write_file(file: &DecryptedFile, args: &DecryptArgs<'_>) -> Result<()> {
    if args.copy {
        output::warning("--copy only applies to text tokens; writing the file instead.");
    }

    let dest = match args.output {
        Some(dest) => PathBuf::from(dest),
        None => PathBuf::from(safe_file_name(&file.filename)),
    };
    ensure_writable(&dest, args.force)?;
    fs::write(&dest, &file.bytes)?;

    output::success(&format!("Decrypted file written to {}", dest.display()));
    output::print_summary(&output::file_rows(
        &file.filename,
        &file.mime_type,
        file.bytes.len() as u64,
    ));
    Ok(())
}

/// Reduce an untrusted stored filename to its last path component so a
/// token cannot direct output outside the working directory.
fn safe_file_name(stored: &str) -> String {
    let normalized = stored.replace('\\', "/");
    match Path::new(&normalized).file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => DEFAULT_FILENAME.to_string(),
    }
}

fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    if dest.exists() && !force {
        return Err(SealTokenError::CommandFailed(format!(
            "{} already exists (use --force to overwrite)",
            dest.display()
        )));
    }
    Ok(())
}
