//! CLI module — Clap argument parser, prompts, output helpers, and command implementations.

pub mod clipboard;
pub mod commands;
pub mod logging;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, SealTokenError};
use crate::password::{validate_password, Strength};
use crate::token::{extract_token, Token};

/// Environment variable that supplies the password non-interactively.
pub const PASSWORD_ENV: &str = "SEALTOKEN_PASSWORD";

/// SealToken CLI: password-protected tokens for files and text.
#[derive(Parser)]
#[command(
    name = "sealtoken",
    about = "Encrypt files and text into a portable password-protected token",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a file or a block of text into a token
    Encrypt {
        #[command(subcommand)]
        action: EncryptAction,
    },

    /// Decrypt a token back into the original file or text
    Decrypt {
        /// The token (omit to read from --token-file, stdin, or a prompt)
        token: Option<String>,

        /// Read the token from a saved token file
        #[arg(long, conflicts_with = "token")]
        token_file: Option<String>,

        /// Where to write the decrypted content
        #[arg(short, long)]
        output: Option<String>,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,

        /// Copy decrypted text to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
    },

    /// Generate or check passwords
    Password {
        #[command(subcommand)]
        action: PasswordAction,
    },

    /// Show version and cryptographic parameters
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Encrypt subcommands.
#[derive(clap::Subcommand)]
pub enum EncryptAction {
    /// Encrypt a file
    File {
        /// Path to the file
        path: String,

        /// MIME type to record (guessed from the extension if omitted)
        #[arg(long)]
        mime_type: Option<String>,

        #[command(flatten)]
        sink: TokenSink,
    },

    /// Encrypt text (argument, piped stdin, or interactive prompt)
    Text {
        /// Text to encrypt (omit to read stdin or prompt)
        text: Option<String>,

        #[command(flatten)]
        sink: TokenSink,
    },
}

/// Where a freshly made token goes. With no flags it is printed to stdout.
#[derive(clap::Args, Debug, Default)]
pub struct TokenSink {
    /// Save a token report to this path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save a token report in the current directory under its default name
    #[arg(long, conflicts_with = "output")]
    pub save: bool,

    /// Copy the token to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Password subcommands.
#[derive(clap::Subcommand)]
pub enum PasswordAction {
    /// Print a random password
    Generate {
        /// Number of characters (default from config: 16)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Rate a password's strength (advisory only)
    Check,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load `.sealtoken.toml` from the current directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Get the password for decryption, trying in order:
/// 1. `SEALTOKEN_PASSWORD` env var (scripting)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter password")
        .interact()
        .map_err(|e| SealTokenError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (used when encrypting).
///
/// Also respects `SEALTOKEN_PASSWORD` for scripted usage. Enforces the
/// configured minimum length; the strength rating is only a warning.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_new_password(min_len: usize) -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        if pw.chars().count() < min_len {
            return Err(SealTokenError::InvalidInput(format!(
                "password must be at least {min_len} characters"
            )));
        }
        return Ok(pw);
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose password")
            .with_confirmation("Confirm password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| SealTokenError::CommandFailed(format!("password prompt: {e}")))?;

        if password.chars().count() < min_len {
            output::warning(&format!(
                "Password must be at least {min_len} characters. Try again."
            ));
            continue;
        }

        let check = validate_password(&password);
        if check.strength == Strength::Weak {
            output::warning(check.message);
        }

        return Ok(Zeroizing::new(password));
    }
}

fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Resolve the token for `decrypt`: argument, token file, piped stdin,
/// or an interactive prompt, in that order.
pub fn read_token(arg: Option<&str>, token_file: Option<&str>) -> Result<Token> {
    if let Some(token) = arg {
        return extract_token(token);
    }

    if let Some(path) = token_file {
        let contents = std::fs::read_to_string(Path::new(path)).map_err(|e| {
            SealTokenError::CommandFailed(format!("failed to read token file {path}: {e}"))
        })?;
        return extract_token(&contents);
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return extract_token(&buf);
    }

    let pasted: String = dialoguer::Input::new()
        .with_prompt("Paste token")
        .interact_text()
        .map_err(|e| SealTokenError::CommandFailed(format!("token prompt: {e}")))?;
    extract_token(&pasted)
}
