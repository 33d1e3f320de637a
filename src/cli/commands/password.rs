//! `sealtoken password` — generate or rate passwords.

use console::style;

use crate::cli::output;
use crate::cli::{load_settings, prompt_password};
use crate::errors::{Result, SealTokenError};
use crate::password::{generate_secure_password, validate_password, Strength};

/// Shortest password `generate` will produce.
const MIN_GENERATED_LEN: usize = 8;

/// Longest password `generate` will produce.
const MAX_GENERATED_LEN: usize = 256;

/// Execute `password generate`.
pub fn execute_generate(length: Option<usize>) -> Result<()> {
    let settings = load_settings()?;
    let length = length.unwrap_or(settings.generated_password_length);

    if !(MIN_GENERATED_LEN..=MAX_GENERATED_LEN).contains(&length) {
        return Err(SealTokenError::InvalidInput(format!(
            "length must be between {MIN_GENERATED_LEN} and {MAX_GENERATED_LEN}"
        )));
    }

    println!("{}", generate_secure_password(length));
    Ok(())
}

/// Execute `password check`.
pub fn execute_check() -> Result<()> {
    let password = prompt_password()?;
    let check = validate_password(&password);

    let label = match check.strength {
        Strength::Strong => style(check.strength.to_string()).green().bold(),
        Strength::Medium => style(check.strength.to_string()).yellow().bold(),
        Strength::Weak => style(check.strength.to_string()).red().bold(),
    };
    println!("{label}");

    if check.valid {
        output::info(check.message);
    } else {
        output::warning(check.message);
    }
    Ok(())
}
