//! `sealtoken version` — display version and the fixed crypto parameters.

use console::style;

use crate::crypto::{IV_LEN, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN, TAG_LEN};
use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    println!("sealtoken {}", env!("CARGO_PKG_VERSION"));
    println!(
        "{} AES-{}-GCM, {}-byte IV, {}-bit tag",
        style("cipher:").dim(),
        KEY_LEN * 8,
        IV_LEN,
        TAG_LEN * 8
    );
    println!(
        "{} PBKDF2-HMAC-SHA256, {} iterations, {}-byte salt",
        style("kdf:   ").dim(),
        PBKDF2_ITERATIONS,
        SALT_LEN
    );
    Ok(())
}
