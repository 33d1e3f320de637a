use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SealTokenError};

/// Front-end configuration, loaded from `.sealtoken.toml`.
///
/// Every field has a sensible default so SealToken works out-of-the-box
/// without any config file at all. None of these touch the token format:
/// the cryptographic parameters are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Largest file `encrypt file` accepts, in MiB (default: 100).
    #[serde(default = "default_max_file_size_mib")]
    pub max_file_size_mib: u64,

    /// Minimum length for a new password (default: 8).
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Length of passwords from `password generate` (default: 16).
    #[serde(default = "default_generated_password_length")]
    pub generated_password_length: usize,

    /// Suffix appended to saved token reports (default: `.token.txt`).
    #[serde(default = "default_token_file_suffix")]
    pub token_file_suffix: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_max_file_size_mib() -> u64 {
    100
}

fn default_min_password_length() -> usize {
    8
}

fn default_generated_password_length() -> usize {
    16
}

fn default_token_file_suffix() -> String {
    ".token.txt".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_file_size_mib: default_max_file_size_mib(),
            min_password_length: default_min_password_length(),
            generated_password_length: default_generated_password_length(),
            token_file_suffix: default_token_file_suffix(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".sealtoken.toml";

    /// Load settings from `<dir>/.sealtoken.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SealTokenError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.min_password_length == 0 {
            return Err(SealTokenError::ConfigError(
                "min_password_length must be at least 1".into(),
            ));
        }

        Ok(settings)
    }

    /// The file size limit in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mib.saturating_mul(1024 * 1024)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
