//! System clipboard access (behind the `clipboard` feature).

use crate::errors::{Result, SealTokenError};

/// Put `text` on the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| SealTokenError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| SealTokenError::Clipboard(e.to_string()))
}

/// Put `text` on the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy(_text: &str) -> Result<()> {
    Err(SealTokenError::Clipboard(
        "this build has no clipboard support (enable the `clipboard` feature)".into(),
    ))
}
