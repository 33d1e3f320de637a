//! The derived symmetric key.

use std::fmt;

use zeroize::Zeroize;

use super::kdf::KEY_LEN;

/// A 32-byte AES-256 key that zeroes its memory when dropped.
///
/// A `DerivedKey` lives only for the duration of one seal or open call.
/// It is never serialized and its `Debug` output is redacted so it cannot
/// end up in a log line by accident.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Create a new `DerivedKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let key = DerivedKey::new([0x42u8; KEY_LEN]);
        let shown = format!("{key:?}");
        assert_eq!(shown, "DerivedKey([REDACTED])");
        assert!(!shown.contains("42"));
    }
}
