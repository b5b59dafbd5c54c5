use std::{fmt, str::FromStr};

use crate::AllowlistTreeError;

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte address, as enumerated by an allowlist.
///
/// Parsing is case-insensitive on the hex text, but the value itself is
/// byte-exact: what gets hashed into a leaf is the 20 parsed bytes, never
/// the source string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Parse an address from hex text, with or without a `0x` prefix.
    pub fn from_hex(text: &str) -> Result<Self, AllowlistTreeError> {
        let trimmed = text.trim();
        let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        if cleaned.len() != ADDRESS_LEN * 2 {
            return Err(AllowlistTreeError::InvalidAddressFormat(format!(
                "expected {} hex chars, got {}",
                ADDRESS_LEN * 2,
                cleaned.len()
            )));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(cleaned, &mut bytes)
            .map_err(|e| AllowlistTreeError::InvalidAddressFormat(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// The raw 20 bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = AllowlistTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}
