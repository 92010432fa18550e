//! Store-issued document identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`DocumentId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is not exactly 24 characters long.
    #[error("identifier must be {expected} characters (got {actual})")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[error("identifier must be hexadecimal")]
    NotHex,
}

/// An opaque document identifier issued by the store.
///
/// Identifiers are 12-byte object ids rendered as 24 hexadecimal characters.
/// Parsing normalizes to lowercase, which is how the store renders them.
///
/// ## Examples
///
/// ```
/// use golden_bowl_core::DocumentId;
///
/// assert!(DocumentId::parse("65a1f0c2e4b0a1b2c3d4e5f6").is_ok());
/// assert!(DocumentId::parse("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Length of the hexadecimal form.
    pub const HEX_LENGTH: usize = 24;

    /// Parse a `DocumentId` from its hexadecimal form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not 24 hexadecimal characters.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.len() != Self::HEX_LENGTH {
            return Err(IdError::InvalidLength {
                expected: Self::HEX_LENGTH,
                actual: s.len(),
            });
        }

        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IdError::NotHex);
        }

        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Returns `true` if `s` has the shape of a store identifier.
    #[must_use]
    pub fn is_well_formed(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = DocumentId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_parse_normalizes_case() {
        let id = DocumentId::parse("65A1F0C2E4B0A1B2C3D4E5F6").unwrap();
        assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            DocumentId::parse("abc"),
            Err(IdError::InvalidLength {
                expected: 24,
                actual: 3
            })
        );
    }

    #[test]
    fn test_parse_not_hex() {
        assert_eq!(
            DocumentId::parse("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(IdError::NotHex)
        );
    }

    #[test]
    fn test_category_names_are_not_ids() {
        assert!(!DocumentId::is_well_formed("soups"));
        assert!(!DocumentId::is_well_formed(""));
    }
}
