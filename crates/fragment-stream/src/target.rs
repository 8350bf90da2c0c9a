//! Identifiers of replaceable page regions.

use std::fmt;

use crate::error::TargetIdError;

/// Element identifier addressed by a stream instruction.
///
/// ## Invariants
/// - Non-empty.
/// - Free of whitespace, quotes and angle brackets, so the value can be
///   written into an attribute without escaping.
///
/// # Examples
/// ```
/// use fragment_stream::TargetId;
///
/// assert!(TargetId::new("member-profile").is_ok());
/// assert!(TargetId::new("two words").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(String);

impl TargetId {
    /// Validate and construct a target identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TargetIdError`] when the value is empty or contains a
    /// forbidden character.
    pub fn new(value: impl Into<String>) -> Result<Self, TargetIdError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(TargetIdError::Empty);
        }
        if let Some(character) = raw.chars().find(|c| is_forbidden(*c)) {
            return Err(TargetIdError::ForbiddenCharacter { character });
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

const fn is_forbidden(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&')
}

impl AsRef<str> for TargetId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TargetId {
    type Error = TargetIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
