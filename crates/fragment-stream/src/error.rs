//! Error types for target identifiers and payload decoding.

use thiserror::Error;

/// Validation errors returned when constructing a [`crate::TargetId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetIdError {
    /// The identifier is empty.
    #[error("target id must not be empty")]
    Empty,
    /// The identifier contains whitespace, quotes or angle brackets.
    #[error("target id contains a forbidden character: {character:?}")]
    ForbiddenCharacter {
        /// The first offending character.
        character: char,
    },
}

/// Errors raised while decoding a wire payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Text other than whitespace was found outside a stream element.
    #[error("unexpected content at byte {offset}: {snippet}")]
    UnexpectedContent {
        /// Byte offset of the stray content.
        offset: usize,
        /// A short excerpt of the stray content.
        snippet: String,
    },
    /// A stream element omitted a required attribute.
    #[error("stream element at byte {offset} is missing the {attribute} attribute")]
    MissingAttribute {
        /// Byte offset of the element.
        offset: usize,
        /// Name of the missing attribute.
        attribute: &'static str,
    },
    /// The element requested an action this client does not perform.
    #[error("unsupported stream action '{action}'")]
    UnsupportedAction {
        /// The action named on the wire.
        action: String,
    },
    /// The target attribute is not a valid identifier.
    #[error("invalid stream target: {0}")]
    InvalidTarget(#[from] TargetIdError),
}
