//! Payload and instruction types plus the wire encoder.

use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::target::TargetId;

/// Operation an instruction performs on its target.
///
/// Replacement is the only operation the directory uses; decoding rejects
/// any other action instead of guessing at its semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamAction {
    /// Replace the target element with the instruction markup.
    Replace,
}

impl StreamAction {
    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for StreamAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamAction {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(Self::Replace),
            other => Err(DecodeError::UnsupportedAction {
                action: other.to_owned(),
            }),
        }
    }
}

/// One targeted replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamInstruction {
    target: TargetId,
    action: StreamAction,
    markup: String,
}

impl StreamInstruction {
    /// Build a replacement instruction.
    pub fn replace(target: TargetId, markup: impl Into<String>) -> Self {
        Self {
            target,
            action: StreamAction::Replace,
            markup: markup.into(),
        }
    }

    /// Element addressed by this instruction.
    #[must_use]
    pub const fn target(&self) -> &TargetId {
        &self.target
    }

    /// Operation to perform.
    #[must_use]
    pub const fn action(&self) -> StreamAction {
        self.action
    }

    /// Markup carried by the instruction.
    #[must_use]
    pub fn markup(&self) -> &str {
        self.markup.as_str()
    }

    pub(crate) fn encode_into(&self, out: &mut String) {
        out.push_str("<turbo-stream action=\"");
        out.push_str(self.action.as_str());
        out.push_str("\" target=\"");
        out.push_str(self.target.as_str());
        out.push_str("\"><template>");
        out.push_str(&self.markup);
        out.push_str("</template></turbo-stream>");
    }
}

/// Ordered sequence of stream instructions.
///
/// Instruction order is preserved on the wire and when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamPayload {
    instructions: Vec<StreamInstruction>,
}

impl StreamPayload {
    /// Create an empty payload.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Convenience constructor for a single replacement.
    pub fn replace(target: TargetId, markup: impl Into<String>) -> Self {
        Self::new().with_replace(target, markup)
    }

    /// Append a replacement and return the payload.
    #[must_use]
    pub fn with_replace(mut self, target: TargetId, markup: impl Into<String>) -> Self {
        self.push(StreamInstruction::replace(target, markup));
        self
    }

    /// Append an instruction.
    pub fn push(&mut self, instruction: StreamInstruction) {
        self.instructions.push(instruction);
    }

    /// Instructions in application order.
    #[must_use]
    pub fn instructions(&self) -> &[StreamInstruction] {
        &self.instructions
    }

    /// Number of instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the payload carries no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Serialise the payload to its wire form.
    ///
    /// Markup is written verbatim inside a `<template>` element, so it must
    /// not itself contain a closing `</template>` tag.
    #[must_use]
    pub fn encode(&self) -> String {
        let capacity = self
            .instructions
            .iter()
            .map(|instruction| instruction.markup.len() + 96)
            .sum();
        let mut out = String::with_capacity(capacity);
        for instruction in &self.instructions {
            instruction.encode_into(&mut out);
        }
        out
    }

    /// Parse a wire payload.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the body contains stray content, an
    /// element lacks its attributes, names an unsupported action, or
    /// addresses an invalid target.
    pub fn decode(body: &str) -> Result<Self, DecodeError> {
        crate::decode::decode(body)
    }
}

impl FromIterator<StreamInstruction> for StreamPayload {
    fn from_iter<I: IntoIterator<Item = StreamInstruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StreamPayload {
    type Item = StreamInstruction;
    type IntoIter = std::vec::IntoIter<StreamInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a StreamPayload {
    type Item = &'a StreamInstruction;
    type IntoIter = std::slice::Iter<'a, StreamInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
