//! Partial-update stream payloads.
//!
//! A payload is an ordered list of instructions, each naming a target
//! element on an already rendered page and the markup that replaces it. The
//! server encodes payloads for responses negotiated with
//! [`STREAM_MEDIA_TYPE`]; the page client decodes and applies them.
//!
//! # Example
//!
//! ```
//! use fragment_stream::{StreamPayload, TargetId};
//!
//! let target = TargetId::new("member-description").expect("valid target");
//! let payload = StreamPayload::replace(target, "<div id=\"member-description\">Hi</div>");
//! let wire = payload.encode();
//!
//! let decoded = StreamPayload::decode(&wire).expect("decodes");
//! assert_eq!(decoded, payload);
//! ```

mod decode;
mod error;
mod payload;
mod target;

pub use error::{DecodeError, TargetIdError};
pub use payload::{StreamAction, StreamInstruction, StreamPayload};
pub use target::TargetId;

/// Media type that selects the partial-update response representation.
pub const STREAM_MEDIA_TYPE: &str = "text/vnd.turbo-stream.html";
