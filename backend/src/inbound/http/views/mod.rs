//! Server-rendered markup.
//!
//! Views are plain functions returning `String`. Every interpolated value
//! passes through [`escape`]; region ids are shared with the client through
//! the constants below.

pub mod directory;
pub mod editor;
mod escape;
pub mod layout;
pub mod profile;
pub mod sign_in;

pub use escape::escape;

use fragment_stream::TargetId;

use crate::domain::Error;

/// Mount point for edit dialogs.
pub const MODAL: &str = "modal";
/// Directory results.
pub const MEMBER_LIST: &str = "member-list";
/// Description block on a profile page.
pub const MEMBER_DESCRIPTION: &str = "member-description";
/// Profile fields block on a profile page.
pub const MEMBER_PROFILE: &str = "member-profile";

/// Typed target for one of the region constants.
///
/// # Errors
///
/// Returns an internal error if `id` is not a valid target identifier.
pub fn target(id: &str) -> Result<TargetId, Error> {
    TargetId::new(id).map_err(|err| Error::internal(format!("invalid region id {id}: {err}")))
}
