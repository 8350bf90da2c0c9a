//! Driving port for owner edits.
//!
//! `actor` is always the signed-in member taken from the session; the port
//! has no way to address anyone else.

use async_trait::async_trait;

use crate::domain::{DescriptionDraft, EditOutcome, Error, MemberId, ProfileDraft};

/// Commands behind the inline edit dialogs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberEditCommand: Send + Sync {
    /// Validate and store a new description for `actor`.
    async fn update_description(
        &self,
        actor: MemberId,
        draft: DescriptionDraft,
    ) -> Result<EditOutcome<DescriptionDraft>, Error>;

    /// Validate and store new profile fields for `actor`.
    async fn update_profile(
        &self,
        actor: MemberId,
        draft: ProfileDraft,
    ) -> Result<EditOutcome<ProfileDraft>, Error>;
}
