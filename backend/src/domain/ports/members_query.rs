//! Driving port for read-only member views.

use async_trait::async_trait;

use crate::domain::{DirectoryFilter, Error, Member, MemberId};

/// Queries behind the directory index and profile pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembersQuery: Send + Sync {
    /// First page of members matching `filter`.
    async fn list_members(&self, filter: &DirectoryFilter) -> Result<Vec<Member>, Error>;

    /// One member, or `NotFound`.
    async fn member(&self, id: MemberId) -> Result<Member, Error>;
}
