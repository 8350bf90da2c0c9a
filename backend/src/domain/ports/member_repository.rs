//! Driven port for member storage.
//!
//! The store is a black box to the domain: adapters may be in-memory or
//! database backed, but each update rewrites one field group of one member
//! atomically and leaves the other groups as stored.

use async_trait::async_trait;

use crate::domain::{DirectoryFilter, Error, Member, MemberId, MemberProfile, NewMember};

use super::define_port_error;

define_port_error! {
    /// Errors raised by member repository adapters.
    pub enum MemberPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "member store connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "member store query failed: {message}",
        /// An update targeted a member that does not exist.
        Missing { id: u64 } => "member {id} does not exist",
        /// Another member already uses this email.
        DuplicateEmail { email: String } => "email {email} is already registered",
    }
}

impl From<MemberPersistenceError> for Error {
    fn from(error: MemberPersistenceError) -> Self {
        match error {
            MemberPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("member store unavailable: {message}"))
            }
            MemberPersistenceError::Missing { id } => {
                Self::not_found(format!("member {id} not found"))
            }
            other => Self::internal(format!("member store error: {other}")),
        }
    }
}

/// Port for member persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Fetch one member by id.
    async fn find(&self, id: MemberId) -> Result<Option<Member>, MemberPersistenceError>;

    /// Fetch one member by normalised email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, MemberPersistenceError>;

    /// Members matching `filter`, oldest first, at most `limit`.
    async fn list(
        &self,
        filter: &DirectoryFilter,
        limit: usize,
    ) -> Result<Vec<Member>, MemberPersistenceError>;

    /// Store a new member and assign its id.
    async fn insert(&self, member: NewMember) -> Result<Member, MemberPersistenceError>;

    /// Overwrite only the description of member `id` and return the result.
    ///
    /// Runs as one atomic step so a concurrent profile edit is never lost.
    async fn update_about(
        &self,
        id: MemberId,
        about: String,
    ) -> Result<Member, MemberPersistenceError>;

    /// Overwrite only the profile group of member `id` and return the result.
    async fn update_profile(
        &self,
        id: MemberId,
        profile: MemberProfile,
    ) -> Result<Member, MemberPersistenceError>;
}
