//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on driving
//! ports, so they can be exercised without any storage behind them.

use std::sync::Arc;

use crate::domain::ports::{LoginService, MemberEditCommand, MembersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub members: Arc<dyn MembersQuery>,
    pub edits: Arc<dyn MemberEditCommand>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(
        login: Arc<dyn LoginService>,
        members: Arc<dyn MembersQuery>,
        edits: Arc<dyn MemberEditCommand>,
    ) -> Self {
        Self {
            login,
            members,
            edits,
        }
    }

    /// Wire every port to the domain services over one repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::persistence::InMemoryMemberRepository;
    ///
    /// let repo = Arc::new(InMemoryMemberRepository::new(Arc::new(mockable::DefaultClock)));
    /// let state = HttpState::from_repository(repo);
    /// let _members = state.members.clone();
    /// ```
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: crate::domain::ports::MemberRepository + 'static,
    {
        use crate::domain::{CredentialLoginService, DirectoryService, MemberEditService};

        Self::new(
            Arc::new(CredentialLoginService::new(repo.clone())),
            Arc::new(DirectoryService::new(repo.clone())),
            Arc::new(MemberEditService::new(repo)),
        )
    }
}
