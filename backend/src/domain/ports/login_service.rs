//! Driving port for sign-in.
//!
//! Inbound adapters authenticate through this trait without knowing how
//! credentials are stored, which keeps handler tests free of persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, MemberId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the member they belong to.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<MemberId, Error>;
}
