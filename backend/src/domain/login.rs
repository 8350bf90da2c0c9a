//! Email and password sign-in against stored member digests.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{LoginService, MemberRepository};
use crate::domain::{Error, LoginCredentials, MemberId};

const INVALID_CREDENTIALS: &str = "invalid email or password";

/// [`LoginService`] that checks credentials against the member store.
#[derive(Clone)]
pub struct CredentialLoginService<R> {
    repo: Arc<R>,
}

impl<R> CredentialLoginService<R> {
    pub const fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> LoginService for CredentialLoginService<R>
where
    R: MemberRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<MemberId, Error> {
        let Some(member) = self.repo.find_by_email(credentials.email()).await? else {
            debug!("sign-in for unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        if member.password().verify(credentials.password()) {
            Ok(member.id())
        } else {
            debug!(member_id = %member.id(), "sign-in with wrong password");
            Err(Error::unauthorized(INVALID_CREDENTIALS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockMemberRepository;
    use crate::domain::{ErrorCode, Member, MemberProfile, NewMember, PasswordDigest};
    use chrono::{DateTime, Utc};
    use rstest::rstest;

    fn stored_member() -> Member {
        Member::register(
            MemberId::new(4).expect("positive id"),
            NewMember {
                email: "ada@example.com".to_owned(),
                username: "Ada-5".to_owned(),
                profile: MemberProfile::default(),
                date_of_birth: None,
                contact_number: String::new(),
                about: String::new(),
                password: PasswordDigest::with_salt([3; 16], "password"),
            },
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }

    #[rstest]
    #[case("ada@example.com", "password", true)]
    #[case("ADA@example.com", "password", true)]
    #[case("ada@example.com", "wrong", false)]
    #[case("bob@example.com", "password", false)]
    #[tokio::test]
    async fn authenticates_against_stored_digest(
        #[case] email: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let mut repo = MockMemberRepository::new();
        repo.expect_find_by_email().returning(|email| {
            let member = stored_member();
            Ok((member.email() == email).then_some(member))
        });
        let service = CredentialLoginService::new(Arc::new(repo));
        let creds = LoginCredentials::try_from_parts(email, password).expect("credentials shape");

        match (should_succeed, service.authenticate(&creds).await) {
            (true, Ok(id)) => assert_eq!(id.get(), 4),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got {err:?}"),
            (false, Ok(id)) => panic!("expected failure, got member {id}"),
        }
    }
}
