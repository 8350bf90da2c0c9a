//! Session helpers keeping handlers free of framework details.
//!
//! Handlers only see [`SessionContext`], which stores and reads the signed-in
//! member id. The id is always taken from the session and never from the
//! request path or body.

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Key, SameSite};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, MemberId};

pub(crate) const MEMBER_ID_KEY: &str = "member_id";
/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";
const SESSION_TTL_HOURS: i64 = 2;

/// Build the cookie-backed session middleware.
///
/// Sessions live in a single private (encrypted) cookie, renewed on use for
/// two hours.
pub fn session_middleware(
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::hours(SESSION_TTL_HOURS)),
        )
        .build()
}

/// Newtype exposing member-oriented session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record `member_id` as signed in, rotating the session first.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the session cannot be written.
    pub fn persist_member(&self, member_id: MemberId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(MEMBER_ID_KEY, member_id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Signed-in member, if any. Tampered values read as signed out.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the session cannot be read.
    pub fn member_id(&self) -> Result<Option<MemberId>, Error> {
        let raw = self
            .0
            .get::<u64>(MEMBER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.and_then(|value| match MemberId::new(value) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "invalid member id in session cookie");
                None
            }
        }))
    }

    /// Signed-in member or `401 Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::Unauthorized`] without a session.
    pub fn require_member_id(&self) -> Result<MemberId, Error> {
        self.member_id()?
            .ok_or_else(|| Error::unauthorized("sign in required"))
    }

    /// Forget the signed-in member.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

/// The signed-in member, resolved before any request body is read.
///
/// Handlers that take a form list this ahead of the form extractor so an
/// anonymous request is refused with `401` whatever its body holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedMember(MemberId);

impl AuthenticatedMember {
    /// Id of the signed-in member.
    #[must_use]
    pub const fn id(self) -> MemberId {
        self.0
    }
}

impl FromRequest for AuthenticatedMember {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let session = fut.await?;
            Ok(Self(session.require_member_id()?))
        })
    }
}
