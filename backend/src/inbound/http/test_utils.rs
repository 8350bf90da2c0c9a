//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::ServiceResponse;
use actix_web::test::TestRequest;

use super::session::{SESSION_COOKIE, session_middleware};
use crate::domain::ports::MemberRepository;
use crate::domain::{Member, MemberProfile, NewMember, PasswordDigest, ProfileTitle};
use crate::outbound::persistence::InMemoryMemberRepository;

/// Password shared by every seeded test member.
pub const TEST_PASSWORD: &str = "password";

/// Session middleware with a fresh key and the `Secure` flag off so plain
/// HTTP test requests keep their cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    session_middleware(Key::generate(), false, SameSite::Lax)
}

/// Store holding Ada (id 1) and Grace (id 2).
pub async fn seeded_repository() -> (Arc<InMemoryMemberRepository>, Member, Member) {
    let repo = Arc::new(InMemoryMemberRepository::new(Arc::new(
        mockable::DefaultClock,
    )));
    let ada = repo
        .insert(new_member("ada@example.com", "Ada", "London", "United Kingdom"))
        .await
        .expect("insert ada");
    let grace = repo
        .insert(new_member("grace@example.com", "Grace", "Arlington", "United States"))
        .await
        .expect("insert grace");
    (repo, ada, grace)
}

fn new_member(email: &str, first_name: &str, city: &str, country: &str) -> NewMember {
    NewMember {
        email: email.to_owned(),
        username: first_name.to_lowercase(),
        profile: MemberProfile {
            first_name: first_name.to_owned(),
            last_name: "Tester".to_owned(),
            city: city.to_owned(),
            country: country.to_owned(),
            profile_title: Some(ProfileTitle::SoftwareEngineer),
            ..MemberProfile::default()
        },
        date_of_birth: None,
        contact_number: "555-0100".to_owned(),
        about: "Writes code.".to_owned(),
        password: PasswordDigest::derive(TEST_PASSWORD),
    }
}

/// Form-encoded sign-in request for `email`.
pub fn sign_in_request(email: &str) -> TestRequest {
    TestRequest::post()
        .uri("/users/sign_in")
        .set_form([("user[email]", email), ("user[password]", TEST_PASSWORD)])
}

/// Session cookie set by `res`.
pub fn session_cookie<B: MessageBody>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .expect("session cookie set")
        .into_owned()
}
