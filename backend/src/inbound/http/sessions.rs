//! Sign in and sign out.
//!
//! ```text
//! GET    /users/sign_in
//! POST   /users/sign_in   user[email]=...&user[password]=...
//! DELETE /users/sign_out
//! ```

use actix_web::{get, post, route, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{ErrorCode, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::response::PageResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{layout, sign_in};

const SIGN_IN_TITLE: &str = "Sign in";
const INVALID_LOGIN: &str = "Invalid email or password.";

/// Sign-in form fields.
#[derive(Deserialize)]
pub struct SignInForm {
    #[serde(rename = "user[email]", default)]
    pub email: String,
    #[serde(rename = "user[password]", default)]
    pub password: String,
}

/// Render the sign-in form.
#[get("/users/sign_in")]
pub async fn new_session(session: SessionContext) -> ApiResult<PageResponse> {
    let viewer = session.member_id()?;
    Ok(PageResponse::Page(layout::page(
        SIGN_IN_TITLE,
        viewer,
        &sign_in::form("", None),
    )))
}

/// Check credentials and start a session.
///
/// Failures re-render the form with `422` and the same message whether the
/// email or the password was wrong.
#[post("/users/sign_in")]
pub async fn create_session(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<SignInForm>,
) -> ApiResult<PageResponse> {
    let SignInForm { email, password } = form.into_inner();
    let rejected = || {
        PageResponse::Invalid(layout::page(
            SIGN_IN_TITLE,
            None,
            &sign_in::form(&email, Some(INVALID_LOGIN)),
        ))
    };

    let Ok(credentials) = LoginCredentials::try_from_parts(&email, &password) else {
        return Ok(rejected());
    };
    match state.login.authenticate(&credentials).await {
        Ok(member_id) => {
            session.persist_member(member_id)?;
            info!(%member_id, "member signed in");
            Ok(PageResponse::Redirect("/".to_owned()))
        }
        Err(err) if err.code() == ErrorCode::Unauthorized => Ok(rejected()),
        Err(err) => Err(err),
    }
}

/// End the session. Plain forms may `POST` with `_method=delete`.
#[route("/users/sign_out", method = "DELETE", method = "POST")]
pub async fn destroy_session(session: SessionContext) -> PageResponse {
    session.purge();
    PageResponse::Redirect("/".to_owned())
}
