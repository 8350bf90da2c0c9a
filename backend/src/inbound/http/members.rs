//! Member profile pages and the inline edit workflow.
//!
//! ```text
//! GET   /member/{id}
//! GET   /edit_description      GET   /edit_profile
//! PATCH /update_description    PATCH /update_profile
//! ```
//!
//! Editors always act on the signed-in member; no id is read from the
//! request. Plain HTML forms may `POST` to the update routes with a
//! `_method=patch` field.

use actix_web::{get, route, web};
use fragment_stream::StreamPayload;
use serde::Deserialize;
use tracing::info;

use crate::domain::{
    DescriptionDraft, EditOutcome, Error, FieldErrors, Member, MemberId, ProfileDraft,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::negotiation::ResponseFormat;
use crate::inbound::http::response::PageResponse;
use crate::inbound::http::session::{AuthenticatedMember, SessionContext};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::editor::{self, DESCRIPTION_TITLE, PROFILE_TITLE};
use crate::inbound::http::views::{self, MEMBER_DESCRIPTION, MEMBER_PROFILE, MODAL, layout, profile};

/// Description form fields. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct DescriptionForm {
    #[serde(rename = "user[about]")]
    pub about: Option<String>,
}

impl DescriptionForm {
    fn merge_into(self, current: DescriptionDraft) -> DescriptionDraft {
        DescriptionDraft {
            about: self.about.unwrap_or(current.about),
        }
    }
}

/// Profile form fields. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(rename = "user[first_name]")]
    pub first_name: Option<String>,
    #[serde(rename = "user[last_name]")]
    pub last_name: Option<String>,
    #[serde(rename = "user[city]")]
    pub city: Option<String>,
    #[serde(rename = "user[state]")]
    pub state: Option<String>,
    #[serde(rename = "user[country]")]
    pub country: Option<String>,
    #[serde(rename = "user[pincode]")]
    pub pincode: Option<String>,
    #[serde(rename = "user[profile_title]")]
    pub profile_title: Option<String>,
}

impl ProfileForm {
    fn merge_into(self, current: ProfileDraft) -> ProfileDraft {
        ProfileDraft {
            first_name: self.first_name.unwrap_or(current.first_name),
            last_name: self.last_name.unwrap_or(current.last_name),
            city: self.city.unwrap_or(current.city),
            state: self.state.unwrap_or(current.state),
            country: self.country.unwrap_or(current.country),
            pincode: self.pincode.unwrap_or(current.pincode),
            profile_title: self.profile_title.unwrap_or(current.profile_title),
        }
    }
}

/// Show one member. Unknown or malformed ids are `404`.
#[get("/member/{id}")]
pub async fn show(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<PageResponse> {
    let id: MemberId = path
        .into_inner()
        .parse()
        .map_err(|_| Error::not_found("member not found"))?;
    let member = state.members.member(id).await?;
    let viewer = session.member_id()?;
    let body = profile::show(&member, viewer == Some(id));
    Ok(PageResponse::Page(layout::page(
        &member.full_name(),
        viewer,
        &body,
    )))
}

/// Description editor for the signed-in member.
#[get("/edit_description")]
pub async fn edit_description(
    signed_in: AuthenticatedMember,
    state: web::Data<HttpState>,
    format: ResponseFormat,
) -> ApiResult<PageResponse> {
    let actor = signed_in.id();
    let member = state.members.member(actor).await?;
    let form = editor::description_form(
        &DescriptionDraft::from_member(&member),
        &FieldErrors::default(),
    );
    editor_response(format, actor, DESCRIPTION_TITLE, &form)
}

/// Profile editor for the signed-in member.
#[get("/edit_profile")]
pub async fn edit_profile(
    signed_in: AuthenticatedMember,
    state: web::Data<HttpState>,
    format: ResponseFormat,
) -> ApiResult<PageResponse> {
    let actor = signed_in.id();
    let member = state.members.member(actor).await?;
    let form = editor::profile_form(&ProfileDraft::from_member(&member), &FieldErrors::default());
    editor_response(format, actor, PROFILE_TITLE, &form)
}

/// Apply a description edit.
///
/// The session is checked before the body is parsed, so anonymous requests
/// get `401` even when the body is malformed.
#[route("/update_description", method = "PATCH", method = "POST")]
pub async fn update_description(
    signed_in: AuthenticatedMember,
    state: web::Data<HttpState>,
    format: ResponseFormat,
    form: web::Form<DescriptionForm>,
) -> ApiResult<PageResponse> {
    let actor = signed_in.id();
    let current = state.members.member(actor).await?;
    let draft = form
        .into_inner()
        .merge_into(DescriptionDraft::from_member(&current));
    match state.edits.update_description(actor, draft).await?
    {
        EditOutcome::Saved(member) => {
            info!(member_id = %actor, "description updated");
            saved_response(format, &member, MEMBER_DESCRIPTION, profile::description_fragment)
        }
        EditOutcome::Invalid { draft, errors } => Ok(invalid_response(
            format,
            actor,
            DESCRIPTION_TITLE,
            &editor::description_form(&draft, &errors),
        )),
    }
}

/// Apply a profile edit.
#[route("/update_profile", method = "PATCH", method = "POST")]
pub async fn update_profile(
    signed_in: AuthenticatedMember,
    state: web::Data<HttpState>,
    format: ResponseFormat,
    form: web::Form<ProfileForm>,
) -> ApiResult<PageResponse> {
    let actor = signed_in.id();
    let current = state.members.member(actor).await?;
    let draft = form
        .into_inner()
        .merge_into(ProfileDraft::from_member(&current));
    match state.edits.update_profile(actor, draft).await?
    {
        EditOutcome::Saved(member) => {
            info!(member_id = %actor, "profile updated");
            saved_response(format, &member, MEMBER_PROFILE, profile::profile_fragment)
        }
        EditOutcome::Invalid { draft, errors } => Ok(invalid_response(
            format,
            actor,
            PROFILE_TITLE,
            &editor::profile_form(&draft, &errors),
        )),
    }
}

fn editor_response(
    format: ResponseFormat,
    actor: MemberId,
    title: &str,
    form: &str,
) -> ApiResult<PageResponse> {
    Ok(match format {
        ResponseFormat::Stream => PageResponse::Stream(StreamPayload::replace(
            views::target(MODAL)?,
            editor::modal(title, form),
        )),
        ResponseFormat::Html => PageResponse::Page(layout::page(title, Some(actor), form)),
    })
}

fn saved_response(
    format: ResponseFormat,
    member: &Member,
    region: &str,
    render: fn(&Member, bool) -> String,
) -> ApiResult<PageResponse> {
    Ok(match format {
        ResponseFormat::Stream => {
            PageResponse::Stream(StreamPayload::replace(views::target(region)?, render(member, true)))
        }
        ResponseFormat::Html => PageResponse::Redirect(format!("/member/{}", member.id())),
    })
}

// Stream clients swap the modal mount with this markup, so it must carry the
// mount's own id.
fn invalid_response(
    format: ResponseFormat,
    actor: MemberId,
    title: &str,
    form: &str,
) -> PageResponse {
    match format {
        ResponseFormat::Stream => PageResponse::Invalid(editor::modal(title, form)),
        ResponseFormat::Html => PageResponse::Invalid(layout::page(title, Some(actor), form)),
    }
}

#[cfg(test)]
#[path = "members_tests.rs"]
mod tests;
