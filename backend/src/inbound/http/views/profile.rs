//! Member profile page and its two replaceable fragments.

use crate::domain::Member;

use super::{MEMBER_DESCRIPTION, MEMBER_PROFILE, escape};

/// Page body for a member. Edit links appear only for the owner.
#[must_use]
pub fn show(member: &Member, is_owner: bool) -> String {
    format!(
        "{}{}",
        profile_fragment(member, is_owner),
        description_fragment(member, is_owner)
    )
}

/// Name, title, location and contact block.
#[must_use]
pub fn profile_fragment(member: &Member, is_owner: bool) -> String {
    let profile = member.profile();
    let title = profile
        .profile_title
        .map(|title| title.as_str())
        .unwrap_or_default();
    let location = [
        profile.city.as_str(),
        profile.state.as_str(),
        profile.country.as_str(),
        profile.pincode.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ");
    let edit = if is_owner {
        "<a href=\"/edit_profile\" data-modal-link>Edit profile</a>"
    } else {
        ""
    };
    format!(
        concat!(
            "<div id=\"{id}\"><h1>{name}</h1>",
            "<p class=\"title\">{title}</p>",
            "<p class=\"location\">{location}</p>",
            "<p class=\"contact\">{email} {phone}</p>{edit}</div>"
        ),
        id = MEMBER_PROFILE,
        name = escape(&member.full_name()),
        title = escape(title),
        location = escape(&location),
        email = escape(member.email()),
        phone = escape(member.contact_number()),
        edit = edit,
    )
}

/// Free-text "about" block.
#[must_use]
pub fn description_fragment(member: &Member, is_owner: bool) -> String {
    let edit = if is_owner {
        "<a href=\"/edit_description\" data-modal-link>Edit description</a>"
    } else {
        ""
    };
    format!(
        "<div id=\"{MEMBER_DESCRIPTION}\"><h2>About</h2><p>{about}</p>{edit}</div>",
        about = escape(member.about()),
    )
}
