//! Edit forms and the dialog that hosts them.
//!
//! Forms post to `/update_*` with a `_method=patch` override and
//! `user[...]` field names. Validation errors render inline next to the
//! offending field.

use crate::domain::{
    ABOUT_MAX_CHARS, DescriptionDraft, FieldErrors, LOCATION_MAX_CHARS, NAME_MAX_CHARS,
    PINCODE_MAX_CHARS, ProfileDraft, ProfileTitle,
};

use super::{MODAL, escape};

/// Dialog heading for the description editor.
pub const DESCRIPTION_TITLE: &str = "Edit description";
/// Dialog heading for the profile editor.
pub const PROFILE_TITLE: &str = "Edit profile";

/// Wrap a form in the dialog markup that fills the modal mount.
#[must_use]
pub fn modal(title: &str, form: &str) -> String {
    format!(
        concat!(
            "<div id=\"{mount}\"><dialog open aria-labelledby=\"modal-title\">",
            "<h2 id=\"modal-title\">{title}</h2>{form}",
            "<button type=\"button\" data-modal-dismiss>Cancel</button>",
            "</dialog></div>"
        ),
        mount = MODAL,
        title = escape(title),
        form = form,
    )
}

/// Description form.
#[must_use]
pub fn description_form(draft: &DescriptionDraft, errors: &FieldErrors) -> String {
    format!(
        concat!(
            "<form action=\"/update_description\" method=\"post\">",
            "<input type=\"hidden\" name=\"_method\" value=\"patch\">",
            "<label for=\"user_about\">About</label>",
            "<textarea id=\"user_about\" name=\"user[about]\" maxlength=\"{max}\"{invalid}>{about}</textarea>",
            "{errors}",
            "<button type=\"submit\">Save</button></form>"
        ),
        max = ABOUT_MAX_CHARS,
        about = escape(&draft.about),
        invalid = invalid_marker(errors, "about"),
        errors = field_errors(errors, "about"),
    )
}

/// Profile form.
#[must_use]
pub fn profile_form(draft: &ProfileDraft, errors: &FieldErrors) -> String {
    let fields = [
        ("first_name", "First name", &draft.first_name, NAME_MAX_CHARS),
        ("last_name", "Last name", &draft.last_name, NAME_MAX_CHARS),
        ("city", "City", &draft.city, LOCATION_MAX_CHARS),
        ("state", "State", &draft.state, LOCATION_MAX_CHARS),
        ("country", "Country", &draft.country, LOCATION_MAX_CHARS),
        ("pincode", "Pincode", &draft.pincode, PINCODE_MAX_CHARS),
    ];
    let mut html = String::from(concat!(
        "<form action=\"/update_profile\" method=\"post\">",
        "<input type=\"hidden\" name=\"_method\" value=\"patch\">"
    ));
    for (name, label, value, max) in fields {
        html.push_str(&format!(
            concat!(
                "<label for=\"user_{name}\">{label}</label>",
                "<input type=\"text\" id=\"user_{name}\" name=\"user[{name}]\" value=\"{value}\" maxlength=\"{max}\"{invalid}>",
                "{errors}"
            ),
            name = name,
            label = label,
            value = escape(value),
            max = max,
            invalid = invalid_marker(errors, name),
            errors = field_errors(errors, name),
        ));
    }
    html.push_str(&title_select(
        &draft.profile_title,
        invalid_marker(errors, "profile_title"),
    ));
    html.push_str(&field_errors(errors, "profile_title"));
    html.push_str("<button type=\"submit\">Save</button></form>");
    html
}

fn title_select(selected: &str, invalid: &str) -> String {
    let mut html = format!(
        concat!(
            "<label for=\"user_profile_title\">Profile title</label>",
            "<select id=\"user_profile_title\" name=\"user[profile_title]\"{invalid}>",
            "<option value=\"\"></option>"
        ),
        invalid = invalid,
    );
    for title in ProfileTitle::ALL {
        let label = title.as_str();
        let marker = if label == selected.trim() { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{value}\"{marker}>{value}</option>",
            value = escape(label),
        ));
    }
    html.push_str("</select>");
    html
}

fn invalid_marker(errors: &FieldErrors, field: &str) -> &'static str {
    if errors.contains(field) {
        " aria-invalid=\"true\""
    } else {
        ""
    }
}

fn field_errors(errors: &FieldErrors, field: &str) -> String {
    errors
        .messages_for(field)
        .map(|message| {
            format!(
                "<p class=\"field-error\" data-field=\"{field}\">{}</p>",
                escape(message)
            )
        })
        .collect()
}
