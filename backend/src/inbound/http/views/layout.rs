//! Full-page document wrapper.

use crate::domain::MemberId;

use super::{MODAL, escape};

/// Wrap `body` in the site chrome.
///
/// The modal mount is always rendered empty so editors fetched later have a
/// place to land.
#[must_use]
pub fn page(title: &str, viewer: Option<MemberId>, body: &str) -> String {
    let nav = match viewer {
        Some(id) => format!(
            concat!(
                "<a href=\"/member/{id}\">My profile</a>",
                "<form method=\"post\" action=\"/users/sign_out\">",
                "<input type=\"hidden\" name=\"_method\" value=\"delete\">",
                "<button type=\"submit\">Sign out</button></form>"
            ),
            id = id
        ),
        None => "<a href=\"/users/sign_in\">Sign in</a>".to_owned(),
    };
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<title>{title} | Dev Community</title></head>",
            "<body><header><a href=\"/\">Dev Community</a><nav>{nav}</nav></header>",
            "<main>{body}</main>",
            "<div id=\"{modal}\"></div>",
            "</body></html>"
        ),
        title = escape(title),
        nav = nav,
        body = body,
        modal = MODAL,
    )
}
