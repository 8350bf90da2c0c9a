//! Directory listing and its search form.

use crate::domain::{DirectoryFilter, Member};

use super::{MEMBER_LIST, escape};

/// Quiet period the search form asks the client to wait before submitting.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Page body: search form followed by the result list.
#[must_use]
pub fn index(members: &[Member], filter: &DirectoryFilter) -> String {
    format!(
        concat!(
            "<h1>Members</h1>",
            "<form id=\"member-search\" action=\"/\" method=\"get\" ",
            "data-debounce-ms=\"{debounce}\" data-target=\"{list}\">",
            "<label>Country <input type=\"search\" name=\"q[country_cont]\" value=\"{country}\"></label>",
            "<label>City <input type=\"search\" name=\"q[city_cont]\" value=\"{city}\"></label>",
            "</form>{results}"
        ),
        debounce = SEARCH_DEBOUNCE_MS,
        list = MEMBER_LIST,
        country = escape(filter.country().unwrap_or_default()),
        city = escape(filter.city().unwrap_or_default()),
        results = member_list(members),
    )
}

/// The replaceable result list.
#[must_use]
pub fn member_list(members: &[Member]) -> String {
    let mut html = format!("<div id=\"{MEMBER_LIST}\">");
    if members.is_empty() {
        html.push_str("<p>No members found.</p>");
    } else {
        html.push_str("<ul>");
        for member in members {
            let profile = member.profile();
            let title = profile.profile_title.map(|t| t.as_str()).unwrap_or_default();
            html.push_str(&format!(
                "<li><a href=\"/member/{id}\">{name}</a> <span>{title}</span> <span>{city}, {country}</span></li>",
                id = member.id(),
                name = escape(&member.full_name()),
                title = escape(title),
                city = escape(&profile.city),
                country = escape(&profile.country),
            ));
        }
        html.push_str("</ul>");
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_keep_the_list_container() {
        let html = member_list(&[]);
        assert!(html.starts_with("<div id=\"member-list\">"));
        assert!(html.contains("No members found."));
    }

    #[test]
    fn search_form_echoes_the_filter() {
        let filter = DirectoryFilter::new(Some("India"), None);
        let html = index(&[], &filter);
        assert!(html.contains("name=\"q[country_cont]\" value=\"india\""));
        assert!(html.contains("data-debounce-ms=\"500\""));
    }
}
