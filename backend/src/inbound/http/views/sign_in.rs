//! Sign-in form.

use super::escape;

/// Sign-in form, optionally with a flash message above it.
#[must_use]
pub fn form(email: &str, alert: Option<&str>) -> String {
    let alert = alert
        .map(|message| format!("<p class=\"alert\" role=\"alert\">{}</p>", escape(message)))
        .unwrap_or_default();
    format!(
        concat!(
            "<h1>Sign in</h1>{alert}",
            "<form action=\"/users/sign_in\" method=\"post\">",
            "<label for=\"user_email\">Email</label>",
            "<input type=\"email\" id=\"user_email\" name=\"user[email]\" value=\"{email}\" autocomplete=\"email\">",
            "<label for=\"user_password\">Password</label>",
            "<input type=\"password\" id=\"user_password\" name=\"user[password]\" autocomplete=\"current-password\">",
            "<button type=\"submit\">Sign in</button></form>"
        ),
        alert = alert,
        email = escape(email),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_never_echoed() {
        let html = form("ada@example.com", Some("Invalid email or password."));
        assert!(html.contains("value=\"ada@example.com\""));
        assert!(html.contains("role=\"alert\""));
        assert!(!html.contains("name=\"user[password]\" value="));
    }
}
