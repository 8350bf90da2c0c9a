//! Field constraints shared with the backend's profile validation.

/// Maximum number of characters in a first or last name.
pub const NAME_MAX: usize = 50;

/// Closed set of profile titles a member may carry.
pub const PROFILE_TITLES: [&str; 8] = [
    "Junior Ruby on Rails",
    "Mid Level Ruby on Rails",
    "Senior Ruby on Rails",
    "Software Engineer",
    "QA Engineer",
    "Platform Engineer",
    "Fullstack Ruby on Rails",
    "Frontend Engineer",
];

/// Returns `true` if `name` is non-blank and at most [`NAME_MAX`] characters.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_name;
///
/// assert!(is_valid_name("Ada"));
/// assert!(!is_valid_name("   "));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().count() <= NAME_MAX
}

/// Returns `true` if `title` is one of [`PROFILE_TITLES`].
#[must_use]
pub fn is_valid_profile_title(title: &str) -> bool {
    PROFILE_TITLES.contains(&title)
}

/// Strips characters that cannot appear in a username segment.
pub(crate) fn username_segment(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Ada", true)]
    #[case("Marie-Claire", true)]
    #[case("O'Brien", true)]
    #[case("", false)]
    #[case("   ", false)]
    fn validates_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_name(name), expected);
    }

    #[test]
    fn rejects_names_over_the_limit() {
        assert!(is_valid_name(&"A".repeat(NAME_MAX)));
        assert!(!is_valid_name(&"A".repeat(NAME_MAX + 1)));
    }

    #[rstest]
    #[case("Software Engineer", true)]
    #[case("Senior Ruby on Rails", true)]
    #[case("software engineer", false)]
    #[case("Wizard", false)]
    fn validates_profile_titles(#[case] title: &str, #[case] expected: bool) {
        assert_eq!(is_valid_profile_title(title), expected);
    }

    #[test]
    fn username_segment_drops_punctuation() {
        assert_eq!(username_segment("D'Angelo"), "DAngelo");
    }
}
