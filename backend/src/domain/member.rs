//! Community member aggregate.
//!
//! A [`Member`] is created by seeding or registration and only mutated
//! through the edit service. Identity never changes once assigned.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::PasswordDigest;

/// Validation failures for member primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemberValidationError {
    /// Identifiers start at one.
    #[error("member id must be a positive integer")]
    ZeroId,
    /// The text was not an integer.
    #[error("member id must be numeric, got '{value}'")]
    NonNumericId { value: String },
    /// The title is not one of the fixed set.
    #[error("'{value}' is not a recognised profile title")]
    UnknownProfileTitle { value: String },
}

/// Positive numeric member identifier, as used in `/member/{id}`.
///
/// # Examples
/// ```
/// use backend::domain::MemberId;
///
/// let id: MemberId = "7".parse().expect("numeric id");
/// assert_eq!(id.get(), 7);
/// assert!("0".parse::<MemberId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct MemberId(u64);

impl MemberId {
    /// Validate a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MemberValidationError::ZeroId`] for zero.
    pub const fn new(raw: u64) -> Result<Self, MemberValidationError> {
        if raw == 0 {
            return Err(MemberValidationError::ZeroId);
        }
        Ok(Self(raw))
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for MemberId {
    type Error = MemberValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MemberId> for u64 {
    fn from(value: MemberId) -> Self {
        value.0
    }
}

impl FromStr for MemberId {
    type Err = MemberValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|_| MemberValidationError::NonNumericId {
                value: s.to_owned(),
            })?;
        Self::new(raw)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of professional titles a member can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileTitle {
    /// "Junior Ruby on Rails".
    JuniorRails,
    /// "Mid Level Ruby on Rails".
    MidLevelRails,
    /// "Senior Ruby on Rails".
    SeniorRails,
    /// "Software Engineer".
    SoftwareEngineer,
    /// "QA Engineer".
    QaEngineer,
    /// "Platform Engineer".
    PlatformEngineer,
    /// "Fullstack Ruby on Rails".
    FullstackRails,
    /// "Frontend Engineer".
    FrontendEngineer,
}

impl ProfileTitle {
    /// Every title in display order.
    pub const ALL: [Self; 8] = [
        Self::JuniorRails,
        Self::MidLevelRails,
        Self::SeniorRails,
        Self::SoftwareEngineer,
        Self::QaEngineer,
        Self::PlatformEngineer,
        Self::FullstackRails,
        Self::FrontendEngineer,
    ];

    /// Human-readable label, also the stored and submitted value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JuniorRails => "Junior Ruby on Rails",
            Self::MidLevelRails => "Mid Level Ruby on Rails",
            Self::SeniorRails => "Senior Ruby on Rails",
            Self::SoftwareEngineer => "Software Engineer",
            Self::QaEngineer => "QA Engineer",
            Self::PlatformEngineer => "Platform Engineer",
            Self::FullstackRails => "Fullstack Ruby on Rails",
            Self::FrontendEngineer => "Frontend Engineer",
        }
    }
}

impl FromStr for ProfileTitle {
    type Err = MemberValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|title| title.as_str() == s)
            .ok_or_else(|| MemberValidationError::UnknownProfileTitle {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for ProfileTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editable profile fields, validated as one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// City, matched by directory search.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Country, matched by directory search.
    pub country: String,
    /// Postal code.
    pub pincode: String,
    /// Displayed title; `None` when cleared.
    pub profile_title: Option<ProfileTitle>,
}

/// Member data supplied when registering a new record.
#[derive(Debug, Clone)]
pub struct NewMember {
    /// Sign-in email; normalised to lower case on registration.
    pub email: String,
    /// Public handle.
    pub username: String,
    /// Editable profile group.
    pub profile: MemberProfile,
    /// Birth date, when known.
    pub date_of_birth: Option<NaiveDate>,
    /// Contact phone number shown on the profile.
    pub contact_number: String,
    /// Free-text description.
    pub about: String,
    /// Stored password digest.
    pub password: PasswordDigest,
}

/// A directory member.
///
/// ## Invariants
/// - `id` is assigned once by the repository and never changes.
/// - `email` is stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    email: String,
    username: String,
    profile: MemberProfile,
    date_of_birth: Option<NaiveDate>,
    contact_number: String,
    about: String,
    created_at: DateTime<Utc>,
    password: PasswordDigest,
}

impl Member {
    /// Materialise a registered member.
    #[must_use]
    pub fn register(id: MemberId, new: NewMember, created_at: DateTime<Utc>) -> Self {
        let NewMember {
            email,
            username,
            profile,
            date_of_birth,
            contact_number,
            about,
            password,
        } = new;
        Self {
            id,
            email: email.trim().to_lowercase(),
            username,
            profile,
            date_of_birth,
            contact_number,
            about,
            created_at,
            password,
        }
    }

    /// Repository-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Lower-cased sign-in email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Public handle.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Editable profile group.
    #[must_use]
    pub const fn profile(&self) -> &MemberProfile {
        &self.profile
    }

    /// Birth date, when known.
    #[must_use]
    pub const fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    /// Contact phone number.
    #[must_use]
    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    /// Free-text description.
    #[must_use]
    pub fn about(&self) -> &str {
        &self.about
    }

    /// Registration time; orders the directory.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Stored password digest.
    #[must_use]
    pub const fn password(&self) -> &PasswordDigest {
        &self.password
    }

    /// `"{first} {last}"`, trimmed when either part is blank.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.profile.first_name, self.profile.last_name)
            .trim()
            .to_owned()
    }

    /// Replace the description. Other fields are untouched.
    pub fn set_about(&mut self, about: impl Into<String>) {
        self.about = about.into();
    }

    /// Replace the profile group. Other fields are untouched.
    pub fn set_profile(&mut self, profile: MemberProfile) {
        self.profile = profile;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn member() -> Member {
        Member::register(
            MemberId::new(3).expect("positive id"),
            NewMember {
                email: " Ada@Example.com".to_owned(),
                username: "Ada-5".to_owned(),
                profile: MemberProfile {
                    first_name: "Ada".to_owned(),
                    last_name: "Lovelace".to_owned(),
                    ..MemberProfile::default()
                },
                date_of_birth: None,
                contact_number: String::new(),
                about: "Analyst".to_owned(),
                password: PasswordDigest::with_salt([0; 16], "password"),
            },
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("seven")]
    fn member_id_rejects_non_positive_text(#[case] raw: &str) {
        assert!(raw.parse::<MemberId>().is_err());
    }

    #[rstest]
    fn every_title_parses_from_its_label() {
        for title in ProfileTitle::ALL {
            assert_eq!(title.as_str().parse::<ProfileTitle>(), Ok(title));
        }
    }

    #[rstest]
    fn generated_titles_match_the_domain_labels() {
        let labels: Vec<&str> = ProfileTitle::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(labels, example_data::PROFILE_TITLES);
    }

    #[rstest]
    #[case("Wizard")]
    #[case("software engineer")]
    #[case("")]
    fn unknown_titles_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<ProfileTitle>(),
            Err(MemberValidationError::UnknownProfileTitle { .. })
        ));
    }

    #[rstest]
    fn registration_normalises_email(member: Member) {
        assert_eq!(member.email(), "ada@example.com");
    }

    #[rstest]
    fn full_name_joins_parts(mut member: Member) {
        assert_eq!(member.full_name(), "Ada Lovelace");
        member.set_profile(MemberProfile::default());
        assert_eq!(member.full_name(), "");
    }

    #[rstest]
    fn set_about_keeps_identity_and_profile(mut member: Member) {
        let id = member.id();
        let profile = member.profile().clone();
        member.set_about("Senior engineer.");
        assert_eq!(member.id(), id);
        assert_eq!(member.profile(), &profile);
        assert_eq!(member.about(), "Senior engineer.");
    }
}
