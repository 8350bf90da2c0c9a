//! Owner-only edits of a member's description and profile.
//!
//! Each edit group validates as a whole: either every field is accepted and
//! the member is persisted, or nothing is written and the submitted draft is
//! handed back with per-field messages for re-rendering. Rejections are an
//! [`EditOutcome`] value, never an [`Error`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{MemberEditCommand, MemberRepository};
use crate::domain::{Error, Member, MemberId, MemberProfile, ProfileTitle};

/// Longest accepted first or last name, in characters.
pub const NAME_MAX_CHARS: usize = 50;
/// Longest accepted city, state or country, in characters.
pub const LOCATION_MAX_CHARS: usize = 100;
/// Longest accepted postal code, in characters.
pub const PINCODE_MAX_CHARS: usize = 12;
/// Longest accepted description, in characters.
pub const ABOUT_MAX_CHARS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldError {
    field: &'static str,
    message: String,
}

/// Ordered collection of field errors for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Record a rejection for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Whether the submission passed every rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded rejections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `field` has at least one message.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    /// Messages recorded against `field`, in insertion order.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |error| error.field == field)
            .map(|error| error.message.as_str())
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Result of applying an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome<D> {
    /// The change was persisted; carries the updated member.
    Saved(Member),
    /// Validation failed; nothing was written.
    Invalid {
        /// Values as submitted, for re-rendering the form.
        draft: D,
        /// Reasons per field.
        errors: FieldErrors,
    },
}

/// Submitted description form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionDraft {
    /// Description text as typed.
    pub about: String,
}

impl DescriptionDraft {
    /// Pre-fill the form from stored values.
    #[must_use]
    pub fn from_member(member: &Member) -> Self {
        Self {
            about: member.about().to_owned(),
        }
    }

    /// Accepted description text.
    ///
    /// # Errors
    ///
    /// Returns the collected [`FieldErrors`] when any rule fails.
    pub fn validate(&self) -> Result<String, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_length(&mut errors, "about", &self.about, ABOUT_MAX_CHARS);
        errors.into_result(self.about.clone())
    }
}

/// Submitted profile form. Every value is kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Country.
    pub country: String,
    /// Postal code.
    pub pincode: String,
    /// Title label; blank clears the stored title.
    pub profile_title: String,
}

impl ProfileDraft {
    /// Pre-fill the form from stored values.
    #[must_use]
    pub fn from_member(member: &Member) -> Self {
        let profile = member.profile();
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            city: profile.city.clone(),
            state: profile.state.clone(),
            country: profile.country.clone(),
            pincode: profile.pincode.clone(),
            profile_title: profile
                .profile_title
                .map(|title| title.as_str().to_owned())
                .unwrap_or_default(),
        }
    }

    /// Accepted profile fields. A blank title clears the stored title.
    ///
    /// # Errors
    ///
    /// Returns the collected [`FieldErrors`] when any rule fails.
    pub fn validate(&self) -> Result<MemberProfile, FieldErrors> {
        let mut errors = FieldErrors::default();
        check_length(&mut errors, "first_name", &self.first_name, NAME_MAX_CHARS);
        check_length(&mut errors, "last_name", &self.last_name, NAME_MAX_CHARS);
        check_length(&mut errors, "city", &self.city, LOCATION_MAX_CHARS);
        check_length(&mut errors, "state", &self.state, LOCATION_MAX_CHARS);
        check_length(&mut errors, "country", &self.country, LOCATION_MAX_CHARS);
        check_length(&mut errors, "pincode", &self.pincode, PINCODE_MAX_CHARS);
        if !self.pincode.chars().all(is_pincode_char) {
            errors.push(
                "pincode",
                "may only contain letters, digits, spaces and hyphens",
            );
        }

        let title = self.profile_title.trim();
        let profile_title = if title.is_empty() {
            None
        } else if let Ok(parsed) = title.parse::<ProfileTitle>() {
            Some(parsed)
        } else {
            errors.push("profile_title", "is not included in the list");
            None
        };

        errors.into_result(MemberProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            pincode: self.pincode.clone(),
            profile_title,
        })
    }
}

fn check_length(errors: &mut FieldErrors, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(field, format!("is too long (maximum is {max} characters)"));
    }
}

const fn is_pincode_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '-'
}

/// Edit service implementing [`MemberEditCommand`] over a repository.
#[derive(Clone)]
pub struct MemberEditService<R> {
    repo: Arc<R>,
}

impl<R> MemberEditService<R> {
    /// Build the service over `repo`.
    pub const fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> MemberEditCommand for MemberEditService<R>
where
    R: MemberRepository,
{
    async fn update_description(
        &self,
        actor: MemberId,
        draft: DescriptionDraft,
    ) -> Result<EditOutcome<DescriptionDraft>, Error> {
        let about = match draft.validate() {
            Ok(about) => about,
            Err(errors) => {
                debug!(member_id = %actor, errors = errors.len(), "description rejected");
                return Ok(EditOutcome::Invalid { draft, errors });
            }
        };
        let saved = self.repo.update_about(actor, about).await?;
        info!(member_id = %actor, "description updated");
        Ok(EditOutcome::Saved(saved))
    }

    async fn update_profile(
        &self,
        actor: MemberId,
        draft: ProfileDraft,
    ) -> Result<EditOutcome<ProfileDraft>, Error> {
        let profile = match draft.validate() {
            Ok(profile) => profile,
            Err(errors) => {
                debug!(member_id = %actor, errors = errors.len(), "profile rejected");
                return Ok(EditOutcome::Invalid { draft, errors });
            }
        };
        let saved = self.repo.update_profile(actor, profile).await?;
        info!(member_id = %actor, "profile updated");
        Ok(EditOutcome::Saved(saved))
    }
}

#[cfg(test)]
mod tests;
