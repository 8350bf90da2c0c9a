//! Deterministic member generation from seed definitions.
//!
//! The same seed definition and reference date always produce identical
//! output.

use std::collections::HashSet;

use chrono::{Days, Months, NaiveDate};
use fake::Fake;
use fake::faker::address::raw::{CityName, CountryName, StateName};
use fake::faker::internet::raw::FreeEmail;
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::registry::SeedDefinition;
use crate::seed::{ABOUT_TEXT, DEFAULT_PASSWORD, ExampleMemberSeed};
use crate::validation::{PROFILE_TITLES, is_valid_name, username_segment};

/// Maximum number of attempts to generate a valid name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Offset added to the member index when building usernames.
const USERNAME_OFFSET: usize = 5;

const MIN_AGE_YEARS: u32 = 24;
const MAX_AGE_YEARS: u32 = 35;
const MAX_BIRTHDAY_JITTER_DAYS: u64 = 30;

/// Generates example members from a seed definition.
///
/// Each member has:
///
/// - first and last names of at most 50 characters
/// - a username of the form `"{first}-{index + 5}"`, built from an
///   independently drawn first name
/// - a profile title drawn from [`PROFILE_TITLES`]
/// - an email that is unique within the run
/// - a birth date between 24 and 35 years before `today`, shifted forward by
///   up to 30 days
/// - country, state, city and contact number
/// - the fixed [`ABOUT_TEXT`] and [`DEFAULT_PASSWORD`]
///
/// # Errors
///
/// Returns [`GenerationError`] if name generation keeps failing validation or
/// a birth date cannot be represented.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use example_data::{SeedDefinition, generate_example_members};
///
/// let seed_def = SeedDefinition::new("test", 42, 3);
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
/// let members = generate_example_members(&seed_def, today).expect("generated");
///
/// assert_eq!(members.len(), 3);
/// let again = generate_example_members(&seed_def, today).expect("generated");
/// assert_eq!(members, again);
/// ```
pub fn generate_example_members(
    seed_def: &SeedDefinition,
    today: NaiveDate,
) -> Result<Vec<ExampleMemberSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut emails = HashSet::with_capacity(seed_def.member_count());

    (0..seed_def.member_count())
        .map(|index| generate_single_member(&mut rng, index, today, &mut emails))
        .collect()
}

fn generate_single_member(
    rng: &mut ChaCha8Rng,
    index: usize,
    today: NaiveDate,
    emails: &mut HashSet<String>,
) -> Result<ExampleMemberSeed, GenerationError> {
    let first_name = generate_name(rng, |rng| FirstName(EN).fake_with_rng(rng))?;
    let last_name = generate_name(rng, |rng| LastName(EN).fake_with_rng(rng))?;
    let handle: String = FirstName(EN).fake_with_rng(rng);
    let username = format!("{}-{}", username_segment(&handle), index + USERNAME_OFFSET);
    let profile_title = PROFILE_TITLES
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_owned();
    let email = unique_email(FreeEmail(EN).fake_with_rng(rng), index, emails);
    let date_of_birth = birth_date(rng, today)?;

    Ok(ExampleMemberSeed {
        email,
        username,
        first_name,
        last_name,
        profile_title,
        date_of_birth,
        country: CountryName(EN).fake_with_rng(rng),
        state: StateName(EN).fake_with_rng(rng),
        city: CityName(EN).fake_with_rng(rng),
        contact_number: PhoneNumber(EN).fake_with_rng(rng),
        about: ABOUT_TEXT.to_owned(),
        password: DEFAULT_PASSWORD.to_owned(),
    })
}

fn generate_name<F>(rng: &mut ChaCha8Rng, mut draw: F) -> Result<String, GenerationError>
where
    F: FnMut(&mut ChaCha8Rng) -> String,
{
    for _ in 0..MAX_NAME_ATTEMPTS {
        let candidate = draw(rng);
        if is_valid_name(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Prefixes the member index when the faker repeats an address.
fn unique_email(candidate: String, index: usize, seen: &mut HashSet<String>) -> String {
    let email = if seen.contains(&candidate) {
        format!("{index}.{candidate}")
    } else {
        candidate
    };
    seen.insert(email.clone());
    email
}

fn birth_date(rng: &mut ChaCha8Rng, today: NaiveDate) -> Result<NaiveDate, GenerationError> {
    let jitter = rng.random_range(1..=MAX_BIRTHDAY_JITTER_DAYS);
    let years = rng.random_range(MIN_AGE_YEARS..=MAX_AGE_YEARS);
    today
        .checked_add_days(Days::new(jitter))
        .and_then(|date| date.checked_sub_months(Months::new(years * 12)))
        .ok_or(GenerationError::DateOutOfRange { reference: today })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::validation::is_valid_profile_title;

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
    }

    fn members(seed: u64, count: usize, today: NaiveDate) -> Vec<ExampleMemberSeed> {
        generate_example_members(&SeedDefinition::new("test-seed", seed, count), today)
            .expect("generation should succeed")
    }

    #[rstest]
    fn generates_requested_count(today: NaiveDate) {
        assert_eq!(members(42, 100, today).len(), 100);
    }

    #[rstest]
    fn same_seed_is_deterministic(today: NaiveDate) {
        assert_eq!(members(42, 10, today), members(42, 10, today));
    }

    #[rstest]
    fn different_seeds_differ(today: NaiveDate) {
        assert_ne!(members(42, 10, today), members(43, 10, today));
    }

    #[rstest]
    fn usernames_carry_offset_index(today: NaiveDate) {
        for (index, member) in members(7, 20, today).iter().enumerate() {
            let suffix = format!("-{}", index + USERNAME_OFFSET);
            assert!(
                member.username.ends_with(&suffix),
                "{} should end with {suffix}",
                member.username
            );
        }
    }

    #[rstest]
    fn emails_are_unique(today: NaiveDate) {
        let generated = members(11, 100, today);
        let unique: HashSet<_> = generated.iter().map(|m| m.email.as_str()).collect();
        assert_eq!(unique.len(), generated.len());
    }

    #[rstest]
    fn fields_respect_profile_constraints(today: NaiveDate) {
        for member in members(3, 50, today) {
            assert!(is_valid_name(&member.first_name));
            assert!(is_valid_name(&member.last_name));
            assert!(is_valid_profile_title(&member.profile_title));
            assert_eq!(member.about, ABOUT_TEXT);
            assert_eq!(member.password, DEFAULT_PASSWORD);
        }
    }

    #[rstest]
    fn birth_dates_fall_in_age_window(today: NaiveDate) {
        let earliest = today
            .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
            .expect("in range");
        let latest = today
            .checked_add_days(Days::new(MAX_BIRTHDAY_JITTER_DAYS))
            .and_then(|d| d.checked_sub_months(Months::new(MIN_AGE_YEARS * 12)))
            .expect("in range");
        for member in members(5, 50, today) {
            assert!(member.date_of_birth > earliest);
            assert!(member.date_of_birth <= latest);
        }
    }

    #[test]
    fn repeated_email_gets_index_prefix() {
        let mut seen = HashSet::new();
        assert_eq!(unique_email("a@b.io".to_owned(), 0, &mut seen), "a@b.io");
        assert_eq!(unique_email("a@b.io".to_owned(), 3, &mut seen), "3.a@b.io");
    }
}
