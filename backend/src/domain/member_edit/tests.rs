//! Validation rules and persistence behaviour of the edit service.

use super::*;
use crate::domain::ports::{MemberPersistenceError, MockMemberRepository};
use crate::domain::{ErrorCode, NewMember, PasswordDigest};
use chrono::{DateTime, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn actor() -> MemberId {
    MemberId::new(1).expect("positive id")
}

#[fixture]
fn stored(actor: MemberId) -> Member {
    Member::register(
        actor,
        NewMember {
            email: "ada@example.com".to_owned(),
            username: "Ada-5".to_owned(),
            profile: MemberProfile {
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                city: "London".to_owned(),
                state: "London".to_owned(),
                country: "United Kingdom".to_owned(),
                pincode: "N1 9GU".to_owned(),
                profile_title: Some(ProfileTitle::SoftwareEngineer),
            },
            date_of_birth: None,
            contact_number: String::new(),
            about: "Analyst".to_owned(),
            password: PasswordDigest::with_salt([0; 16], "password"),
        },
        DateTime::<Utc>::UNIX_EPOCH,
    )
}

fn valid_profile(stored: &Member) -> ProfileDraft {
    ProfileDraft::from_member(stored)
}

#[rstest]
fn draft_round_trips_stored_profile(stored: Member) {
    let profile = valid_profile(&stored).validate().expect("stored values are valid");
    assert_eq!(&profile, stored.profile());
}

#[rstest]
fn blank_title_clears_it(stored: Member) {
    let draft = ProfileDraft {
        profile_title: "  ".to_owned(),
        ..valid_profile(&stored)
    };
    let profile = draft.validate().expect("blank title is accepted");
    assert_eq!(profile.profile_title, None);
}

#[rstest]
#[case::title("profile_title", ProfileDraft { profile_title: "Wizard".to_owned(), ..ProfileDraft::default() })]
#[case::first_name("first_name", ProfileDraft { first_name: "a".repeat(NAME_MAX_CHARS + 1), ..ProfileDraft::default() })]
#[case::last_name("last_name", ProfileDraft { last_name: "b".repeat(NAME_MAX_CHARS + 1), ..ProfileDraft::default() })]
#[case::city("city", ProfileDraft { city: "c".repeat(LOCATION_MAX_CHARS + 1), ..ProfileDraft::default() })]
#[case::country("country", ProfileDraft { country: "d".repeat(LOCATION_MAX_CHARS + 1), ..ProfileDraft::default() })]
#[case::pincode_length("pincode", ProfileDraft { pincode: "1".repeat(PINCODE_MAX_CHARS + 1), ..ProfileDraft::default() })]
#[case::pincode_chars("pincode", ProfileDraft { pincode: "<script>".to_owned(), ..ProfileDraft::default() })]
fn invalid_profile_fields_are_reported(#[case] field: &str, #[case] draft: ProfileDraft) {
    let errors = draft.validate().expect_err("draft must be rejected");
    assert!(errors.contains(field), "expected an error on {field}: {errors:?}");
}

#[rstest]
fn limits_count_characters_not_bytes() {
    let draft = ProfileDraft {
        first_name: "é".repeat(NAME_MAX_CHARS),
        ..ProfileDraft::default()
    };
    assert!(draft.validate().is_ok());
}

#[rstest]
fn long_description_is_rejected() {
    let draft = DescriptionDraft {
        about: "x".repeat(ABOUT_MAX_CHARS + 1),
    };
    let errors = draft.validate().expect_err("too long");
    assert_eq!(errors.messages_for("about").count(), 1);
}

#[rstest]
#[tokio::test]
async fn saving_description_replaces_about(actor: MemberId, stored: Member) {
    let mut repo = MockMemberRepository::new();
    let found = stored.clone();
    repo.expect_update_about()
        .withf(move |id, about| *id == actor && about == "Senior engineer.")
        .times(1)
        .returning(move |_, about| {
            let mut member = found.clone();
            member.set_about(about);
            Ok(member)
        });
    repo.expect_update_profile().never();
    let service = MemberEditService::new(Arc::new(repo));

    let outcome = service
        .update_description(
            actor,
            DescriptionDraft {
                about: "Senior engineer.".to_owned(),
            },
        )
        .await
        .expect("edit succeeds");

    match outcome {
        EditOutcome::Saved(member) => {
            assert_eq!(member.about(), "Senior engineer.");
            assert_eq!(member.profile(), stored.profile());
        }
        EditOutcome::Invalid { errors, .. } => panic!("unexpected rejection: {errors:?}"),
    }
}

#[rstest]
#[tokio::test]
async fn invalid_title_never_touches_the_store(actor: MemberId, stored: Member) {
    let mut repo = MockMemberRepository::new();
    repo.expect_update_about().never();
    repo.expect_update_profile().never();
    let service = MemberEditService::new(Arc::new(repo));
    let draft = ProfileDraft {
        profile_title: "Wizard".to_owned(),
        ..valid_profile(&stored)
    };

    let outcome = service
        .update_profile(actor, draft.clone())
        .await
        .expect("rejection is not an error");

    assert_eq!(
        outcome,
        EditOutcome::Invalid {
            draft,
            errors: {
                let mut errors = FieldErrors::default();
                errors.push("profile_title", "is not included in the list");
                errors
            },
        }
    );
}

#[rstest]
#[tokio::test]
async fn vanished_member_is_not_found(actor: MemberId) {
    let mut repo = MockMemberRepository::new();
    repo.expect_update_profile()
        .times(1)
        .returning(|id, _| Err(MemberPersistenceError::missing(id.get())));
    let service = MemberEditService::new(Arc::new(repo));

    let err = service
        .update_profile(actor, ProfileDraft::default())
        .await
        .expect_err("member missing");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
