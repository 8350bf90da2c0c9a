//! Tests for member page and edit handlers.

use actix_web::http::StatusCode;
use actix_web::http::header::{ACCEPT, CONTENT_TYPE, LOCATION};
use actix_web::{App, test as actix_test};
use fragment_stream::STREAM_MEDIA_TYPE;
use rstest::rstest;

use super::*;
use crate::domain::ports::MemberRepository;
use crate::inbound::http::routes::routes;
use crate::inbound::http::test_utils::{
    seeded_repository, session_cookie, sign_in_request, test_session_middleware,
};

const STREAM_ACCEPT: &str = "text/vnd.turbo-stream.html, text/html;q=0.9";

macro_rules! app {
    ($repo:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::from_repository($repo.clone())))
                .wrap(test_session_middleware())
                .configure(routes),
        )
        .await
    };
}

macro_rules! signed_in {
    ($app:expr, $email:expr) => {{
        let res = actix_test::call_service(&$app, sign_in_request($email).to_request()).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        session_cookie(&res)
    }};
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

fn single_replacement(body: &str) -> (String, String) {
    let payload = StreamPayload::decode(body).expect("stream payload");
    assert_eq!(payload.len(), 1);
    let step = payload.instructions().first().expect("one instruction");
    (step.target().as_str().to_owned(), step.markup().to_owned())
}

#[rstest]
#[actix_web::test]
async fn profile_page_shows_edit_links_only_to_the_owner() {
    let (repo, ada, _) = seeded_repository().await;
    let app = app!(repo);
    let path = format!("/member/{}", ada.id());

    let anon = actix_test::call_and_read_body(
        &app,
        actix_test::TestRequest::get().uri(&path).to_request(),
    )
    .await;
    assert!(text(&anon).contains("Ada Tester"));
    assert!(!text(&anon).contains("/edit_description"));

    let cookie = signed_in!(app, "ada@example.com");
    let own = actix_test::call_and_read_body(
        &app,
        actix_test::TestRequest::get().uri(&path).cookie(cookie).to_request(),
    )
    .await;
    assert!(text(&own).contains("href=\"/edit_description\""));
    assert!(text(&own).contains("href=\"/edit_profile\""));
}

#[rstest]
#[case("/member/99")]
#[case("/member/0")]
#[case("/member/abc")]
#[actix_web::test]
async fn unknown_members_are_not_found(#[case] path: &str) {
    let (repo, _, _) = seeded_repository().await;
    let app = app!(repo);
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(path).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case("/edit_description")]
#[case("/edit_profile")]
#[actix_web::test]
async fn editors_require_a_session(#[case] path: &str) {
    let (repo, _, _) = seeded_repository().await;
    let app = app!(repo);
    let req = actix_test::TestRequest::get()
        .uri(path)
        .insert_header((ACCEPT, STREAM_ACCEPT))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[actix_web::test]
async fn description_editor_fills_the_modal_mount() {
    let (repo, _, _) = seeded_repository().await;
    let app = app!(repo);
    let cookie = signed_in!(app, "ada@example.com");

    let req = actix_test::TestRequest::get()
        .uri("/edit_description")
        .insert_header((ACCEPT, STREAM_ACCEPT))
        .cookie(cookie)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some(STREAM_MEDIA_TYPE)
    );
    let (target, markup) = single_replacement(&text(&actix_test::read_body(res).await));
    assert_eq!(target, "modal");
    assert!(markup.starts_with("<div id=\"modal\"><dialog open"));
    assert!(markup.contains(">Writes code.</textarea>"));
}

#[rstest]
#[actix_web::test]
async fn unauthenticated_update_is_rejected_without_mutation() {
    let (repo, ada, _) = seeded_repository().await;
    let app = app!(repo);
    let req = actix_test::TestRequest::patch()
        .uri("/update_description")
        .insert_header((ACCEPT, STREAM_ACCEPT))
        .set_form([("user[about]", "Hijacked.")])
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let stored = repo.find(ada.id()).await.expect("find").expect("present");
    assert_eq!(stored.about(), "Writes code.");
}

#[rstest]
#[case("/update_description", "{\"user\":{\"about\":\"Hijacked.\"}}", "application/json")]
#[case("/update_profile", "user[city]=Paris&user[city]=Rome", "application/x-www-form-urlencoded")]
#[actix_web::test]
async fn anonymous_update_is_unauthorised_whatever_the_body(
    #[case] path: &str,
    #[case] body: &'static str,
    #[case] content_type: &str,
) {
    let (repo, ada, _) = seeded_repository().await;
    let app = app!(repo);
    let req = actix_test::TestRequest::patch()
        .uri(path)
        .insert_header((ACCEPT, STREAM_ACCEPT))
        .insert_header((CONTENT_TYPE, content_type))
        .set_payload(body)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let stored = repo.find(ada.id()).await.expect("find").expect("present");
    assert_eq!(stored.about(), "Writes code.");
    assert_eq!(stored.profile().city, "London");
}

#[rstest]
#[actix_web::test]
async fn saved_description_replaces_its_fragment() {
    let (repo, ada, grace) = seeded_repository().await;
    let app = app!(repo);
    let cookie = signed_in!(app, "ada@example.com");

    let req = actix_test::TestRequest::patch()
        .uri("/update_description")
        .insert_header((ACCEPT, STREAM_ACCEPT))
        .cookie(cookie)
        .set_form([("_method", "patch"), ("user[about]", "Senior engineer.")])
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let (target, markup) = single_replacement(&text(&actix_test::read_body(res).await));
    assert_eq!(target, "member-description");
    assert!(markup.contains("Senior engineer."));

    let stored = repo.find(ada.id()).await.expect("find").expect("present");
    assert_eq!(stored.about(), "Senior engineer.");
    let untouched = repo.find(grace.id()).await.expect("find").expect("present");
    assert_eq!(untouched.about(), "Writes code.");
}

#[rstest]
#[actix_web::test]
async fn invalid_profile_rerenders_the_dialog_with_errors() {
    let (repo, ada, _) = seeded_repository().await;
    let app = app!(repo);
    let cookie = signed_in!(app, "ada@example.com");

    let req = actix_test::TestRequest::patch()
        .uri("/update_profile")
        .insert_header((ACCEPT, STREAM_ACCEPT))
        .cookie(cookie)
        .set_form([
            ("user[first_name]", "Ada"),
            ("user[last_name]", "Tester"),
            ("user[city]", "Paris"),
            ("user[profile_title]", "Wizard"),
        ])
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = text(&actix_test::read_body(res).await);
    assert!(html.starts_with("<div id=\"modal\"><dialog open"));
    assert!(html.contains("is not included in the list"));
    assert!(html.contains("value=\"Paris\""));

    let stored = repo.find(ada.id()).await.expect("find").expect("present");
    assert_eq!(stored.profile().city, "London");
}

#[rstest]
#[actix_web::test]
async fn html_profile_update_redirects_to_the_profile() {
    let (repo, ada, _) = seeded_repository().await;
    let app = app!(repo);
    let cookie = signed_in!(app, "ada@example.com");

    let req = actix_test::TestRequest::post()
        .uri("/update_profile")
        .insert_header((ACCEPT, "text/html"))
        .cookie(cookie)
        .set_form([
            ("_method", "patch"),
            ("user[first_name]", "Augusta"),
            ("user[last_name]", "King"),
            ("user[profile_title]", "Senior Ruby on Rails"),
        ])
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let expected = format!("/member/{}", ada.id());
    assert_eq!(
        res.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some(expected.as_str())
    );

    let stored = repo.find(ada.id()).await.expect("find").expect("present");
    assert_eq!(stored.full_name(), "Augusta King");
}

#[rstest]
#[actix_web::test]
async fn omitted_fields_keep_their_stored_values() {
    let (repo, ada, _) = seeded_repository().await;
    let app = app!(repo);
    let cookie = signed_in!(app, "ada@example.com");

    let req = actix_test::TestRequest::patch()
        .uri("/update_profile")
        .insert_header((ACCEPT, STREAM_ACCEPT))
        .cookie(cookie)
        .set_form([("user[profile_title]", "")])
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let (target, _) = single_replacement(&text(&actix_test::read_body(res).await));
    assert_eq!(target, "member-profile");

    let stored = repo.find(ada.id()).await.expect("find").expect("present");
    assert!(stored.profile().profile_title.is_none());
    assert_eq!(stored.profile().city, "London");
    assert_eq!(stored.profile().first_name, "Ada");
}
