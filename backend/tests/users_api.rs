//! End-to-end HTTP tests against the in-memory repository.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};
use user_directory::Trace;
use user_directory::domain::{TRACE_ID_HEADER, UserService};
use user_directory::inbound::http::state::HttpState;
use user_directory::inbound::http::users;
use user_directory::test_support::InMemoryUserRepository;

#[actix_web::test]
async fn user_lifecycle_over_http() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let state = HttpState::new(Arc::new(UserService::new(Arc::clone(&repo))));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(users::configure),
    )
    .await;

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Grace Hopper", "email": "grace@navy.mil" }))
            .to_request(),
    )
    .await;
    let id = created["uuid"].as_str().expect("uuid").to_owned();

    let patched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::patch()
            .uri(&format!("/users/{id}"))
            .set_json(json!({ "name": "Rear Admiral Hopper" }))
            .to_request(),
    )
    .await;
    assert_eq!(patched["name"], "Rear Admiral Hopper");
    assert_eq!(patched["email"], "grace@navy.mil");

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/users/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert!(deleted.headers().contains_key(TRACE_ID_HEADER));

    let listed: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(listed, json!([]));
    assert_eq!(repo.stored_rows(), 1);
}
