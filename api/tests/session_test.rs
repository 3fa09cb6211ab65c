//! Integration tests for bearer-token session introspection

mod common;

use actix_web::http::header;
use actix_web::test;

use common::{test_state, valid_login};
use sesame_api::app::create_app;

#[actix_web::test]
async fn test_session_with_valid_access_token() {
    let (_store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let login = test::TestRequest::post()
        .uri("/api/login")
        .set_json(valid_login())
        .to_request();
    let resp = test::call_service(&app, login).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let access_token = body["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/session")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "admin");
    assert_eq!(body["username"], "admin");
}

#[actix_web::test]
async fn test_session_without_token() {
    let (_store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/session").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_session_with_garbage_token() {
    let (_store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/session")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid token");
}

#[actix_web::test]
async fn test_refresh_cookie_is_not_a_bearer_token() {
    let (_store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let login = test::TestRequest::post()
        .uri("/api/login")
        .set_json(valid_login())
        .to_request();
    let resp = test::call_service(&app, login).await;
    let cookie = common::refresh_cookie_from(&resp);

    // Distinct secrets: the refresh token must not authorize API calls.
    let req = test::TestRequest::get()
        .uri("/api/session")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", cookie.value())))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}
