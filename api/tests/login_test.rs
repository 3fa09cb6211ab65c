//! Integration tests for the login endpoint

mod common;

use actix_web::cookie::{time, SameSite};
use actix_web::test;

use common::{test_state, valid_login};
use sesame_api::app::create_app;

#[actix_web::test]
async fn test_login_success_returns_token_and_cookie() {
    let (store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(valid_login())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "refresh_token")
        .expect("refresh cookie set");
    assert!(cookie.http_only().unwrap_or(false));
    assert_eq!(cookie.path(), Some("/api"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(time::Duration::seconds(7 * 86400)));
    // Development state: Secure only in production.
    assert!(!cookie.secure().unwrap_or(false));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["expiresIn"], 600);
    assert!(!body["accessToken"].as_str().unwrap().is_empty());
    // The refresh token travels only in the cookie, never the body.
    assert!(body.get("refreshToken").is_none());

    assert_eq!(store.len().await, 1);
}

#[actix_web::test]
async fn test_login_empty_field_is_bad_request() {
    let (_store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(serde_json::json!({ "username": "admin", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing credentials");
}

#[actix_web::test]
async fn test_login_missing_field_is_bad_request() {
    let (_store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(serde_json::json!({ "username": "admin" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_login_failures_are_uniform() {
    let (store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    for body in [
        serde_json::json!({ "username": "admin", "password": "wrong" }),
        serde_json::json!({ "username": "nobody", "password": "hunter2" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Unknown username and wrong password are indistinguishable.
        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid credentials");
    }

    assert_eq!(store.len().await, 0);
}
