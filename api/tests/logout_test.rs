//! Integration tests for the logout endpoint

mod common;

use actix_web::cookie::{time, Cookie};
use actix_web::test;

use common::{refresh_cookie_from, test_state, valid_login};
use sesame_api::app::create_app;

#[actix_web::test]
async fn test_logout_consumes_session_and_clears_cookie() {
    let (store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let login = test::TestRequest::post()
        .uri("/api/login")
        .set_json(valid_login())
        .to_request();
    let cookie = refresh_cookie_from(&test::call_service(&app, login).await);
    assert_eq!(store.len().await, 1);

    let req = test::TestRequest::post()
        .uri("/api/logout")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let cleared = resp
        .response()
        .cookies()
        .find(|c| c.name() == "refresh_token")
        .expect("removal cookie set");
    assert_eq!(cleared.value(), "");
    assert_eq!(cleared.max_age(), Some(time::Duration::ZERO));

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert_eq!(store.len().await, 0);

    // The logged-out cookie can no longer rotate.
    let req = test::TestRequest::post()
        .uri("/api/refresh")
        .cookie(cookie)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}

#[actix_web::test]
async fn test_logout_without_cookie_succeeds() {
    let (_store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post().uri("/api/logout").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
}

#[actix_web::test]
async fn test_logout_is_idempotent() {
    let (_store, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let login = test::TestRequest::post()
        .uri("/api/login")
        .set_json(valid_login())
        .to_request();
    let cookie = refresh_cookie_from(&test::call_service(&app, login).await);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/logout")
            .cookie(cookie.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
    }

    // A garbage cookie does not break logout either.
    let req = test::TestRequest::post()
        .uri("/api/logout")
        .cookie(Cookie::new("refresh_token", "not-a-jwt"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}
