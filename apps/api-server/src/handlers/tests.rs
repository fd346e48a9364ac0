use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use scribe_infra::JwtConfig;

use super::configure_routes;
use crate::state::AppState;

fn test_state() -> AppState {
    AppState::in_memory(JwtConfig {
        secret: "handler-test-secret".into(),
        ..JwtConfig::default()
    })
}

macro_rules! spawn_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure_routes),
        )
        .await
    };
}

/// Call the service and return the status with the decoded envelope.
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

/// Register a user and log in, yielding the access token.
macro_rules! access_token {
    ($app:expr, $username:expr) => {{
        let (status, _) = send!(
            $app,
            test::TestRequest::post().uri("/register").set_json(json!({
                "username": $username,
                "email": format!("{}@example.com", $username),
                "password": "correct horse",
            }))
        );
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send!(
            $app,
            test::TestRequest::post().uri("/login").set_json(json!({
                "username": $username,
                "password": "correct horse",
            }))
        );
        assert_eq!(status, StatusCode::OK);
        body["data"]["token"]["access"]
            .as_str()
            .unwrap()
            .to_string()
    }};
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_health_check() {
    let app = spawn_app!();

    let (status, body) = send!(app, test::TestRequest::get().uri("/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[actix_web::test]
async fn test_register_duplicate_username_is_bad_request() {
    let app = spawn_app!();
    let payload = json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "correct horse",
    });

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/register").set_json(&payload)
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Account created");
    assert_eq!(body["data"]["username"], "alice");

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/register").set_json(&payload)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid Data");
}

#[actix_web::test]
async fn test_register_invalid_email_lists_field_errors() {
    let app = spawn_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/register").set_json(json!({
            "username": "alice",
            "email": "not-an-email",
            "password": "correct horse",
        }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["email"].is_array());
}

#[actix_web::test]
async fn test_register_whitespace_username_is_blank() {
    let app = spawn_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/register").set_json(json!({
            "username": "  ",
            "email": "blank@example.com",
            "password": "correct horse",
        }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["data"]["username"],
        json!(["This field may not be blank."])
    );
}

#[actix_web::test]
async fn test_refresh_with_bad_token_hides_decoder_detail() {
    let app = spawn_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/token/refresh")
            .set_json(json!({"refresh": "not.a.jwt"}))
    );

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Given token not valid for any token type");
}

#[actix_web::test]
async fn test_login_wrong_password_returns_no_token() {
    let app = spawn_app!();
    access_token!(app, "alice");

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/login").set_json(json!({
            "username": "alice",
            "password": "wrong",
        }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid Credentials");
    assert!(body["data"].get("token").is_none());
}

#[actix_web::test]
async fn test_login_unknown_user_is_not_found() {
    let app = spawn_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/login").set_json(json!({
            "username": "ghost",
            "password": "whatever",
        }))
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User Account Not Found");
}

#[actix_web::test]
async fn test_only_owner_can_edit_blog() {
    let app = spawn_app!();
    let alice = access_token!(app, "alice");
    let bob = access_token!(app, "bob");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/blog/")
            .insert_header(bearer(&alice))
            .set_json(json!({"title": "Hello", "content": "World"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let uid = body["data"]["uid"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        test::TestRequest::patch()
            .uri("/blog/")
            .insert_header(bearer(&bob))
            .set_json(json!({"uid": uid, "title": "Hijacked"}))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You are not allowed to edit this blog");

    let (status, body) = send!(
        app,
        test::TestRequest::patch()
            .uri("/blog/")
            .insert_header(bearer(&alice))
            .set_json(json!({"uid": uid, "title": "Hi"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Hi");
    assert_eq!(body["data"]["content"], "World");
}

#[actix_web::test]
async fn test_patch_without_uid_is_bad_request() {
    let app = spawn_app!();
    let alice = access_token!(app, "alice");

    let (status, _) = send!(
        app,
        test::TestRequest::patch()
            .uri("/blog/")
            .insert_header(bearer(&alice))
            .set_json(json!({"title": "Hi"}))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_deleting_blog_removes_comments() {
    let app = spawn_app!();
    let alice = access_token!(app, "alice");

    let (_, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/blog/")
            .insert_header(bearer(&alice))
            .set_json(json!({"title": "Hello", "content": "World"}))
    );
    let uid = body["data"]["uid"].as_str().unwrap().to_string();
    let comments_uri = format!("/blog/{uid}/comments/");

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&comments_uri)
            .insert_header(bearer(&alice))
            .set_json(json!({"comment": "First"}))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri("/blog/")
            .insert_header(bearer(&alice))
            .set_json(json!({"uid": uid}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Blog deleted Successfully");

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&comments_uri)
            .insert_header(bearer(&alice))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_comment_delete_by_non_author_is_not_found() {
    let app = spawn_app!();
    let alice = access_token!(app, "alice");
    let bob = access_token!(app, "bob");

    let (_, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/blog/")
            .insert_header(bearer(&alice))
            .set_json(json!({"title": "Hello", "content": "World"}))
    );
    let post = body["data"]["uid"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/blog/{post}/comments/"))
            .insert_header(bearer(&bob))
            .set_json(json!({"comment": "Nice"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let comment = body["data"]["uid"].as_str().unwrap().to_string();

    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/blog/{post}/comments/{comment}/"))
            .insert_header(bearer(&alice))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/blog/{post}/comments/{comment}/delete/"))
            .insert_header(bearer(&bob))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Comment deleted successfully");
}

#[actix_web::test]
async fn test_protected_routes_require_access_token() {
    let app = spawn_app!();

    let (status, body) = send!(app, test::TestRequest::get().uri("/blog/"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["message"].is_string());

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/blog/")
            .insert_header(bearer("garbage"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_refresh_token_is_not_a_credential() {
    let app = spawn_app!();
    access_token!(app, "alice");

    let (_, body) = send!(
        app,
        test::TestRequest::post().uri("/login").set_json(json!({
            "username": "alice",
            "password": "correct horse",
        }))
    );
    let refresh = body["data"]["token"]["refresh"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/blog/")
            .insert_header(bearer(&refresh))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/token/refresh")
            .set_json(json!({"refresh": refresh}))
    );
    assert_eq!(status, StatusCode::OK);
    let access = body["data"]["access"].as_str().unwrap().to_string();

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/blog/")
            .insert_header(bearer(&access))
    );
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_public_search_is_case_insensitive() {
    let app = spawn_app!();
    let alice = access_token!(app, "alice");

    for (title, content) in [("Learning RUST", "ownership"), ("Cooking", "Pasta")] {
        send!(
            app,
            test::TestRequest::post()
                .uri("/blog/")
                .insert_header(bearer(&alice))
                .set_json(json!({"title": title, "content": content}))
        );
    }

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/blog/public?search=rust&page=abc")
    );

    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Learning RUST");
}

#[actix_web::test]
async fn test_declared_routes_are_not_implemented() {
    let app = spawn_app!();
    let alice = access_token!(app, "alice");
    let post = uuid::Uuid::new_v4();
    let comment = uuid::Uuid::new_v4();
    let base = format!("/blog/{post}/comments/{comment}");

    for uri in [
        format!("{base}/reply/"),
        format!("{base}/reply/{}/", uuid::Uuid::new_v4()),
        format!("{base}/like/"),
        format!("{base}/dislike/"),
        format!("{base}/report/"),
    ] {
        let (status, body) = send!(
            app,
            test::TestRequest::post()
                .uri(&uri)
                .insert_header(bearer(&alice))
        );
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body["message"], "Not implemented");
    }
}

#[actix_web::test]
async fn test_malformed_post_id_is_not_found() {
    let app = spawn_app!();
    let alice = access_token!(app, "alice");

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/blog/not-a-uuid/comments/")
            .insert_header(bearer(&alice))
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
}
