use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": "a@b.com",
        "name": "Alice Example"
    })
}

fn credentials() -> SignInRequest {
    SignInRequest {
        email: "a@b.com".into(),
        password: "x".into(),
        callback_url: "/dashboard".into(),
    }
}

#[tokio::test]
async fn sign_in_returns_user_on_success() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/sign-in/email")
            .json_body(json!({
                "email": "a@b.com",
                "password": "x",
                "callbackURL": "/dashboard"
            }));
        then.status(200)
            .json_body(json!({ "user": user_json("1"), "token": "session-token" }));
    });

    let client = AuthClient::new_with_base_url(server.base_url());
    let data = client.sign_in_email(credentials()).await.unwrap();

    mock.assert();
    assert_eq!(data.user.unwrap().id, "1");
}

#[tokio::test]
async fn sign_in_success_may_omit_user() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/sign-in/email");
        then.status(200).json_body(json!({}));
    });

    let client = AuthClient::new_with_base_url(server.base_url());
    let data = client.sign_in_email(credentials()).await.unwrap();
    assert!(data.user.is_none());
}

#[tokio::test]
async fn sign_in_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/sign-in/email");
        then.status(401).json_body(json!({
            "message": "Invalid password",
            "code": "INVALID_EMAIL_OR_PASSWORD"
        }));
    });

    let client = AuthClient::new_with_base_url(server.base_url());
    let err = client.sign_in_email(credentials()).await.unwrap_err();
    assert_eq!(err.message.as_deref(), Some("Invalid password"));
}

#[tokio::test]
async fn sign_in_error_without_message_yields_bare_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/sign-in/email");
        then.status(500).body("upstream blew up");
    });

    let client = AuthClient::new_with_base_url(server.base_url());
    let err = client.sign_in_email(credentials()).await.unwrap_err();
    assert!(err.message.is_none());
}

#[tokio::test]
async fn sign_in_transport_fault_resolves_to_error() {
    // Nothing listens on this port; the call must still resolve to a value.
    let client = AuthClient::new_with_base_url("http://127.0.0.1:1");
    let err = client.sign_in_email(credentials()).await.unwrap_err();
    assert!(err.message.unwrap().starts_with("Request failed:"));
}

#[tokio::test]
async fn sign_up_returns_user_on_success() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/sign-up/email")
            .json_body(json!({
                "name": "Alice Example",
                "email": "a@b.com",
                "password": "x",
                "callbackURL": "/dashboard"
            }));
        then.status(200).json_body(json!({ "user": user_json("7") }));
    });

    let client = AuthClient::new_with_base_url(server.base_url());
    let data = client
        .sign_up_email(SignUpRequest {
            name: "Alice Example".into(),
            email: "a@b.com".into(),
            password: "x".into(),
            callback_url: "/dashboard".into(),
        })
        .await
        .unwrap();
    assert_eq!(data.user.unwrap().id, "7");
}
