//! End-to-end exchange cycle: Submit through the reducer, one real HTTP
//! round trip against a mock server, result folded back into the state.
//! This mirrors what the event loop's spawned task does, minus the terminal.

use std::sync::Arc;

use hrchat::api::{ChatBackend, HttpBackend, Sender};
use hrchat::core::action::{Action, Effect, FALLBACK_REPLY, update};
use hrchat::core::state::App;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_app(base_url: String) -> App {
    App::new(
        Arc::new(HttpBackend::new(base_url)),
        "alex@company.com".to_string(),
    )
}

/// Drives one full exchange the way the event loop does: reducer, then the
/// backend call the SpawnRequest effect asks for, then the result action.
async fn run_exchange(app: &mut App, text: &str) {
    let effect = update(app, Action::Submit(text.to_string()));
    let Effect::SpawnRequest(message) = effect else {
        return;
    };
    let action = match app.backend.clone().send(&message, &app.user_email).await {
        Ok(reply) => Action::ReplyReceived(reply),
        Err(e) => Action::RequestFailed(e.to_string()),
    };
    update(app, action);
}

#[tokio::test]
async fn test_successful_exchange_appends_user_then_bot() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "Hello!"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = test_app(mock_server.uri());
    run_exchange(&mut app, "hi").await;

    assert_eq!(app.conversation.len(), 2);
    assert_eq!(app.conversation.get(0).unwrap().sender, Sender::User);
    assert_eq!(app.conversation.get(0).unwrap().text, "hi");
    assert_eq!(app.conversation.get(1).unwrap().sender, Sender::Bot);
    assert_eq!(app.conversation.get(1).unwrap().text, "Hello!");
    assert!(!app.is_waiting);
}

#[tokio::test]
async fn test_failed_exchange_appends_fallback_and_recovers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let mut app = test_app(mock_server.uri());
    run_exchange(&mut app, "hi").await;

    assert_eq!(app.conversation.len(), 2);
    assert_eq!(app.conversation.get(1).unwrap().text, FALLBACK_REPLY);
    assert!(!app.is_waiting, "the waiting flag always clears");
}

#[tokio::test]
async fn test_consecutive_exchanges_alternate() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "reply"})),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut app = test_app(mock_server.uri());
    run_exchange(&mut app, "one").await;
    run_exchange(&mut app, "two").await;

    let senders: Vec<Sender> = app.conversation.iter().map(|m| m.sender).collect();
    assert_eq!(
        senders,
        vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]
    );
}

#[tokio::test]
async fn test_blank_submit_issues_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "reply"})),
        )
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut app = test_app(mock_server.uri());
    run_exchange(&mut app, "   ").await;

    assert!(app.conversation.is_empty());
    assert!(!app.is_waiting);
}
