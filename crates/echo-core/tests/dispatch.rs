use std::time::Duration;

use echo_core::{
    Backend, ChatClient, ChatRequest, ChatWidget, DispatchError, Effect, MockBackend, Mode,
    PhrasingProfile, Selection, Sender, WidgetEvent,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(message: &str, mode: Mode) -> ChatRequest {
    ChatRequest {
        message: message.to_string(),
        tone: "Calm".to_string(),
        scenario: "general".to_string(),
        mode,
    }
}

#[tokio::test]
async fn test_posts_json_envelope_and_decodes_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "message": "Are we still on for lunch?",
            "tone": "Calm",
            "scenario": "general",
            "mode": "chat",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "Yes, see you at noon.",
            "options": ["Yep!", "See you then."],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri());
    let response = client
        .send(&request("Are we still on for lunch?", Mode::Chat))
        .await
        .unwrap();

    assert_eq!(response.reply, "Yes, see you at noon.");
    assert_eq!(response.options, Some(json!(["Yep!", "See you then."])));
}

#[tokio::test]
async fn test_non_success_status_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Gemini HTTP 429: quota"))
        .mount(&server)
        .await;

    let err = ChatClient::new(&server.uri())
        .send(&request("hi", Mode::RewriteShorter))
        .await
        .unwrap_err();

    match err {
        DispatchError::Server { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Gemini HTTP 429: quota");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"reply": "too late"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = ChatClient::new(&server.uri()).with_timeout(Duration::from_millis(200));
    let err = client.send(&request("hi", Mode::Chat)).await.unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(err.user_message(), "Request timed out. Please try again.");
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = ChatClient::new(&server.uri())
        .send(&request("hi", Mode::Chat))
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // Nothing listens on port 1 on a normal test host
    let uri = "http://127.0.0.1:1";

    let err = ChatClient::new(uri)
        .send(&request("hi", Mode::Chat))
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Transport(_)));
}

#[tokio::test]
async fn test_ping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    assert!(ChatClient::new(&server.uri()).ping().await.unwrap());
}

#[tokio::test]
async fn test_widget_round_trip_through_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "Thanks, I'll take a look tonight.",
            "options": ["Will do!", "On it.", "Thanks!", "Extra"],
        })))
        .mount(&server)
        .await;

    let backend = Backend::Http(ChatClient::new(&server.uri()));
    let mut widget = ChatWidget::new(Selection::default(), PhrasingProfile::Standard);
    widget.draft_mut().set_text("Can you review my PR?");

    let Some(Effect::Dispatch(req)) = widget.update(WidgetEvent::Send) else {
        panic!("send should dispatch");
    };
    assert!(!widget.draft().is_enabled());

    let result = backend.send(&req).await;
    widget.update(WidgetEvent::Completed { mode: req.mode, result });

    let entries: Vec<_> = widget
        .transcript()
        .entries()
        .map(|e| (e.sender, e.text.clone()))
        .collect();
    assert_eq!(
        entries,
        vec![
            (Sender::User, "Can you review my PR?".to_string()),
            (Sender::Bot, "Thanks, I'll take a look tonight.".to_string()),
        ]
    );
    assert_eq!(widget.transcript().latest_options().unwrap().options.len(), 3);
    assert!(widget.draft().is_enabled());
}

#[tokio::test]
async fn test_mock_backend_needs_no_server() {
    let backend = Backend::Mock(MockBackend::new());
    let response = backend.send(&request("hi", Mode::RewriteConfident)).await.unwrap();
    assert!(!response.reply.is_empty());
    assert_eq!(backend.display_name(), "mock");
}
