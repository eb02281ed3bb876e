//! Integration tests for the assist client
//!
//! A one-shot HTTP stub on 127.0.0.1 stands in for the remote API; no test
//! touches the real network.

#![cfg(feature = "assist")]

use filewiki_core::assist::{
    AssistClient, AssistConfig, EMPTY_RESPONSE_MESSAGE, FAILURE_MESSAGE, NOT_CONFIGURED_MESSAGE,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Raw request as seen by the stub
struct CapturedRequest {
    head: String,
    body: String,
}

/// Serve exactly one request with the given status line and body.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let body_text = String::from_utf8_lossy(&buf[header_end..]).to_string();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(CapturedRequest { head, body: body_text });
    });

    (format!("http://{}", addr), rx)
}

fn configured(endpoint: &str) -> AssistClient {
    AssistClient::new(
        AssistConfig::default()
            .with_api_key("test-key")
            .with_endpoint(endpoint),
    )
}

#[tokio::test]
async fn test_disabled_client_returns_not_configured() {
    // The endpoint points nowhere; a disabled client must never dial it.
    let client = AssistClient::new(AssistConfig::default().with_endpoint("http://127.0.0.1:1"));
    assert!(!client.is_configured());

    for question in ["any question", "", "Что такое .vpk?"] {
        assert_eq!(client.ask(question, None).await, NOT_CONFIGURED_MESSAGE);
        assert_eq!(client.ask(question, Some("context")).await, NOT_CONFIGURED_MESSAGE);
    }
}

#[tokio::test]
async fn test_network_error_resolves_to_failure_message() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = configured(&format!("http://{}", addr));
    assert_eq!(client.ask("Что такое .exe?", None).await, FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_success_returns_model_text() {
    let (endpoint, captured) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"VPK - архив Valve."}]}}]}"#,
    )
    .await;

    let client = configured(&endpoint);
    let answer = client.ask("Что такое .vpk?", Some("Valve Pak")).await;
    assert_eq!(answer, "VPK - архив Valve.");

    let request = captured.await.unwrap();
    assert!(request
        .head
        .starts_with("POST /models/gemini-2.5-flash:generateContent "));
    assert!(request.head.to_lowercase().contains("x-goog-api-key: test-key"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Вопрос пользователя: Что такое .vpk?"));
    assert!(prompt.contains("Контекст (если есть): Valve Pak."));
}

#[tokio::test]
async fn test_empty_response_returns_fallback() {
    let (endpoint, _captured) = serve_once("200 OK", r#"{"candidates":[]}"#).await;
    let client = configured(&endpoint);
    assert_eq!(client.ask("q", None).await, EMPTY_RESPONSE_MESSAGE);
}

#[tokio::test]
async fn test_api_error_returns_failure_message() {
    let (endpoint, _captured) =
        serve_once("403 Forbidden", r#"{"error":{"message":"API key not valid"}}"#).await;
    let client = configured(&endpoint);
    assert_eq!(client.ask("q", None).await, FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_malformed_response_returns_failure_message() {
    let (endpoint, _captured) = serve_once("200 OK", "<html>not json</html>").await;
    let client = configured(&endpoint);
    assert_eq!(client.ask("q", None).await, FAILURE_MESSAGE);
}
