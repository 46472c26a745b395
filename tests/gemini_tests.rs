use release_weaver::{GeminiProvider, LLMProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[path = "test_utils.rs"]
mod test_utils;
use test_utils::unreachable_url;

const ENDPOINT: &str = "/v1beta/models/gemini-1.5-flash-latest:generateContent";

fn provider_for(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new("gk_test", "")
        .expect("provider should build")
        .with_base_url(&server.uri())
}

#[tokio::test]
async fn test_prompt_is_sole_content_and_first_part_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "gk_test"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "write the notes"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"parts": [{"text": "# Release 1.1"}, {"text": "ignored"}]}},
                {"content": {"parts": [{"text": "second candidate"}]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = provider_for(&server)
        .generate("write the notes")
        .await
        .expect("request should succeed");

    assert_eq!(text.as_deref(), Some("# Release 1.1"));
}

#[tokio::test]
async fn test_response_without_text_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let text = provider_for(&server)
        .generate("prompt")
        .await
        .expect("request should succeed");
    assert_eq!(text, None);
}

#[tokio::test]
async fn test_error_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .generate("prompt")
        .await
        .expect_err("400 should be an error");
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn test_custom_model_changes_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new("gk_test", "gemini-2.0-flash")
        .expect("provider should build")
        .with_base_url(&server.uri());
    assert_eq!(
        provider.generate("prompt").await.expect("request should succeed"),
        Some("ok".to_string())
    );
}

#[tokio::test]
async fn test_unreachable_service_is_an_error() {
    let uri = unreachable_url();

    let provider = GeminiProvider::new("gk_test", "")
        .expect("provider should build")
        .with_base_url(&uri);
    assert!(provider.generate("prompt").await.is_err());
}
