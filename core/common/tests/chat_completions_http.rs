//! OpenAI 互換エンドポイントとの往復（wiremock のローカルサーバ相手）
//!
//! reqwest::blocking は async コンテキストで生成・破棄できないため、
//! クライアント側は spawn_blocking の中で組み立てる。

use common::adapter::NoopLog;
use common::codegen::{CodeGenerator, Request, TaskKind};
use common::error::Error;
use common::llm::{create_provider, Completion, LlmDriver, ProviderType, SYSTEM_INSTRUCTION};
use common::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// error レベルのメッセージだけを溜める Log
#[derive(Default)]
struct ErrorMessages(Mutex<Vec<String>>);

impl Log for ErrorMessages {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level == LogLevel::Error {
            self.0.lock().unwrap().push(record.message.clone());
        }
        Ok(())
    }
}

fn driver(base_url: String, api_key: Option<&str>) -> LlmDriver<common::llm::AnyProvider> {
    let provider = create_provider(
        ProviderType::OpenAiCompat,
        Some("llama3-70b-8192".to_string()),
        Some(base_url),
        api_key.map(str::to_string),
        Some(Duration::from_secs(5)),
    )
    .unwrap();
    LlmDriver::new(provider, Arc::new(NoopLog))
}

fn chat_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
}

#[tokio::test]
async fn test_generate_sends_bearer_and_two_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("print('hi')")))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let completion = tokio::task::spawn_blocking(move || {
        driver(uri, Some("test-key")).generate("say hi", 1024, 0.2)
    })
    .await
    .unwrap();
    assert_eq!(completion, Completion::Text("print('hi')".to_string()));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body["model"], "llama3-70b-8192");
    assert_eq!(body["max_tokens"], 1024);
    assert_eq!(body["temperature"], 0.2);
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], json!({"role": "system", "content": SYSTEM_INSTRUCTION}));
    assert_eq!(messages[1], json!({"role": "user", "content": "say hi"}));
}

#[tokio::test]
async fn test_non_success_status_is_unavailable_and_logged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": {"message": "Invalid API Key"}})),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let (completion, errors) = tokio::task::spawn_blocking(move || {
        let log = Arc::new(ErrorMessages::default());
        let provider = create_provider(
            ProviderType::OpenAiCompat,
            None,
            Some(uri),
            Some("bad".to_string()),
            None,
        )
        .unwrap();
        let completion = LlmDriver::new(provider, log.clone()).generate("x", 1024, 0.2);
        let messages = log.0.lock().unwrap().clone();
        (completion, messages)
    })
    .await
    .unwrap();

    match completion {
        Completion::Unavailable { reason } => assert!(reason.contains("Invalid API Key"), "{}", reason),
        other => panic!("expected Unavailable, got {:?}", other),
    }
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Error generating code"));
}

#[tokio::test]
async fn test_missing_choices_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let completion = tokio::task::spawn_blocking(move || driver(uri, Some("k")).generate("x", 1024, 0.2))
        .await
        .unwrap();
    assert!(completion.is_unavailable());
}

#[tokio::test]
async fn test_transport_failure_is_unavailable() {
    let completion = tokio::task::spawn_blocking(|| {
        driver("http://127.0.0.1:1".to_string(), Some("k")).generate("x", 1024, 0.2)
    })
    .await
    .unwrap();
    match completion {
        Completion::Unavailable { reason } => assert!(reason.contains("HTTP request failed"), "{}", reason),
        other => panic!("expected Unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_translate_end_to_end_strips_fences() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(
            "```javascript\nfunction add(a, b) {\n  return a + b;\n}\n```",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let generator = CodeGenerator::new(Arc::new(driver(uri, Some("k"))));
        let req = Request::new(TaskKind::Translate, "def add(a, b):\n    return a + b", "python")
            .with_target("javascript");
        generator.run(&req)
    })
    .await
    .unwrap();
    assert_eq!(result.unwrap(), "function add(a, b) {\n  return a + b;\n}");

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body["max_tokens"], 1500);
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("Translate the following python code to javascript"));
}

#[tokio::test]
async fn test_templater_surfaces_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || {
        CodeGenerator::new(Arc::new(driver(uri, Some("k"))))
            .fix_bugs("x = ", "python", Default::default())
    })
    .await
    .unwrap()
    .unwrap_err();
    assert!(matches!(err, Error::Unavailable(_)));
    assert_eq!(err.exit_code(), 69);
}
