//! Echoプロバイダの実装
//!
//! 実際にLLM APIを呼び出さず、最後の user メッセージをコードフェンスで包んで返すだけです。
//! API キーなしでの動作確認やテスト用に使用します。

use crate::error::Error;
use crate::llm::provider::{GenerationParams, LlmProvider, Message};
use serde_json::{json, Value};

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn model(&self) -> &str {
        "echo"
    }

    fn make_request_payload(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<Value, Error> {
        let query = messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
            .unwrap_or("");
        let system = messages
            .iter()
            .find(|m| m.role == "system")
            .map(|m| m.content.as_str());

        let mut payload = json!({
            "query": query,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        });
        if let Some(system) = system {
            payload["system_instruction"] = json!(system);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 通信はせず、リクエストの query を chat completions 形式の応答に包んで返す
        let v: Value = serde_json::from_str(request_json)
            .map_err(|e| Error::json(format!("Failed to parse request JSON: {}", e)))?;
        let query = v["query"].as_str().unwrap_or("");
        let response = json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": format!("```\n{}\n```", query.trim())
                }
            }]
        });
        Ok(response.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        Ok(v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string()))
    }
}
