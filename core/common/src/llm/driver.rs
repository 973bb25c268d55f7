//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。
//! 固定の system 指示を前置して 1 回だけ呼び出し、失敗はすべてここで吸収して
//! `Completion::Unavailable` に変換する（リトライ・バックオフはしない）。

use crate::error::Error;
use crate::llm::completion::Completion;
use crate::llm::provider::{GenerationParams, LlmProvider, Message};
use crate::ports::outbound::{CompletionClient, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// 全リクエスト共通の system 指示
pub const SYSTEM_INSTRUCTION: &str = "You are an expert programmer. Generate only code without explanations unless specifically asked for them.";

/// LLMドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
    log: Arc<dyn Log>,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P, log: Arc<dyn Log>) -> Self {
        Self { provider, log }
    }

    /// system 指示 + prompt の 2 メッセージを送信して応答テキストを取得
    ///
    /// # Returns
    /// * `Ok(String)` - 最初の choice の本文
    /// * `Err(Error)` - 通信・認証・応答形式の失敗（本文が無い場合も含む）
    pub fn query(&self, prompt: &str, params: &GenerationParams) -> Result<String, Error> {
        let messages = [Message::system(SYSTEM_INSTRUCTION), Message::user(prompt)];
        let payload = self.provider.make_request_payload(&messages, params)?;

        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        self.debug(
            LogRecord::new(LogLevel::Debug, "sending chat completion request")
                .field("prompt_chars", prompt.chars().count())
                .field("max_tokens", params.max_tokens)
                .field("temperature", params.temperature),
        );

        let response_json = self.provider.make_http_request(&request_json)?;

        let text = self
            .provider
            .parse_response_text(&response_json)?
            .ok_or_else(|| Error::json("No text in response"))?;

        self.debug(
            LogRecord::new(LogLevel::Debug, "received chat completion")
                .field("response_chars", text.chars().count()),
        );
        Ok(text)
    }

    /// 生成を 1 回行い、失敗をオペレータ向けログに残して `Completion::Unavailable` を返す
    pub fn generate(&self, prompt: &str, max_tokens: u32, temperature: f64) -> Completion {
        match self.query(prompt, &GenerationParams::new(max_tokens, temperature)) {
            Ok(text) => Completion::Text(text),
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Error, format!("Error generating code: {}", e))
                        .layer("adapter")
                        .kind("llm")
                        .field("provider", self.provider.name())
                        .field("model", self.provider.model()),
                );
                Completion::unavailable(e.to_string())
            }
        }
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn debug(&self, record: LogRecord) {
        let _ = self.log.log(
            &record
                .layer("adapter")
                .kind("llm")
                .field("provider", self.provider.name())
                .field("model", self.provider.model()),
        );
    }
}

impl<P: LlmProvider> CompletionClient for LlmDriver<P> {
    fn generate(&self, prompt: &str, max_tokens: u32, temperature: f64) -> Completion {
        LlmDriver::generate(self, prompt, max_tokens, temperature)
    }
}
