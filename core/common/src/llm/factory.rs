//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::echo::EchoProvider;
use crate::llm::openai_compat::OpenAiCompatProvider;
use crate::llm::provider::{GenerationParams, LlmProvider, Message};
use serde_json::Value;
use std::time::Duration;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// OpenAI Chat Completions 互換 (/chat/completions)。Groq もこれで扱う
    OpenAiCompat,
    /// Echo（通信せず指示文を返すだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai_compat" | "groq" | "openai" => Some(Self::OpenAiCompat),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }

    /// 利用可能なプロバイダ名（エラー表示用）
    pub fn names() -> &'static [&'static str] {
        &["echo", "groq", "openai", "openai_compat"]
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    OpenAiCompat(OpenAiCompatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAiCompat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::OpenAiCompat(p) => p.model(),
            Self::Echo(p) => p.model(),
        }
    }

    fn make_request_payload(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<Value, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_request_payload(messages, params),
            Self::Echo(p) => p.make_request_payload(messages, params),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::OpenAiCompat(p) => p.parse_response_text(response_json),
            Self::Echo(p) => p.parse_response_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（None のとき各プロバイダのデフォルト）
/// * `base_url` - ベース URL（OpenAiCompat 用）
/// * `api_key` - 解決済み API キー（OpenAiCompat 用）
/// * `timeout` - HTTP タイムアウト（OpenAiCompat 用）
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::OpenAiCompat => {
            let provider = OpenAiCompatProvider::new(model, base_url, api_key, timeout)?;
            Ok(AnyProvider::OpenAiCompat(provider))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}
