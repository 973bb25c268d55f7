//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// 既定の最大出力トークン数
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
/// 既定の温度
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// 1 回の呼び出しに渡すサンプリング設定
///
/// temperature の範囲（0〜1）は API 側の契約であり、ここでは検証しない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl GenerationParams {
    pub fn new(max_tokens: u32, temperature: f64) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE)
    }
}

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（OpenAI 互換、Echo）はこのトレイトを実装する必要があります。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// 使用するモデル名を返す
    fn model(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `messages` - 送信するチャット履歴（system → user の順）
    /// * `params` - max_tokens / temperature
    fn make_request_payload(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 通信失敗・非 2xx 応答
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - JSON 不正・API エラー応答
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}

/// チャットメッセージ（system / user / assistant）
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}
