//! 生成クライアント Outbound ポート
//!
//! テンプレート層（codegen）はこの trait 経由でのみ LLM を呼ぶ。

use crate::llm::Completion;

/// 指示文 1 つに対して 1 回だけ生成を行うクライアント
///
/// 実装は `LlmDriver` やテスト用のスタブ。失敗は `Completion::Unavailable` で返し、panic も Err も出さない。
pub trait CompletionClient: Send + Sync {
    fn generate(&self, prompt: &str, max_tokens: u32, temperature: f64) -> Completion;
}
