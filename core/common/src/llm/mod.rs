//! LLMドライバーとプロバイダの実装
//!
//! チャット補完 API への 1 往復を担う。プロバイダごとの差分（ペイロード形式・HTTP・応答解析）は
//! `LlmProvider` に閉じ込め、失敗の吸収とログは `LlmDriver` が共通で行う。

pub mod completion;
pub mod driver;
pub mod echo;
pub mod factory;
pub mod openai_compat;
pub mod provider;

pub use completion::Completion;
pub use driver::{LlmDriver, SYSTEM_INSTRUCTION};
pub use factory::{create_provider, AnyProvider, ProviderType};
pub use provider::{GenerationParams, LlmProvider, Message};
