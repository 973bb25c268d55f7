//! Outbound ポート: ライブラリが外界（LLM・FS・環境変数・ログ）を使うための trait

pub mod completion_client;
pub mod env_resolver;
pub mod fs;
pub mod log;

pub use completion_client::CompletionClient;
pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
