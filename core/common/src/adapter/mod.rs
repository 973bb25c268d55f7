//! アダプター（外界の I/O を trait で抽象化）
//!
//! ライブラリはこのモジュールの実装をポート経由でのみ使う。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod file_json_log;
#[cfg(test)]
pub mod memory_log;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stderr_log;

pub use file_json_log::{FanoutLog, FileJsonLog, NoopLog};
#[cfg(test)]
pub use memory_log::MemoryLog;
pub use std_env_resolver::{MapEnvResolver, StdEnvResolver};
pub use std_fs::StdFileSystem;
pub use stderr_log::StderrLog;
