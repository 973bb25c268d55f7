//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。CLI はこの型から終了コードと usage 表示の要否を決める。

use thiserror::Error as ThisError;

/// 終了コード（sysexits.h 準拠）
pub mod exit_code {
    pub const USAGE: i32 = 64;
    pub const UNAVAILABLE: i32 = 69;
    pub const SOFTWARE: i32 = 70;
    pub const IO: i32 = 74;
    pub const CONFIG: i32 = 78;
}

/// エラー型
#[derive(Debug, ThisError)]
pub enum Error {
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 生成結果が得られなかった（API 失敗を吸収した結果）
    #[error("generation unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    System(String),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Http(String),
    #[error("{0}")]
    Json(String),
    /// 環境変数まわり（HOME 未設定など）
    #[error("{0}")]
    Env(String),
    /// 設定ファイルの内容が不正
    #[error("{0}")]
    Config(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// usage を併せて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => exit_code::USAGE,
            Self::Unavailable(_) => exit_code::UNAVAILABLE,
            Self::System(_) => exit_code::SOFTWARE,
            Self::Io(_) | Self::Http(_) | Self::Json(_) => exit_code::IO,
            Self::Config(_) => exit_code::CONFIG,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
