//! API クライアントの結果型

use crate::error::Error;

/// 1 回の生成呼び出しの結果
///
/// 失敗は空文字列ではなく `Unavailable` として明示的に返す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// 最初の choice の本文
    Text(String),
    /// 通信・認証・応答形式のいずれかで失敗した
    Unavailable { reason: String },
}

impl Completion {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// 本文を返す（Unavailable なら None）
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Unavailable { .. } => None,
        }
    }

    /// Result に変換する。Unavailable は `Error::Unavailable` になる。
    pub fn into_result(self) -> Result<String, Error> {
        match self {
            Self::Text(t) => Ok(t),
            Self::Unavailable { reason } => Err(Error::unavailable(reason)),
        }
    }
}
