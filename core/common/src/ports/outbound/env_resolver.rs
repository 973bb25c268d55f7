//! 環境変数解決 Outbound ポート
//!
//! 設定の読み込みはこの trait 経由でのみ環境変数にアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の `MapEnvResolver` など。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を 1 つ読む。未設定または空文字列なら None
    fn var(&self, name: &str) -> Option<String>;

    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. CODEGEN_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/codegen（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/codegen
    fn resolve_home_dir(&self) -> Result<PathBuf, Error> {
        if let Some(home) = self.var("CODEGEN_HOME") {
            return Ok(PathBuf::from(home));
        }
        let config_base = self
            .var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| self.var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;
        Ok(config_base.join("codegen"))
    }

    /// 設定ファイル（config.json）のパス
    fn resolve_config_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("config.json"))
    }

    /// カレントディレクトリ（.env 探索・既定の保存先に使う）
    fn current_dir(&self) -> Result<PathBuf, Error>;
}
