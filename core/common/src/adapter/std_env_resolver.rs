//! 標準環境変数解決実装（std::env を委譲）とテスト用の固定マップ実装

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok().filter(|s| !s.is_empty())
    }

    fn current_dir(&self) -> Result<PathBuf, Error> {
        env::current_dir().map_err(|e| Error::env(format!("Failed to get current directory: {}", e)))
    }
}

/// 固定のキー・値から引く EnvResolver（プロセス環境を汚さずにテストするため）
#[derive(Debug, Clone, Default)]
pub struct MapEnvResolver {
    vars: HashMap<String, String>,
    cwd: PathBuf,
}

impl MapEnvResolver {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            vars: HashMap::new(),
            cwd: cwd.into(),
        }
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvResolver for MapEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|s| !s.is_empty()).cloned()
    }

    fn current_dir(&self) -> Result<PathBuf, Error> {
        Ok(self.cwd.clone())
    }
}
