//! タスク種別と 1 回分の生成リクエスト

use crate::domain::Language;
use crate::llm::provider::{GenerationParams, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// translate の既定最大トークン数（他タスクより長い出力を見込む）
pub const TRANSLATE_MAX_TOKENS: u32 = 1500;

/// 開発者の意図（5 種類）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// 自然言語の説明からコードを生成
    Generate,
    /// 書きかけのコードを補完
    Complete,
    /// バグ修正
    Fix,
    /// ユニットテスト生成
    Test,
    /// 別言語への翻訳
    Translate,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Generate,
        TaskKind::Complete,
        TaskKind::Fix,
        TaskKind::Test,
        TaskKind::Translate,
    ];

    /// 文字列からタスク種別を解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "generate" | "gen" => Some(Self::Generate),
            "complete" => Some(Self::Complete),
            "fix" | "fix-bugs" => Some(Self::Fix),
            "test" | "tests" => Some(Self::Test),
            "translate" => Some(Self::Translate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Complete => "complete",
            Self::Fix => "fix",
            Self::Test => "test",
            Self::Translate => "translate",
        }
    }

    pub fn default_max_tokens(&self) -> u32 {
        match self {
            Self::Translate => TRANSLATE_MAX_TOKENS,
            _ => DEFAULT_MAX_TOKENS,
        }
    }

    pub fn default_params(&self) -> GenerationParams {
        GenerationParams::new(self.default_max_tokens(), DEFAULT_TEMPERATURE)
    }

    /// 保存時のファイル名（拡張子なし）
    pub fn output_stem(&self) -> &'static str {
        match self {
            Self::Generate => "generated_code",
            Self::Complete => "completed_code",
            Self::Fix => "fixed_code",
            Self::Test => "test_code",
            Self::Translate => "translated_code",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1 回のユーザー操作に対応するリクエスト（使い捨て）
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub task: TaskKind,
    /// 説明文（generate）またはソースコード（それ以外）
    pub source: String,
    /// ソースの言語（generate / complete / fix / test では出力言語も兼ねる）
    pub language: Language,
    /// translate の出力言語
    pub target_language: Option<Language>,
    pub params: GenerationParams,
}

impl Request {
    /// タスク既定の max_tokens / temperature でリクエストを作る
    pub fn new(task: TaskKind, source: impl Into<String>, language: impl Into<Language>) -> Self {
        Self {
            task,
            source: source.into(),
            language: language.into(),
            target_language: None,
            params: task.default_params(),
        }
    }

    pub fn with_target(mut self, target: impl Into<Language>) -> Self {
        self.target_language = Some(target.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.params.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.params.temperature = temperature;
        self
    }

    /// 結果のコードが書かれる言語（translate なら出力言語）
    pub fn output_language(&self) -> &Language {
        match (&self.task, &self.target_language) {
            (TaskKind::Translate, Some(target)) => target,
            _ => &self.language,
        }
    }
}
