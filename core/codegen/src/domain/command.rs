//! codegen コマンドの enum（Command Pattern）
//!
//! 一覧表示・初期化・例の表示と、実際の生成（Run）の分岐を enum で明示する。

use common::codegen::TaskKind;
use common::domain::Language;
use std::path::PathBuf;

/// 元コード（または説明文）の取得元
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// 位置引数を空白で連結したもの
    Inline(String),
    /// -f / --file
    File(PathBuf),
    /// どちらも無いとき
    Stdin,
}

/// 1 回の生成の指定
#[derive(Debug, Clone, PartialEq)]
pub struct RunSpec {
    pub task: TaskKind,
    pub input: InputSource,
    /// 未指定なら設定の先頭言語
    pub language: Option<Language>,
    /// translate の出力言語
    pub target: Option<Language>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub output: Option<PathBuf>,
    /// 既定ファイル名でカレントディレクトリに保存
    pub save: bool,
    /// 指示文を表示するだけで API を呼ばない
    pub dry_run: bool,
}

impl RunSpec {
    pub fn new(task: TaskKind, input: InputSource) -> Self {
        Self {
            task,
            input,
            language: None,
            target: None,
            max_tokens: None,
            temperature: None,
            output: None,
            save: false,
            dry_run: false,
        }
    }
}

/// codegen の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum CodegenCommand {
    Help,
    /// 設定された言語の一覧
    ListLanguages,
    /// data / models ディレクトリを作成
    Init,
    /// タスク・言語の入力例を表示
    Example {
        task: TaskKind,
        language: Option<Language>,
    },
    Run(RunSpec),
}

impl CodegenCommand {
    /// ログ用の名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ListLanguages => "list-languages",
            Self::Init => "init",
            Self::Example { .. } => "example",
            Self::Run(spec) => spec.task.as_str(),
        }
    }
}
