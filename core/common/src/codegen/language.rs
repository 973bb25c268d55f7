//! 既知言語の表（拡張子・保存ファイル名）
//!
//! 言語タグ自体は開いたまま扱い、この表は拡張子と例の引き当てにだけ使う。

use crate::codegen::task::TaskKind;
use crate::domain::Language;

/// 既定で提示する言語
pub const KNOWN_LANGUAGES: [&str; 5] = ["python", "javascript", "java", "cpp", "go"];

/// 言語に対応するファイル拡張子（未知の言語は .txt）
pub fn file_extension(language: &Language) -> &'static str {
    match language.normalized().as_str() {
        "python" => ".py",
        "javascript" => ".js",
        "java" => ".java",
        "cpp" => ".cpp",
        "go" => ".go",
        _ => ".txt",
    }
}

/// 結果を保存するときの既定ファイル名（例: generated_code.py）
pub fn output_file_name(task: TaskKind, language: &Language) -> String {
    format!("{}{}", task.output_stem(), file_extension(language))
}

/// 既知言語か（大文字小文字と前後空白は無視）
pub fn is_known(language: &Language) -> bool {
    let n = language.normalized();
    KNOWN_LANGUAGES.iter().any(|k| *k == n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(&"python".into()), ".py");
        assert_eq!(file_extension(&"JavaScript".into()), ".js");
        assert_eq!(file_extension(&"java".into()), ".java");
        assert_eq!(file_extension(&"cpp".into()), ".cpp");
        assert_eq!(file_extension(&" go ".into()), ".go");
        assert_eq!(file_extension(&"rust".into()), ".txt");
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(TaskKind::Generate, &"python".into()),
            "generated_code.py"
        );
        assert_eq!(
            output_file_name(TaskKind::Translate, &"javascript".into()),
            "translated_code.js"
        );
        assert_eq!(output_file_name(TaskKind::Fix, &"haskell".into()), "fixed_code.txt");
    }

    #[test]
    fn test_is_known() {
        assert!(is_known(&"Python".into()));
        assert!(!is_known(&"rust".into()));
    }
}
