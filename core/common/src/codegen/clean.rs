//! 応答の後処理（コードフェンス除去 + 前後空白の除去）

use regex::Regex;
use std::sync::OnceLock;

/// 開きフェンス: ``` + 任意の言語タグ（c++ / c# / objective-c 等も含む）+ 改行
fn opening_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"```[\w+#.\-]*[ \t]*\r?\n").unwrap_or_else(|e| panic!("Invalid regex: {}", e))
    })
}

/// LLM 応答からマークダウンのコードフェンスを取り除き、前後の空白を削る
///
/// 開きフェンスを先に除去し、残った ``` をすべて除去してから trim する。
/// 除去後に ``` は残らないため、2 回適用しても結果は変わらない。
pub fn clean_code(text: &str) -> String {
    let without_open = opening_fence().replace_all(text, "");
    let without_fences = without_open.replace("```", "");
    without_fences.trim().to_string()
}
