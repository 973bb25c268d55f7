//! 5 つのタスク操作（指示文の組み立て → 生成 → フェンス除去）

use crate::codegen::clean::clean_code;
use crate::codegen::prompt;
use crate::codegen::task::{Request, TaskKind};
use crate::error::Error;
use crate::llm::provider::GenerationParams;
use crate::ports::outbound::CompletionClient;
use std::sync::Arc;

/// リクエストから指示文を組み立てる
///
/// translate で出力言語が無い場合だけ Err（言語の同一性は呼び出し側で検証する）。
pub fn build_prompt(req: &Request) -> Result<String, Error> {
    let lang = req.language.as_str();
    let text = match req.task {
        TaskKind::Generate => prompt::generate_prompt(&req.source, lang),
        TaskKind::Complete => prompt::complete_prompt(&req.source, lang),
        TaskKind::Fix => prompt::fix_prompt(&req.source, lang),
        TaskKind::Test => prompt::test_prompt(&req.source, lang),
        TaskKind::Translate => {
            let target = req
                .target_language
                .as_ref()
                .ok_or_else(|| Error::invalid_argument("translate requires a target language"))?;
            prompt::translate_prompt(&req.source, lang, target.as_str())
        }
    };
    Ok(text)
}

/// complete の結果に元の prefix を付けるか決める
///
/// 整形済み応答が prefix（前後空白を除いたもの）を含んでいればモデルが prefix ごと返したとみなし、そのまま返す。
/// 含まなければ `prefix + "\n" + 応答`。
/// 部分一致による判定なので、prefix と同じ文字列が偶然現れると付け忘れ、
/// モデルが prefix の空白や改行を組み替えると二重に付く。
pub fn merge_completion(prefix: &str, cleaned: String) -> String {
    if cleaned.contains(prefix.trim()) {
        return cleaned;
    }
    format!("{}\n{}", prefix, cleaned)
}

/// コード生成器
pub struct CodeGenerator {
    client: Arc<dyn CompletionClient>,
}

impl CodeGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// 説明文から `language` のコードを生成
    pub fn generate_from_prompt(
        &self,
        description: &str,
        language: &str,
        params: GenerationParams,
    ) -> Result<String, Error> {
        self.generate_clean(&prompt::generate_prompt(description, language), params)
    }

    /// 書きかけのコードを補完（prefix の扱いは `merge_completion` を参照）
    pub fn complete_code(
        &self,
        prefix: &str,
        language: &str,
        params: GenerationParams,
    ) -> Result<String, Error> {
        let cleaned = self.generate_clean(&prompt::complete_prompt(prefix, language), params)?;
        Ok(merge_completion(prefix, cleaned))
    }

    pub fn fix_bugs(
        &self,
        code: &str,
        language: &str,
        params: GenerationParams,
    ) -> Result<String, Error> {
        self.generate_clean(&prompt::fix_prompt(code, language), params)
    }

    pub fn generate_tests(
        &self,
        function_code: &str,
        language: &str,
        params: GenerationParams,
    ) -> Result<String, Error> {
        self.generate_clean(&prompt::test_prompt(function_code, language), params)
    }

    /// 動作を保ったまま別言語へ翻訳（source_language != target_language は呼び出し側の責務）
    pub fn translate_code(
        &self,
        code: &str,
        source_language: &str,
        target_language: &str,
        params: GenerationParams,
    ) -> Result<String, Error> {
        self.generate_clean(
            &prompt::translate_prompt(code, source_language, target_language),
            params,
        )
    }

    /// Request の task に応じて操作を振り分ける
    pub fn run(&self, req: &Request) -> Result<String, Error> {
        let lang = req.language.as_str();
        match req.task {
            TaskKind::Generate => self.generate_from_prompt(&req.source, lang, req.params),
            TaskKind::Complete => self.complete_code(&req.source, lang, req.params),
            TaskKind::Fix => self.fix_bugs(&req.source, lang, req.params),
            TaskKind::Test => self.generate_tests(&req.source, lang, req.params),
            TaskKind::Translate => {
                let target = req.target_language.as_ref().ok_or_else(|| {
                    Error::invalid_argument("translate requires a target language")
                })?;
                self.translate_code(&req.source, lang, target.as_str(), req.params)
            }
        }
    }

    /// 生成を 1 回行い整形する。Unavailable は整形せず `Error::Unavailable` で返す。
    fn generate_clean(&self, prompt: &str, params: GenerationParams) -> Result<String, Error> {
        let text = self
            .client
            .generate(prompt, params.max_tokens, params.temperature)
            .into_result()?;
        Ok(clean_code(&text))
    }
}
