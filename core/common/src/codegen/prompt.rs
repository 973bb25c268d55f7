//! タスク別の指示文

/// 説明文からコード生成を依頼する指示文
pub fn generate_prompt(description: &str, language: &str) -> String {
    format!(
        "Generate {language} code for the following task:\n\n{description}\n\n\
         Return only the raw code without explanations, markdown formatting, or triple backticks."
    )
}

/// 書きかけのコードの補完を依頼する指示文
pub fn complete_prompt(prefix: &str, language: &str) -> String {
    format!(
        "Complete the following {language} code:\n\n{prefix}\n\n\
         Return only the completed code without markdown formatting, triple backticks, or explanations."
    )
}

/// バグ修正を依頼する指示文
pub fn fix_prompt(code: &str, language: &str) -> String {
    format!(
        "Fix the bugs in the following {language} code:\n\n{code}\n\n\
         Return only the fixed code without markdown formatting, triple backticks, or explanations."
    )
}

/// ユニットテスト生成を依頼する指示文
pub fn test_prompt(function_code: &str, language: &str) -> String {
    format!(
        "Generate unit tests for the following {language} function:\n\n{function_code}\n\n\
         Return only the test code without markdown formatting, triple backticks, or explanations."
    )
}

/// 動作を保ったままの翻訳を依頼する指示文
pub fn translate_prompt(code: &str, source_language: &str, target_language: &str) -> String {
    format!(
        "Translate the following {source_language} code to {target_language}, \
         preserving exactly the same functionality and behavior:\n\n{code}\n\n\
         Return only the translated {target_language} code without markdown formatting, triple backticks, or explanations."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_prompt() {
        let p = generate_prompt("reverse a string", "go");
        assert!(p.starts_with("Generate go code for the following task:\n\nreverse a string\n\n"));
        assert!(p.contains("without explanations"));
        assert!(p.contains("triple backticks"));
    }

    #[test]
    fn test_task_prompts_embed_code_and_language() {
        let code = "def f(x):\n    return x +";
        for (p, verb) in [
            (complete_prompt(code, "python"), "Complete the following python code"),
            (fix_prompt(code, "python"), "Fix the bugs in the following python code"),
            (test_prompt(code, "python"), "Generate unit tests for the following python function"),
        ] {
            assert!(p.starts_with(verb), "{}", p);
            assert!(p.contains(code));
            assert!(p.ends_with("triple backticks, or explanations."));
        }
    }

    #[test]
    fn test_translate_prompt_contains_both_languages_and_code() {
        let langs = ["python", "javascript", "java", "cpp", "go", "Rust", "COBOL 85"];
        let code = "function add(a, b) {\n  return a + b;\n}";
        for src in langs {
            for dst in langs {
                if src == dst {
                    continue;
                }
                let p = translate_prompt(code, src, dst);
                assert!(p.contains(&format!("Translate the following {} code to {}", src, dst)));
                assert!(p.contains(code));
                assert!(p.contains(&format!("Return only the translated {} code", dst)));
            }
        }
    }

    #[test]
    fn test_language_passed_through_verbatim() {
        let p = generate_prompt("x", "Brainf*ck {dialect}");
        assert!(p.contains("Generate Brainf*ck {dialect} code"));
    }
}
