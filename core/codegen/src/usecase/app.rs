//! codegen のユースケース
//!
//! 入力の取得と検証、Request の組み立て、生成結果の出力と保存を行う。
//! 生成そのものは `common::codegen::CodeGenerator` に委ねる。

use crate::domain::{InputSource, RunSpec};
use crate::ports::outbound::Console;
use common::codegen::{
    build_prompt, example_input, file_extension, is_known, output_file_name, CodeGenerator,
    Request, TaskKind, KNOWN_LANGUAGES,
};
use common::config::AppConfig;
use common::domain::Language;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, Log, LogLevel, LogRecord};
use std::path::Path;
use std::sync::Arc;

pub struct CodegenUseCase {
    config: AppConfig,
    generator: CodeGenerator,
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
    console: Arc<dyn Console>,
    log: Arc<dyn Log>,
}

impl CodegenUseCase {
    pub fn new(
        config: AppConfig,
        generator: CodeGenerator,
        fs: Arc<dyn FileSystem>,
        env: Arc<dyn EnvResolver>,
        console: Arc<dyn Console>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            config,
            generator,
            fs,
            env,
            console,
            log,
        }
    }

    /// -l 未指定時の言語（設定の先頭）
    fn default_language(&self) -> Language {
        self.config
            .languages
            .first()
            .cloned()
            .unwrap_or_else(|| Language::new("python"))
    }

    pub fn list_languages(&self) -> Result<i32, Error> {
        let default = self.default_language();
        for lang in &self.config.languages {
            let mark = if *lang == default { " (default)" } else { "" };
            self.console
                .out(&format!("{}\t{}{}", lang, file_extension(lang), mark))?;
        }
        Ok(0)
    }

    pub fn init(&self) -> Result<i32, Error> {
        self.config.init_dirs(self.fs.as_ref())?;
        self.console
            .err(&format!("Initialized {}", self.config.data_dir.display()))?;
        self.console
            .err(&format!("Initialized {}", self.config.models_dir.display()))?;
        Ok(0)
    }

    pub fn example(&self, task: TaskKind, language: Option<Language>) -> Result<i32, Error> {
        let language = language.unwrap_or_else(|| self.default_language());
        if !is_known(&language) {
            return Err(Error::invalid_argument(format!(
                "No examples for '{}'. Examples exist for: {}",
                language,
                KNOWN_LANGUAGES.join(", ")
            )));
        }
        let text = example_input(task, &language).ok_or_else(|| {
            Error::invalid_argument(format!("No example for {} in {}", task, language))
        })?;
        self.console.out(text)?;
        Ok(0)
    }

    /// 1 回の生成を行う
    ///
    /// 生成に失敗した場合は `Error::Unavailable`（終了コード 69）で返り、何も書き出さない。
    pub fn run(&self, spec: RunSpec) -> Result<i32, Error> {
        let source = self.read_input(&spec.input)?;
        if source.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "No input provided for {}. Pass text as arguments, -f <file>, or pipe it on stdin.",
                spec.task
            )));
        }

        let req = self.build_request(&spec, source)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "generation requested")
                .layer("usecase")
                .kind("codegen")
                .field("task", spec.task.as_str())
                .field("language", req.language.as_str())
                .field(
                    "target_language",
                    req.target_language.as_ref().map(|l| l.to_string()),
                )
                .field("max_tokens", req.params.max_tokens)
                .field("temperature", req.params.temperature),
        );

        if spec.dry_run {
            self.console.out(&build_prompt(&req)?)?;
            return Ok(0);
        }

        let code = self.generator.run(&req)?;
        self.console.out(&code)?;

        if let Some(path) = &spec.output {
            self.save(path, &code)?;
        }
        if spec.save {
            let path = self
                .env
                .current_dir()?
                .join(output_file_name(spec.task, req.output_language()));
            self.save(&path, &code)?;
        }
        Ok(0)
    }

    fn read_input(&self, input: &InputSource) -> Result<String, Error> {
        match input {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => self.fs.read_to_string(path),
            InputSource::Stdin => self.console.read_stdin(),
        }
    }

    fn build_request(&self, spec: &RunSpec, source: String) -> Result<Request, Error> {
        let language = spec
            .language
            .clone()
            .unwrap_or_else(|| self.default_language());
        let params = self
            .config
            .params_for(spec.task, spec.max_tokens, spec.temperature);

        let mut req = Request::new(spec.task, source, language)
            .with_max_tokens(params.max_tokens)
            .with_temperature(params.temperature);

        if spec.task == TaskKind::Translate {
            let target = spec.target.clone().ok_or_else(|| {
                Error::invalid_argument("translate requires a target language (--to <lang>)")
            })?;
            if target.normalized() == req.language.normalized() {
                return Err(Error::invalid_argument(format!(
                    "Source and target languages must differ (both are {})",
                    target
                )));
            }
            req = req.with_target(target);
        }
        Ok(req)
    }

    fn save(&self, path: &Path, code: &str) -> Result<(), Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent)?;
        }
        let mut contents = code.to_string();
        contents.push('\n');
        self.fs.write(path, &contents)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "result saved")
                .layer("usecase")
                .kind("codegen")
                .field("path", path.display().to_string()),
        );
        self.console.err(&format!("Saved to {}", path.display()))?;
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

