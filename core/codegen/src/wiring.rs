//! 配線: 設定を解決し、標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FanoutLog, FileJsonLog, StdEnvResolver, StdFileSystem, StderrLog};
use common::codegen::CodeGenerator;
use common::config::AppConfig;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::llm::{create_provider, LlmDriver, ProviderType};
use common::ports::outbound::{EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use crate::adapter::StdConsole;
use crate::cli::Config;
use crate::ports::outbound::Console;
use crate::usecase::CodegenUseCase;

/// CLI フラグによる設定の上書き
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub provider: Option<ProviderName>,
    pub model: Option<ModelName>,
    pub verbose: bool,
}

impl From<&Config> for Overrides {
    fn from(config: &Config) -> Self {
        Self {
            provider: config.provider.clone(),
            model: config.model.clone(),
            verbose: config.verbose,
        }
    }
}

/// main が使う組み立て済みの依存
pub struct App {
    pub log: Arc<dyn Log>,
    pub usecase: CodegenUseCase,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_codegen(overrides: &Overrides) -> Result<App, Error> {
    wire_with(
        Arc::new(StdFileSystem),
        Arc::new(StdEnvResolver),
        Arc::new(StdConsole),
        overrides,
    )
}

/// 任意のアダプタで App を組み立てる（テストから環境を差し替えるため）
pub fn wire_with(
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
    console: Arc<dyn Console>,
    overrides: &Overrides,
) -> Result<App, Error> {
    let mut config = AppConfig::load(env.as_ref(), fs.as_ref())?;
    if let Some(name) = &overrides.provider {
        config.provider = ProviderType::from_str(name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown provider: '{}'. Available: {}",
                name,
                ProviderType::names().join(", ")
            ))
        })?;
    }
    if let Some(model) = &overrides.model {
        config.model = model.clone();
    }

    let stderr_level = if overrides.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let logs: Vec<Arc<dyn Log>> = vec![
        Arc::new(FileJsonLog::new(Arc::clone(&fs), &config.log_file)),
        Arc::new(StderrLog::new(stderr_level)),
    ];
    let log: Arc<dyn Log> = Arc::new(FanoutLog::new(logs));

    if config.provider == ProviderType::OpenAiCompat && config.api_key.is_none() {
        let _ = log.log(
            &LogRecord::new(
                LogLevel::Warn,
                format!(
                    "{} is not set; requests will be sent without credentials",
                    config.api_key_env
                ),
            )
            .layer("wiring")
            .kind("config"),
        );
    }

    let provider = create_provider(
        config.provider,
        Some(config.model.to_string()),
        Some(config.base_url.clone()),
        config.api_key.clone(),
        config.timeout(),
    )?;
    let driver = LlmDriver::new(provider, Arc::clone(&log));
    let generator = CodeGenerator::new(Arc::new(driver));

    let usecase = CodegenUseCase::new(config, generator, fs, env, console, Arc::clone(&log));
    Ok(App { log, usecase })
}
