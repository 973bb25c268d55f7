//! 実行時設定
//!
//! プロセス開始時に 1 回だけ `AppConfig::load` で組み立て、参照で各層に渡す。
//! 読み込みは副作用を持たない（ディレクトリ作成は `init_dirs` で明示的に行う）。
//!
//! 優先順位（高い順）: CLI フラグ → 環境変数 → カレントの .env → config.json → 既定値

use crate::codegen::language::KNOWN_LANGUAGES;
use crate::codegen::task::TaskKind;
use crate::domain::{Language, ModelName};
use crate::error::Error;
use crate::llm::factory::ProviderType;
use crate::llm::openai_compat::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::llm::provider::{GenerationParams, DEFAULT_TEMPERATURE};
use crate::ports::outbound::{EnvResolver, FileSystem};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// config.json の内容（すべて省略可能）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub provider: Option<String>,
    #[serde(alias = "default_model")]
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_key_env: Option<String>,
    pub languages: Option<Vec<String>>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub timeout_secs: Option<u64>,
    pub data_dir: Option<PathBuf>,
    pub models_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFile {
    /// JSON 文字列からパース（ファイル読みは load で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// 解決済みの設定
#[derive(Clone)]
pub struct AppConfig {
    pub provider: ProviderType,
    pub model: ModelName,
    pub base_url: String,
    /// API キーを読んだ環境変数名
    pub api_key_env: String,
    /// 解決済みの API キー（ログには出さない）
    pub api_key: Option<String>,
    /// 提示する言語
    pub languages: Vec<Language>,
    /// 全タスク共通の max_tokens（None ならタスク既定値）
    pub max_tokens: Option<u32>,
    pub temperature: f64,
    pub timeout_secs: Option<u64>,
    pub home_dir: PathBuf,
    pub data_dir: PathBuf,
    pub models_dir: PathBuf,
    pub log_file: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("languages", &self.languages)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("home_dir", &self.home_dir)
            .field("data_dir", &self.data_dir)
            .field("models_dir", &self.models_dir)
            .field("log_file", &self.log_file)
            .finish()
    }
}

/// 環境変数 → .env の順に値を引く
struct Lookup<'a> {
    env: &'a dyn EnvResolver,
    dotenv: HashMap<String, String>,
}

impl Lookup<'_> {
    fn get(&self, name: &str) -> Option<String> {
        self.env
            .var(name)
            .or_else(|| self.dotenv.get(name).filter(|v| !v.is_empty()).cloned())
    }

    fn parse<T: std::str::FromStr>(&self, name: &str) -> Result<Option<T>, Error> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|_| Error::config(format!("{}: invalid value '{}'", name, raw))),
        }
    }
}

/// カレントディレクトリの .env を読む（無ければ空）。プロセス環境は変更しない。
fn read_dotenv(fs: &dyn FileSystem, path: &Path) -> Result<HashMap<String, String>, Error> {
    if !fs.exists(path) {
        return Ok(HashMap::new());
    }
    let contents = fs.read_to_string(path)?;
    let mut vars = HashMap::new();
    for item in dotenvy::from_read_iter(contents.as_bytes()) {
        let (k, v) = item.map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        vars.insert(k, v);
    }
    Ok(vars)
}

/// config.json を読む。ファイルが無ければ既定、JSON が壊れていれば Err（メッセージにパス含める）
fn read_config_file(fs: &dyn FileSystem, path: &Path) -> Result<ConfigFile, Error> {
    if !fs.exists(path) {
        return Ok(ConfigFile::default());
    }
    let contents = fs.read_to_string(path)?;
    ConfigFile::parse(&contents).map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
}

impl AppConfig {
    /// 設定を解決する
    pub fn load(env: &dyn EnvResolver, fs: &dyn FileSystem) -> Result<Self, Error> {
        let cwd = env.current_dir()?;
        let home_dir = env
            .resolve_home_dir()
            .unwrap_or_else(|_| cwd.join(".codegen"));
        let file = read_config_file(fs, &home_dir.join("config.json"))?;
        let lookup = Lookup {
            env,
            dotenv: read_dotenv(fs, &cwd.join(".env"))?,
        };

        let provider_name = lookup
            .get("CODEGEN_PROVIDER")
            .or(file.provider)
            .unwrap_or_else(|| ProviderType::OpenAiCompat.as_str().to_string());
        let provider = ProviderType::from_str(&provider_name).ok_or_else(|| {
            Error::config(format!(
                "Unknown provider: '{}'. Available: {}",
                provider_name,
                ProviderType::names().join(", ")
            ))
        })?;

        let model = lookup
            .get("CODEGEN_MODEL")
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = lookup
            .get("CODEGEN_BASE_URL")
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key_env = lookup
            .get("CODEGEN_API_KEY_ENV")
            .or(file.api_key_env)
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        let api_key = lookup.get(&api_key_env);

        let languages = file
            .languages
            .filter(|l| !l.is_empty())
            .map(|l| l.into_iter().map(Language::new).collect())
            .unwrap_or_else(|| KNOWN_LANGUAGES.iter().map(|l| Language::new(*l)).collect());

        let max_tokens = lookup.parse::<u32>("CODEGEN_MAX_TOKENS")?.or(file.max_tokens);
        let temperature = lookup
            .parse::<f64>("CODEGEN_TEMPERATURE")?
            .or(file.temperature)
            .unwrap_or(DEFAULT_TEMPERATURE);
        let timeout_secs = lookup.parse::<u64>("CODEGEN_TIMEOUT_SECS")?.or(file.timeout_secs);

        let data_dir = file.data_dir.unwrap_or_else(|| home_dir.join("data"));
        let models_dir = file.models_dir.unwrap_or_else(|| home_dir.join("models"));
        let log_file = file
            .log_file
            .unwrap_or_else(|| home_dir.join("logs").join("codegen.jsonl"));

        Ok(Self {
            provider,
            model: ModelName::new(model),
            base_url,
            api_key_env,
            api_key,
            languages,
            max_tokens,
            temperature,
            timeout_secs,
            home_dir,
            data_dir,
            models_dir,
            log_file,
        })
    }

    /// data / models ディレクトリを作成する（起動時の明示的な初期化ステップ）
    pub fn init_dirs(&self, fs: &dyn FileSystem) -> Result<(), Error> {
        fs.create_dir_all(&self.data_dir)?;
        fs.create_dir_all(&self.models_dir)?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// タスクの生成パラメータ（引数 → 設定 → タスク既定の順）
    pub fn params_for(
        &self,
        task: TaskKind,
        max_tokens: Option<u32>,
        temperature: Option<f64>,
    ) -> GenerationParams {
        GenerationParams::new(
            max_tokens
                .or(self.max_tokens)
                .unwrap_or_else(|| task.default_max_tokens()),
            temperature.unwrap_or(self.temperature),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{MapEnvResolver, StdFileSystem};

    fn env_for(dir: &Path) -> MapEnvResolver {
        MapEnvResolver::new(dir.join("work")).with("CODEGEN_HOME", dir.join("home").to_str().unwrap())
    }

    #[test]
    fn test_load_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&env_for(dir.path()), &StdFileSystem).unwrap();
        assert_eq!(cfg.provider, ProviderType::OpenAiCompat);
        assert_eq!(&*cfg.model, "llama3-70b-8192");
        assert_eq!(cfg.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(cfg.api_key_env, "GROQ_API_KEY");
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.languages.len(), 5);
        assert_eq!(cfg.temperature, 0.2);
        assert_eq!(cfg.max_tokens, None);
        assert_eq!(cfg.data_dir, dir.path().join("home").join("data"));
        assert_eq!(cfg.log_file, dir.path().join("home/logs/codegen.jsonl"));
    }

    #[test]
    fn test_load_has_no_side_effects_until_init_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&env_for(dir.path()), &StdFileSystem).unwrap();
        assert!(!cfg.data_dir.exists());
        assert!(!cfg.models_dir.exists());

        cfg.init_dirs(&StdFileSystem).unwrap();
        assert!(cfg.data_dir.is_dir());
        assert!(cfg.models_dir.is_dir());
    }

    #[test]
    fn test_precedence_env_over_dotenv_over_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("home")).unwrap();
        std::fs::create_dir_all(dir.path().join("work")).unwrap();
        std::fs::write(
            dir.path().join("home/config.json"),
            r#"{"model":"file-model","base_url":"http://file","temperature":0.9,"languages":["rust"]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("work/.env"),
            "GROQ_API_KEY=from-dotenv\nCODEGEN_BASE_URL=http://dotenv\n",
        )
        .unwrap();
        let env = env_for(dir.path()).with("CODEGEN_BASE_URL", "http://env");

        let cfg = AppConfig::load(&env, &StdFileSystem).unwrap();
        assert_eq!(&*cfg.model, "file-model");
        assert_eq!(cfg.base_url, "http://env");
        assert_eq!(cfg.api_key.as_deref(), Some("from-dotenv"));
        assert_eq!(cfg.temperature, 0.9);
        assert_eq!(cfg.languages, vec![Language::new("rust")]);
    }

    #[test]
    fn test_custom_api_key_env() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_for(dir.path())
            .with("CODEGEN_API_KEY_ENV", "OPENAI_API_KEY")
            .with("OPENAI_API_KEY", "sk-test")
            .with("GROQ_API_KEY", "gsk-ignored");
        let cfg = AppConfig::load(&env, &StdFileSystem).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert!(!format!("{:?}", cfg).contains("sk-test"));
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_for(dir.path()).with("CODEGEN_TEMPERATURE", "warm");
        let err = AppConfig::load(&env, &StdFileSystem).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("CODEGEN_TEMPERATURE"));

        let env = env_for(dir.path()).with("CODEGEN_PROVIDER", "gemini");
        let err = AppConfig::load(&env, &StdFileSystem).unwrap_err();
        assert!(err.to_string().contains("Unknown provider: 'gemini'"));
    }

    #[test]
    fn test_broken_config_file_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("home")).unwrap();
        std::fs::write(dir.path().join("home/config.json"), "{ not json").unwrap();
        let err = AppConfig::load(&env_for(dir.path()), &StdFileSystem).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_params_for() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = AppConfig::load(&env_for(dir.path()), &StdFileSystem).unwrap();
        assert_eq!(
            cfg.params_for(TaskKind::Generate, None, None),
            GenerationParams::new(1024, 0.2)
        );
        assert_eq!(
            cfg.params_for(TaskKind::Translate, None, None),
            GenerationParams::new(1500, 0.2)
        );
        cfg.max_tokens = Some(800);
        cfg.temperature = 0.4;
        assert_eq!(
            cfg.params_for(TaskKind::Translate, None, None),
            GenerationParams::new(800, 0.4)
        );
        assert_eq!(
            cfg.params_for(TaskKind::Fix, Some(2000), Some(0.1)),
            GenerationParams::new(2000, 0.1)
        );
    }

    #[test]
    fn test_config_file_rejects_unknown_keys() {
        assert!(ConfigFile::parse(r#"{"modle":"typo"}"#).is_err());
        let f = ConfigFile::parse(r#"{"default_model":"m"}"#).unwrap();
        assert_eq!(f.model.as_deref(), Some("m"));
    }
}
