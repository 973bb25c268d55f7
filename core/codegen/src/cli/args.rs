use crate::domain::{CodegenCommand, InputSource, RunSpec};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::codegen::TaskKind;
use common::domain::{Language, ModelName, ProviderName};
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// --list-languages: 設定された言語と拡張子を表示
    pub list_languages: bool,
    /// --init: data / models ディレクトリを作成
    pub init: bool,
    /// --example: タスクの入力例を表示して終了
    pub example: bool,
    /// --dry-run: 送信する指示文を表示するだけ
    pub dry_run: bool,
    /// -s / --save: 既定ファイル名で保存
    pub save: bool,
    /// -v / --verbose: debug ログを stderr に出す
    pub verbose: bool,
    pub provider: Option<ProviderName>,
    pub model: Option<ModelName>,
    pub language: Option<Language>,
    pub target: Option<Language>,
    pub file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    /// 先頭の位置引数（タスク名）
    pub task: Option<String>,
    pub text_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("codegen")
        .about("Generate, complete, fix, test or translate code with an LLM")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("language")
                .short('l')
                .long("language")
                .visible_alias("from")
                .value_name("lang")
                .help("Language of the code (source language for translate)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("to")
                .long("to")
                .value_name("lang")
                .help("Target language for translate")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("file")
                .short('f')
                .long("file")
                .value_name("path")
                .help("Read the input from a file instead of arguments or stdin")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Also write the result to this file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("save")
                .short('s')
                .long("save")
                .help("Also write the result to the default file name in the current directory")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("provider")
                .help("LLM provider (openai_compat, groq, echo)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model name (e.g. llama3-70b-8192)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("max-tokens")
                .short('t')
                .long("max-tokens")
                .value_name("n")
                .help("Maximum tokens to generate")
                .value_parser(value_parser!(u32))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("temperature")
                .short('T')
                .long("temperature")
                .value_name("t")
                .help("Sampling temperature (0.0 - 1.0)")
                .value_parser(value_parser!(f64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("example")
                .long("example")
                .help("Print the example input for the task and language")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Print the instruction that would be sent, without calling the API")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-languages")
                .long("list-languages")
                .help("List configured languages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("init")
                .long("init")
                .help("Create the data and models directories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("task")
                .index(1)
                .value_name("task")
                .help("Task: generate, complete, fix, test, translate")
                .num_args(1),
        )
        // オプションはタスクの前後どこでも可。'-' で始まる本文は `--` の後に置く
        .arg(
            clap::Arg::new("text")
                .index(2)
                .value_name("text")
                .help("Description or code (use -- before text that starts with '-')")
                .num_args(0..)
                .allow_negative_numbers(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let task = matches.get_one::<String>("task").cloned();
    let text_args: Vec<String> = matches
        .get_many::<String>("text")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();

    Config {
        help: matches.get_flag("help"),
        list_languages: matches.get_flag("list-languages"),
        init: matches.get_flag("init"),
        example: matches.get_flag("example"),
        dry_run: matches.get_flag("dry-run"),
        save: matches.get_flag("save"),
        verbose: matches.get_flag("verbose"),
        provider: matches
            .get_one::<String>("provider")
            .map(|s| ProviderName::new(s.clone())),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        language: matches
            .get_one::<String>("language")
            .map(|s| Language::new(s.clone())),
        target: matches
            .get_one::<String>("to")
            .map(|s| Language::new(s.clone())),
        file: matches.get_one::<PathBuf>("file").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        max_tokens: matches.get_one::<u32>("max-tokens").copied(),
        temperature: matches.get_one::<f64>("temperature").copied(),
        task,
        text_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }
    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "codegen", &mut std::io::stdout());
}

/// Config を CodegenCommand に変換する
///
/// タスク名の検証と入力元の決定だけを行う。入力が空かどうか・翻訳先の妥当性は
/// 入力を読んだ後に usecase で検証する。
pub fn config_to_command(config: Config) -> Result<CodegenCommand, Error> {
    if config.help {
        return Ok(CodegenCommand::Help);
    }
    if config.list_languages {
        return Ok(CodegenCommand::ListLanguages);
    }
    if config.init {
        return Ok(CodegenCommand::Init);
    }

    let task_name = config.task.ok_or_else(|| {
        Error::invalid_argument(format!(
            "No task given. Expected one of: {}",
            task_names().join(", ")
        ))
    })?;
    let task = TaskKind::from_str(&task_name).ok_or_else(|| {
        Error::invalid_argument(format!(
            "Unknown task: '{}'. Expected one of: {}",
            task_name,
            task_names().join(", ")
        ))
    })?;

    if config.example {
        return Ok(CodegenCommand::Example {
            task,
            language: config.language,
        });
    }

    let input = match (config.file, config.text_args.is_empty()) {
        (Some(_), false) => {
            return Err(Error::invalid_argument(
                "Give the input either as arguments or with -f/--file, not both",
            ))
        }
        (Some(path), true) => InputSource::File(path),
        (None, false) => InputSource::Inline(config.text_args.join(" ")),
        (None, true) => InputSource::Stdin,
    };

    let mut spec = RunSpec::new(task, input);
    spec.language = config.language;
    spec.target = config.target;
    spec.max_tokens = config.max_tokens;
    spec.temperature = config.temperature;
    spec.output = config.output;
    spec.save = config.save;
    spec.dry_run = config.dry_run;
    Ok(CodegenCommand::Run(spec))
}

fn task_names() -> Vec<&'static str> {
    TaskKind::ALL.iter().map(|t| t.as_str()).collect()
}
