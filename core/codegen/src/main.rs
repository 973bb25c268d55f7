mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use domain::CodegenCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_codegen, App, Overrides};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, cmd: CodegenCommand) -> Result<i32, Error> {
        let command_name = cmd.name();
        let config = self.app.usecase.config();
        self.lifecycle(
            LogRecord::new(LogLevel::Info, "command started")
                .field("command", command_name)
                .field("provider", config.provider.as_str())
                .field("model", config.model.to_string()),
        );

        let usecase = &self.app.usecase;
        let result = match cmd {
            CodegenCommand::Help => {
                print_help();
                Ok(0)
            }
            CodegenCommand::ListLanguages => usecase.list_languages(),
            CodegenCommand::Init => usecase.init(),
            CodegenCommand::Example { task, language } => usecase.example(task, language),
            CodegenCommand::Run(spec) => usecase.run(spec),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        self.lifecycle(
            LogRecord::new(LogLevel::Info, "command finished")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.log.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

impl Runner {
    fn lifecycle(&self, record: LogRecord) {
        let _ = self.app.log.log(&record.layer("cli").kind("lifecycle"));
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("codegen: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let overrides = Overrides::from(&config);
    let cmd = config_to_command(config)?;
    if cmd == CodegenCommand::Help {
        print_help();
        return Ok(0);
    }
    let app = wire_codegen(&overrides)?;
    let runner = Runner { app };
    runner.run(cmd)
}

fn print_usage() {
    eprintln!("Usage: codegen [options] <generate|complete|fix|test|translate> [text...]");
}

fn print_help() {
    println!("Usage: codegen [options] <generate|complete|fix|test|translate> [text...]");
    println!("Options may appear before or after the task. Put text that starts with '-' after --.");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -l, --language <lang>         Language of the code (default: first configured language, python)");
    println!("      --from <lang>             Same as --language (source language for translate)");
    println!("      --to <lang>               Target language for translate");
    println!("  -f, --file <path>             Read the input from a file. Without -f or text, stdin is read.");
    println!("  -o, --output <path>           Also write the result to this file");
    println!("  -s, --save                    Also write the result to the default file name (e.g. generated_code.py)");
    println!("  -p, --provider <provider>     LLM provider: openai_compat (default, alias groq), echo (offline)");
    println!("  -m, --model <model>           Model name. Default: llama3-70b-8192");
    println!("  -t, --max-tokens <n>          Maximum tokens to generate (default 1024, translate 1500)");
    println!("  -T, --temperature <t>         Sampling temperature (default 0.2)");
    println!("  -v, --verbose                 Emit debug logs to stderr");
    println!("      --example                 Print the example input for the task and language");
    println!("      --dry-run                 Print the instruction that would be sent, without calling the API");
    println!("      --list-languages          List configured languages");
    println!("      --init                    Create the data and models directories");
    println!("      --generate <shell>        Generate shell completion script (bash, zsh, fish, elvish, powershell)");
    println!();
    println!("Tasks:");
    println!("  generate    Generate code from a natural-language description");
    println!("  complete    Complete partial code");
    println!("  fix         Fix bugs in code");
    println!("  test        Generate unit tests for a function");
    println!("  translate   Translate code to another language (requires --to)");
    println!();
    println!("Environment:");
    println!("  GROQ_API_KEY          API key (the variable name can be changed with CODEGEN_API_KEY_ENV)");
    println!("  CODEGEN_MODEL         Default model");
    println!("  CODEGEN_BASE_URL      Chat completions base URL (default https://api.groq.com/openai/v1)");
    println!("  CODEGEN_PROVIDER      Default provider");
    println!("  CODEGEN_MAX_TOKENS    Max tokens for every task");
    println!("  CODEGEN_TEMPERATURE   Default temperature");
    println!("  CODEGEN_TIMEOUT_SECS  HTTP timeout in seconds");
    println!("  CODEGEN_HOME          Home directory (config.json, data/, models/, logs/).");
    println!("                        If unset, $XDG_CONFIG_HOME/codegen or ~/.config/codegen is used.");
    println!("  A .env file in the current directory is also read.");
    println!();
    println!("Exit status:");
    println!("  0 success, 64 usage error, 69 generation unavailable, 74 I/O error, 78 bad configuration");
    println!();
    println!("Examples:");
    println!("  codegen generate Create a function that returns the average of the top 3 numbers");
    println!("  codegen fix -l go -f main.go");
    println!("  codegen complete -l go -- -x := 1");
    println!("  codegen --from python --to javascript -s translate < utils.py");
    println!("  codegen --example -l java complete");
}
