//! コード生成テンプレート層
//!
//! 5 種類のタスク（generate / complete / fix / test / translate）を指示文に組み立て、
//! `CompletionClient` で 1 回生成し、応答からコードフェンスを取り除いて返す。

pub mod clean;
pub mod examples;
pub mod generator;
pub mod language;
pub mod prompt;
pub mod task;

pub use clean::clean_code;
pub use examples::example_input;
pub use generator::{build_prompt, merge_completion, CodeGenerator};
pub use language::{file_extension, is_known, output_file_name, KNOWN_LANGUAGES};
pub use task::{Request, TaskKind};
