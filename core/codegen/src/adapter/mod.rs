//! codegen 固有のアダプター

pub mod std_console;
pub use std_console::StdConsole;
