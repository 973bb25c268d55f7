//! 標準入出力による Console 実装

use crate::ports::outbound::Console;
use common::error::Error;
use std::io::{Read, Write};

#[derive(Debug, Clone, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_stdin(&self) -> Result<String, Error> {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
        Ok(buf)
    }

    fn out(&self, text: &str) -> Result<(), Error> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }

    fn err(&self, text: &str) -> Result<(), Error> {
        writeln!(std::io::stderr(), "{}", text)?;
        Ok(())
    }
}
