//! crate 単位のテスト（CLI 解析 → 配線 → Runner を通す）


use crate::ports::outbound::Console;
use common::error::Error;
use common::ports::outbound::{Log, LogRecord};
use std::sync::Mutex;

/// テスト用 Console: stdin は固定文字列、stdout / stderr は記録する
#[derive(Default)]
pub struct BufferConsole {
    stdin: String,
    out: Mutex<Vec<String>>,
    err: Mutex<Vec<String>>,
}

impl BufferConsole {
    pub fn with_stdin(stdin: &str) -> Self {
        Self {
            stdin: stdin.to_string(),
            ..Default::default()
        }
    }

    pub fn out_lines(&self) -> Vec<String> {
        self.out.lock().unwrap().clone()
    }

    pub fn err_lines(&self) -> Vec<String> {
        self.err.lock().unwrap().clone()
    }
}

impl Console for BufferConsole {
    fn read_stdin(&self) -> Result<String, Error> {
        Ok(self.stdin.clone())
    }

    fn out(&self, text: &str) -> Result<(), Error> {
        self.out.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn err(&self, text: &str) -> Result<(), Error> {
        self.err.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// テスト用 Log: 受け取ったレコードをそのまま溜める
#[derive(Default)]
pub struct RecordingLog {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
