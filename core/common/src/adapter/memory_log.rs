//! メモリに溜める Log 実装（テストでログ内容を検証するため）

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// これまでに受け取ったレコードの複製
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// 指定レベルのメッセージだけを取り出す
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }
}

impl Log for MemoryLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records
            .lock()
            .map_err(|_| Error::system("log buffer poisoned"))?
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_log_collects_records() {
        let log = MemoryLog::new();
        log.log(&LogRecord::new(LogLevel::Info, "a")).unwrap();
        log.log(&LogRecord::new(LogLevel::Error, "b")).unwrap();
        assert_eq!(log.records().len(), 2);
        assert_eq!(log.messages_at(LogLevel::Error), vec!["b".to_string()]);
    }
}
