//! 人間向けログ（LogRecord → stderr へ要点のみ出力）
//!
//! fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields を短い文字列にする
fn fields_summary(record: &LogRecord) -> Option<String> {
    let fields = record.fields.as_ref().filter(|m| !m.is_empty())?;
    let s = serde_json::to_string(fields).unwrap_or_default();
    if s.len() <= FIELDS_SUMMARY_MAX {
        return Some(s);
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    Some(format!("{}... (len={})", truncated, s.len()))
}

/// 1 行に整形する（stderr 出力とテストで共用）
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(kind) = &record.kind {
        line = format!("{} ({})", line, kind);
    }
    if let Some(summary) = fields_summary(record) {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// 人間向けログ（max_level より冗長なレコードは捨てる）
#[derive(Debug, Clone)]
pub struct StderrLog {
    max_level: LogLevel,
}

impl StderrLog {
    pub fn new(max_level: LogLevel) -> Self {
        Self { max_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }
}

impl Default for StderrLog {
    fn default() -> Self {
        Self::new(LogLevel::Warn)
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if self.enabled(record.level) {
            eprintln!("{}", format_line(record));
        }
        Ok(())
    }
}
