//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::CodegenCommand;
use common::error::Error;

/// codegen アプリケーションを実行する Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出す。戻り値は終了コード。
pub trait UseCaseRunner {
    fn run(&self, cmd: CodegenCommand) -> Result<i32, Error>;
}
