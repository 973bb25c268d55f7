//! 端末入出力の Outbound ポート

use common::error::Error;

/// stdin / stdout / stderr の抽象
///
/// 結果のコードは stdout、保存先の通知などは stderr に分ける（パイプで結果だけを渡せるように）。
pub trait Console: Send + Sync {
    /// stdin を EOF まで読む
    fn read_stdin(&self) -> Result<String, Error>;
    /// stdout に 1 行書く（末尾に改行を付ける）
    fn out(&self, text: &str) -> Result<(), Error>;
    /// stderr に 1 行書く
    fn err(&self, text: &str) -> Result<(), Error>;
}
