//! Ports & Adapters のポート定義
//!
//! - inbound: CLI がアプリを呼び出す入口
//! - outbound: 端末（stdin / stdout / stderr）への依頼

pub mod inbound;
pub mod outbound;
