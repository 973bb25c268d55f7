//! codegen 共通ライブラリ
//!
//! チャット補完クライアントとコード生成テンプレート層を提供します。
//! CLI（`codegen` コマンド）はこのクレートを組み立てて使うだけの薄い層です。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート（trait）
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// LLMドライバーとプロバイダ
pub mod llm;

/// コード生成テンプレート層
pub mod codegen;

/// 実行時設定
pub mod config;
