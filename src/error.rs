//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use std::path::PathBuf;
use thiserror::Error;

/// Monitor error type
///
/// 実行を中断させる致命的エラーのみを表す。URL単位のチェック失敗は
/// `CheckResult`の失敗バリアントとして記録され、ここには現れない。
#[derive(Debug, Error)]
pub enum MonitorError {
    /// URL source file is missing
    #[error("URL source file not found: {0}. Add URLs one per line.")]
    UrlSourceMissing(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
