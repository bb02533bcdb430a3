//! アラート通知
//!
//! issueを要約した1通の通知メッセージを構成し、送信する

use crate::types::CheckResult;
use async_trait::async_trait;
use thiserror::Error;

pub mod webhook;

pub use webhook::WebhookSender;

/// 通知エラー
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Remote returned a non-success status
    #[error("Failed to send notification: {0}")]
    SendFailed(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// 通知チャネルへの送信インターフェース
#[async_trait]
pub trait AlertSender: Send + Sync {
    /// 件名と本文を1通の通知として送信する
    async fn send(&self, subject: &str, message: &str) -> Result<(), NotifyError>;
}

/// アラートの件名を構成する
///
/// 表記契約: `[ALERT] <N> site issue(s) detected`
pub fn alert_subject(issue_count: usize) -> String {
    format!("[ALERT] {} site issue(s) detected", issue_count)
}

/// アラートの本文を構成する
///
/// issueごとに1行（`<url> status=<status> resp_ms=<ms> err=<error>`、
/// ステータス欠落時は`none`）を並べ、末尾にアーカイブ済みログの参照を付ける。
pub fn alert_body(issues: &[CheckResult], log_reference: &str) -> String {
    let lines: Vec<String> = issues
        .iter()
        .map(|issue| {
            let status = issue
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string());
            format!(
                "{} status={} resp_ms={} err={}",
                issue.url, status, issue.response_ms, issue.error
            )
        })
        .collect();

    format!(
        "Detected issues:\n{}\n\nLog: {}",
        lines.join("\n"),
        log_reference
    )
}
