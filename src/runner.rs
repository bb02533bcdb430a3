//! 実行オーケストレーター
//!
//! URLリスト読み込み → チェック → 記録 → アーカイブ → 通知 の
//! 直列パスを1回実行する

use crate::archive::{object_reference, ObjectStore, S3CompatibleStore};
use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::health::UrlChecker;
use crate::notify::{alert_body, alert_subject, AlertSender, WebhookSender};
use crate::recorder;
use crate::types::{log_filename, CheckResult};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// 1回の実行結果サマリー
#[derive(Debug)]
pub struct RunReport {
    /// 全チェック結果（URLリスト順）
    pub results: Vec<CheckResult>,
    /// issue件数
    pub issue_count: usize,
    /// ローカルログファイルのパス
    pub log_path: PathBuf,
    /// アーカイブ先オブジェクトキー
    pub archive_key: String,
    /// アーカイブ済みログの参照表記（`s3://bucket/key`）
    pub archive_reference: String,
    /// アーカイブ成否
    pub archived: bool,
    /// 通知送信成否（issueなしの場合はfalse）
    pub notified: bool,
}

/// モニター
///
/// ストレージ・通知クライアントは実行スコープで明示的に構築し、
/// トレイトオブジェクトとして注入する（テスト時は差し替え可能）。
pub struct Monitor {
    config: MonitorConfig,
    checker: UrlChecker,
    store: Arc<dyn ObjectStore>,
    sender: Option<Arc<dyn AlertSender>>,
}

impl Monitor {
    /// 設定からモニターを構築
    ///
    /// アーカイブ先はS3互換ストア、通知はWebhook（URL設定時のみ）。
    pub fn new(config: MonitorConfig) -> Self {
        let checker = UrlChecker::new(config.request_timeout);
        let store: Arc<dyn ObjectStore> =
            Arc::new(S3CompatibleStore::new(config.archive.endpoint.clone()));
        let sender: Option<Arc<dyn AlertSender>> = config
            .webhook_url
            .clone()
            .map(|url| Arc::new(WebhookSender::new(url)) as Arc<dyn AlertSender>);

        Self {
            config,
            checker,
            store,
            sender,
        }
    }

    /// アーカイブ先ストアを差し替える
    pub fn with_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.store = store;
        self
    }

    /// 通知送信機を差し替える
    pub fn with_sender(mut self, sender: Arc<dyn AlertSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    /// 1回の監視実行
    ///
    /// URLリスト欠落のみが致命的エラー。アーカイブ・通知の失敗は
    /// ログに記録したうえでサマリーの成否フラグに畳み込む。
    pub async fn run(&self) -> Result<RunReport, MonitorError> {
        let urls = read_urls(&self.config.urls_file)?;
        let run_started = Utc::now();

        info!(
            urls = urls.len(),
            threshold_ms = self.config.threshold_ms,
            "Monitor run started"
        );

        // 順次チェック。個々の失敗は結果として記録され、実行を止めない。
        let mut results = Vec::with_capacity(urls.len());
        for url in &urls {
            results.push(self.checker.check(url, run_started).await);
        }

        let issues: Vec<CheckResult> = results
            .iter()
            .filter(|r| r.is_issue(self.config.threshold_ms))
            .cloned()
            .collect();

        let filename = log_filename(run_started);
        let log_path = self.config.log_dir.join(&filename);
        recorder::append_results(&log_path, &results)?;

        let archive_key = format!("{}/{}", self.config.archive.prefix, filename);
        let archive_reference = object_reference(&self.config.archive.bucket, &archive_key);
        let archived = self.archive_log(&log_path, &archive_key).await;

        let notified = if issues.is_empty() {
            false
        } else {
            self.send_alert(&issues, &archive_reference).await
        };

        info!(
            checked = results.len(),
            issues = issues.len(),
            archived = archived,
            notified = notified,
            "Monitor run completed"
        );

        Ok(RunReport {
            issue_count: issues.len(),
            results,
            log_path,
            archive_key,
            archive_reference,
            archived,
            notified,
        })
    }

    /// ローカルログをリモートへコピーする（非致命）
    async fn archive_log(&self, log_path: &Path, key: &str) -> bool {
        let body = match std::fs::read(log_path) {
            Ok(body) => body,
            Err(e) => {
                warn!(path = %log_path.display(), error = %e, "Failed to read log for archiving");
                return false;
            }
        };

        match self
            .store
            .put_object(&self.config.archive.bucket, key, body)
            .await
        {
            Ok(()) => {
                info!(bucket = %self.config.archive.bucket, key = %key, "Log archived");
                true
            }
            Err(e) => {
                warn!(bucket = %self.config.archive.bucket, key = %key, error = %e, "Archive upload failed");
                false
            }
        }
    }

    /// issueを要約した通知を1通送信する（非致命）
    async fn send_alert(&self, issues: &[CheckResult], archive_reference: &str) -> bool {
        let subject = alert_subject(issues.len());
        let body = alert_body(issues, archive_reference);

        let sender = match &self.sender {
            Some(sender) => sender,
            None => {
                warn!(
                    issues = issues.len(),
                    "No notification channel configured, alert not sent"
                );
                return false;
            }
        };

        match sender.send(&subject, &body).await {
            Ok(()) => {
                info!(issues = issues.len(), "Alert notification sent");
                true
            }
            Err(e) => {
                warn!(error = %e, "Alert notification failed");
                false
            }
        }
    }
}

/// URLリストファイルを読み込む
///
/// ファイル欠落は実行前の致命的エラー。空行は無視し、行順と重複は保持する。
fn read_urls(path: &Path) -> Result<Vec<String>, MonitorError> {
    if !path.exists() {
        return Err(MonitorError::UrlSourceMissing(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let urls = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(urls)
}
