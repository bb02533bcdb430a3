//! URLチェッカー
//!
//! 1 URLにつき1回のGETリクエストで稼働状況を確認する

use crate::types::CheckResult;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// URLチェッカー
///
/// タイムアウト付きGETを発行し、結果を`CheckResult`に分類する。
/// リトライは行わない（1実行につき1 URL 1回）。
#[derive(Clone)]
pub struct UrlChecker {
    /// HTTPクライアント
    client: Client,
}

impl UrlChecker {
    /// 新しいチェッカーを作成
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// 単一URLのチェック
    ///
    /// ネットワークエラー・タイムアウト等の障害は失敗バリアントの
    /// `CheckResult`に畳み込み、この境界からErrを返さない。
    /// 経過時間は障害時も失敗時点まで計測する。
    pub async fn check(&self, url: &str, stamped_at: DateTime<Utc>) -> CheckResult {
        let start = Instant::now();
        let response = self.client.get(url).send().await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                let result = CheckResult::from_response(url, stamped_at, status, elapsed_ms);

                if result.ok {
                    debug!(url = %url, status = status, response_ms = elapsed_ms, "Check succeeded");
                } else {
                    warn!(url = %url, status = status, response_ms = elapsed_ms, "Check returned non-2xx status");
                }

                result
            }
            Err(e) => {
                let error = e.to_string();
                warn!(url = %url, error = %error, response_ms = elapsed_ms, "Check failed");

                CheckResult::from_failure(url, stamped_at, elapsed_ms, error)
            }
        }
    }
}
