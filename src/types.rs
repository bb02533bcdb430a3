//! チェック結果型定義
//!
//! CheckResultと、タイムスタンプ／ログファイル名のフォーマット契約

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 1 URL × 1 実行のチェック結果
///
/// 作成後は不変。削除・更新されることはなく、CSVへ追記されるのみ。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckResult {
    /// チェック対象URL
    pub url: String,
    /// 実行開始時刻（同一実行内の全結果で共有）
    pub timestamp: DateTime<Utc>,
    /// HTTPステータスコード（トランスポート障害時はNone）
    pub status: Option<u16>,
    /// 応答までの経過時間（ミリ秒、失敗時も計測）
    pub response_ms: u64,
    /// ステータスコードが2xxかどうか
    pub ok: bool,
    /// 障害内容（リクエスト自体が失敗した場合のみ非空）
    pub error: String,
}

impl CheckResult {
    /// レスポンスを受信できた場合の結果を作成
    ///
    /// `ok`はステータスコードから計算する。404等の非2xxも
    /// 「エラー」ではないため`error`は常に空。
    pub fn from_response(
        url: impl Into<String>,
        timestamp: DateTime<Utc>,
        status: u16,
        response_ms: u64,
    ) -> Self {
        Self {
            url: url.into(),
            timestamp,
            status: Some(status),
            response_ms,
            ok: (200..300).contains(&status),
            error: String::new(),
        }
    }

    /// リクエスト自体が失敗した場合の結果を作成
    pub fn from_failure(
        url: impl Into<String>,
        timestamp: DateTime<Utc>,
        response_ms: u64,
        error: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            timestamp,
            status: None,
            response_ms,
            ok: false,
            error: error.into(),
        }
    }

    /// 通知対象（issue）かどうかを判定
    ///
    /// not-ok、または応答時間が閾値を厳密に超過した場合にissueとなる。
    pub fn is_issue(&self, threshold_ms: u64) -> bool {
        !self.ok || self.response_ms > threshold_ms
    }
}

/// タイムスタンプをISO-8601 UTC秒精度で整形する
///
/// データフィールドとしての表記契約。例: `2024-01-01T12:00:00Z`
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// 実行開始時刻からログファイル名を生成する
///
/// 例: `monitor_20240101T120000Z.csv`
pub fn log_filename(timestamp: DateTime<Utc>) -> String {
    format!("monitor_{}.csv", timestamp.format("%Y%m%dT%H%M%SZ"))
}
