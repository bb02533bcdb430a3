//! CSVレコーダー
//!
//! チェック結果を実行単位のCSVファイルへ追記する

use crate::error::MonitorError;
use crate::types::{format_timestamp, CheckResult};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

/// ヘッダー行のフィールド（列順は固定）
const HEADER: [&str; 6] = ["timestamp", "url", "status", "response_ms", "ok", "error"];

/// チェック結果をCSVファイルへ追記する
///
/// ファイルが存在しない場合のみヘッダー行を書き、親ディレクトリも
/// 必要なら作成する。既存内容の書き換え・切り詰めは行わない。
pub fn append_results(path: &Path, results: &[CheckResult]) -> Result<(), MonitorError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let is_new = !path.exists();
    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if is_new {
        writer.write_record(HEADER)?;
    }

    for result in results {
        writer.write_record([
            format_timestamp(result.timestamp),
            result.url.clone(),
            result.status.map(|s| s.to_string()).unwrap_or_default(),
            result.response_ms.to_string(),
            result.ok.to_string(),
            result.error.clone(),
        ])?;
    }

    writer.flush()?;

    debug!(path = %path.display(), rows = results.len(), "Results appended to log");

    Ok(())
}
