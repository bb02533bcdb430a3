//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and the
//! run-scoped monitor configuration with defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Get an environment variable
///
/// # Returns
/// * `Some(value)` - The environment variable value
/// * `None` - The variable is not set
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default if the variable is not set or parsing fails.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    get_env(name).and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// アーカイブ先（S3互換オブジェクトストレージ）の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// S3互換エンドポイントのベースURL (デフォルト: "http://127.0.0.1:9000")
    pub endpoint: String,
    /// バケット名 (デフォルト: "uptime-monitor")
    pub bucket: String,
    /// オブジェクトキーのプレフィックス (デフォルト: "uptime-logs")
    pub prefix: String,
}

impl ArchiveConfig {
    /// Load archive configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            endpoint: get_env_or("UPMON_S3_ENDPOINT", "http://127.0.0.1:9000"),
            bucket: get_env_or("UPMON_S3_BUCKET", "uptime-monitor"),
            prefix: get_env_or("UPMON_S3_PREFIX", "uptime-logs"),
        }
    }
}

/// モニター実行設定
///
/// 1回の実行の間は固定。全項目が環境変数で上書き可能。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// URLリストファイル (デフォルト: "urls.txt")
    pub urls_file: PathBuf,
    /// ローカルログディレクトリ (デフォルト: "./logs")
    pub log_dir: PathBuf,
    /// レイテンシ閾値（ミリ秒）(デフォルト: 2000)
    pub threshold_ms: u64,
    /// リクエストごとのタイムアウト (デフォルト: 10秒)
    pub request_timeout: Duration,
    /// アーカイブ先設定
    pub archive: ArchiveConfig,
    /// 通知先WebhookのURL（未設定なら通知はスキップ）
    pub webhook_url: Option<String>,
}

impl MonitorConfig {
    /// Load monitor configuration from environment variables.
    pub fn from_env() -> Self {
        let timeout_secs = get_env_parse("UPMON_TIMEOUT_SECS", 10u64);

        Self {
            urls_file: PathBuf::from(get_env_or("UPMON_URLS_FILE", "urls.txt")),
            log_dir: PathBuf::from(get_env_or("UPMON_LOG_DIR", "./logs")),
            threshold_ms: get_env_parse("UPMON_THRESHOLD_MS", 2000u64),
            request_timeout: Duration::from_secs(timeout_secs),
            archive: ArchiveConfig::from_env(),
            webhook_url: get_env("UPMON_WEBHOOK_URL"),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            urls_file: PathBuf::from("urls.txt"),
            log_dir: PathBuf::from("./logs"),
            threshold_ms: 2000,
            request_timeout: Duration::from_secs(10),
            archive: ArchiveConfig {
                endpoint: "http://127.0.0.1:9000".to_string(),
                bucket: "uptime-monitor".to_string(),
                prefix: "uptime-logs".to_string(),
            },
            webhook_url: None,
        }
    }
}
