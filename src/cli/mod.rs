//! CLI module for upmon
//!
//! Provides the command-line surface. All configuration is supplied via
//! environment variables; the binary takes no positional arguments.

use clap::Parser;

/// Website uptime & response monitor - check, log, archive, alert
#[derive(Parser, Debug)]
#[command(name = "upmon")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    UPMON_URLS_FILE      URL source file, one URL per line (default: urls.txt)
    UPMON_LOG_DIR        Local log directory (default: ./logs)
    UPMON_THRESHOLD_MS   Latency threshold in milliseconds (default: 2000)
    UPMON_TIMEOUT_SECS   Per-request timeout in seconds (default: 10)
    UPMON_S3_ENDPOINT    S3-compatible endpoint URL (default: http://127.0.0.1:9000)
    UPMON_S3_BUCKET      Archive bucket name (default: uptime-monitor)
    UPMON_S3_PREFIX      Archive key prefix (default: uptime-logs)
    UPMON_WEBHOOK_URL    Alert webhook URL (alerts skipped if unset)
    UPMON_LOG_LEVEL      Log level (default: info)
"#)]
pub struct Cli;
