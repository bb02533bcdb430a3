//! Logging initialization
//!
//! tracing-subscriberの初期化。ログレベルは`UPMON_LOG_LEVEL`で制御する。

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `UPMON_LOG_LEVEL` accepts EnvFilter directives (default: "info").
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env("UPMON_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()?;

    Ok(())
}
