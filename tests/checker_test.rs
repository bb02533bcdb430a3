//! Integration Test: URLチェッカー
//!
//! wiremockのモックサーバーに対して成功・非2xx・接続失敗・タイムアウトの
//! 各分類が仕様どおりであることを確認する。

use chrono::Utc;
use std::time::Duration;
use upmon::health::UrlChecker;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_check_2xx_is_ok_with_empty_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let checker = UrlChecker::new(Duration::from_secs(5));
    let stamped_at = Utc::now();
    let result = checker.check(&server.uri(), stamped_at).await;

    assert!(result.ok);
    assert_eq!(result.status, Some(200));
    assert!(result.error.is_empty());
    assert_eq!(result.timestamp, stamped_at);
}

#[tokio::test]
async fn test_check_non_2xx_is_not_ok_but_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let checker = UrlChecker::new(Duration::from_secs(5));
    let result = checker
        .check(&format!("{}/missing", server.uri()), Utc::now())
        .await;

    assert!(!result.ok);
    assert_eq!(result.status, Some(404));
    assert!(result.error.is_empty());
}

#[tokio::test]
async fn test_check_5xx_keeps_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let checker = UrlChecker::new(Duration::from_secs(5));
    let result = checker.check(&server.uri(), Utc::now()).await;

    assert!(!result.ok);
    assert_eq!(result.status, Some(503));
    assert!(result.error.is_empty());
}

#[tokio::test]
async fn test_check_connection_failure_has_no_status() {
    // 予約ポートへの接続は拒否される
    let checker = UrlChecker::new(Duration::from_secs(2));
    let result = checker.check("http://127.0.0.1:1/", Utc::now()).await;

    assert!(!result.ok);
    assert_eq!(result.status, None);
    assert!(!result.error.is_empty());
}

#[tokio::test]
async fn test_check_timeout_is_a_failure_with_measured_elapsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let checker = UrlChecker::new(Duration::from_millis(100));
    let result = checker.check(&server.uri(), Utc::now()).await;

    assert!(!result.ok);
    assert_eq!(result.status, None);
    assert!(!result.error.is_empty());
    // タイムアウトまでの経過時間が計測されている
    assert!(result.response_ms >= 90);
    assert!(result.response_ms < 500);
}
