//! Webサイト稼働監視ツール
//!
//! URLリストの各エンドポイントを1回ずつチェックし、結果をCSVに記録、
//! リモートストレージへアーカイブ、問題があれば通知を送信する。

#![warn(missing_docs)]

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// エラー型定義
pub mod error;

/// エンドポイントチェック
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// ログアーカイブ（オブジェクトストレージ）
pub mod archive;

/// アラート通知
pub mod notify;

/// CSVレコーダー
pub mod recorder;

/// 実行オーケストレーター
pub mod runner;

/// 型定義
pub mod types;
