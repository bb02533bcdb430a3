//! エンドポイントチェック
//!
//! URLごとに1回のGETを発行し、成功／失敗を分類する

pub mod checker;

pub use checker::UrlChecker;
