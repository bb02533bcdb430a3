//! ログアーカイブ
//!
//! 実行ログをS3互換オブジェクトストレージへコピーする

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// アーカイブエラー
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Remote returned a non-success status
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// オブジェクトストレージへの書き込みインターフェース
///
/// 同一キーへの再アップロードは上書きとなる（PUTセマンティクス）。
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// オブジェクトを格納する
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>)
        -> Result<(), ArchiveError>;
}

/// S3互換ストア
///
/// `PUT {endpoint}/{bucket}/{key}` を発行する薄いHTTPラッパー。
/// MinIO等のS3互換エンドポイントを想定する。
pub struct S3CompatibleStore {
    client: Client,
    endpoint: String,
}

impl S3CompatibleStore {
    /// 新しいストアを作成
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3CompatibleStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), ArchiveError> {
        let url = format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            bucket,
            key
        );

        let response = self
            .client
            .put(&url)
            .header("Content-Type", "text/csv")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArchiveError::UploadFailed(format!(
                "remote returned HTTP {} for {}",
                status, url
            )));
        }

        Ok(())
    }
}

/// アーカイブ済みログの参照表記を生成する
///
/// 通知メッセージおよび実行サマリーで使用する。例: `s3://bucket/prefix/file.csv`
pub fn object_reference(bucket: &str, key: &str) -> String {
    format!("s3://{}/{}", bucket, key)
}
