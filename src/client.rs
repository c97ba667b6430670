use async_trait::async_trait;
#[cfg(feature = "mock")]
use mockall::automock;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    config::SchemaRegistryConfig,
    error::SchemaRegistryError,
    schema::{
        decode_body, encode_schema_request, CompatibilityResponse, RegisterSchemaResponse,
        SchemaByIdResponse, POST_CONTENT_TYPE,
    },
};

/// Schema Registry クライアントのインターフェース。
///
/// 各操作は 1 回の HTTP リクエストに対応し、リトライやキャッシュは行わない。
/// `mock` feature を有効にすると `MockSchemaRegistryClient` が生成される。
#[async_trait]
#[cfg_attr(feature = "mock", automock)]
pub trait SchemaRegistryClient: Send + Sync {
    /// クライアントの接続設定を返す。
    fn config(&self) -> &SchemaRegistryConfig;

    /// グローバルスキーマ ID でスキーマ文字列を取得する。
    async fn get_schema_by_id(&self, id: i32) -> Result<String, SchemaRegistryError>;

    /// スキーマをサブジェクトの新しいバージョンとして登録し、スキーマ ID を返す。
    ///
    /// スキーマ ID は `i32` として扱う。小数表記（`5.0` など）や `i32` の範囲を超える ID は
    /// 切り捨てずに `UnexpectedResponse` とする。
    async fn register_subject_version(
        &self,
        subject: &str,
        schema: &str,
    ) -> Result<i32, SchemaRegistryError>;

    /// スキーマがサブジェクトの指定バージョンと互換かどうかを確認する。
    ///
    /// `version` はバージョン番号または `latest` をそのまま指定する。
    async fn check_compatibility(
        &self,
        subject: &str,
        schema: &str,
        version: &str,
    ) -> Result<bool, SchemaRegistryError>;

    /// 登録されているすべてのサブジェクト名を Registry が返した順序のまま返す。
    async fn list_subjects(&self) -> Result<Vec<String>, SchemaRegistryError>;
}

/// HTTP 経由で Schema Registry と通信する実装。
///
/// 内部状態は不変の設定とコネクションプールのみのため、`Arc` で共有して並行に呼び出せる。
#[derive(Debug, Clone)]
pub struct HttpSchemaRegistryClient {
    config: SchemaRegistryConfig,
    http_client: reqwest::Client,
}

impl HttpSchemaRegistryClient {
    /// 設定からデフォルトの HTTP クライアントを構築する。
    ///
    /// アイドル接続数・読み取りタイムアウト・全体タイムアウトは設定値を使用する。
    pub fn new(config: SchemaRegistryConfig) -> Result<Self, SchemaRegistryError> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SchemaRegistryError::Client(e.to_string()))?;

        Ok(Self::with_http_client(config, http_client))
    }

    /// 呼び出し側が用意した HTTP クライアントを使用する。
    ///
    /// タイムアウトやプール設定は渡されたクライアントのものが優先され、設定値は無視される。
    pub fn with_http_client(config: SchemaRegistryConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// ステータスコードが 200 であることを確認し、レスポンスボディを返す。
    ///
    /// 200 以外は 2xx であっても `ResponseCode` とする。
    async fn read_ok_body(response: reqwest::Response) -> Result<Vec<u8>, SchemaRegistryError> {
        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            warn!("Schema Registry returned status {}: {}", status, body);
            return Err(SchemaRegistryError::ResponseCode {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, SchemaRegistryError> {
        let response = self.http_client.get(self.url(path)).send().await?;
        Self::read_ok_body(response).await
    }

    async fn post_schema(&self, path: &str, schema: &str) -> Result<Vec<u8>, SchemaRegistryError> {
        let body = encode_schema_request(schema)?;
        let response = self
            .http_client
            .post(self.url(path))
            .header(CONTENT_TYPE, POST_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        Self::read_ok_body(response).await
    }
}

#[async_trait]
impl SchemaRegistryClient for HttpSchemaRegistryClient {
    fn config(&self) -> &SchemaRegistryConfig {
        &self.config
    }

    async fn get_schema_by_id(&self, id: i32) -> Result<String, SchemaRegistryError> {
        debug!("Fetching schema by id={}", id);

        let body = self.get(&format!("/schemas/ids/{}", id)).await?;
        let data: SchemaByIdResponse = decode_body(&body)?;
        Ok(data.schema)
    }

    async fn register_subject_version(
        &self,
        subject: &str,
        schema: &str,
    ) -> Result<i32, SchemaRegistryError> {
        debug!("Registering schema: subject={}", subject);

        let body = self
            .post_schema(&format!("/subjects/{}/versions", subject), schema)
            .await?;
        let reg: RegisterSchemaResponse = decode_body(&body)?;

        debug!("Schema registered: subject={}, id={}", subject, reg.id);
        Ok(reg.id)
    }

    async fn check_compatibility(
        &self,
        subject: &str,
        schema: &str,
        version: &str,
    ) -> Result<bool, SchemaRegistryError> {
        debug!(
            "Checking compatibility: subject={}, version={}",
            subject, version
        );

        let body = self
            .post_schema(
                &format!("/compatibility/subjects/{}/versions/{}", subject, version),
                schema,
            )
            .await?;
        let result: CompatibilityResponse = decode_body(&body)?;

        debug!(
            "Compatibility check result: subject={}, version={}, is_compatible={}",
            subject, version, result.is_compatible
        );
        Ok(result.is_compatible)
    }

    async fn list_subjects(&self) -> Result<Vec<String>, SchemaRegistryError> {
        debug!("Listing all subjects");

        let body = self.get("/subjects").await?;
        let subjects: Vec<String> = decode_body(&body)?;

        debug!("Found {} subjects", subjects.len());
        Ok(subjects)
    }
}
