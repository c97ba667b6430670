use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::SchemaRegistryError;

/// POST リクエストで送信する Content-Type。
pub const POST_CONTENT_TYPE: &str = "application/vnd.schemaregistry.v1+json";

/// スキーマ登録・互換性チェックで共通のリクエストペイロード。
///
/// スキーマ本体は解釈せず、文字列のまま `{"schema": "..."}` として送信する。
#[derive(Debug, Serialize)]
pub(crate) struct SchemaRequest<'a> {
    pub schema: &'a str,
}

/// `/schemas/ids/{id}` のレスポンス。
#[derive(Debug, Deserialize)]
pub(crate) struct SchemaByIdResponse {
    pub schema: String,
}

/// `/subjects/{subject}/versions` への登録レスポンス。
#[derive(Debug, Deserialize)]
pub(crate) struct RegisterSchemaResponse {
    pub id: i32,
}

/// `/compatibility/subjects/{subject}/versions/{version}` のレスポンス。
#[derive(Debug, Deserialize)]
pub(crate) struct CompatibilityResponse {
    pub is_compatible: bool,
}

/// レスポンスボディを型付き構造体へデコードする。
///
/// 先にボディ全体を JSON として検証し、構文エラーは `Decode` とする。
/// 構文が正しい場合のフィールド欠落や型不一致は `UnexpectedResponse` とする。
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, SchemaRegistryError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(SchemaRegistryError::Decode)?;
    serde_json::from_value(value).map_err(SchemaRegistryError::UnexpectedResponse)
}

/// リクエストボディをエンコードする。
pub(crate) fn encode_schema_request(schema: &str) -> Result<Vec<u8>, SchemaRegistryError> {
    serde_json::to_vec(&SchemaRequest { schema }).map_err(SchemaRegistryError::Serialization)
}
