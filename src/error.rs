/// SchemaRegistryError は Schema Registry 操作に関するエラーを表す。
#[derive(Debug, thiserror::Error)]
pub enum SchemaRegistryError {
    /// HTTP リクエストが失敗した（接続拒否・名前解決失敗・タイムアウトなど）。
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Schema Registry が 200 以外のステータスコードを返した。
    #[error("Bad response code: {status}")]
    ResponseCode {
        /// HTTP ステータスコード。
        status: u16,
        /// レスポンスボディ（診断用）。
        body: String,
    },

    /// レスポンスボディが JSON として不正。
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// レスポンスの期待するフィールドが存在しない、または型が異なる。
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(#[source] serde_json::Error),

    /// リクエストボディのシリアライズに失敗した。
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// HTTP クライアントの構築に失敗した。
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl SchemaRegistryError {
    /// `ResponseCode` の場合はステータスコードを返す。
    pub fn status(&self) -> Option<u16> {
        match self {
            SchemaRegistryError::ResponseCode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// トランスポート層のタイムアウトによるエラーかどうか。
    pub fn is_timeout(&self) -> bool {
        matches!(self, SchemaRegistryError::Http(e) if e.is_timeout())
    }
}
