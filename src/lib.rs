//! k1s0-schemaregistry-client: Schema Registry の HTTP クライアントライブラリ。
//!
//! スキーマ ID によるスキーマ取得、サブジェクトへのスキーマ登録、
//! サブジェクトバージョンとの互換性チェック、サブジェクト一覧取得を提供する。
//! スキーマ本体は不透明な文字列として扱い、解析や検証は行わない。
//!
//! # 使用例
//!
//! ```rust,no_run
//! use k1s0_schemaregistry_client::{
//!     HttpSchemaRegistryClient, SchemaRegistryClient, SchemaRegistryConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SchemaRegistryConfig::new("http://schema-registry:8081");
//!     let client = HttpSchemaRegistryClient::new(config)?;
//!
//!     let schema = r#"{"type":"record","name":"UserCreated","fields":[]}"#;
//!     if client
//!         .check_compatibility("user-created-value", schema, "latest")
//!         .await?
//!     {
//!         let id = client
//!             .register_subject_version("user-created-value", schema)
//!             .await?;
//!         println!("Registered schema id={}", id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod schema;

pub use client::{HttpSchemaRegistryClient, SchemaRegistryClient};
pub use config::SchemaRegistryConfig;
pub use error::SchemaRegistryError;
pub use schema::POST_CONTENT_TYPE;

#[cfg(feature = "mock")]
pub use client::MockSchemaRegistryClient;
