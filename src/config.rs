use serde::{Deserialize, Serialize};

/// Schema Registry 接続設定。
///
/// `host` はスキームを含む完全なベース URL（例: `http://schema-registry:8081`）を正規形とする。
/// 旧来の「ホスト名 + ポート」形式は `port` を指定することで表現する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRegistryConfig {
    /// Schema Registry のホスト。
    /// 例: "http://schema-registry:8081"（docker-compose）
    /// または "schema-registry"（`port` と併用する場合）
    pub host: String,

    /// ポート番号。指定した場合は `host` のオーソリティ部に `:{port}` を付与する。
    #[serde(default)]
    pub port: Option<u16>,

    /// リクエスト全体のタイムアウト（秒）。
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// 読み取りタイムアウト（秒）。レスポンスヘッダーの待機もこの値で打ち切られる。
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,

    /// ホストごとに保持するアイドル接続数の上限。
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_read_timeout_secs() -> u64 {
    2
}

fn default_pool_max_idle_per_host() -> usize {
    5
}

impl SchemaRegistryConfig {
    /// スキーム付きのホスト URL で設定を作成する。
    ///
    /// タイムアウトは 5 秒、読み取りタイムアウトは 2 秒、アイドル接続数は 5 がデフォルト値となる。
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            timeout_secs: default_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }

    /// ホスト名とポート番号から設定を作成する。
    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self {
            port: Some(port),
            ..Self::new(host)
        }
    }

    /// リクエストパスの前に付与するベース URL を返す（末尾スラッシュなし）。
    ///
    /// スキームが省略されている場合は `http://` を補う。
    /// `port` はパスの前（オーソリティ部の末尾）に挿入する。
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        let (scheme, rest) = host.split_once("://").unwrap_or(("http", host));
        let (authority, path) = match rest.find('/') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };
        match self.port {
            Some(port) => format!("{}://{}:{}{}", scheme, authority, port, path),
            None => format!("{}://{}{}", scheme, authority, path),
        }
    }
}
