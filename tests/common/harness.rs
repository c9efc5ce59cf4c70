//! Test server harness.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use pairing::alias::{AliasIndex, FileDataSource};
use pairing::gateway::{HandlerState, create_router_with_state};
use pairing::oracle::HttpOracle;
use pairing::search::{FanOutConfig, RecommendConfig};
use pairing::service::{PairingService, ServiceSettings};

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub oracle_url: String,
    pub alias_table_path: Option<PathBuf>,
    pub dataset_path: Option<PathBuf>,
    pub call_timeout: Duration,
    pub recommend: RecommendConfig,
}

impl TestServerConfig {
    pub fn new(oracle_url: impl Into<String>) -> Self {
        Self {
            oracle_url: oracle_url.into(),
            alias_table_path: None,
            dataset_path: None,
            call_timeout: Duration::from_secs(5),
            recommend: RecommendConfig::default(),
        }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns the full pairing server on an ephemeral port, talking to the oracle at
/// `config.oracle_url` over HTTP.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let source = FileDataSource::new(config.alias_table_path, config.dataset_path);
    let index = Arc::new(AliasIndex::load(&source));

    let oracle = HttpOracle::new(&config.oracle_url, config.call_timeout * 2)
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let settings = ServiceSettings {
        fanout: FanOutConfig {
            max_concurrency: pairing::MAX_PAIRS,
            call_timeout: config.call_timeout,
        },
        recommend: config.recommend,
        priorities: None,
    };
    let service = PairingService::new(index, Arc::new(oracle), settings);
    let app = create_router_with_state(HandlerState::new(service, config.oracle_url));

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .ok();
    });

    Ok(TestServer {
        addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
}

/// Reads the `x-pairing-status` header and the JSON body.
pub async fn read_response(resp: reqwest::Response) -> (u16, String, serde_json::Value) {
    let status = resp.status().as_u16();
    let header = resp
        .headers()
        .get(pairing::gateway::PAIRING_STATUS_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("missing")
        .to_string();
    let body = resp.json().await.unwrap_or(serde_json::Value::Null);
    (status, header, body)
}
