//! Lazily initialized TickTick client shared by all tool calls.
//!
//! The server owns one [`ClientContext`] and passes it by reference to every
//! tool. The first call that needs the API runs the initializer; later calls
//! reuse the built client. A failed initialization leaves the slot empty, so
//! the next call tries again.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::OnceCell;
use tracing::{error, info};

use ticktick_client::{ClientConfig, ClientResult, TickTickApi, TickTickClient};

/// Text returned to the caller when the client cannot be built.
pub const INIT_FAILURE_MESSAGE: &str =
    "Failed to initialize TickTick client. Please check your API credentials.";

type Initializer =
    Arc<dyn Fn() -> BoxFuture<'static, ClientResult<Arc<dyn TickTickApi>>> + Send + Sync>;

/// Where to look for credentials when connecting.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// Holder for the one shared API client.
pub struct ClientContext {
    client: OnceCell<Arc<dyn TickTickApi>>,
    initializer: Initializer,
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl ClientContext {
    /// Create a context that builds its client with `initializer` on first use.
    pub fn new<F, Fut>(initializer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<Arc<dyn TickTickApi>>> + Send + 'static,
    {
        Self {
            client: OnceCell::new(),
            initializer: Arc::new(
                move || -> BoxFuture<'static, ClientResult<Arc<dyn TickTickApi>>> {
                    Box::pin(initializer())
                },
            ),
        }
    }

    /// Create a context that connects to the real API using `source`.
    pub fn from_source(source: ConfigSource) -> Self {
        Self::new(move || {
            let source = source.clone();
            async move { connect(&source).await }
        })
    }

    /// Create a context around an already-built client.
    pub fn with_client(client: Arc<dyn TickTickApi>) -> Self {
        let fallback = Arc::clone(&client);
        Self {
            client: OnceCell::new_with(Some(client)),
            initializer: Arc::new(
                move || -> BoxFuture<'static, ClientResult<Arc<dyn TickTickApi>>> {
                    let client = Arc::clone(&fallback);
                    Box::pin(async move { Ok(client) })
                },
            ),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// Return the shared client, initializing it if needed.
    pub async fn client(&self) -> ClientResult<Arc<dyn TickTickApi>> {
        self.client
            .get_or_try_init(|| (self.initializer)())
            .await
            .cloned()
    }

    /// Like [`Self::client`], but reports failure as the fixed caller-facing
    /// message after logging the cause.
    pub async fn ensure_client(&self) -> Result<Arc<dyn TickTickApi>, String> {
        self.client().await.map_err(|e| {
            error!(error = %e, "Failed to initialize TickTick client");
            if e.is_auth_failure() {
                error!("The access token may have expired. Obtain a new one and update TICKTICK_ACCESS_TOKEN.");
            }
            INIT_FAILURE_MESSAGE.to_string()
        })
    }
}

/// Load configuration, build the HTTP client and verify connectivity.
async fn connect(source: &ConfigSource) -> ClientResult<Arc<dyn TickTickApi>> {
    let config = ClientConfig::load(source.config_path.as_deref(), source.env_file.as_deref())?;
    let client = TickTickClient::new(&config)?;
    info!(base_url = client.base_url(), "TickTick client initialized");

    let projects = client.get_projects().await?;
    info!(
        project_count = projects.len(),
        "Successfully connected to TickTick API"
    );

    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ticktick_client::ClientError;

    use super::*;
    use crate::tools::testing::FakeApi;

    #[tokio::test]
    async fn test_initializer_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let context = ClientContext::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ClientError>(Arc::new(FakeApi::default()) as Arc<dyn TickTickApi>) }
        });

        assert!(!context.is_initialized());
        for _ in 0..3 {
            context.ensure_client().await.unwrap();
        }
        assert!(context.is_initialized());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_calls_share_one_init() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let context = ClientContext::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async {
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                Ok::<_, ClientError>(Arc::new(FakeApi::default()) as Arc<dyn TickTickApi>)
            }
        });

        let (a, b, c, d) = tokio::join!(
            context.ensure_client(),
            context.ensure_client(),
            context.ensure_client(),
            context.ensure_client(),
        );

        let clients = [a.unwrap(), b.unwrap(), c.unwrap(), d.unwrap()];
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(clients
            .iter()
            .all(|c| std::ptr::addr_eq(Arc::as_ptr(c), Arc::as_ptr(&clients[0]))));
    }

    #[tokio::test]
    async fn test_failed_init_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let context = ClientContext::new(move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(ClientError::config_error("no token"))
                } else {
                    Ok(Arc::new(FakeApi::default()) as Arc<dyn TickTickApi>)
                }
            }
        });

        let first = context.ensure_client().await.unwrap_err();
        assert_eq!(first, INIT_FAILURE_MESSAGE);
        assert!(!context.is_initialized());

        context.ensure_client().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_with_client_is_ready() {
        let context = ClientContext::with_client(Arc::new(FakeApi::default()));
        assert!(context.is_initialized());
        assert!(context.client().await.is_ok());
    }
}
