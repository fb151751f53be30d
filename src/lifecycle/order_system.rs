use crate::aggregator::OrderAggregator;
use crate::clients::HttpProductClient;
use crate::lifecycle::{AppConfig, SystemError};
use crate::routes;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};

/// The runtime orchestrator for the order service.
///
/// `OrderSystem` is responsible for:
/// - **Dependency Wiring**: Building the single shared product client and
///   handing it to the aggregator
/// - **Lifecycle Management**: Starting the HTTP server task and stopping it
///   gracefully
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::start(AppConfig::from_env()?).await?;
/// println!("listening on {}", system.local_addr());
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl OrderSystem {
    /// Builds the production wiring from `config` and starts serving.
    ///
    /// This method:
    /// 1. Builds one `HttpProductClient` (reused by every request)
    /// 2. Wraps it in an `OrderAggregator` with the fixed product lookup
    /// 3. Binds `config.bind_addr` and spawns the server task
    pub async fn start(config: AppConfig) -> Result<Self, SystemError> {
        let gateway = HttpProductClient::new(
            config.product_service_base_url,
            config.product_service_timeout,
        )?;
        info!(
            base_url = gateway.base_url(),
            timeout = ?config.product_service_timeout,
            "Product client ready"
        );

        let aggregator = OrderAggregator::with_fixed_lookup(Arc::new(gateway));
        Self::start_with(config.bind_addr, aggregator).await
    }

    /// Starts serving an already-built aggregator.
    ///
    /// Binding port `0` picks a free port; read it back with [`local_addr`](Self::local_addr).
    pub async fn start_with(
        bind_addr: SocketAddr,
        aggregator: OrderAggregator,
    ) -> Result<Self, SystemError> {
        let listener = TcpListener::bind(bind_addr)
            .await
            .map_err(|source| SystemError::Bind {
                addr: bind_addr,
                source,
            })?;
        let local_addr = listener.local_addr().map_err(SystemError::Server)?;

        let app = routes::build_router(aggregator).layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    // A dropped sender also means stop
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!(%local_addr, "Order service listening");

        Ok(Self {
            local_addr,
            shutdown_tx,
            handle,
        })
    }

    /// The address the server is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Gracefully shuts down the server.
    ///
    /// In-flight requests are allowed to finish. Returns an error if the
    /// server stopped with an I/O error or its task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // The receiver is gone only if the server already exited; the join below reports why
        let _ = self.shutdown_tx.send(());

        match self.handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                error!(error = %e, "Server stopped with an error");
                return Err(SystemError::Server(e));
            }
            Err(e) => {
                error!(error = %e, "Server task failed");
                return Err(SystemError::Task(e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
