//! API server implementation

use std::future::Future;

use inspector_core::{Inspector, InspectorConfig};
use tokio::net::TcpListener;

use crate::Result;
use crate::routes::{AppState, router};

/// Deep Inspector HTTP server
pub struct Server {
    bind_addr: String,
    inspector: Inspector,
}

impl Server {
    /// Create a server from configuration, wiring the network probes.
    pub fn new(config: &InspectorConfig) -> Result<Self> {
        Ok(Self::with_inspector(
            config.bind_addr(),
            Inspector::from_config(config)?,
        ))
    }

    /// Create a server around an existing inspector.
    pub fn with_inspector(bind_addr: impl Into<String>, inspector: Inspector) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            inspector,
        }
    }

    /// Address the server will bind.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Bind the listening socket.
    pub async fn bind(&self) -> Result<TcpListener> {
        let listener = TcpListener::bind(&self.bind_addr).await?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);
        Ok(listener)
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = router(AppState {
            inspector: self.inspector,
        });
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Bind and serve until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await
    }
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
