//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the bridge handler
//! - Wire up middleware (tracing, request timeout, request ID)
//! - Bind server to listener
//! - Dispatch static requests (local file, dev-server redirect, 404)
//! - Render app shells for page requests

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::artifact::{ArtifactError, ShellLoader};
use crate::http::dispatcher::{not_found, Dispatched, Dispatcher};
use crate::lifecycle::startup::Runtime;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub shells: Arc<ShellLoader>,
}

/// HTTP server for the bridge.
pub struct HttpServer {
    router: Router,
    runtime: Runtime,
}

impl HttpServer {
    /// Create a new HTTP server from an initialized runtime.
    pub fn new(runtime: Runtime) -> Self {
        let state = AppState {
            dispatcher: Arc::new(Dispatcher::new(runtime.registry.clone())),
            shells: Arc::new(ShellLoader::new(
                runtime.registry.clone(),
                runtime.liveness.clone(),
            )),
        };

        let router = Self::build_router(&runtime, state);
        Self { router, runtime }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(runtime: &Runtime, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(bridge_handler))
            .route("/", any(bridge_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                runtime.config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for serving without a listener (tests, embedding).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until Ctrl+C or the shutdown broadcast fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            apps = self.runtime.registry.apps().len(),
            live = self.runtime.liveness.live_count(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown broadcast received");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }
}

/// Main handler: static dispatch first, then app shells.
async fn bridge_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request = match state.dispatcher.dispatch(request).await {
        Dispatched::Response(response) => return response,
        Dispatched::Application(request) => request,
    };

    let start_time = Instant::now();
    let path = request.uri().path();
    let Some(app) = state.dispatcher.routes().app_for_path(path) else {
        tracing::debug!(path = %path, "No app route matched");
        metrics::record_dispatch("not_found", start_time);
        return not_found();
    };

    let response = match state.shells.load(app).await {
        Ok(html) => Html(html).into_response(),
        Err(e @ (ArtifactError::NotFound { .. } | ArtifactError::UnknownApp(_))) => {
            tracing::warn!(app = %app, error = %e, "App shell unavailable");
            not_found()
        }
        Err(e) => {
            tracing::error!(app = %app, error = %e, "Failed to load app shell");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load app shell").into_response()
        }
    };

    metrics::record_dispatch("shell", start_time);
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
