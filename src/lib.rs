pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use config::Config;
use services::providers::gemini::GeminiTextProvider;
use services::providers::TextProvider;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub text_provider: Arc<dyn TextProvider>,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the real Gemini provider.
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let provider = GeminiTextProvider::new(config.gemini.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize Gemini provider: {}", e))?;

        tracing::info!(model = %config.gemini.model, "Initialized Gemini text provider");

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application with an injected provider.
    pub async fn build_with_provider(
        config: Config,
        text_provider: Arc<dyn TextProvider>,
    ) -> anyhow::Result<Self> {
        let state = AppState {
            config: config.clone(),
            text_provider,
        };

        let router = Router::new()
            .route("/health", get(handlers::health::health_check))
            .route("/ready", get(handlers::health::readiness_check))
            .route("/api/gemini", post(handlers::generate::generate))
            .layer(CorsLayer::permissive())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .with_state(state);

        // Port 0 binds a random port for tests.
        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;
        let listener = TcpListener::bind(addr).await?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!("Listening on port {}", self.port);
        axum::serve(self.listener, self.router).await?;

        Ok(())
    }
}
