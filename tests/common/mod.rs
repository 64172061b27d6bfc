use gemini_relay::config::{Config, GeminiConfig, ServerConfig};
use gemini_relay::services::providers::TextProvider;
use gemini_relay::Application;
use secrecy::Secret;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-1.5-flash";

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

fn test_config(api_base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        gemini: GeminiConfig {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            model: TEST_MODEL.to_string(),
            api_base_url: api_base_url.to_string(),
        },
        service_name: "gemini-relay-test".to_string(),
    }
}

impl TestApp {
    /// Spawn the app with an injected provider implementation.
    #[allow(dead_code)]
    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let config = test_config("http://127.0.0.1:1");
        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        Self::launch(app).await
    }

    /// Spawn the app with the real Gemini provider pointed at the given
    /// base URL (typically a wiremock server).
    #[allow(dead_code)]
    pub async fn spawn_with_api_base(api_base_url: &str) -> Self {
        let config = test_config(api_base_url);
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        Self::launch(app).await
    }

    async fn launch(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to come up by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
