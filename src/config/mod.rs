use anyhow::{Context, Result};
use dotenvy::dotenv;
use secrecy::Secret;
use serde::Deserialize;
use std::env;

/// Public Gemini API base URL.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when GEMINI_MODEL is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub service_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("RELAY_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("RELAY_PORT must be a valid port number")?;

        let api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?;
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let api_base_url = env::var("GEMINI_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            gemini: GeminiConfig {
                api_key: Secret::new(api_key),
                model,
                api_base_url,
            },
            service_name: "gemini-relay".to_string(),
        })
    }
}
