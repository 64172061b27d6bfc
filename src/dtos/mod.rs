use serde::{Deserialize, Serialize};

/// Inbound request envelope for the relay endpoint.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Outbound response envelope carrying the generated text.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}
