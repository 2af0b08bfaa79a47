//! HTTP client for the decor-suggestion vision API
//!
//! Posts the photo as base64 JSON to `{api_url}/ai/decor-suggestions` and
//! decodes the `analysis` part of the reply. Product suggestions in the same
//! reply are ignored; the catalog provider owns product data.

use crate::{
    error::{AppError, AppResult},
    models::{RoomAnalysis, RoomImage},
    services::providers::RoomAnalysisProvider,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct DecorSuggestionRequest {
    image: String,
}

#[derive(Debug, Deserialize)]
struct DecorSuggestionResponse {
    analysis: RoomAnalysis,
}

#[derive(Clone)]
pub struct VisionApiProvider {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl VisionApiProvider {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn encode_request(image: &RoomImage) -> DecorSuggestionRequest {
        DecorSuggestionRequest {
            image: STANDARD.encode(image.bytes()),
        }
    }
}

#[async_trait::async_trait]
impl RoomAnalysisProvider for VisionApiProvider {
    async fn analyze(&self, image: &RoomImage) -> AppResult<RoomAnalysis> {
        let url = format!("{}/ai/decor-suggestions", self.api_url);
        let mut request = self
            .http_client
            .post(&url)
            .json(&Self::encode_request(image));

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Vision API returned status {}: {}",
                status, body
            )));
        }

        let suggestion: DecorSuggestionResponse = response.json().await?;

        tracing::info!(
            styles = suggestion.analysis.styles.len(),
            colors = suggestion.analysis.color_palette.len(),
            provider = "vision_api",
            "Room image analyzed"
        );

        Ok(suggestion.analysis)
    }

    fn name(&self) -> &'static str {
        "vision_api"
    }
}
