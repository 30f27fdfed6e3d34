//! HTTP implementation of the planner API
//!
//! Thin reqwest client over the two service endpoints. No retries:
//! re-invocation is left to the user, and the session layer converts every
//! error into a fixed fallback outcome.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, ExplainRequest, ExplainResponse, GenerateRequest, GenerateResponse, PlannerApi};
use crate::config::ApiConfig;

/// HTTP client for the planner services
pub struct HttpPlannerApi {
    base_url: String,
    http: Client,
}

impl HttpPlannerApi {
    /// Create a client from configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        debug!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn post<Req: Serialize + Sync, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "post: sending request");

        let response = self.http.post(&url).json(request).send().await.map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "post: API error");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(ApiError::Network)
    }
}

#[async_trait]
impl PlannerApi for HttpPlannerApi {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ApiError> {
        debug!(
            selected = request.selected_courses.len(),
            locked = request.locked_courses.len(),
            "generate: called"
        );
        self.post("/schedule/generate", &request).await
    }

    async fn explain(&self, request: ExplainRequest) -> Result<ExplainResponse, ApiError> {
        debug!(schedule_len = request.schedule.len(), "explain: called");
        self.post("/llm/explain", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:8000/".to_string(),
            timeout_ms: 30_000,
        };
        let api = HttpPlannerApi::from_config(&config).unwrap();
        assert_eq!(api.base_url, "http://127.0.0.1:8000");
    }
}
