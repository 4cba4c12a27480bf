#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use crate::backend::{ArcBackend, Backend};
use crate::config::{BackendConfig, user_agent};
use crate::models::{GenerateRequest, TaskType};
use async_trait::async_trait;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time;
use thiserror::Error;

const HEALTHY: &str = "healthy";

/// Client of the generation service: `POST /ai` to generate, `GET /health`
/// to check that it is up.
#[derive(Debug, Clone, Default)]
pub struct Api {
    endpoint: String,
    timeout: Option<time::Duration>,

    task_type: Option<TaskType>,
    context: Option<String>,
    temperature: Option<f32>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("endpoint returned {code}: {body}")]
    Status { code: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("service reported status \"{0}\"")]
    Unhealthy(String),
}

#[async_trait]
impl Backend for Api {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn health_check(&self) -> Result<()> {
        let mut req = reqwest::Client::new()
            .get(format!("{}/health", self.endpoint))
            .header("User-Agent", user_agent());

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let res = req.send().await.wrap_err("checking health")?;
        let res = check_status(res).await?;

        let body = res.text().await.wrap_err("reading health response")?;
        let health = serde_json::from_str::<HealthResponse>(&body)
            .map_err(|_| ApiError::Malformed(body.clone()))?;
        if health.status != HEALTHY {
            return Err(ApiError::Unhealthy(health.status).into());
        }
        Ok(())
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        let payload = AiRequest {
            text: request.text(),
            conversation_id: request.conversation_id(),
            task_type: self.task_type,
            context: self.context.as_deref(),
            temperature: self.temperature,
        };

        let mut req = reqwest::Client::new()
            .post(format!("{}/ai", self.endpoint))
            .header("User-Agent", user_agent())
            .json(&payload);

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let res = req.send().await.wrap_err("sending request")?;
        let res = check_status(res).await?;

        let body = res.text().await.wrap_err("reading response")?;
        let res = serde_json::from_str::<AiResponse>(&body)
            .map_err(|_| ApiError::Malformed(body.clone()))?;

        log::debug!(
            "Generated {} chars for {} (cache hit: {})",
            res.generated_text.chars().count(),
            request.conversation_id(),
            res.cache_hit
        );
        Ok(res.generated_text)
    }
}

impl From<Api> for ArcBackend {
    fn from(value: Api) -> Self {
        Arc::new(value)
    }
}

impl From<&BackendConfig> for Api {
    fn from(value: &BackendConfig) -> Self {
        let mut api = Api::new().with_endpoint(&value.endpoint);
        if let Some(secs) = value.timeout_secs {
            api = api.with_timeout(time::Duration::from_secs(secs as u64));
        }
        if let Some(task_type) = value.task_type {
            api = api.with_task_type(task_type);
        }
        if let Some(context) = &value.context {
            api = api.with_context(context);
        }
        if let Some(temperature) = value.temperature {
            api = api.with_temperature(temperature);
        }
        api
    }
}

impl Api {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = Some(task_type);
        self
    }

    pub fn with_context(mut self, context: &str) -> Self {
        self.context = Some(context.to_string());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response> {
    if res.status().is_success() {
        return Ok(res);
    }
    let code = res.status().as_u16();
    let body = res.text().await.unwrap_or_default();
    log::error!("Error response ({}): {}", code, body);
    Err(ApiError::Status { code, body }.into())
}

#[derive(Debug, Serialize)]
struct AiRequest<'a> {
    text: &'a str,
    conversation_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    task_type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AiResponse {
    generated_text: String,
    #[serde(default)]
    cache_hit: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}
