pub mod api;

pub use api::Api;

#[cfg(test)]
use mockall::{automock, predicate::*};

use crate::{
    config::{BackendConfig, verbose},
    models::GenerateRequest,
};
use async_trait::async_trait;
use eyre::Result;
use std::sync::Arc;

/// The remote text-generation service.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait Backend {
    fn name(&self) -> &str;
    async fn health_check(&self) -> Result<()>;
    /// One request, one complete reply text. No streaming.
    async fn generate(&self, request: GenerateRequest) -> Result<String>;
}

pub type ArcBackend = Arc<dyn Backend + Send + Sync>;

pub fn new_backend(config: &BackendConfig) -> ArcBackend {
    let api: Api = config.into();
    verbose!("  [+] Using endpoint {}", api.endpoint());
    log::debug!("Backend endpoint: {}", api.endpoint());
    api.into()
}
