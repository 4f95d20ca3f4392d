//! Application state

use crate::config::{Config, CorsOrigins};
use anyhow::Result;
use podcast_core::PipelineContext;
use std::sync::Arc;

/// Read-only state shared by every handler
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Release date and public URL stamped on generated artifacts
    pub context: Arc<PipelineContext>,

    /// Origins allowed by the CORS layer
    pub cors_origins: CorsOrigins,
}

impl AppState {
    pub fn new(context: PipelineContext, cors_origins: CorsOrigins) -> Self {
        Self {
            context: Arc::new(context),
            cors_origins,
        }
    }

    /// Build state from the parsed server configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let context = config.pipeline_context()?;
        let cors_origins = CorsOrigins::parse(&config.cors_origins);

        if let CorsOrigins::List(ref origins) = cors_origins {
            if origins.is_empty() {
                tracing::warn!("No valid CORS origins configured, cross-origin requests will be refused");
            }
        }

        Ok(Self::new(context, cors_origins))
    }
}
