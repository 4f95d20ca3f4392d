//! Server configuration from command-line flags and environment variables

use axum::http::HeaderValue;
use chrono::NaiveDate;
use clap::Parser;
use podcast_core::context::{DEFAULT_PUBLIC_URL, DEFAULT_RELEASE_DATE};
use podcast_core::PipelineContext;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Parser)]
#[command(name = "podcast-server")]
#[command(author, version, about = "Mock podcast automation API", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "PODCAST_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PODCAST_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Base URL used when building download links
    #[arg(long, env = "PODCAST_PUBLIC_URL", default_value = DEFAULT_PUBLIC_URL)]
    pub public_url: String,

    /// Date stamped on generated artifacts (YYYY-MM-DD)
    #[arg(long, env = "PODCAST_RELEASE_DATE", default_value = DEFAULT_RELEASE_DATE)]
    pub release_date: NaiveDate,

    /// Allowed CORS origins: "*" for any, or a comma-separated list
    #[arg(long, env = "PODCAST_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn pipeline_context(&self) -> podcast_core::Result<PipelineContext> {
        PipelineContext::new(self.public_url.clone(), self.release_date)
    }
}

/// Origins allowed to make cross-origin requests
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CorsOrigins {
    #[default]
    Any,
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parse `*` or a comma-separated origin list; unparsable entries are skipped
    pub fn parse(origins: &str) -> Self {
        if origins.trim() == "*" {
            return Self::Any;
        }

        let allowed = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse().ok())
            .collect();
        Self::List(allowed)
    }
}
