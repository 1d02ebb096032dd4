use anyhow::{Context, Result};
use reqwest::Client;
use river_core::{LevelError, LevelReport, River};
use tracing::info;

use crate::config::SkillConfig;

pub trait LevelSource: Send + Sync {
    async fn fetch_level(&self, river: &River) -> Result<LevelReport, LevelError>;
}

/// Reads live levels from the rainchasers api.
#[derive(Debug, Clone)]
pub struct HttpLevelSource {
    client: Client,
    api_base: String,
}

impl HttpLevelSource {
    pub fn new(config: &SkillConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
        })
    }

    pub fn river_url(&self, river: &River) -> String {
        format!("{}/river/{}", self.api_base, river.external_id)
    }
}

impl LevelSource for HttpLevelSource {
    async fn fetch_level(&self, river: &River) -> Result<LevelReport, LevelError> {
        let url = self.river_url(river);
        info!(url = %url, river = %river.name, "requesting river level");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LevelError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        tracing::debug!(body = %String::from_utf8_lossy(&body), "level api body");
        LevelReport::from_slice(&body)
    }
}

fn transport_error(err: reqwest::Error) -> LevelError {
    if err.is_timeout() {
        LevelError::Timeout
    } else {
        LevelError::Transport(err.to_string())
    }
}
