pub mod config;
pub mod levels;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use river_core::{
    help_response, level_response, route_request, stop_response, unknown_response, CatalogEntry,
    RiverMatch, Route, SkillRequest, SkillResponse,
};
use river_observability::AppMetrics;
use tracing::{debug, info, instrument, warn};

pub use config::SkillConfig;
pub use levels::{HttpLevelSource, LevelSource};

/// Answers one platform request per call. Holds no per-invocation state.
#[derive(Clone)]
pub struct RiverSkill<L>
where
    L: LevelSource,
{
    catalog: &'static CatalogEntry,
    levels: Arc<L>,
    metrics: Arc<AppMetrics>,
}

impl RiverSkill<HttpLevelSource> {
    pub fn from_config(config: &SkillConfig, metrics: Arc<AppMetrics>) -> Result<Self> {
        let levels = HttpLevelSource::new(config)?;
        Ok(Self::new(river_core::load(), Arc::new(levels), metrics))
    }
}

impl<L> RiverSkill<L>
where
    L: LevelSource,
{
    pub fn new(catalog: &'static CatalogEntry, levels: Arc<L>, metrics: Arc<AppMetrics>) -> Self {
        Self {
            catalog,
            levels,
            metrics,
        }
    }

    pub fn catalog(&self) -> &'static CatalogEntry {
        self.catalog
    }

    #[instrument(skip_all, fields(kind = %request.request.kind))]
    pub async fn handle(&self, request: &SkillRequest) -> SkillResponse {
        let started = Instant::now();
        self.metrics.inc_invocation();
        debug!(
            request = %serde_json::to_string(request).unwrap_or_default(),
            "skill request"
        );

        let route = route_request(&request.inbound());
        info!(route = ?route, "request classified");

        let response = match route {
            Route::Help => help_response(self.catalog),
            Route::Stop => stop_response(self.catalog),
            Route::Level { river } => self.level(river.as_deref()).await,
            Route::Fallback { kind } => {
                warn!(kind = %kind, "unknown command");
                help_response(self.catalog)
            }
        };

        self.metrics.observe_latency(started.elapsed());
        debug!(
            response = %serde_json::to_string(&response).unwrap_or_default(),
            "skill response"
        );

        response
    }

    async fn level(&self, name: Option<&str>) -> SkillResponse {
        let resolved = match name {
            Some(name) => self.catalog.resolve_river(name),
            None => RiverMatch::NotFound,
        };

        let RiverMatch::Found(river) = resolved else {
            self.metrics.inc_unknown_river();
            info!(river = name.unwrap_or_default(), "river not in catalog");
            return unknown_response(self.catalog);
        };

        self.metrics.inc_level_lookup();
        match self.levels.fetch_level(river).await {
            Ok(report) => level_response(&report),
            Err(err) => {
                self.metrics.inc_upstream_failure();
                warn!(river = %river.name, error = %err, "level lookup failed");
                unknown_response(self.catalog)
            }
        }
    }
}
