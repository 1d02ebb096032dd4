use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    invocations_total: AtomicU64,
    level_lookups_total: AtomicU64,
    unknown_river_total: AtomicU64,
    upstream_failures_total: AtomicU64,
    total_latency_millis: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub invocations_total: u64,
    pub level_lookups_total: u64,
    pub unknown_river_total: u64,
    pub upstream_failures_total: u64,
    pub avg_latency_millis: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_invocation(&self) {
        self.invocations_total.fetch_add(1, Ordering::Relaxed);
        counter!("river_skill_invocations_total").increment(1);
    }

    pub fn inc_level_lookup(&self) {
        self.level_lookups_total.fetch_add(1, Ordering::Relaxed);
        counter!("river_skill_level_lookups_total").increment(1);
    }

    pub fn inc_unknown_river(&self) {
        self.unknown_river_total.fetch_add(1, Ordering::Relaxed);
        counter!("river_skill_unknown_river_total").increment(1);
    }

    pub fn inc_upstream_failure(&self) {
        self.upstream_failures_total.fetch_add(1, Ordering::Relaxed);
        counter!("river_skill_upstream_failures_total").increment(1);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let invocations = self.invocations_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            invocations_total: invocations,
            level_lookups_total: self.level_lookups_total.load(Ordering::Relaxed),
            unknown_river_total: self.unknown_river_total.load(Ordering::Relaxed),
            upstream_failures_total: self.upstream_failures_total.load(Ordering::Relaxed),
            avg_latency_millis: if invocations == 0 {
                0.0
            } else {
                latency as f64 / invocations as f64
            },
        }
    }
}

/// Crates whose spans and events the skill binaries log by default.
const SKILL_TARGETS: &[&str] = &["river_api", "river_skill", "river_cli"];

pub fn default_filter(service_name: &str) -> String {
    let mut targets = vec![service_name];
    targets.extend(
        SKILL_TARGETS
            .iter()
            .copied()
            .filter(|target| *target != service_name),
    );

    targets
        .iter()
        .map(|target| format!("{target}=info"))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(service_name)));

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();

        tracing::info!(service = service_name, "tracing initialised");
    });
}
