//! Shared fixtures for the integration suites.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use river_core::{LevelError, LevelReport, River};
use river_observability::AppMetrics;
use river_skill::{LevelSource, RiverSkill};

pub const RIBBLE_BODY: &str =
    r#"{"data":{"river":"Ribble","section":"Lower","state":{"text":"Normal","value":"0.3"}}}"#;
pub const DEE_BODY: &str =
    r#"{"data":{"river":"Dee","section":"Chester Weir","state":{"text":"High","value":"1.2"}}}"#;

/// Every lookup gets the same canned reply.
pub struct StubLevels {
    reply: StubReply,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

pub enum StubReply {
    Body(&'static str),
    Status(u16),
    Timeout,
}

impl StubLevels {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

impl LevelSource for StubLevels {
    async fn fetch_level(&self, river: &River) -> Result<LevelReport, LevelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().push(river.external_id.clone());

        match &self.reply {
            StubReply::Body(body) => LevelReport::from_slice(body.as_bytes()),
            StubReply::Status(status) => Err(LevelError::Status(*status)),
            StubReply::Timeout => Err(LevelError::Timeout),
        }
    }
}

pub fn skill_with(reply: StubReply) -> (RiverSkill<StubLevels>, Arc<StubLevels>, Arc<AppMetrics>) {
    let levels = Arc::new(StubLevels::new(reply));
    let metrics = AppMetrics::shared();
    let skill = RiverSkill::new(river_core::load(), levels.clone(), metrics.clone());
    (skill, levels, metrics)
}
