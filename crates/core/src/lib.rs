pub mod catalog;
pub mod error;
pub mod intent;
pub mod level;
pub mod models;
pub mod speech;

pub use catalog::{load, resolve_river, RiverMatch};
pub use error::{LevelError, RequestError};
pub use intent::{route_request, Route};
pub use level::{LevelReport, StateValue};
pub use models::*;
pub use speech::{help_response, level_response, stop_response, unknown_response};
