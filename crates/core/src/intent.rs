use crate::models::InboundRequest;

pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const LEVEL_INTENT: &str = "LevelIntent";
pub const RIVER_SLOT: &str = "river";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Help,
    Stop,
    Level { river: Option<String> },
    /// Anything not recognised; answered with help.
    Fallback { kind: String },
}

pub fn route_request(request: &InboundRequest) -> Route {
    match request {
        InboundRequest::Launch => Route::Help,
        InboundRequest::Intent { name, .. } => match name.as_str() {
            CANCEL_INTENT | STOP_INTENT => Route::Stop,
            HELP_INTENT => Route::Help,
            LEVEL_INTENT => Route::Level {
                river: request
                    .slot(RIVER_SLOT)
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(ToString::to_string),
            },
            other => Route::Fallback {
                kind: format!("IntentRequest:{other}"),
            },
        },
        InboundRequest::Other { kind } => Route::Fallback { kind: kind.clone() },
    }
}
