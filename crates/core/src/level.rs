use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LevelError;

#[derive(Debug, Deserialize)]
struct LevelEnvelope {
    data: LevelReport,
}

/// Subset of the upstream river payload that gets spoken back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelReport {
    pub river: String,
    pub section: String,
    pub state: RiverState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiverState {
    pub text: String,
    pub value: StateValue,
}

/// The api sends the gauge reading either as a string or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl LevelReport {
    pub fn from_slice(body: &[u8]) -> Result<Self, LevelError> {
        let envelope: LevelEnvelope = serde_json::from_slice(body)?;
        Ok(envelope.data)
    }

    pub fn sentence(&self) -> String {
        format!(
            "The river {}, {} is {}, {}",
            self.river, self.section, self.state.text, self.state.value
        )
    }
}
