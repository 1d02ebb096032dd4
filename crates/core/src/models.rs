use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::RequestError;

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-GB")]
    EnGb,
}

impl Locale {
    pub fn as_code(self) -> &'static str {
        match self {
            Self::EnGb => "en-GB",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct River {
    pub name: String,
    pub external_id: String,
}

impl River {
    pub fn new(name: &str, external_id: &str) -> Self {
        Self {
            name: name.to_string(),
            external_id: external_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub locale: Locale,
    pub description: String,
    pub help_text: String,
    pub stop_text: String,
    pub unknown_text: String,
    pub rivers: Vec<River>,
}

/// Platform envelope as delivered by the voice runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequest {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,
    pub request: RequestEnvelope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentEnvelope>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentEnvelope {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slots: BTreeMap<String, SlotEnvelope>,
}

/// The platform sends `"slots": null` for intents declared without slots.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, SlotEnvelope>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, SlotEnvelope>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SkillRequest {
    pub fn from_json(raw: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn launch() -> Self {
        Self::with_envelope(RequestEnvelope {
            kind: "LaunchRequest".to_string(),
            request_id: None,
            timestamp: None,
            locale: Some(Locale::EnGb.as_code().to_string()),
            intent: None,
        })
    }

    pub fn intent(name: &str, slots: &[(&str, &str)]) -> Self {
        let slots = slots
            .iter()
            .map(|(slot, value)| {
                (
                    slot.to_string(),
                    SlotEnvelope {
                        name: Some(slot.to_string()),
                        value: Some(value.to_string()),
                    },
                )
            })
            .collect();

        Self::with_envelope(RequestEnvelope {
            kind: "IntentRequest".to_string(),
            request_id: None,
            timestamp: None,
            locale: Some(Locale::EnGb.as_code().to_string()),
            intent: Some(IntentEnvelope {
                name: name.to_string(),
                slots,
            }),
        })
    }

    fn with_envelope(request: RequestEnvelope) -> Self {
        Self {
            version: default_version(),
            session: None,
            request,
        }
    }

    pub fn inbound(&self) -> InboundRequest {
        InboundRequest::from(&self.request)
    }
}

/// Request kinds the dispatcher distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundRequest {
    Launch,
    Intent {
        name: String,
        slots: BTreeMap<String, String>,
    },
    Other {
        kind: String,
    },
}

impl InboundRequest {
    pub fn slot(&self, slot: &str) -> Option<&str> {
        match self {
            Self::Intent { slots, .. } => slots.get(slot).map(String::as_str),
            _ => None,
        }
    }
}

impl From<&RequestEnvelope> for InboundRequest {
    fn from(envelope: &RequestEnvelope) -> Self {
        match (envelope.kind.as_str(), envelope.intent.as_ref()) {
            ("LaunchRequest", _) => Self::Launch,
            ("IntentRequest", Some(intent)) => Self::Intent {
                name: intent.name.clone(),
                slots: intent
                    .slots
                    .iter()
                    .filter_map(|(slot, payload)| {
                        payload
                            .value
                            .as_ref()
                            .map(|value| (slot.clone(), value.clone()))
                    })
                    .collect(),
            },
            (kind, _) => Self::Other {
                kind: kind.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl SkillResponse {
    pub fn plain(text: impl Into<String>, should_end_session: bool) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: OutputSpeech {
                    kind: "PlainText".to_string(),
                    text: text.into(),
                },
                should_end_session,
            },
        }
    }

    pub fn speech_text(&self) -> &str {
        &self.response.output_speech.text
    }

    pub fn should_end_session(&self) -> bool {
        self.response.should_end_session
    }
}

fn default_version() -> String {
    RESPONSE_VERSION.to_string()
}
