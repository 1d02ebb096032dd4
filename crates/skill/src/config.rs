use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://api.rainchasers.com/v1";
const DEFAULT_TIMEOUT_SECONDS: u64 = 4;
const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 2;

#[derive(Debug, Clone)]
pub struct SkillConfig {
    pub api_base: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECONDS),
        }
    }
}

impl SkillConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset, blank or unparsable
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("RIVER_API_BASE")
            .map(|value| normalize_base(&value))
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            api_base,
            timeout: seconds_or(
                lookup("RIVER_API_TIMEOUT_SECONDS").as_deref(),
                DEFAULT_TIMEOUT_SECONDS,
            ),
            connect_timeout: seconds_or(
                lookup("RIVER_API_CONNECT_TIMEOUT_SECONDS").as_deref(),
                DEFAULT_CONNECT_TIMEOUT_SECONDS,
            ),
        }
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = normalize_base(api_base);
        self
    }
}

fn normalize_base(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn seconds_or(value: Option<&str>, default: u64) -> Duration {
    Duration::from_secs(
        value
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(default),
    )
}
