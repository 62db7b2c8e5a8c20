use std::time::Duration;

use serde::Deserialize;

use crate::args::parsers::parse_duration;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub target: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub port_attempts: Option<u16>,
    pub poll_interval: Option<DurationValue>,
    pub event_name: Option<String>,
    pub celebration_text: Option<String>,
    pub overlay_text: Option<String>,
    pub font_family: Option<String>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// Either whole seconds or a string with a unit suffix (`500ms`, `2s`, `1m`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}
