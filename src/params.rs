use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::errors::ActionError;

pub const PARAM_QUEUE_URL: &str = "queueUrl";
pub const PARAM_MESSAGE_BODY: &str = "messageBody";
pub const PARAM_AWS_REGION: &str = "awsRegion";
pub const PARAM_DELAY_SECONDS: &str = "delaySeconds";

/// SQS accepts a delivery delay between 0 and 900 seconds.
pub const MAX_DELAY_SECONDS: i32 = 900;

/// The untyped name/value configuration the host passes to the action.
#[derive(Debug, Clone, Default)]
pub struct ActionParameters {
    values: HashMap<String, String>,
}

impl ActionParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for ActionParameters {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// The triggering content item's field map, used for the message-body
/// fallback when the action is configured without a body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    fields: BTreeMap<String, Value>,
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// String form of the full field map, as transmitted when no message
    /// body is configured.
    pub fn field_map_string(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_else(|_| format!("{:?}", self.fields))
    }
}

/// A fully resolved, validated send request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    pub queue_url: String,
    pub body: String,
    pub delay_seconds: i32,
}

/// Everything the rest of the pipeline needs from the parameter map: the
/// request itself plus the region string, which the client factory validates.
#[derive(Debug, Clone)]
pub struct ResolvedParameters {
    pub request: DispatchRequest,
    pub region: String,
}

/// Resolve and validate the action's configuration against the triggering
/// content. Pure data transformation; no network or secret-store access.
///
/// # Errors
///
/// Returns `ActionError::Parameter` if `queueUrl` is missing, empty, or not
/// a valid URL, or if `awsRegion` is missing or empty. A bad `delaySeconds`
/// value is never an error; it is logged and defaulted to 0.
pub fn resolve_request(
    params: &ActionParameters,
    content: &Content,
) -> Result<ResolvedParameters, ActionError> {
    let queue_url = required(params, PARAM_QUEUE_URL)?;
    Url::parse(queue_url).map_err(|e| {
        ActionError::Parameter(format!("{PARAM_QUEUE_URL} is not a valid URL: {e}"))
    })?;

    let region = required(params, PARAM_AWS_REGION)?;

    // Use the content's field map as the body when none is configured.
    let body = match params.get(PARAM_MESSAGE_BODY).map(str::trim) {
        Some(body) if !body.is_empty() => body.to_string(),
        _ => content.field_map_string(),
    };

    let delay_seconds = resolve_delay(params.get(PARAM_DELAY_SECONDS));

    Ok(ResolvedParameters {
        request: DispatchRequest {
            queue_url: queue_url.to_string(),
            body,
            delay_seconds,
        },
        region: region.to_string(),
    })
}

fn required<'a>(params: &'a ActionParameters, key: &str) -> Result<&'a str, ActionError> {
    params
        .get(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ActionError::Parameter(format!("{key} is required")))
}

fn resolve_delay(raw: Option<&str>) -> i32 {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0;
    };
    match raw.parse::<i32>() {
        Ok(value) if (0..=MAX_DELAY_SECONDS).contains(&value) => value,
        Ok(value) => {
            warn!(
                "Delay seconds value out of range: {}. Setting to default 0.",
                value
            );
            0
        }
        Err(e) => {
            warn!(
                "Invalid delay seconds value: '{}'. Using default value 0. Error: {}",
                raw, e
            );
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_defaults_to_zero_when_absent_or_blank() {
        assert_eq!(resolve_delay(None), 0);
        assert_eq!(resolve_delay(Some("")), 0);
        assert_eq!(resolve_delay(Some("   ")), 0);
    }

    #[test]
    fn delay_accepts_the_full_valid_range() {
        assert_eq!(resolve_delay(Some("0")), 0);
        assert_eq!(resolve_delay(Some("30")), 30);
        assert_eq!(resolve_delay(Some("900")), 900);
    }

    #[test]
    fn delay_falls_back_to_zero_on_bad_values() {
        assert_eq!(resolve_delay(Some("901")), 0);
        assert_eq!(resolve_delay(Some("-1")), 0);
        assert_eq!(resolve_delay(Some("999")), 0);
        assert_eq!(resolve_delay(Some("ten")), 0);
        assert_eq!(resolve_delay(Some("30.5")), 0);
    }
}
