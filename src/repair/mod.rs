//! Splits a completion into prose and its trailing JSON summary, and makes a
//! single attempt at repairing trailing-comma syntax errors in the JSON.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::wire::{GenerationResult, JsonStatus};

static COMMA_BEFORE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\}").expect("valid regex"));
static COMMA_BEFORE_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\]").expect("valid regex"));

#[derive(Debug, Clone, PartialEq)]
pub struct Repair {
    pub status: JsonStatus,
    pub value: Option<Value>,
    pub error: Option<String>,
}

/// Prose before the first `{`, and the span from that `{` through the last `}`.
/// `None` when the completion has no `{` at all.
pub fn split_completion(raw: &str) -> (String, Option<String>) {
    let Some(start) = raw.find('{') else {
        return (raw.trim().to_string(), None);
    };
    let prose = raw[..start].trim().to_string();
    let json = match raw.rfind('}') {
        Some(end) if end > start => raw[start..=end].trim().to_string(),
        _ => String::new(),
    };
    (prose, Some(json))
}

pub fn strip_trailing_commas(segment: &str) -> String {
    let fixed = COMMA_BEFORE_BRACE.replace_all(segment, "}");
    COMMA_BEFORE_BRACKET.replace_all(&fixed, "]").into_owned()
}

/// Parse, and on failure retry once after stripping trailing commas. The
/// reported error is always the one from the unmodified segment.
pub fn validate_and_fix(segment: &str) -> Repair {
    let original_err = match serde_json::from_str::<Value>(segment) {
        Ok(value) => {
            return Repair { status: JsonStatus::Valid, value: Some(value), error: None };
        }
        Err(e) => e,
    };

    match serde_json::from_str::<Value>(&strip_trailing_commas(segment)) {
        Ok(value) => {
            debug!(error = %original_err, "repaired trailing commas in JSON summary");
            Repair { status: JsonStatus::Fixed, value: Some(value), error: None }
        }
        Err(_) => Repair {
            status: JsonStatus::Invalid,
            value: None,
            error: Some(original_err.to_string()),
        },
    }
}

pub fn process(raw: &str) -> GenerationResult {
    let (prose_part, segment) = split_completion(raw);

    let Some(json_part_raw) = segment else {
        warn!("completion contains no JSON object");
        return GenerationResult {
            raw_text: raw.to_string(),
            prose_part,
            json_part_raw: String::new(),
            json_status: JsonStatus::Invalid,
            json_value: None,
            error: Some("no JSON object found in the completion".to_string()),
        };
    };

    let repair = validate_and_fix(&json_part_raw);
    if repair.status == JsonStatus::Invalid {
        warn!(error = repair.error.as_deref().unwrap_or_default(), "JSON summary could not be repaired");
    }

    GenerationResult {
        raw_text: raw.to_string(),
        prose_part,
        json_part_raw,
        json_status: repair.status,
        json_value: repair.value,
        error: repair.error,
    }
}
