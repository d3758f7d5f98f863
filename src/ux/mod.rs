use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

use crate::errors::GenError;
use crate::pipeline::Generation;
use crate::wire::JsonStatus;

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn print_prompt(prompt: &str) {
    eprintln!("{}\n{}\n", "=== PROMPT ===".bold(), prompt);
}

/// Prose first, then the JSON section. A bad JSON summary never hides the prose.
pub fn render_generation(gen: &Generation) -> String {
    let result = &gen.result;
    let mut out = String::new();

    out.push_str(&format!("{}\n", "### Generated Content".bold()));
    out.push_str(&result.prose_part);
    out.push_str("\n\n");
    out.push_str(&format!("{}\n", "### JSON Output".bold()));

    match (result.json_status, result.pretty_json()) {
        (JsonStatus::Valid, Some(json)) => {
            out.push_str(&json);
            out.push('\n');
        }
        (JsonStatus::Fixed, Some(json)) => {
            out.push_str(&json);
            out.push('\n');
            out.push_str(&format!(
                "{}\n",
                "warning: the original JSON contained errors but was automatically fixed.".yellow()
            ));
        }
        _ => {
            let err = result.error.as_deref().unwrap_or("unknown error");
            out.push_str(&format!("{}\n", format!("JSON Error: {err}").red().bold()));
            if !result.json_part_raw.is_empty() {
                out.push_str(&result.json_part_raw);
                out.push('\n');
            }
        }
    }
    out
}

#[derive(Serialize)]
struct Report<'a> {
    request_id: String,
    generated_at: String,
    language: &'a str,
    status: JsonStatus,
    prose: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    json: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_json: Option<&'a str>,
}

/// Machine-readable form of a generation, non-ASCII kept as-is.
pub fn render_report(gen: &Generation) -> serde_json::Result<String> {
    let result = &gen.result;
    let invalid = result.json_status == JsonStatus::Invalid;
    let report = Report {
        request_id: gen.request_id.to_string(),
        generated_at: gen.generated_at.to_rfc3339(),
        language: &gen.request.language,
        status: result.json_status,
        prose: &result.prose_part,
        json: result.json_value.as_ref(),
        error: result.error.as_deref(),
        raw_json: invalid.then_some(result.json_part_raw.as_str()),
    };
    serde_json::to_string_pretty(&report)
}

pub fn print_error(err: &GenError) {
    eprintln!("{} {}", "Error:".red().bold(), err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repair;
    use crate::wire::{Audience, GenerationRequest, Length, Platform, Tone};
    use chrono::Utc;
    use uuid::Uuid;

    fn generation(raw: &str) -> Generation {
        colored::control::set_override(false);
        Generation {
            request_id: Uuid::nil(),
            generated_at: Utc::now(),
            request: GenerationRequest {
                topic: "saúde mental".into(),
                platform: Platform::Instagram,
                tone: Tone::Normal,
                length: Length::Short,
                audience: Audience::General,
                include_cta: false,
                include_hashtags: true,
                keywords: String::new(),
                language: "Portuguese".into(),
            },
            prompt: String::new(),
            result: repair::process(raw),
        }
    }

    #[test]
    fn valid_json_renders_without_warning() {
        let out = render_generation(&generation("Olá!\n{\"título\": \"Saúde\"}"));
        assert!(out.contains("### Generated Content\nOlá!\n\n### JSON Output\n"));
        assert!(out.contains("{\n  \"título\": \"Saúde\"\n}"));
        assert!(!out.contains("warning"));
    }

    #[test]
    fn fixed_json_renders_warning() {
        let out = render_generation(&generation("Olá!\n{\"a\": [1, 2,],}"));
        assert!(out.contains("\"a\": [\n    1,\n    2\n  ]"));
        assert!(out.contains("automatically fixed"));
    }

    #[test]
    fn invalid_json_shows_error_and_raw_segment() {
        let out = render_generation(&generation("Olá!\n{nope}"));
        assert!(out.starts_with("### Generated Content\nOlá!"));
        assert!(out.contains("JSON Error:"));
        assert!(out.contains("{nope}"));
    }

    #[test]
    fn report_contains_status_and_unescaped_text() {
        let report = render_report(&generation("Olá!\n{\"título\": \"Saúde\",}")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["status"], "fixed");
        assert_eq!(value["language"], "Portuguese");
        assert_eq!(value["json"]["título"], "Saúde");
        assert!(value.get("raw_json").is_none());
        assert!(report.contains("Saúde"));
    }

    #[test]
    fn invalid_report_keeps_raw_json() {
        let report = render_report(&generation("Olá!\n{nope}")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["status"], "invalid");
        assert_eq!(value["raw_json"], "{nope}");
        assert!(value["error"].is_string());
    }
}
