use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ========================================
// Form fields and generation results
// ========================================

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    Facebook,
    #[value(name = "linkedin", alias = "linked-in")]
    #[serde(rename = "LinkedIn")]
    LinkedIn,
    Blog,
    #[value(name = "e-mail", alias = "email")]
    #[serde(rename = "E-mail")]
    Email,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Normal,
    Informative,
    Inspirational,
    Urgent,
    Informal,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Length {
    Short,
    Medium,
    Long,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    General,
    #[serde(rename = "Young Adults")]
    YoungAdults,
    Families,
    Seniors,
    Teenagers,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
            Platform::Blog => "Blog",
            Platform::Email => "E-mail",
        })
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Normal => "Normal",
            Tone::Informative => "Informative",
            Tone::Inspirational => "Inspirational",
            Tone::Urgent => "Urgent",
            Tone::Informal => "Informal",
        })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        })
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Audience::General => "General",
            Audience::YoungAdults => "Young Adults",
            Audience::Families => "Families",
            Audience::Seniors => "Seniors",
            Audience::Teenagers => "Teenagers",
        })
    }
}

/// One button press worth of form input, with the target language already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub platform: Platform,
    pub tone: Tone,
    pub length: Length,
    pub audience: Audience,
    pub include_cta: bool,
    pub include_hashtags: bool,
    pub keywords: String,
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStatus {
    Valid,
    Fixed,
    Invalid,
}

/// A completion split into its prose and its embedded JSON summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub raw_text: String,
    pub prose_part: String,
    pub json_part_raw: String,
    pub json_status: JsonStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    /// Two-space indented JSON with non-ASCII left unescaped. `None` unless valid or fixed.
    pub fn pretty_json(&self) -> Option<String> {
        match self.json_status {
            JsonStatus::Invalid => None,
            JsonStatus::Valid | JsonStatus::Fixed => self
                .json_value
                .as_ref()
                .and_then(|v| serde_json::to_string_pretty(v).ok()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".into(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".into(), content: content.into() }
    }
}
