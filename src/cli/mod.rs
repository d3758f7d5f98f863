use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::language::{self, Detector};
use crate::wire::{Audience, GenerationRequest, Length, Platform, Tone};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "content_gen", version, about = "Generate SEO-optimized marketing text with an LLM")]
pub struct Args {
    /// Theme of the text, e.g. "mental health" or "saúde mental"
    #[arg(long, default_value = "")]
    pub topic: String,

    #[arg(long, value_enum, ignore_case = true, default_value_t = Platform::Instagram)]
    pub platform: Platform,

    #[arg(long, value_enum, ignore_case = true, default_value_t = Tone::Normal)]
    pub tone: Tone,

    #[arg(long, value_enum, ignore_case = true, default_value_t = Length::Short)]
    pub length: Length,

    #[arg(long, value_enum, ignore_case = true, default_value_t = Audience::General)]
    pub audience: Audience,

    /// Include a call to action
    #[arg(long, default_value_t = false)]
    pub cta: bool,

    /// Return hashtags at the end of the text
    #[arg(long, default_value_t = false)]
    pub hashtags: bool,

    /// SEO keywords, free text
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// Write in this language instead of detecting it from the topic
    #[arg(long)]
    pub language: Option<String>,

    /// Skip language detection and write in English
    #[arg(long, default_value_t = false)]
    pub no_detect: bool,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub provider_url: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long)]
    pub max_retries: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print the instruction sent to the model
    #[arg(long, default_value_t = false)]
    pub show_prompt: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Flags win over the config file.
    pub fn apply_overrides(&self, mut cfg: Config) -> Config {
        if let Some(url) = &self.provider_url {
            cfg.provider_url = url.clone();
        }
        if let Some(model) = &self.model {
            cfg.model = model.clone();
        }
        if let Some(secs) = self.timeout_secs {
            cfg.timeout_secs = secs;
        }
        if let Some(n) = self.max_retries {
            cfg.max_retries = n;
        }
        if self.no_detect {
            cfg.detect_language = false;
        }
        cfg
    }

    pub fn to_request(&self, cfg: &Config, detector: &dyn Detector) -> GenerationRequest {
        let language = match self.language.as_deref().map(str::trim) {
            Some(lang) if !lang.is_empty() => lang.to_string(),
            _ if cfg.detect_language => language::resolve_language(&self.topic, detector),
            _ => language::DEFAULT_LANGUAGE.to_string(),
        };
        GenerationRequest {
            topic: self.topic.clone(),
            platform: self.platform,
            tone: self.tone,
            length: self.length,
            audience: self.audience,
            include_cta: self.cta,
            include_hashtags: self.hashtags,
            keywords: self.keywords.clone(),
            language,
        }
    }
}
