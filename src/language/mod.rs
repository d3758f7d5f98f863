use tracing::debug;
use whatlang::Lang;

use crate::errors::DetectionFailure;

pub const DEFAULT_LANGUAGE: &str = "English";

/// Languages the generator will write in, keyed by ISO 639-1 code.
const LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("pt", "Portuguese"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("ru", "Russian"),
    ("it", "Italian"),
    ("hi", "Hindi"),
];

/// Guesses the language of a piece of text, returning an ISO code.
pub trait Detector: Send + Sync {
    fn detect(&self, text: &str) -> Result<String, DetectionFailure>;
}

/// Trigram detector backed by `whatlang`, restricted to the languages the
/// generator writes in. Deterministic, so repeated runs agree.
pub struct WhatlangDetector {
    inner: whatlang::Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        let allowlist = vec![
            Lang::Por,
            Lang::Eng,
            Lang::Spa,
            Lang::Fra,
            Lang::Deu,
            Lang::Rus,
            Lang::Ita,
            Lang::Hin,
        ];
        Self { inner: whatlang::Detector::with_allowlist(allowlist) }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String, DetectionFailure> {
        let info = self
            .inner
            .detect(text)
            .ok_or_else(|| DetectionFailure(format!("no language features in {text:?}")))?;
        let code = match info.lang() {
            Lang::Por => "pt",
            Lang::Eng => "en",
            Lang::Spa => "es",
            Lang::Fra => "fr",
            Lang::Deu => "de",
            Lang::Rus => "ru",
            Lang::Ita => "it",
            Lang::Hin => "hi",
            other => other.code(),
        };
        Ok(code.to_string())
    }
}

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGE_TABLE
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Target language for a topic. Empty topics, unknown codes and detector
/// failures all fall back to English.
pub fn resolve_language(topic: &str, detector: &dyn Detector) -> String {
    if topic.trim().is_empty() {
        return DEFAULT_LANGUAGE.to_string();
    }
    match detector.detect(topic) {
        Ok(code) => {
            let name = language_name(&code).unwrap_or(DEFAULT_LANGUAGE);
            debug!(code = %code, language = name, "detected topic language");
            name.to_string()
        }
        Err(e) => {
            debug!(error = %e, "falling back to default language");
            DEFAULT_LANGUAGE.to_string()
        }
    }
}
