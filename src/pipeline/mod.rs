use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::GenError;
use crate::prompt;
use crate::provider::Provider;
use crate::repair;
use crate::wire::{GenerationRequest, GenerationResult};

/// Everything one button press produced.
#[derive(Debug, Clone)]
pub struct Generation {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub request: GenerationRequest,
    pub prompt: String,
    pub result: GenerationResult,
}

/// Build the prompt, fetch a completion, split and repair it. Only the
/// generation call can fail; JSON problems are reported inside the result.
#[instrument(skip_all, fields(request_id = %request_id, platform = %req.platform, language = %req.language))]
pub async fn run(
    provider: &dyn Provider,
    req: GenerationRequest,
    request_id: Uuid,
) -> Result<Generation, GenError> {
    let prompt = prompt::build_prompt(&req);
    let raw = provider.complete(&prompt::messages(&prompt)).await?;
    let result = repair::process(&raw);
    info!(status = ?result.json_status, chars = raw.chars().count(), "completion processed");

    Ok(Generation { request_id, generated_at: Utc::now(), request: req, prompt, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{Audience, ChatMessage, JsonStatus, Length, Platform, Tone};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct Canned {
        reply: Result<String, u16>,
        seen: Mutex<Vec<ChatMessage>>,
    }

    impl Canned {
        fn ok(text: &str) -> Self {
            Self { reply: Ok(text.to_string()), seen: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl Provider for Canned {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GenError> {
            self.seen.lock().unwrap().extend_from_slice(messages);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(GenError::Api { status: *status, body: "nope".into() }),
            }
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            topic: "mental health".into(),
            platform: Platform::Blog,
            tone: Tone::Informative,
            length: Length::Medium,
            audience: Audience::General,
            include_cta: true,
            include_hashtags: false,
            keywords: String::new(),
            language: "English".into(),
        }
    }

    #[tokio::test]
    async fn blog_post_with_trailing_comma_is_fixed() {
        let provider = Canned::ok("Some text here.\n\n{\"title\": \"Mental Health\",}");
        let generation = run(&provider, request(), Uuid::new_v4()).await.unwrap();

        assert!(generation.prompt.contains("Include a clear call to action."));
        assert!(!generation.prompt.contains("Keywords"));
        assert_eq!(generation.result.prose_part, "Some text here.");
        assert_eq!(generation.result.json_status, JsonStatus::Fixed);
        assert_eq!(generation.result.json_value, Some(json!({"title": "Mental Health"})));

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].content, prompt::SYSTEM_PERSONA);
        assert_eq!(seen[1].content, generation.prompt);
    }

    #[tokio::test]
    async fn prose_only_completion_still_succeeds() {
        let provider = Canned::ok("Nothing structured here.");
        let generation = run(&provider, request(), Uuid::new_v4()).await.unwrap();
        assert_eq!(generation.result.prose_part, "Nothing structured here.");
        assert_eq!(generation.result.json_status, JsonStatus::Invalid);
    }

    #[tokio::test]
    async fn generation_errors_abort_the_request() {
        let provider = Canned { reply: Err(401), seen: Mutex::new(Vec::new()) };
        let err = run(&provider, request(), Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, GenError::Api { status: 401, .. }));
    }
}
