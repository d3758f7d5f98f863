use thiserror::Error;

/// Failures of the generation client. Any of these aborts the request.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("API key not found: environment variable {0} is not set")] MissingApiKey(String),
    #[error("request to generation endpoint failed: {0}")] Http(String),
    #[error("generation endpoint returned {status}: {body}")] Api { status: u16, body: String },
    #[error("unusable completion: {0}")] Response(String),
    #[error("configuration error: {0}")] Config(String),
}

impl GenError {
    /// Whether another attempt may succeed. Auth failures and bad payloads never will.
    pub fn is_transient(&self) -> bool {
        match self {
            GenError::Http(_) => true,
            GenError::Api { status, .. } => matches!(*status, 408 | 429) || *status >= 500,
            GenError::MissingApiKey(_) | GenError::Response(_) | GenError::Config(_) => false,
        }
    }
}

#[derive(Error, Debug)]
#[error("language detection failed: {0}")]
pub struct DetectionFailure(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_and_throttling_are_transient() {
        for status in [408, 429, 500, 502, 503] {
            let err = GenError::Api { status, body: String::new() };
            assert!(err.is_transient(), "status {status} should be retried");
        }
        assert!(GenError::Http("connection refused".into()).is_transient());
    }

    #[test]
    fn auth_and_client_errors_are_permanent() {
        for status in [400, 401, 403, 404] {
            let err = GenError::Api { status, body: String::new() };
            assert!(!err.is_transient(), "status {status} should not be retried");
        }
        assert!(!GenError::MissingApiKey("GROQ_API_KEY".into()).is_transient());
        assert!(!GenError::Response("no choices".into()).is_transient());
    }

    #[test]
    fn missing_key_message_names_the_variable() {
        let err = GenError::MissingApiKey("GROQ_API_KEY".into());
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }
}
