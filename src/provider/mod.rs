use async_trait::async_trait;

use crate::config::Config;
use crate::errors::GenError;
use crate::wire::ChatMessage;

pub mod openai;

/// A hosted text-generation endpoint. Returns the raw completion text.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GenError>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(cfg: &Config) -> Result<DynProvider, GenError> {
    Ok(Box::new(openai::OpenAICompatProvider::from_config(cfg)?))
}
