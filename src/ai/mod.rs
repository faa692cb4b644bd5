//! Text-generation capability used to produce travel recommendations
//!
//! Provides the [`TextGenerationService`] seam, a Gemini REST implementation,
//! and an in-memory mock for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiTextClient;
pub use mock::MockTextClient;

use crate::Result;
use async_trait::async_trait;

/// "Given a prompt, return generated text."
#[async_trait]
pub trait TextGenerationService: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}
