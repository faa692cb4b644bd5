//! Travel recommendation generation with a fixed fallback.

use crate::ai::{GeminiTextClient, TextGenerationService};
use crate::models::Config;
use crate::prompts::{self, FALLBACK_RECOMMENDATIONS};
use crate::Error;
use tracing::{debug, error, info, warn};

/// The external text-generation service, if startup configuration allowed one.
pub enum TextCapability {
    Configured(Box<dyn TextGenerationService>),
    Unconfigured,
}

pub struct Recommender {
    capability: TextCapability,
}

impl Recommender {
    pub fn new(capability: TextCapability) -> Self {
        Self { capability }
    }

    /// Configured with Gemini when an API key is present, otherwise every
    /// request falls back to the fixed block.
    pub fn from_config(config: &Config, http_client: reqwest::Client) -> Self {
        let capability = match &config.api_key {
            Some(api_key) => {
                let client = GeminiTextClient::new_with_client(
                    api_key.clone(),
                    config.gemini_model.clone(),
                    http_client,
                )
                .with_base_url(config.gemini_base_url.clone());
                info!("Gemini API configured (model: {})", client.model());
                TextCapability::Configured(Box::new(client))
            }
            None => {
                warn!("Configuration error: API_KEY not set; recommendations will use the fallback text");
                TextCapability::Unconfigured
            }
        };

        Self::new(capability)
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.capability, TextCapability::Configured(_))
    }

    /// Recommendations for the given season and/or month.
    ///
    /// Returns an empty string when both are blank, otherwise either the
    /// trimmed generated text or [`FALLBACK_RECOMMENDATIONS`]. Never fails.
    pub async fn recommend(&self, season: &str, month: &str) -> String {
        let context = prompts::travel_context(season, month);
        if context.is_empty() {
            return String::new();
        }

        match self.generate(&context).await {
            Ok(text) => text,
            Err(e) => {
                error!("AI error: {}", e);
                FALLBACK_RECOMMENDATIONS.to_string()
            }
        }
    }

    async fn generate(&self, context: &str) -> crate::Result<String> {
        let service = match &self.capability {
            TextCapability::Configured(service) => service,
            TextCapability::Unconfigured => {
                return Err(Error::AiProvider("AI model not configured".to_string()));
            }
        };

        let prompt = prompts::recommendation_prompt(context);
        let text = service.generate_text(&prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::AiProvider("Empty AI response".to_string()));
        }

        debug!(
            "AI response received: {}...",
            text.chars().take(100).collect::<String>()
        );
        Ok(text.to_string())
    }
}
