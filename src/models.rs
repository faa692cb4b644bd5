//! Data models and structures
//!
//! Defines the trip form submitted by visitors and the process configuration
//! read from the environment at startup.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Travel preferences posted from the form. Every field is optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripForm {
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

impl TripForm {
    /// Copy of the form with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            season: self.season.trim().to_string(),
            month: self.month.trim().to_string(),
            year: self.year.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
        }
    }

    fn fields(&self) -> [&str; 5] {
        [&self.season, &self.month, &self.year, &self.date, &self.time]
    }

    /// True when no field has content after trimming.
    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|f| f.trim().is_empty())
    }

    /// Recommendations are only requested when the season or month is known.
    pub fn wants_recommendations(&self) -> bool {
        !self.season.trim().is_empty() || !self.month.trim().is_empty()
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub secret_key: Option<String>,
    pub api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secret_key: None,
            api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let default = Self::default();

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| crate::Error::Config(format!("Invalid PORT '{}'", raw)))?,
            None => default.port,
        };

        Ok(Self {
            secret_key: var("SECRET_KEY"),
            api_key: var("API_KEY"),
            gemini_model: var("GEMINI_MODEL").unwrap_or(default.gemini_model),
            gemini_base_url: var("GEMINI_BASE_URL").unwrap_or(default.gemini_base_url),
            host: var("HOST").unwrap_or(default.host),
            port,
        })
    }

    /// Names of the secrets that were not supplied, in startup-report order.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.is_none() {
            missing.push("API_KEY");
        }
        if self.secret_key.is_none() {
            missing.push("SECRET_KEY");
        }
        missing
    }
}
