//! One-shot user messages carried across a redirect in a signed cookie.
//!
//! Cookie value: `base64url(json) "." base64url(hmac_sha256(key, json))`.

use axum::http::{header, HeaderMap};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::warn;

use crate::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

pub const FLASH_COOKIE: &str = "flash";

/// `Set-Cookie` value that removes the flash cookie.
pub const CLEAR_FLASH_COOKIE: &str = "flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Signing key derived from `SECRET_KEY`.
pub struct FlashKey {
    key: Vec<u8>,
}

impl FlashKey {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: secret.to_vec(),
        }
    }

    /// Use the configured secret, or a random key that lives as long as the process.
    pub fn from_secret(secret: Option<&str>) -> Self {
        match secret {
            Some(secret) => Self::new(secret.as_bytes()),
            None => {
                warn!("SECRET_KEY not set; using a random per-process key for flash messages");
                Self::new(&rand::random::<[u8; 32]>())
            }
        }
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.key)
            .map_err(|e| Error::Config(format!("Invalid flash signing key: {}", e)))
    }

    pub fn sign(&self, message: &FlashMessage) -> Result<String> {
        let payload = serde_json::to_vec(message)?;
        let mut mac = self.mac()?;
        mac.update(&payload);
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Decode a cookie value, returning `None` if it is malformed or was not signed with this key.
    pub fn verify(&self, value: &str) -> Option<FlashMessage> {
        let (payload, signature) = value.split_once('.')?;
        let payload = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;

        let mut mac = self.mac().ok()?;
        mac.update(&payload);
        mac.verify_slice(&signature).ok()?;

        serde_json::from_slice(&payload).ok()
    }

    /// `Set-Cookie` value carrying `message` to the next request.
    pub fn set_cookie(&self, message: &FlashMessage) -> Result<String> {
        Ok(format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            FLASH_COOKIE,
            self.sign(message)?
        ))
    }
}

/// Raw flash cookie value from the request's `Cookie` headers, if present.
pub fn cookie_value(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
