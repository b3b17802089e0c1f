//! Service location
//!
//! The only configurable value is the base URL of the records service.
//! Terminal builds read it from `API_BASE_URL` (or `--api-base-url`),
//! browser builds from `window.API_BASE_URL` / `window.API_CONFIG.API_BASE_URL`.

use crate::error::{ErrorKind, Result};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://spring-service:8080";
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validates `base_url` as an http(s) URL and drops any trailing slash.
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url.trim())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ErrorKind::ParseError(format!(
                "Unsupported scheme in API base URL: {}",
                parsed.scheme()
            ))
            .into());
        }

        let base_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[cfg(feature = "no-wasm")]
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Ok(Self::default()),
        }
    }

    #[cfg(feature = "wasm")]
    pub fn from_window() -> Result<Self> {
        use wasm_bindgen::JsValue;

        let window = web_sys::window()
            .ok_or_else(|| ErrorKind::ParseError("No window object".to_string()))?;
        let global: &JsValue = window.as_ref();

        let direct = js_sys::Reflect::get(global, &JsValue::from_str("API_BASE_URL"))
            .ok()
            .and_then(|v| v.as_string());
        let from_config = || {
            js_sys::Reflect::get(global, &JsValue::from_str("API_CONFIG"))
                .ok()
                .filter(|cfg| cfg.is_object())
                .and_then(|cfg| js_sys::Reflect::get(&cfg, &JsValue::from_str("API_BASE_URL")).ok())
                .and_then(|v| v.as_string())
        };

        match direct.or_else(from_config) {
            Some(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
