/// Application configuration module
use crate::domain::{CardSize, DisplaySettings};
use anyhow::Context;
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub listen_addr: String,
    pub http_timeout_seconds: u64,
    pub catalog_refresh_seconds: u64,
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string())
            .trim_end_matches('/')
            .to_string();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let card_size = match env::var("CARD_SIZE") {
            Ok(raw) => raw
                .parse::<CardSize>()
                .with_context(|| format!("CARD_SIZE={raw}"))?,
            Err(_) => CardSize::default(),
        };

        let display = DisplaySettings {
            card_size,
            show_images: env_bool("SHOW_IMAGES", true),
        };

        Ok(Self {
            api_base_url,
            listen_addr,
            http_timeout_seconds: env_u64("HTTP_TIMEOUT_SECONDS", 30),
            catalog_refresh_seconds: env_u64("CATALOG_EVERY_SECONDS", 300),
            display,
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|s| parse_bool(&s))
        .unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
