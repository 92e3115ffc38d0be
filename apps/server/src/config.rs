use std::path::PathBuf;

use anyhow::{Context, Result};

/// Server configuration loaded from environment variables.
/// Everything has a sensible default; nothing is required at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Root of the static site (entry document, scripts, styles, images).
    pub public_dir: PathBuf,
    /// Directory holding the authored JSON documents. Defaults to
    /// `<public_dir>/json` so the documents are also reachable as plain
    /// static assets, matching how the site is deployed.
    pub content_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let public_dir =
            PathBuf::from(std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()));
        let content_dir = std::env::var("CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| public_dir.join("json"));

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            public_dir,
            content_dir,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
