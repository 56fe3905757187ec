use crate::catalog::Catalog;
use color_eyre::eyre::{eyre, Result, WrapErr};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// 400px canvas minus a 60px label margin, halved.
pub const DEFAULT_CANVAS_RADIUS: f64 = 140.0;
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:3000/";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON catalog to load instead of the built-in ladder.
    pub catalog_path: Option<PathBuf>,
    pub canvas_radius: f64,
    pub share_base_url: String,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
    /// Share token or URL to restore on start-up.
    pub initial_state: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            canvas_radius: DEFAULT_CANVAS_RADIUS,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            log_file: None,
            debug: false,
            initial_state: None,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from a key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let canvas_radius = match get("CANVAS_RADIUS") {
            Some(raw) => parse_radius(&raw)?,
            None => DEFAULT_CANVAS_RADIUS,
        };

        Ok(Self {
            catalog_path: get("CATALOG_PATH").map(PathBuf::from),
            canvas_radius,
            share_base_url: get("SHARE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SHARE_BASE_URL.to_string()),
            log_file: get("LADDER_LOG_FILE").map(PathBuf::from),
            debug: get("DEBUG").is_some_and(|value| is_truthy(&value)),
            initial_state: get("SESSION_STATE"),
        })
    }
}

fn parse_radius(raw: &str) -> Result<f64> {
    let radius: f64 = raw
        .parse()
        .wrap_err_with(|| format!("CANVAS_RADIUS is not a number: {raw}"))?;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(eyre!("CANVAS_RADIUS must be a positive number, got {raw}"));
    }
    Ok(radius)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Loads `.env`, then reads the configuration from the process environment.
pub fn init_app_config() -> Result<AppConfig> {
    dotenv().ok();
    let config = AppConfig::from_lookup(|key| env::var(key).ok())?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

/// The configured catalog file, or the built-in ladder.
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = Catalog::load(path)
                .wrap_err_with(|| format!("Failed to load catalog from {}", path.display()))?;
            info!(
                path = %path.display(),
                roles = catalog.roles().len(),
                "using catalog file"
            );
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}
