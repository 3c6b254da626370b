use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
    pub screener: ScreenerConfig,
}

/// Seed dataset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

/// Screener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScreenerConfig {
    /// Default sort mode for the ranked view. Free-form: unknown values fall
    /// back to entry-score ordering.
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/stock_posts.csv")
}
fn default_sort_by() -> String {
    "entry-score".to_string()
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from file + environment overrides
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(
                config::File::with_name("config/default")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(config::Environment::with_prefix("SCREENER").separator("__"))
            .build()?;

        let app_cfg: AppConfig = cfg.try_deserialize().unwrap_or_else(|_| AppConfig::default());
        Ok(app_cfg)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig {
                path: default_dataset_path(),
            },
            screener: ScreenerConfig {
                sort_by: default_sort_by(),
            },
        }
    }
}
