use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "codeframe.config.json";

/// Codeframe configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source directory containing .cf files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Output directory for compiled pages
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Compile pages as standalone HTML documents
    #[serde(default = "default_standalone")]
    pub standalone: bool,

    /// Stylesheet linked from standalone pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,

    /// Render listing blocks expanded
    #[serde(default)]
    pub open_listing: bool,
}

fn default_src_dir() -> String {
    "content".to_string()
}

fn default_out_dir() -> String {
    "public".to_string()
}

fn default_standalone() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to the source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            standalone: true,
            stylesheet: None,
            open_listing: false,
        }
    }
}
