use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "huffpack.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Extension appended to compressed files.
    pub output_suffix: String,
    /// Allow overwriting existing output files without --force.
    pub overwrite: bool,
    /// Print a stats summary after each compression.
    pub report_stats: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            output_suffix: "huf".to_string(),
            overwrite: false,
            report_stats: true,
        }
    }
}

impl ToolConfig {
    /// Load the config file if one exists, otherwise fall back to defaults.
    pub fn load_or_default(config_path: Option<&str>) -> Result<Self> {
        let config_file = config_path.unwrap_or(DEFAULT_CONFIG_PATH);

        if std::path::Path::new(config_file).exists() {
            let content = std::fs::read_to_string(config_file)
                .with_context(|| format!("cannot read config file {}", config_file))?;
            let config: ToolConfig = toml::from_str(&content)
                .with_context(|| format!("invalid config file {}", config_file))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("cannot write config file {}", config_path))?;
        Ok(())
    }
}
