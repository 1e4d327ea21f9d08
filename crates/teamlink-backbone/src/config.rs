use std::path::Path;

use config::{Config, File, FileFormat};
use directories::BaseDirs;
use serde::Deserialize;
use url::Url;

use crate::Args;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

#[derive(Deserialize, Debug)]
pub(crate) struct ApplicationConfig {
    pub port: u16,
    pub graph_base_url: Url,
    pub cors: Option<CorsConfig>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum CorsConfig {
    AllowAll,
    AllowList { origins: Vec<String> },
}

pub(super) fn load_config(args: Args) -> anyhow::Result<ApplicationConfig> {
    let config_file_path = if let Some(path_override) = args.config {
        path_override
    } else {
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow::anyhow!("Failed to get user config directory"))?;
        let user_config_dir = base_dirs.config_dir().join("teamlink");
        if !user_config_dir.exists() {
            std::fs::create_dir_all(&user_config_dir)?;
        }

        let config_file_path = user_config_dir.join("backbone_config.toml");
        if !config_file_path.exists() {
            write_default_config_file(&config_file_path)?;
        }

        config_file_path
    };

    let config: ApplicationConfig = Config::builder()
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("graph_base_url", DEFAULT_GRAPH_BASE_URL)?
        .add_source(File::from(config_file_path).format(FileFormat::Toml))
        .set_override_option("port", args.port.map(|port| port.to_string()))?
        .set_override_option("graph_base_url", args.graph_base_url)?
        .build()?
        .try_deserialize()?;

    Ok(config)
}

fn write_default_config_file(path: &Path) -> anyhow::Result<()> {
    let default_config_content = include_str!("../static/default_config.toml");
    std::fs::write(path, default_config_content)?;
    Ok(())
}
