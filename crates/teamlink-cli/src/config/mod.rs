use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use teamlink_identity::IdentityConfig;
use url::Url;

const TEAMLINK_PATH: &str = "teamlink";
const CONFIG_FILE: &str = "cli_config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamlinkConfigs {
    #[serde(default)]
    pub profiles: Vec<TeamlinkConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamlinkConfig {
    pub name: String,
    pub identity: IdentityProfile,
    pub backbone: BackboneConfig,
}

impl TeamlinkConfig {
    pub fn new(profile: String, identity: IdentityProfile, backbone: BackboneConfig) -> Self {
        Self { name: profile, identity, backbone }
    }

    pub fn load(profile: &str, config_path: Option<PathBuf>) -> anyhow::Result<TeamlinkConfig> {
        let config_file_path = config_file_path(config_path)?;

        let config: TeamlinkConfigs = Config::builder()
            .add_source(File::from(config_file_path.clone()).format(FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.profiles.into_iter().find(|c| c.name == profile).ok_or_else(|| {
            anyhow::anyhow!(
                "Profile `{}` not found. Please check your configuration file at {}",
                profile,
                config_file_path.display()
            )
        })
    }

    pub fn append(&self, config_path: Option<PathBuf>) -> anyhow::Result<()> {
        let config_file_path = config_file_path(config_path)?;
        let mut config = load_all(&config_file_path)?;
        config.profiles.push(self.clone());
        Ok(std::fs::write(config_file_path, toml::to_string(&config)?)?)
    }
}

/// Public client registration used for interactive sign-in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IdentityProfile {
    pub client_id: String,
    pub authority: Url,
    pub redirect_uri: Url,
}

impl IdentityProfile {
    pub fn new(client_id: String, authority: Url, redirect_uri: Url) -> Self {
        Self { client_id, authority, redirect_uri }
    }

    pub fn to_identity_config(&self) -> teamlink_identity::Result<IdentityConfig> {
        IdentityConfig::new(self.client_id.clone(), self.authority.clone(), self.redirect_uri.clone())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BackboneConfig {
    pub host: Url,
}

impl BackboneConfig {
    pub fn new(host: Url) -> Self {
        Self { host }
    }
}

fn config_file_path(config_path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path_override) = config_path {
        Ok(path_override)
    } else {
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow::anyhow!("Failed to get user config directory"))?;
        let teamlink_config_dir = base_dirs.config_dir().join(TEAMLINK_PATH);
        if !teamlink_config_dir.exists() {
            std::fs::create_dir_all(&teamlink_config_dir)?;
        }
        Ok(teamlink_config_dir.join(CONFIG_FILE))
    }
}

/// An absent file holds no profiles; an unreadable one is an error so it is never overwritten.
fn load_all(config_file_path: &Path) -> anyhow::Result<TeamlinkConfigs> {
    if !config_file_path.exists() {
        return Ok(TeamlinkConfigs::default());
    }

    let config = Config::builder()
        .add_source(File::from(config_file_path).format(FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    Ok(config)
}

pub fn has_profile(profile: &str, config_path: Option<PathBuf>) -> anyhow::Result<bool> {
    let config_file_path = config_file_path(config_path)?;
    let config = load_all(&config_file_path)?;

    Ok(config.profiles.into_iter().any(|c| c.name == profile))
}

#[cfg(test)]
mod test {
    use url::Url;

    use super::{has_profile, BackboneConfig, IdentityProfile, TeamlinkConfig};

    fn profile(name: &str) -> TeamlinkConfig {
        TeamlinkConfig::new(
            name.to_owned(),
            IdentityProfile::new(
                "00000000-0000-0000-0000-000000000000".to_owned(),
                Url::parse("https://login.microsoftonline.com/contoso").unwrap(),
                Url::parse("http://localhost:3000").unwrap(),
            ),
            BackboneConfig::new(Url::parse("http://localhost:3000").unwrap()),
        )
    }

    #[test]
    fn when_appending_profiles_each_should_be_loadable_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cli_config.toml");

        profile("default").append(Some(path.clone())).unwrap();
        profile("staging").append(Some(path.clone())).unwrap();

        let loaded = TeamlinkConfig::load("staging", Some(path.clone())).unwrap();
        assert_eq!(loaded, profile("staging"));
        assert!(has_profile("default", Some(path)).unwrap());
    }

    #[test]
    fn when_config_file_is_missing_no_profile_should_exist() {
        let dir = tempfile::tempdir().unwrap();

        assert!(!has_profile("default", Some(dir.path().join("absent.toml"))).unwrap());
    }

    #[test]
    fn when_loading_unknown_profile_error_should_name_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cli_config.toml");
        profile("default").append(Some(path.clone())).unwrap();

        let error = TeamlinkConfig::load("prod", Some(path)).unwrap_err();

        assert!(error.to_string().contains("Profile `prod` not found"));
    }

    #[test]
    fn when_existing_file_is_malformed_append_should_fail_and_leave_it_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cli_config.toml");
        profile("prod").append(Some(path.clone())).unwrap();
        let mut content = std::fs::read_to_string(&path).unwrap();
        content.push_str(
            r#"
[[profiles]]
name = "hand-edited"

[profiles.identity]
client_id = "c"
authority = "https://login.microsoftonline.com/t"
redirect_uri = "http://localhost:3000/"
"#,
        );
        std::fs::write(&path, &content).unwrap();

        assert!(has_profile("prod", Some(path.clone())).is_err());
        assert!(profile("new").append(Some(path.clone())).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn when_profile_is_valid_identity_config_should_build() {
        let identity = profile("default").identity.to_identity_config().unwrap();

        assert_eq!(identity.client_id(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(identity.redirect_uri().as_str(), "http://localhost:3000/");
    }
}
