use std::io::stdout;

use async_trait::async_trait;
use clap::{Args, Subcommand};
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use inquire::validator::{ErrorMessage, Validation};
use inquire::Text;
use url::Url;

use crate::config::{BackboneConfig, IdentityProfile, TeamlinkConfig};
use crate::utils::validation::{validate_client_id, validate_new_profile, validate_redirect_uri, validate_url};

use super::{GlobalArgs, RunCommand};

const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000";

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    Init(InitConfigCommand),
}

#[async_trait]
impl RunCommand for ConfigCommand {
    async fn run(&self, args: &GlobalArgs) -> anyhow::Result<()> {
        match self {
            ConfigCommand::Init(cmd) => cmd.run(args).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct InitConfigCommand {
    /// Application (client) id of the app registration
    #[clap(long = "client-id")]
    client_id: Option<String>,
    /// Authority url, e.g. https://login.microsoftonline.com/<tenant-id>
    #[clap(short = 'a', long = "authority")]
    authority: Option<String>,
    /// Loopback redirect uri registered for the app
    #[clap(short = 'r', long = "redirect-uri")]
    redirect_uri: Option<String>,
    /// Backbone server url serving /api/teams
    #[clap(short = 'b', long = "backbone")]
    backbone_url: Option<String>,
}

#[async_trait]
impl RunCommand for InitConfigCommand {
    async fn run(&self, args: &GlobalArgs) -> anyhow::Result<()> {
        let mut prompted = false;

        let client_id = match &self.client_id {
            Some(client_id) => accept(client_id, validate_client_id, "Invalid client id")?,
            None => {
                prompted = true;
                Text::new("Application (client) id:").with_validator(validate_client_id).prompt()?
            }
        };

        let authority = match &self.authority {
            Some(authority) => accept(authority, validate_url, "Invalid authority url")?,
            None => {
                prompted = true;
                Text::new("Authority url:")
                    .with_help_message("https://login.microsoftonline.com/<tenant-id>")
                    .with_validator(validate_url)
                    .prompt()?
            }
        };

        let redirect_uri = match &self.redirect_uri {
            Some(redirect_uri) => accept(redirect_uri, validate_redirect_uri, "Invalid redirect uri")?,
            None => {
                prompted = true;
                Text::new("Redirect uri:")
                    .with_default(DEFAULT_REDIRECT_URI)
                    .with_validator(validate_redirect_uri)
                    .prompt()?
            }
        };

        let backbone_url = match &self.backbone_url {
            Some(backbone_url) => accept(backbone_url, validate_url, "Invalid backbone url")?,
            None => {
                prompted = true;
                Text::new("Backbone server url:").with_validator(validate_url).prompt()?
            }
        };

        let profile_validator = validate_new_profile(args.config.clone());
        let profile = if prompted {
            Text::new("Save a profile as:").with_validator(profile_validator).with_default(&args.profile).prompt()?
        } else {
            accept(&args.profile, profile_validator, "Profile already exists")?
        };

        let identity = IdentityProfile::new(client_id, Url::parse(&authority)?, Url::parse(&redirect_uri)?);
        let backbone = BackboneConfig::new(Url::parse(&backbone_url)?);
        let config = TeamlinkConfig::new(profile.clone(), identity, backbone);

        config.append(args.config.clone().map(Into::into))?;

        execute!(
            stdout(),
            SetForegroundColor(Color::Green),
            Print(format!("✅ Saved profile `{profile}`\n")),
            ResetColor
        )?;
        Ok(())
    }
}

fn accept<V>(value: &str, validator: V, message: &str) -> anyhow::Result<String>
where
    V: Fn(&str) -> Result<Validation, Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    match validator(value) {
        Ok(Validation::Valid) => Ok(value.to_owned()),
        Ok(Validation::Invalid(ErrorMessage::Custom(reason))) => Err(anyhow::anyhow!("{message}: {reason}")),
        Ok(Validation::Invalid(ErrorMessage::Default)) => Err(anyhow::anyhow!("{message}")),
        Err(e) => Err(anyhow::anyhow!("{message}: {e}")),
    }
}

#[cfg(test)]
mod test {
    use super::accept;
    use crate::utils::validation::{validate_redirect_uri, validate_url};

    #[test]
    fn when_flag_value_is_valid_it_should_be_accepted_verbatim() {
        let value = accept("http://localhost:3000", validate_redirect_uri, "Invalid redirect uri").unwrap();

        assert_eq!(value, "http://localhost:3000");
    }

    #[test]
    fn when_flag_value_is_invalid_error_should_carry_reason() {
        let error = accept("https://app.example.com", validate_redirect_uri, "Invalid redirect uri").unwrap_err();

        assert!(error.to_string().starts_with("Invalid redirect uri: "));
        assert!(accept("::", validate_url, "Invalid backbone url").is_err());
    }
}
