use std::io::{stdout, Write};

use async_trait::async_trait;
use clap::Args;
use serde_json::Value;
use teamlink_identity::{InteractiveLogin, PublicClientApplication, Scopes, TEAM_READ_BASIC_ALL};
use tracing::debug;
use url::Url;

use crate::api::backbone::get_user_joined_teams;
use crate::config::TeamlinkConfig;

use super::{GlobalArgs, RunCommand};

#[derive(Args, Debug)]
pub struct JoinedCommand {}

#[async_trait]
impl RunCommand for JoinedCommand {
    async fn run(&self, args: &GlobalArgs) -> anyhow::Result<()> {
        let config = TeamlinkConfig::load(args.profile.as_str(), args.config.clone().map(Into::into))?;
        let identity = PublicClientApplication::new(config.identity.to_identity_config()?);

        let teams = login_and_fetch(&identity, &config.backbone.host).await?;

        emit(&mut stdout().lock(), &teams)
    }
}

/// Interactive sign-in, then one authenticated request with the issued token.
pub(crate) async fn login_and_fetch(login: &dyn InteractiveLogin, backbone_url: &Url) -> anyhow::Result<Value> {
    let authentication = login.login_interactive(&Scopes::new([TEAM_READ_BASIC_ALL])).await?;
    debug!("signed in, requesting joined teams");

    get_user_joined_teams(backbone_url.clone(), &authentication.access_token).await
}

fn emit(out: &mut impl Write, value: &Value) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
