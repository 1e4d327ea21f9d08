use async_trait::async_trait;
use clap::{ArgAction, Args, Parser, Subcommand};

use self::config::ConfigCommand;
use self::joined::JoinedCommand;

pub mod config;
pub mod joined;

#[async_trait]
pub trait RunCommand {
    async fn run(&self, args: &GlobalArgs) -> anyhow::Result<()>;
}

#[derive(Parser, Debug)]
#[command(term_width = 0, version, name = "teamlink")]
pub struct Cli {
    #[command(flatten)]
    pub args: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Profile to read from the configuration file
    #[arg(short, long, global = true, env = "TEAMLINK_PROFILE", default_value = "default")]
    pub profile: String,

    /// Sets a custom config file
    #[arg(short, long, global = true, env = "TEAMLINK_CONFIG", value_name = "FILE")]
    pub config: Option<String>,

    /// Raises log verbosity, repeat for more
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[clap(subcommand)]
    Config(ConfigCommand),
    /// Signs in and lists the teams you have joined
    Joined(JoinedCommand),
}

impl Cli {
    pub async fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Config(cmd) => cmd.run(&self.args).await,
            Command::Joined(cmd) => cmd.run(&self.args).await,
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn when_no_profile_is_given_default_profile_should_be_used() {
        let cli = Cli::try_parse_from(["teamlink", "joined"]).unwrap();

        assert_eq!(cli.args.profile, "default");
        assert!(matches!(cli.command, Command::Joined(_)));
    }

    #[test]
    fn when_global_flags_follow_subcommand_they_should_still_apply() {
        let cli = Cli::try_parse_from(["teamlink", "joined", "--profile", "staging", "-vv"]).unwrap();

        assert_eq!(cli.args.profile, "staging");
        assert_eq!(cli.args.verbose, 2);
    }
}
