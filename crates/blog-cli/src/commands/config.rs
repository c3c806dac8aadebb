//! Settings subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use blog_core::ApiUrl;

use crate::cli::ConnectionArgs;
use crate::gateway::settings;
use crate::output;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Display the effective connection and where it comes from
    Show,

    /// Store the API base URL
    SetApi {
        /// Base URL, e.g. https://blogs.example.com or file:///path/to/store
        url: ApiUrl,
    },

    /// Store the request timeout
    SetTimeout {
        /// Timeout in seconds
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        secs: u64,
    },

    /// Remove stored settings
    Reset,
}

pub fn run(cmd: ConfigCommand, connection: &ConnectionArgs) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => {
            let resolved = settings::resolve(connection).context("Failed to resolve API URL")?;
            let path = settings::settings_path()?;

            output::field("API", resolved.api.as_str());
            output::field("Source", &resolved.source.to_string());
            output::field("Timeout", &format!("{}s", resolved.timeout.as_secs()));
            output::field("Settings", &path.display().to_string());
        }
        ConfigSubcommand::SetApi { url } => {
            let mut stored = settings::load_settings()?;
            stored.api_url = Some(url.clone());
            settings::save_settings(&stored)?;
            output::success(&format!("API URL set to {}", url));
        }
        ConfigSubcommand::SetTimeout { secs } => {
            let mut stored = settings::load_settings()?;
            stored.timeout_secs = Some(secs);
            settings::save_settings(&stored)?;
            output::success(&format!("Timeout set to {}s", secs));
        }
        ConfigSubcommand::Reset => {
            if settings::clear_settings()? {
                output::success("Stored settings removed");
            } else {
                output::success("No stored settings");
            }
        }
    }

    Ok(())
}
