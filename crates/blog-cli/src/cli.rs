//! CLI argument definitions.

use clap::{Args, Parser};

use crate::commands::Commands;

/// Browse, search and edit blogs over a REST API.
#[derive(Parser, Debug)]
#[command(name = "blog")]
#[command(author, version = env!("BLOG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how to reach the gateway.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// API base URL (overrides BLOG_API_URL and stored settings); file:// for a local store
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_connection_args_after_subcommand() {
        let cli = Cli::parse_from(["blog", "list", "--api", "http://localhost:9000", "-vv"]);
        assert_eq!(cli.connection.api.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["blog", "list", "--timeout", "0"]).is_err());

        let cli = Cli::try_parse_from(["blog", "list", "--timeout", "5"]).unwrap();
        assert_eq!(cli.connection.timeout, Some(5));
    }
}
