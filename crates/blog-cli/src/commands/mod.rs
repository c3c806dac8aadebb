//! Subcommand implementations.

mod config;
mod create;
mod delete;
mod list;
mod shell;
mod show;
mod update;

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Subcommand;

use blog_view::ViewError;

use crate::cli::ConnectionArgs;
use crate::gateway::CliApi;
use crate::gateway::settings;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List blogs, optionally filtered by a search term
    List(list::ListArgs),

    /// Show one blog
    Show(show::ShowArgs),

    /// Create a blog
    Create(create::CreateArgs),

    /// Update a blog; fields not given keep their current values
    Update(update::UpdateArgs),

    /// Delete a blog
    Delete(delete::DeleteArgs),

    /// Browse and edit blogs interactively
    Shell(shell::ShellArgs),

    /// Show or change stored settings
    Config(config::ConfigCommand),
}

pub async fn handle(command: Commands, connection: &ConnectionArgs) -> Result<()> {
    if let Commands::Config(cmd) = command {
        return config::run(cmd, connection);
    }

    let resolved = settings::resolve(connection).context("Failed to resolve API URL")?;
    let api = CliApi::connect(&resolved).context("Failed to set up gateway")?;

    match command {
        Commands::List(args) => list::run(args, &api).await,
        Commands::Show(args) => show::run(args, &api).await,
        Commands::Create(args) => create::run(args, &api).await,
        Commands::Update(args) => update::run(args, &api).await,
        Commands::Delete(args) => delete::run(args, &api).await,
        Commands::Shell(args) => shell::run(args, &api).await,
        Commands::Config(_) => unreachable!("handled above"),
    }
}

/// Report a failed view operation with the message the view would show.
fn view_failure(err: ViewError, banner: Option<&str>, fallback: &str) -> anyhow::Error {
    anyhow::Error::new(err).context(banner.unwrap_or(fallback).to_string())
}

/// Content given inline or read from a file (`-` for stdin).
fn read_content(inline: Option<String>, file: Option<&str>) -> Result<Option<String>> {
    match (inline, file) {
        (Some(content), _) => Ok(Some(content)),
        (None, Some("-")) => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(Some(buf))
        }
        (None, Some(path)) => std::fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("Failed to read content file {}", path)),
        (None, None) => Ok(None),
    }
}
