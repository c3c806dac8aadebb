//! Show blog command implementation.

use anyhow::Result;
use clap::Args;

use blog_core::BlogId;
use blog_view::{DETAIL_FAILED, DetailView};

use super::view_failure;
use crate::gateway::CliApi;
use crate::{output, render};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Blog id
    pub id: BlogId,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ShowArgs, api: &CliApi) -> Result<()> {
    let mut view = DetailView::new(args.id);

    let result = view.load(api).await;
    result.map_err(|e| view_failure(e, view.error(), DETAIL_FAILED))?;

    match view.blog() {
        Some(blog) if args.json => output::json_pretty(blog)?,
        _ => render::detail(&view),
    }

    Ok(())
}
