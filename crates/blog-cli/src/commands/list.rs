//! List blogs command implementation.

use anyhow::Result;
use clap::Args;

use blog_view::{CollectionView, LOAD_FAILED};

use super::view_failure;
use crate::gateway::CliApi;
use crate::{output, render};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only blogs whose title, author or tags match
    #[arg(long, short)]
    pub search: Option<String>,

    /// Output one JSON object per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, api: &CliApi) -> Result<()> {
    let mut view = CollectionView::new();

    let result = view.search(api, args.search.unwrap_or_default()).await;
    result.map_err(|e| view_failure(e, view.error(), LOAD_FAILED))?;

    if args.json {
        for blog in view.blogs() {
            output::json(blog)?;
        }
    } else {
        render::blog_list(&view);
    }

    Ok(())
}
