//! Delete blog command implementation.

use anyhow::Result;
use clap::Args;

use blog_core::BlogId;
use blog_view::{CollectionView, DELETE_FAILED};

use super::view_failure;
use crate::gateway::CliApi;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Blog id
    pub id: BlogId,
}

pub async fn run(args: DeleteArgs, api: &CliApi) -> Result<()> {
    let mut view = CollectionView::new();

    let result = view.delete(api, args.id.clone()).await;
    result.map_err(|e| view_failure(e, view.error(), DELETE_FAILED))?;

    output::success(&format!("Deleted blog {}", args.id));

    Ok(())
}
