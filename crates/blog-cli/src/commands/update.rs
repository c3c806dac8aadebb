//! Update blog command implementation.

use anyhow::{Context, Result};
use clap::Args;

use blog_core::BlogId;
use blog_view::{CollectionView, DETAIL_FAILED, DetailView, Field, SAVE_FAILED};

use super::{read_content, view_failure};
use crate::gateway::CliApi;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Blog id
    pub id: BlogId,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// File with the new content (use - for stdin)
    #[arg(long)]
    pub content_file: Option<String>,

    /// New author
    #[arg(long)]
    pub author: Option<String>,

    /// New tags (pass an empty string to clear them)
    #[arg(long)]
    pub tags: Option<String>,
}

pub async fn run(args: UpdateArgs, api: &CliApi) -> Result<()> {
    let content = read_content(args.content, args.content_file.as_deref())?;

    let mut detail = DetailView::new(args.id);
    let result = detail.load(api).await;
    result.map_err(|e| view_failure(e, detail.error(), DETAIL_FAILED))?;
    let current = detail.blog().context(DETAIL_FAILED)?;

    let mut view = CollectionView::new();
    view.begin_edit(current);

    let changes = [
        (Field::Title, args.title),
        (Field::Content, content),
        (Field::Author, args.author),
        (Field::Tags, args.tags),
    ];
    let form = view.form_mut();
    for (field, value) in changes {
        if let Some(value) = value {
            form.set(field, value);
        }
    }

    let result = view.submit(api).await;
    let blog = result.map_err(|e| view_failure(e, view.error(), SAVE_FAILED))?;

    output::success(&format!("Updated blog {}: {}", blog.id, blog.title));

    Ok(())
}
