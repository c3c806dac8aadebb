//! Create blog command implementation.

use anyhow::Result;
use clap::Args;

use blog_view::{CollectionView, Field, SAVE_FAILED};

use super::{read_content, view_failure};
use crate::gateway::CliApi;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Blog title
    #[arg(long)]
    pub title: String,

    /// Blog content
    #[arg(long, required_unless_present = "content_file", conflicts_with = "content_file")]
    pub content: Option<String>,

    /// File with the blog content (use - for stdin)
    #[arg(long)]
    pub content_file: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: String,

    /// Free-form tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

pub async fn run(args: CreateArgs, api: &CliApi) -> Result<()> {
    let content = read_content(args.content, args.content_file.as_deref())?.unwrap_or_default();

    let mut view = CollectionView::new();
    let form = view.form_mut();
    form.set(Field::Title, args.title);
    form.set(Field::Content, content);
    form.set(Field::Author, args.author);
    form.set(Field::Tags, args.tags);

    let result = view.submit(api).await;
    let blog = result.map_err(|e| view_failure(e, view.error(), SAVE_FAILED))?;

    // Output the new id on its own line for scripting
    println!("{}", blog.id);
    output::success(&format!("Created blog: {}", blog.title));

    Ok(())
}
