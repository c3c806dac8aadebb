//! Blog gateway trait.

use async_trait::async_trait;

use crate::Result;
use crate::blog::{Blog, BlogFields};
use crate::types::{ApiUrl, BlogId};

/// A gateway exposing CRUD operations over the blog collection.
///
/// Every call maps to exactly one request; implementations do no caching.
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// Returns the base URL this gateway talks to.
    fn url(&self) -> &ApiUrl;

    /// List blogs matching `search`; the empty string lists everything.
    async fn list_blogs(&self, search: &str) -> Result<Vec<Blog>>;

    /// Fetch a single blog.
    async fn get_blog(&self, id: &BlogId) -> Result<Blog>;

    /// Create a blog from the given fields.
    async fn create_blog(&self, fields: &BlogFields) -> Result<Blog>;

    /// Replace the fields of an existing blog.
    async fn update_blog(&self, id: &BlogId, fields: &BlogFields) -> Result<Blog>;

    /// Delete a blog.
    async fn delete_blog(&self, id: &BlogId) -> Result<()>;
}
