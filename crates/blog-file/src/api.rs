//! File-backed gateway implementation.

use async_trait::async_trait;
use tracing::{debug, instrument};

use blog_core::error::InvalidInputError;
use blog_core::{ApiUrl, Blog, BlogApi, BlogFields, BlogId, Result};

use crate::store::FileStore;

/// Filesystem-backed gateway, selected by a `file://` API URL.
#[derive(Debug, Clone)]
pub struct FileBlogApi {
    store: FileStore,
    url: ApiUrl,
}

impl FileBlogApi {
    /// Create a gateway storing blogs under `root`.
    pub fn new(root: impl AsRef<std::path::Path>, url: ApiUrl) -> Self {
        Self {
            store: FileStore::new(root),
            url,
        }
    }

    /// Create a gateway from a `file://` URL.
    pub fn from_url(url: ApiUrl) -> Result<Self> {
        let root = url.to_file_path().ok_or_else(|| InvalidInputError::ApiUrl {
            value: url.to_string(),
            reason: "not a file:// URL".to_string(),
        })?;
        Ok(Self::new(root, url))
    }
}

#[async_trait]
impl BlogApi for FileBlogApi {
    fn url(&self) -> &ApiUrl {
        &self.url
    }

    #[instrument(skip(self), fields(root = %self.store.root().display()))]
    async fn list_blogs(&self, search: &str) -> Result<Vec<Blog>> {
        debug!("Listing blogs");
        self.store.list(search)
    }

    #[instrument(skip(self), fields(%id))]
    async fn get_blog(&self, id: &BlogId) -> Result<Blog> {
        debug!("Getting blog");
        self.store.get(id)
    }

    #[instrument(skip(self, body))]
    async fn create_blog(&self, body: &BlogFields) -> Result<Blog> {
        debug!("Creating blog");
        self.store.create(body)
    }

    #[instrument(skip(self, body), fields(%id))]
    async fn update_blog(&self, id: &BlogId, body: &BlogFields) -> Result<Blog> {
        debug!("Updating blog");
        self.store.update(id, body)
    }

    #[instrument(skip(self), fields(%id))]
    async fn delete_blog(&self, id: &BlogId) -> Result<()> {
        debug!("Deleting blog");
        self.store.delete(id)
    }
}
