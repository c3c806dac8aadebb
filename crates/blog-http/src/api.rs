//! HTTP-backed blog gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};

use blog_core::{ApiUrl, Blog, BlogApi, BlogFields, BlogId, Result};

use crate::http::client::{DEFAULT_TIMEOUT, HttpClient};
use crate::http::endpoints::ListQuery;

/// A network-backed gateway speaking to the blog REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpBlogApi {
    client: HttpClient,
}

impl HttpBlogApi {
    /// Create a gateway for the given base URL with the default timeout.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Self::with_timeout(api, DEFAULT_TIMEOUT)
    }

    /// Create a gateway whose requests give up after `timeout`.
    pub fn with_timeout(api: ApiUrl, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(api, timeout)?,
        })
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    fn url(&self) -> &ApiUrl {
        self.client.api()
    }

    #[instrument(skip(self))]
    async fn list_blogs(&self, search: &str) -> Result<Vec<Blog>> {
        let url = self.client.api().collection_url();
        let blogs: Vec<Blog> = self.client.get(&url, &ListQuery::new(search)).await?;
        debug!(count = blogs.len(), "Listed blogs");
        Ok(blogs)
    }

    #[instrument(skip(self), fields(%id))]
    async fn get_blog(&self, id: &BlogId) -> Result<Blog> {
        let url = self.client.api().record_url(id);
        self.client.get(&url, &()).await
    }

    #[instrument(skip(self, body))]
    async fn create_blog(&self, body: &BlogFields) -> Result<Blog> {
        let url = self.client.api().collection_url();
        let blog: Blog = self.client.send(Method::POST, &url, body).await?;
        debug!(id = %blog.id, "Created blog");
        Ok(blog)
    }

    #[instrument(skip(self, body), fields(%id))]
    async fn update_blog(&self, id: &BlogId, body: &BlogFields) -> Result<Blog> {
        let url = self.client.api().record_url(id);
        self.client.send(Method::PUT, &url, body).await
    }

    #[instrument(skip(self), fields(%id))]
    async fn delete_blog(&self, id: &BlogId) -> Result<()> {
        let url = self.client.api().record_url(id);
        self.client.delete(&url).await
    }
}
