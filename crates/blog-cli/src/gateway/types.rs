//! CLI gateway wrapper.

use async_trait::async_trait;

use blog_core::{ApiUrl, Blog, BlogApi, BlogFields, BlogId, Result};
use blog_file::FileBlogApi;
use blog_http::HttpBlogApi;

use super::settings::Connection;

/// Gateway wrapper for CLI use: a local store for `file://` URLs, HTTP
/// otherwise.
#[derive(Debug)]
pub enum CliApi {
    File(FileBlogApi),
    Http(HttpBlogApi),
}

impl CliApi {
    /// Build the gateway a resolved connection points at.
    pub fn connect(connection: &Connection) -> Result<Self> {
        let api = connection.api.clone();
        if api.is_local() {
            Ok(CliApi::File(FileBlogApi::from_url(api)?))
        } else {
            Ok(CliApi::Http(HttpBlogApi::with_timeout(
                api,
                connection.timeout,
            )?))
        }
    }
}

#[async_trait]
impl BlogApi for CliApi {
    fn url(&self) -> &ApiUrl {
        match self {
            CliApi::File(api) => api.url(),
            CliApi::Http(api) => api.url(),
        }
    }

    async fn list_blogs(&self, search: &str) -> Result<Vec<Blog>> {
        match self {
            CliApi::File(api) => api.list_blogs(search).await,
            CliApi::Http(api) => api.list_blogs(search).await,
        }
    }

    async fn get_blog(&self, id: &BlogId) -> Result<Blog> {
        match self {
            CliApi::File(api) => api.get_blog(id).await,
            CliApi::Http(api) => api.get_blog(id).await,
        }
    }

    async fn create_blog(&self, body: &BlogFields) -> Result<Blog> {
        match self {
            CliApi::File(api) => api.create_blog(body).await,
            CliApi::Http(api) => api.create_blog(body).await,
        }
    }

    async fn update_blog(&self, id: &BlogId, body: &BlogFields) -> Result<Blog> {
        match self {
            CliApi::File(api) => api.update_blog(id, body).await,
            CliApi::Http(api) => api.update_blog(id, body).await,
        }
    }

    async fn delete_blog(&self, id: &BlogId) -> Result<()> {
        match self {
            CliApi::File(api) => api.delete_blog(id).await,
            CliApi::Http(api) => api.delete_blog(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::settings::ApiSource;
    use std::time::Duration;

    fn connection(url: &str) -> Connection {
        Connection {
            api: ApiUrl::new(url).unwrap(),
            source: ApiSource::Flag,
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn file_url_selects_local_store() {
        let api = CliApi::connect(&connection("file:///tmp/blogs")).unwrap();
        assert!(matches!(api, CliApi::File(_)));
    }

    #[test]
    fn http_url_selects_http_client() {
        let api = CliApi::connect(&connection("http://localhost:8000")).unwrap();
        assert!(matches!(api, CliApi::Http(_)));
        assert_eq!(api.url().host(), Some("localhost"));
    }
}
