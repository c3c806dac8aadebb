//! In-memory gateway for view tests.

use std::sync::Mutex;

use async_trait::async_trait;

use blog_core::error::{ProtocolError, TransportError};
use blog_core::{ApiUrl, Blog, BlogApi, BlogFields, BlogId, Result};

pub(crate) fn blog(id: u64, title: &str) -> Blog {
    Blog {
        id: BlogId::from(id),
        title: title.to_string(),
        content: format!("{title} content"),
        author: "ann".to_string(),
        tags: String::new(),
        slug: None,
        created_at: None,
    }
}

/// A request the fake received.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    List(String),
    Get(BlogId),
    Create(BlogFields),
    Update(BlogId, BlogFields),
    Delete(BlogId),
}

/// Holds blogs in memory, records every call, and fails on demand.
#[derive(Debug)]
pub(crate) struct FakeApi {
    url: ApiUrl,
    blogs: Mutex<Vec<Blog>>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<bool>,
    next_id: Mutex<u64>,
}

impl FakeApi {
    pub(crate) fn with_blogs(blogs: Vec<Blog>) -> Self {
        let next_id = blogs.iter().filter_map(|b| b.id.as_number()).max().unwrap_or(0) + 1;
        Self {
            url: ApiUrl::default(),
            blogs: Mutex::new(blogs),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(false),
            next_id: Mutex::new(next_id),
        }
    }

    /// Make every following call fail (or succeed again).
    pub(crate) fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if *self.failing.lock().unwrap() {
            return Err(TransportError::Connection {
                message: "connection refused".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn missing(id: &BlogId) -> blog_core::Error {
        ProtocolError::not_found(format!("Blog {} not found", id)).into()
    }
}

#[async_trait]
impl BlogApi for FakeApi {
    fn url(&self) -> &ApiUrl {
        &self.url
    }

    async fn list_blogs(&self, search: &str) -> Result<Vec<Blog>> {
        self.record(Call::List(search.to_string()))?;
        let needle = search.to_lowercase();
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_blog(&self, id: &BlogId) -> Result<Blog> {
        self.record(Call::Get(id.clone()))?;
        self.blogs
            .lock()
            .unwrap()
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| Self::missing(id))
    }

    async fn create_blog(&self, fields: &BlogFields) -> Result<Blog> {
        self.record(Call::Create(fields.clone()))?;
        let mut next_id = self.next_id.lock().unwrap();
        let mut created = blog(*next_id, &fields.title);
        created.content = fields.content.clone();
        created.author = fields.author.clone();
        created.tags = fields.tags.clone();
        *next_id += 1;
        self.blogs.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_blog(&self, id: &BlogId, fields: &BlogFields) -> Result<Blog> {
        self.record(Call::Update(id.clone(), fields.clone()))?;
        let mut blogs = self.blogs.lock().unwrap();
        let existing = blogs
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| Self::missing(id))?;
        existing.title = fields.title.clone();
        existing.content = fields.content.clone();
        existing.author = fields.author.clone();
        existing.tags = fields.tags.clone();
        Ok(existing.clone())
    }

    async fn delete_blog(&self, id: &BlogId) -> Result<()> {
        self.record(Call::Delete(id.clone()))?;
        let mut blogs = self.blogs.lock().unwrap();
        let before = blogs.len();
        blogs.retain(|b| &b.id != id);
        if blogs.len() == before {
            return Err(Self::missing(id));
        }
        Ok(())
    }
}
