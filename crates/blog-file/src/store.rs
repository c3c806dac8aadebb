//! Filesystem storage for the file-backed gateway.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;
use tracing::{debug, instrument, trace};

use blog_core::error::{Error, InvalidInputError, ProtocolError, TransportError};
use blog_core::{Blog, BlogFields, BlogId, Result};

use crate::search::{matches, search_words};
use crate::slug::{slugify, unique_slug};

fn map_io(err: std::io::Error) -> Error {
    Error::Transport(TransportError::Io {
        message: err.to_string(),
    })
}

fn map_json(err: serde_json::Error) -> Error {
    Error::InvalidInput(InvalidInputError::Other {
        message: err.to_string(),
    })
}

fn not_found(id: &BlogId) -> Error {
    Error::Protocol(ProtocolError::not_found(format!("Blog {} not found", id)))
}

/// Rejected input is reported the way the REST backend reports it: a 400.
fn bad_request(err: Error) -> Error {
    match err {
        Error::InvalidInput(e) => Error::Protocol(ProtocolError::new(400, Some(e.to_string()))),
        other => other,
    }
}

/// Filesystem-backed storage for blogs.
///
/// Layout under the root directory:
///
/// ```text
/// blogs/<id>.json   one file per blog
/// next_id           next numeric id to hand out
/// store.lock        exclusive lock held by every write
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blogs_dir(&self) -> PathBuf {
        self.root.join("blogs")
    }

    fn blog_path(&self, id: &BlogId) -> PathBuf {
        self.blogs_dir().join(format!("{}.json", id))
    }

    fn next_id_path(&self) -> PathBuf {
        self.root.join("next_id")
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join("store.lock")
    }

    /// Run `f` while holding the store's exclusive lock.
    fn with_lock<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        fs::create_dir_all(self.blogs_dir()).map_err(map_io)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(map_io)?;

        lock_file.lock_exclusive().map_err(map_io)?;
        let result = f();
        FileExt::unlock(&lock_file).map_err(map_io)?;

        result
    }

    fn read_blog(&self, path: &Path) -> Result<Blog> {
        let content = fs::read_to_string(path).map_err(map_io)?;
        serde_json::from_str(&content).map_err(map_json)
    }

    fn write_blog(&self, blog: &Blog) -> Result<()> {
        let path = self.blog_path(&blog.id);
        let content = serde_json::to_string_pretty(blog).map_err(map_json)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io)?;
        fs::rename(&temp_path, &path).map_err(map_io)?;

        Ok(())
    }

    /// Read every stored blog, ordered by id.
    fn read_all(&self) -> Result<Vec<Blog>> {
        let dir = self.blogs_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut blogs = Vec::new();
        for entry in fs::read_dir(&dir).map_err(map_io)? {
            let path = entry.map_err(map_io)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                match self.read_blog(&path) {
                    Ok(blog) => blogs.push(blog),
                    Err(e) => trace!(path = %path.display(), error = %e, "Skipping unreadable blog"),
                }
            }
        }

        blogs.sort_by(|a, b| {
            a.id.as_number()
                .cmp(&b.id.as_number())
                .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
        });

        Ok(blogs)
    }

    fn allocate_id(&self) -> Result<BlogId> {
        let path = self.next_id_path();
        let mut next = match fs::read_to_string(&path) {
            Ok(s) => s.trim().parse::<u64>().unwrap_or(1),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 1,
            Err(e) => return Err(map_io(e)),
        };

        // Never reuse an id that is still on disk.
        while self.blog_path(&BlogId::from(next)).exists() {
            next += 1;
        }

        let mut file = File::create(&path).map_err(map_io)?;
        std::io::Write::write_all(&mut file, (next + 1).to_string().as_bytes())
            .map_err(map_io)?;

        Ok(BlogId::from(next))
    }

    // ========================================================================
    // Blog Operations
    // ========================================================================

    #[instrument(skip(self))]
    pub fn list(&self, search: &str) -> Result<Vec<Blog>> {
        let words = search_words(search);
        let blogs: Vec<Blog> = self
            .read_all()?
            .into_iter()
            .filter(|blog| matches(blog, &words))
            .collect();

        debug!(count = blogs.len(), "Listed blogs");
        Ok(blogs)
    }

    #[instrument(skip(self), fields(%id))]
    pub fn get(&self, id: &BlogId) -> Result<Blog> {
        let path = self.blog_path(id);
        if !path.exists() {
            return Err(not_found(id));
        }
        self.read_blog(&path)
    }

    #[instrument(skip(self, input))]
    pub fn create(&self, input: &BlogFields) -> Result<Blog> {
        input.validate().map_err(bad_request)?;

        self.with_lock(|| {
            let existing = self.read_all()?;
            let base = slugify(&input.title);
            let slug = unique_slug(&base, |candidate| {
                existing
                    .iter()
                    .any(|b| b.slug.as_deref() == Some(candidate))
            });

            let blog = Blog {
                id: self.allocate_id()?,
                title: input.title.clone(),
                content: input.content.clone(),
                author: input.author.clone(),
                tags: input.tags.clone(),
                slug: Some(slug),
                created_at: Some(Utc::now()),
            };

            self.write_blog(&blog)?;
            debug!(id = %blog.id, "Created blog");
            Ok(blog)
        })
    }

    #[instrument(skip(self, input), fields(%id))]
    pub fn update(&self, id: &BlogId, input: &BlogFields) -> Result<Blog> {
        input.validate().map_err(bad_request)?;

        self.with_lock(|| {
            let mut blog = self.get(id)?;
            blog.title = input.title.clone();
            blog.content = input.content.clone();
            blog.author = input.author.clone();
            blog.tags = input.tags.clone();

            self.write_blog(&blog)?;
            debug!("Updated blog");
            Ok(blog)
        })
    }

    #[instrument(skip(self), fields(%id))]
    pub fn delete(&self, id: &BlogId) -> Result<()> {
        self.with_lock(|| {
            let path = self.blog_path(id);
            if !path.exists() {
                return Err(not_found(id));
            }

            fs::remove_file(&path).map_err(map_io)?;
            debug!("Deleted blog");
            Ok(())
        })
    }
}
