//! blog-file - Filesystem-backed blog gateway.
//!
//! Selected with a `file://` API URL. Behaves like the REST backend: numeric
//! ids handed out in sequence, a unique slug per title, a creation timestamp,
//! and word-by-word search over title, author and tags.

mod api;
mod search;
mod slug;
mod store;

pub use api::FileBlogApi;
pub use store::FileStore;
