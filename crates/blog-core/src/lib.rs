//! blog-core - Core types and traits for the blogdesk REST client.

pub mod blog;
pub mod error;
pub mod traits;
pub mod types;

pub use blog::{Blog, BlogFields};
pub use error::Error;
pub use traits::BlogApi;
pub use types::{ApiUrl, BlogId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
