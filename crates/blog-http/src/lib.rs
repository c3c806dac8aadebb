//! blog-http - HTTP-backed blog gateway.
//!
//! # Example
//!
//! ```no_run
//! use blog_core::{ApiUrl, BlogApi};
//! use blog_http::HttpBlogApi;
//!
//! # async fn example() -> blog_core::Result<()> {
//! let api = HttpBlogApi::new(ApiUrl::new("http://127.0.0.1:8000")?)?;
//! for blog in api.list_blogs("rust").await? {
//!     println!("{}: {}", blog.id, blog.title);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod http;

pub use api::HttpBlogApi;
