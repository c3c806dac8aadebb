//! Core blogdesk types.
//!
//! These types enforce their invariants at construction time.

mod api_url;
mod blog_id;

pub use api_url::ApiUrl;
pub use blog_id::BlogId;
