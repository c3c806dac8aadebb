//! Blog record types.
//!
//! A [`Blog`] is what the gateway returns; [`BlogFields`] is the editable
//! subset sent on create and update.

mod types;

pub use types::{Blog, BlogFields};
