//! Request and response shapes for the blog REST endpoints.

use serde::{Deserialize, Serialize};

/// Query string for list requests.
#[derive(Debug, Serialize)]
pub struct ListQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
}

impl<'a> ListQuery<'a> {
    /// The empty term lists everything and sends no parameter at all.
    pub fn new(search: &'a str) -> Self {
        Self {
            search: (!search.is_empty()).then_some(search),
        }
    }
}

/// Error body of the `{"detail": "..."}` form.
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}
