//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};
use crate::types::BlogId;

/// Path of the blog collection relative to the API base URL.
const COLLECTION_PATH: &str = "api/blog";

/// A validated API base URL.
///
/// Supports both network gateways (HTTPS, or HTTP for localhost) and a local
/// filesystem gateway (`file://`).
///
/// # Example
///
/// ```
/// use blog_core::{ApiUrl, BlogId};
///
/// let api = ApiUrl::new("http://127.0.0.1:8000").unwrap();
/// assert_eq!(api.collection_url(), "http://127.0.0.1:8000/api/blog/");
/// assert_eq!(api.record_url(&BlogId::from(7)), "http://127.0.0.1:8000/api/blog/7/");
///
/// let local = ApiUrl::new("file:///tmp/blogs").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Default gateway address used when nothing else is configured.
    pub const DEFAULT: &'static str = "http://127.0.0.1:8000";

    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL of the blog collection, with trailing slash.
    pub fn collection_url(&self) -> String {
        format!("{}/{}/", self.base(), COLLECTION_PATH)
    }

    /// Returns the URL of a single blog, with trailing slash.
    pub fn record_url(&self, id: &BlogId) -> String {
        format!("{}/{}/{}/", self.base(), COLLECTION_PATH, id)
    }

    fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns true if this is a local filesystem gateway (file:// URL).
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// Returns the filesystem path for file:// URLs.
    ///
    /// Returns `None` for non-file URLs.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.is_local() {
            self.0.to_file_path().ok()
        } else {
            None
        }
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        let scheme = url.scheme();

        if scheme == "file" {
            if url.path().is_empty() {
                return Err(invalid("file:// URL must have a path"));
            }
            return Ok(());
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(invalid("must use HTTPS (HTTP allowed only for localhost)"));
        }

        if url.host_str().is_none() {
            return Err(invalid("must have a host"));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment"));
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(Self::DEFAULT).expect("default API URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_gateway() {
        let api = ApiUrl::default();
        assert_eq!(api.host(), Some("127.0.0.1"));
        assert_eq!(api.collection_url(), "http://127.0.0.1:8000/api/blog/");
    }

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://blog.example.com").unwrap();
        assert_eq!(api.host(), Some("blog.example.com"));
        assert!(!api.is_local());
    }

    #[test]
    fn keeps_base_path_prefix() {
        let api = ApiUrl::new("https://example.com/backend/").unwrap();
        assert_eq!(
            api.collection_url(),
            "https://example.com/backend/api/blog/"
        );
        assert_eq!(
            api.record_url(&BlogId::from(12)),
            "https://example.com/backend/api/blog/12/"
        );
    }

    #[test]
    fn normalizes_trailing_slash() {
        let api = ApiUrl::new("http://localhost:8000/").unwrap();
        assert_eq!(api.collection_url(), "http://localhost:8000/api/blog/");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://blog.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/blog/").is_err());
    }

    #[test]
    fn rejects_query_string() {
        assert!(ApiUrl::new("https://example.com/?search=x").is_err());
    }

    #[test]
    fn file_url_to_path() {
        #[cfg(unix)]
        {
            let api = ApiUrl::new("file:///tmp/blogs").unwrap();
            assert!(api.is_local());
            assert_eq!(
                api.to_file_path().unwrap(),
                std::path::PathBuf::from("/tmp/blogs")
            );
        }
    }

    #[test]
    fn network_url_has_no_file_path() {
        let api = ApiUrl::new("https://example.com").unwrap();
        assert!(api.to_file_path().is_none());
    }
}
