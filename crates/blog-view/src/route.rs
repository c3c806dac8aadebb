//! Navigation between the collection and a single blog.

use std::fmt;
use std::str::FromStr;

use blog_core::BlogId;
use blog_core::error::InvalidInputError;

/// The two screens of the client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/` - the searchable list and form.
    #[default]
    Collection,
    /// `/blog/<id>` - one blog, read-only.
    Detail(BlogId),
}

impl Route {
    /// Parse a route path. A trailing slash is accepted.
    pub fn parse(path: &str) -> Result<Self, blog_core::Error> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Ok(Route::Collection);
        }

        match trimmed.strip_prefix("/blog/") {
            Some(id) => Ok(Route::Detail(BlogId::new(id)?)),
            None => Err(InvalidInputError::Other {
                message: format!("unknown route '{}'", path),
            }
            .into()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Collection => f.write_str("/"),
            Route::Detail(id) => write!(f, "/blog/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = blog_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_routes() {
        assert_eq!(Route::parse("/").unwrap(), Route::Collection);
        assert_eq!(Route::parse("").unwrap(), Route::Collection);
        assert_eq!(
            Route::parse("/blog/7").unwrap(),
            Route::Detail(BlogId::from(7))
        );
        assert_eq!(
            Route::parse("/blog/7/").unwrap(),
            Route::Detail(BlogId::from(7))
        );
    }

    #[test]
    fn display_matches_parse() {
        let route = Route::Detail(BlogId::new("abc").unwrap());
        assert_eq!(route.to_string(), "/blog/abc");
        assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!(Route::parse("/users/1").is_err());
        assert!(Route::parse("/blog/").is_err());
        assert!(Route::parse("/blog/a/b").is_err());
    }
}
