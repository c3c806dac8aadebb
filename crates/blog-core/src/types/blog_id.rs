//! Blog identifier type.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// An opaque, server-assigned blog identifier.
///
/// Gateways may hand out numeric or textual identifiers; both round-trip
/// through JSON in the form they arrived in. Equality and hashing go by the
/// textual form, so `7` and `"7"` name the same blog. Textual identifiers
/// must be usable as a single URL path segment.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct BlogId(Repr);

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(Number),
    Text(String),
}

impl BlogId {
    /// Parse an identifier from user input.
    ///
    /// Input in canonical integer form (`7`, `-1`, not `007`) becomes a
    /// numeric identifier.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref().trim();

        if let Some(n) = canonical_integer(s) {
            return Ok(Self(Repr::Number(n)));
        }

        Self::validate_text(s)?;
        Ok(Self(Repr::Text(s.to_string())))
    }

    /// Returns the value as an unsigned integer, if it is one.
    pub fn as_number(&self) -> Option<u64> {
        match &self.0 {
            Repr::Number(n) => n.as_u64(),
            Repr::Text(s) => canonical_integer(s).and_then(|n| n.as_u64()),
        }
    }

    fn canonical(&self) -> Cow<'_, str> {
        match &self.0 {
            Repr::Number(n) => Cow::Owned(n.to_string()),
            Repr::Text(s) => Cow::Borrowed(s),
        }
    }

    fn validate_text(s: &str) -> Result<(), Error> {
        let reason = if s.is_empty() {
            Some("must not be empty")
        } else if s.chars().any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace()) {
            Some("must be a single URL path segment")
        } else if s == "." || s == ".." {
            Some("must not be a relative path segment")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidInputError::BlogId {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

fn canonical_integer(s: &str) -> Option<Number> {
    if let Ok(n) = s.parse::<u64>() {
        (n.to_string() == s).then(|| Number::from(n))
    } else if let Ok(n) = s.parse::<i64>() {
        (n.to_string() == s).then(|| Number::from(n))
    } else {
        None
    }
}

impl From<u64> for BlogId {
    fn from(n: u64) -> Self {
        Self(Repr::Number(Number::from(n)))
    }
}

impl PartialEq for BlogId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for BlogId {}

impl Hash for BlogId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for BlogId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for BlogId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(Self(Repr::Number(n))),
            Repr::Text(s) => {
                Self::validate_text(&s).map_err(serde::de::Error::custom)?;
                Ok(Self(Repr::Text(s)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_as_number() {
        let id = BlogId::new("42").unwrap();
        assert_eq!(id.as_number(), Some(42));
        assert_eq!(id, BlogId::from(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn text_ids_are_opaque() {
        let id = BlogId::new("a1b2-c3").unwrap();
        assert_eq!(id.as_number(), None);
        assert_eq!(id.to_string(), "a1b2-c3");
    }

    #[test]
    fn rejects_path_breaking_ids() {
        assert!(BlogId::new("").is_err());
        assert!(BlogId::new("a/b").is_err());
        assert!(BlogId::new("a b").is_err());
        assert!(BlogId::new("..").is_err());
    }

    #[test]
    fn json_keeps_original_shape() {
        let id: BlogId = serde_json::from_str("5").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");

        let id: BlogId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");

        assert!(serde_json::from_str::<BlogId>("\"x/y\"").is_err());
    }

    #[test]
    fn string_and_number_forms_are_the_same_id() {
        use std::collections::HashSet;

        let from_server: BlogId = serde_json::from_str("\"7\"").unwrap();
        let typed = BlogId::new("7").unwrap();
        assert_eq!(from_server, typed);
        assert_eq!(from_server, BlogId::from(7));
        assert_eq!(from_server.as_number(), Some(7));

        let set: HashSet<BlogId> = [from_server.clone()].into_iter().collect();
        assert!(set.contains(&typed));

        // Still serialized the way the server sent it
        assert_eq!(serde_json::to_string(&from_server).unwrap(), "\"7\"");
    }

    #[test]
    fn any_json_number_is_an_id() {
        let id: BlogId = serde_json::from_str("-1").unwrap();
        assert_eq!(id, BlogId::new("-1").unwrap());
        assert_eq!(id.as_number(), None);
        assert_eq!(serde_json::to_string(&id).unwrap(), "-1");

        let id: BlogId = serde_json::from_str("2.5").unwrap();
        assert_eq!(id.to_string(), "2.5");
    }

    #[test]
    fn padded_digits_stay_textual() {
        let id = BlogId::new("007").unwrap();
        assert_ne!(id, BlogId::from(7));
        assert_eq!(id.to_string(), "007");
    }
}
