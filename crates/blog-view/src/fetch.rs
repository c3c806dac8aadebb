//! Fetch-cycle state shared by both views.

/// Identifies one issued list or detail request.
///
/// Tokens increase monotonically within a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues tokens and remembers the newest one.
#[derive(Debug, Default)]
pub(crate) struct TokenCounter {
    latest: u64,
}

impl TokenCounter {
    pub(crate) fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub(crate) fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// Whether a completed response was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The response answered the newest request and was applied.
    Current,
    /// A newer request was issued meanwhile; the response was discarded.
    Stale,
}

/// State of a single fetch cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Loaded(T),
    /// The last request failed with a user-facing message.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The most recent completed operation of a view.
///
/// Each completed operation overwrites it; there is no error history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// No operation has completed yet.
    #[default]
    Idle,
    /// The last operation succeeded.
    Succeeded,
    /// The last operation failed with a user-facing message, possibly empty.
    Failed(String),
}

impl Outcome {
    /// The failure message, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let mut tokens = TokenCounter::default();
        let first = tokens.issue();
        let second = tokens.issue();

        assert!(first < second);
        assert!(!tokens.is_current(first));
        assert!(tokens.is_current(second));
    }

    #[test]
    fn empty_failure_message_is_still_a_failure() {
        let outcome = Outcome::Failed(String::new());
        assert!(outcome.is_failure());
        assert_eq!(outcome.error(), Some(""));
        assert_eq!(Outcome::Succeeded.error(), None);
    }

    #[test]
    fn fetch_state_accessors() {
        let state: FetchState<u8> = FetchState::Loaded(3);
        assert_eq!(state.data(), Some(&3));
        assert!(!state.is_loading());
        assert_eq!(FetchState::<u8>::Failed("x".into()).error(), Some("x"));
        assert_eq!(FetchState::<u8>::default(), FetchState::Idle);
    }
}
