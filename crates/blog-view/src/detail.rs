//! The detail screen: one blog, read-only.

use tracing::{debug, instrument, warn};

use blog_core::{Blog, BlogApi, BlogId};

use crate::error::ViewError;
use crate::fetch::{FetchState, Freshness, RequestToken, TokenCounter};

/// Shown when the blog cannot be fetched.
pub const DETAIL_FAILED: &str = "Could not load blog. Please try again.";

/// An issued detail request, to be completed with [`DetailView::finish_load`].
#[derive(Debug)]
#[must_use = "a detail ticket must be completed with finish_load"]
pub struct DetailTicket {
    token: RequestToken,
    id: BlogId,
}

impl DetailTicket {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn id(&self) -> &BlogId {
        &self.id
    }

    /// Send the request.
    pub async fn send<A>(&self, api: &A) -> blog_core::Result<Blog>
    where
        A: BlogApi + ?Sized,
    {
        api.get_blog(&self.id).await
    }
}

/// State of the detail screen for one identifier.
///
/// Failures are logged and also kept as [`FetchState::Failed`] so the screen
/// can show them the same way the collection screen does.
#[derive(Debug)]
pub struct DetailView {
    id: BlogId,
    state: FetchState<Blog>,
    tokens: TokenCounter,
}

impl DetailView {
    /// A view for `id` that has not fetched anything yet.
    pub fn new(id: BlogId) -> Self {
        Self {
            id,
            state: FetchState::Idle,
            tokens: TokenCounter::default(),
        }
    }

    pub fn id(&self) -> &BlogId {
        &self.id
    }

    pub fn state(&self) -> &FetchState<Blog> {
        &self.state
    }

    pub fn blog(&self) -> Option<&Blog> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Issue a request for the current identifier.
    pub fn begin_load(&mut self) -> DetailTicket {
        let token = self.tokens.issue();
        self.state = FetchState::Loading;
        debug!(?token, id = %self.id, "Issuing detail request");
        DetailTicket {
            token,
            id: self.id.clone(),
        }
    }

    /// Point the view at another identifier.
    ///
    /// Returns the request for the new identifier, or `None` if it did not
    /// change.
    pub fn set_id(&mut self, id: BlogId) -> Option<DetailTicket> {
        if id == self.id {
            return None;
        }
        self.id = id;
        Some(self.begin_load())
    }

    /// Apply a detail response. Responses to superseded requests are dropped.
    pub fn finish_load(
        &mut self,
        ticket: DetailTicket,
        result: blog_core::Result<Blog>,
    ) -> Result<Freshness, ViewError> {
        if !self.tokens.is_current(ticket.token) {
            debug!(id = %ticket.id, "Discarding stale detail response");
            return Ok(Freshness::Stale);
        }

        match result {
            Ok(blog) => {
                self.state = FetchState::Loaded(blog);
                Ok(Freshness::Current)
            }
            Err(err) => {
                warn!(error = %err, id = %ticket.id, "Error loading blog");
                self.state = FetchState::Failed(DETAIL_FAILED.to_string());
                Err(err.into())
            }
        }
    }

    /// Send a previously issued request and apply its response.
    pub async fn complete_load<A>(
        &mut self,
        api: &A,
        ticket: DetailTicket,
    ) -> Result<Freshness, ViewError>
    where
        A: BlogApi + ?Sized,
    {
        let result = ticket.send(api).await;
        self.finish_load(ticket, result)
    }

    /// Fetch the current identifier.
    #[instrument(skip(self, api), fields(id = %self.id))]
    pub async fn load<A>(&mut self, api: &A) -> Result<Freshness, ViewError>
    where
        A: BlogApi + ?Sized,
    {
        let ticket = self.begin_load();
        self.complete_load(api, ticket).await
    }

    /// Switch to another identifier and fetch it. Does nothing if the
    /// identifier is unchanged.
    pub async fn navigate<A>(&mut self, api: &A, id: BlogId) -> Result<(), ViewError>
    where
        A: BlogApi + ?Sized,
    {
        if let Some(ticket) = self.set_id(id) {
            self.complete_load(api, ticket).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeApi, blog};

    #[tokio::test]
    async fn loads_one_blog() {
        let api = FakeApi::with_blogs(vec![blog(1, "One"), blog(2, "Two")]);
        let mut view = DetailView::new(BlogId::from(2));
        assert_eq!(view.state(), &FetchState::Idle);

        view.load(&api).await.unwrap();

        assert_eq!(view.blog().map(|b| b.title.as_str()), Some("Two"));
        assert_eq!(api.calls(), [Call::Get(BlogId::from(2))]);
    }

    #[test]
    fn shows_loading_until_first_response() {
        let mut view = DetailView::new(BlogId::from(1));
        let ticket = view.begin_load();

        assert!(view.state().is_loading());
        assert!(view.blog().is_none());

        view.finish_load(ticket, Ok(blog(1, "One"))).unwrap();
        assert!(view.blog().is_some());
    }

    #[tokio::test]
    async fn failure_is_surfaced() {
        let api = FakeApi::with_blogs(vec![]);
        let mut view = DetailView::new(BlogId::from(9));

        let err = view.load(&api).await.unwrap_err();

        match err {
            ViewError::Api(e) => assert!(e.is_not_found()),
            other => panic!("expected api error, got {other:?}"),
        }
        assert_eq!(view.error(), Some(DETAIL_FAILED));
        assert!(view.blog().is_none());
    }

    #[tokio::test]
    async fn navigate_refetches_only_on_change() {
        let api = FakeApi::with_blogs(vec![blog(1, "One"), blog(2, "Two")]);
        let mut view = DetailView::new(BlogId::from(1));
        view.load(&api).await.unwrap();

        view.navigate(&api, BlogId::from(1)).await.unwrap();
        view.navigate(&api, BlogId::from(2)).await.unwrap();

        assert_eq!(view.blog().map(|b| b.title.as_str()), Some("Two"));
        assert_eq!(
            api.calls(),
            [Call::Get(BlogId::from(1)), Call::Get(BlogId::from(2))]
        );
    }

    #[test]
    fn response_for_previous_id_is_dropped() {
        let mut view = DetailView::new(BlogId::from(1));
        let first = view.begin_load();
        let second = view.set_id(BlogId::from(2)).unwrap();
        assert!(second.token() > first.token());
        assert_eq!(second.id(), &BlogId::from(2));

        let applied = view.finish_load(first, Ok(blog(1, "One"))).unwrap();
        assert_eq!(applied, Freshness::Stale);
        assert!(view.state().is_loading());

        view.finish_load(second, Ok(blog(2, "Two"))).unwrap();
        assert_eq!(view.blog().map(|b| &b.id), Some(&BlogId::from(2)));
    }

    #[test]
    fn same_id_in_another_json_shape_is_not_refetched() {
        let mut view = DetailView::new(BlogId::new("7").unwrap());
        let from_server: BlogId = serde_json::from_str("\"7\"").unwrap();

        assert!(view.set_id(from_server).is_none());
    }

    #[test]
    fn reloading_after_failure_clears_error() {
        let mut view = DetailView::new(BlogId::from(1));
        let ticket = view.begin_load();
        let _ = view.finish_load(
            ticket,
            Err(blog_core::error::TransportError::Timeout.into()),
        );
        assert_eq!(view.error(), Some(DETAIL_FAILED));

        let ticket = view.begin_load();
        assert_eq!(view.error(), None);
        view.finish_load(ticket, Ok(blog(1, "One"))).unwrap();
        assert!(view.error().is_none());
    }
}
