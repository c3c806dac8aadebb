//! The collection screen: a searchable list plus one add/edit form.

use tracing::{debug, instrument, warn};

use blog_core::{Blog, BlogApi, BlogFields, BlogId};

use crate::error::ViewError;
use crate::fetch::{Freshness, Outcome, RequestToken, TokenCounter};
use crate::form::{BlogForm, SubmitTarget};

/// Shown when a list request fails.
pub const LOAD_FAILED: &str = "Could not load blogs. Please try again.";

/// Shown when a create or update fails.
pub const SAVE_FAILED: &str = "Failed to save blog. Please check the inputs.";

/// Shown when a delete fails.
pub const DELETE_FAILED: &str = "Failed to delete blog.";

/// The change currently being sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Submitting,
    Deleting(BlogId),
}

/// An issued list request, to be completed with [`CollectionView::finish_load`].
#[derive(Debug)]
#[must_use = "a load ticket must be completed with finish_load"]
pub struct LoadTicket {
    token: RequestToken,
    search: String,
}

impl LoadTicket {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// The search term this request is scoped to.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Send the list request.
    pub async fn send<A>(&self, api: &A) -> blog_core::Result<Vec<Blog>>
    where
        A: BlogApi + ?Sized,
    {
        api.list_blogs(&self.search).await
    }
}

/// An issued create or update, to be completed with
/// [`CollectionView::finish_submit`].
#[derive(Debug)]
#[must_use = "a submit ticket must be completed with finish_submit"]
pub struct SubmitTicket {
    target: SubmitTarget,
    fields: BlogFields,
}

impl SubmitTicket {
    pub fn target(&self) -> &SubmitTarget {
        &self.target
    }

    pub fn fields(&self) -> &BlogFields {
        &self.fields
    }

    /// Send the create or update request.
    pub async fn send<A>(&self, api: &A) -> blog_core::Result<Blog>
    where
        A: BlogApi + ?Sized,
    {
        match &self.target {
            SubmitTarget::Create => api.create_blog(&self.fields).await,
            SubmitTarget::Update(id) => api.update_blog(id, &self.fields).await,
        }
    }
}

/// An issued delete, to be completed with [`CollectionView::finish_delete`].
#[derive(Debug)]
#[must_use = "a delete ticket must be completed with finish_delete"]
pub struct DeleteTicket {
    id: BlogId,
}

impl DeleteTicket {
    pub fn id(&self) -> &BlogId {
        &self.id
    }

    /// Send the delete request.
    pub async fn send<A>(&self, api: &A) -> blog_core::Result<()>
    where
        A: BlogApi + ?Sized,
    {
        api.delete_blog(&self.id).await
    }
}

/// A successful create or update.
#[derive(Debug)]
pub struct Saved {
    /// The blog as returned by the gateway.
    pub blog: Blog,
    /// The follow-up list request that re-synchronizes the collection.
    pub reload: LoadTicket,
}

/// State of the collection screen.
///
/// The held list is always the result of the last applied list request;
/// mutations never edit it locally, they trigger a fresh load instead.
#[derive(Debug, Default)]
pub struct CollectionView {
    blogs: Vec<Blog>,
    loaded: bool,
    search: String,
    form: BlogForm,
    outcome: Outcome,
    tokens: TokenCounter,
    pending_load: Option<RequestToken>,
    mutation: Option<Mutation>,
}

impl CollectionView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blogs from the last applied list request.
    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    pub fn find(&self, id: &BlogId) -> Option<&Blog> {
        self.blogs.iter().find(|b| &b.id == id)
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn form(&self) -> &BlogForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BlogForm {
        &mut self.form
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The banner message, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.outcome.error()
    }

    /// True while the newest list request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    pub fn mutation(&self) -> Option<&Mutation> {
        self.mutation.as_ref()
    }

    /// Submit is enabled unless a change is already in flight.
    pub fn can_submit(&self) -> bool {
        self.mutation.is_none()
    }

    /// Delete is enabled unless a change is already in flight.
    pub fn can_delete(&self) -> bool {
        self.mutation.is_none()
    }

    /// A list request succeeded and returned nothing.
    pub fn is_empty_result(&self) -> bool {
        self.loaded && self.blogs.is_empty() && !self.is_loading()
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// Issue a list request for the current search term.
    pub fn begin_load(&mut self) -> LoadTicket {
        let token = self.tokens.issue();
        self.pending_load = Some(token);
        debug!(?token, search = %self.search, "Issuing list request");
        LoadTicket {
            token,
            search: self.search.clone(),
        }
    }

    /// Change the search term and issue a list request for it.
    pub fn set_search(&mut self, term: impl Into<String>) -> LoadTicket {
        self.search = term.into();
        self.begin_load()
    }

    /// Apply a list response.
    ///
    /// Responses to anything but the newest request are discarded. On success
    /// the list is replaced wholesale; on failure it is left untouched.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: blog_core::Result<Vec<Blog>>,
    ) -> Result<Freshness, ViewError> {
        if !self.tokens.is_current(ticket.token) {
            debug!(token = ?ticket.token, search = %ticket.search, "Discarding stale list response");
            return Ok(Freshness::Stale);
        }

        self.pending_load = None;

        match result {
            Ok(blogs) => {
                debug!(count = blogs.len(), "Applying list response");
                self.blogs = blogs;
                self.loaded = true;
                self.outcome = Outcome::Succeeded;
                Ok(Freshness::Current)
            }
            Err(err) => {
                warn!(error = %err, search = %ticket.search, "Failed to load blogs");
                self.outcome = Outcome::Failed(LOAD_FAILED.to_string());
                Err(err.into())
            }
        }
    }

    /// Send a previously issued list request and apply its response.
    pub async fn complete_load<A>(
        &mut self,
        api: &A,
        ticket: LoadTicket,
    ) -> Result<Freshness, ViewError>
    where
        A: BlogApi + ?Sized,
    {
        let result = ticket.send(api).await;
        self.finish_load(ticket, result)
    }

    /// Initial load when the screen is shown.
    pub async fn mount<A>(&mut self, api: &A) -> Result<Freshness, ViewError>
    where
        A: BlogApi + ?Sized,
    {
        self.load(api).await
    }

    /// Re-fetch the list for the current search term.
    #[instrument(skip(self, api), fields(search = %self.search))]
    pub async fn load<A>(&mut self, api: &A) -> Result<Freshness, ViewError>
    where
        A: BlogApi + ?Sized,
    {
        let ticket = self.begin_load();
        self.complete_load(api, ticket).await
    }

    /// Change the search term and re-fetch.
    pub async fn search<A>(
        &mut self,
        api: &A,
        term: impl Into<String>,
    ) -> Result<Freshness, ViewError>
    where
        A: BlogApi + ?Sized,
    {
        let ticket = self.set_search(term);
        self.complete_load(api, ticket).await
    }

    // ========================================================================
    // Submit
    // ========================================================================

    /// Validate the form and issue a create or update.
    ///
    /// Refuses with [`ViewError::Busy`] while another change is in flight.
    /// A failed presence check sets the error banner and sends nothing.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, ViewError> {
        if self.mutation.is_some() {
            return Err(ViewError::Busy);
        }

        if let Err(err) = self.form.fields().validate() {
            let message = match &err {
                blog_core::Error::InvalidInput(e) => e.to_string(),
                other => other.to_string(),
            };
            self.outcome = Outcome::Failed(message);
            return Err(err.into());
        }

        self.mutation = Some(Mutation::Submitting);
        let target = self.form.target();
        debug!(?target, "Issuing submit");

        Ok(SubmitTicket {
            target,
            fields: self.form.fields().clone(),
        })
    }

    /// Apply a create or update response.
    ///
    /// On success the form is reset and a reload is issued; the caller must
    /// complete the returned [`Saved::reload`] ticket. On failure the form keeps
    /// its contents and edit reference for a retry.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: blog_core::Result<Blog>,
    ) -> Result<Saved, ViewError> {
        self.mutation = None;

        match result {
            Ok(blog) => {
                debug!(id = %blog.id, target = ?ticket.target, "Saved blog");
                self.form.reset();
                self.outcome = Outcome::Succeeded;
                let reload = self.begin_load();
                Ok(Saved { blog, reload })
            }
            Err(err) => {
                warn!(error = %err, target = ?ticket.target, "Failed to save blog");
                self.outcome = Outcome::Failed(SAVE_FAILED.to_string());
                Err(err.into())
            }
        }
    }

    /// Submit the form, then re-fetch the list.
    ///
    /// Returns the saved blog. A failing reload after a successful save does
    /// not fail the submit; it shows up in [`outcome`](Self::outcome).
    #[instrument(skip(self, api))]
    pub async fn submit<A>(&mut self, api: &A) -> Result<Blog, ViewError>
    where
        A: BlogApi + ?Sized,
    {
        let ticket = self.begin_submit()?;
        let result = ticket.send(api).await;
        let saved = self.finish_submit(ticket, result)?;

        if let Err(err) = self.complete_load(api, saved.reload).await {
            debug!(error = %err, "Reload after save failed");
        }

        Ok(saved.blog)
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Issue a delete. Refuses with [`ViewError::Busy`] while another change is
    /// in flight.
    pub fn begin_delete(&mut self, id: BlogId) -> Result<DeleteTicket, ViewError> {
        if self.mutation.is_some() {
            return Err(ViewError::Busy);
        }

        debug!(%id, "Issuing delete");
        self.mutation = Some(Mutation::Deleting(id.clone()));
        Ok(DeleteTicket { id })
    }

    /// Apply a delete response. On success a reload is issued and returned.
    pub fn finish_delete(
        &mut self,
        ticket: DeleteTicket,
        result: blog_core::Result<()>,
    ) -> Result<LoadTicket, ViewError> {
        self.mutation = None;

        match result {
            Ok(()) => {
                debug!(id = %ticket.id, "Deleted blog");
                self.outcome = Outcome::Succeeded;
                Ok(self.begin_load())
            }
            Err(err) => {
                warn!(error = %err, id = %ticket.id, "Failed to delete blog");
                self.outcome = Outcome::Failed(DELETE_FAILED.to_string());
                Err(err.into())
            }
        }
    }

    /// Delete a blog, then re-fetch the list.
    #[instrument(skip(self, api), fields(%id))]
    pub async fn delete<A>(&mut self, api: &A, id: BlogId) -> Result<(), ViewError>
    where
        A: BlogApi + ?Sized,
    {
        let ticket = self.begin_delete(id)?;
        let result = ticket.send(api).await;
        let reload = self.finish_delete(ticket, result)?;

        if let Err(err) = self.complete_load(api, reload).await {
            debug!(error = %err, "Reload after delete failed");
        }

        Ok(())
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Copy a blog into the form and start editing it. Nothing is fetched.
    pub fn begin_edit(&mut self, blog: &Blog) {
        self.form.load(blog);
    }

    /// Start editing a blog from the held list. Returns false if the list
    /// does not contain it.
    pub fn edit(&mut self, id: &BlogId) -> bool {
        match self.blogs.iter().find(|b| &b.id == id) {
            Some(blog) => {
                self.form.load(blog);
                true
            }
            None => false,
        }
    }

    /// Empty the form and drop the edit reference.
    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }
}
