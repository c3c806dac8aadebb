//! blog-view - State for the blog collection and detail screens.
//!
//! Both views follow the same fetch cycle, `idle → loading → {loaded | failed}`,
//! and talk to any [`BlogApi`](blog_core::BlogApi) on their own; they share no
//! state.
//!
//! Every operation comes in two forms. The `async` method (`load`, `submit`,
//! `delete`, ...) sends the request and applies the answer in one go. The
//! `begin_*` / `finish_*` pair splits issuing a request from applying its
//! response so a UI loop can keep several requests in flight and complete
//! them in whatever order the network answers. List responses carry a
//! [`RequestToken`]; only the newest one is applied.
//!
//! # Example
//!
//! ```no_run
//! use blog_core::BlogApi;
//! use blog_view::{CollectionView, Field, ViewError};
//!
//! # async fn example(api: &impl BlogApi) -> Result<(), ViewError> {
//! let mut view = CollectionView::new();
//! view.mount(api).await?;
//!
//! view.form_mut().set(Field::Title, "Hello");
//! view.form_mut().set(Field::Content, "First post");
//! view.form_mut().set(Field::Author, "ann");
//! view.submit(api).await?;
//! # Ok(())
//! # }
//! ```

mod collection;
mod detail;
mod error;
mod fetch;
mod form;
mod route;

#[cfg(test)]
mod testing;

pub use collection::{
    CollectionView, DELETE_FAILED, DeleteTicket, LOAD_FAILED, LoadTicket, Mutation, SAVE_FAILED,
    Saved, SubmitTicket,
};
pub use detail::{DETAIL_FAILED, DetailTicket, DetailView};
pub use error::ViewError;
pub use fetch::{FetchState, Freshness, Outcome, RequestToken};
pub use form::{BlogForm, Field, SubmitTarget};
pub use route::Route;
