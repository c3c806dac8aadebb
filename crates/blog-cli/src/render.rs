//! Terminal rendering of the collection and detail screens.

use colored::Colorize;

use blog_core::Blog;
use blog_view::{BlogForm, CollectionView, DetailView, FetchState, Field};

use crate::output;

/// Header of the add/edit form.
pub fn form_heading(form: &BlogForm) -> &'static str {
    if form.is_editing() {
        "Edit Blog"
    } else {
        "Add Blog"
    }
}

/// Render the whole collection screen: error banner, form, and list.
pub fn collection(view: &CollectionView) {
    if let Some(message) = view.error() {
        output::banner(message);
    }

    form(view.form());
    println!();
    blog_list(view);
}

/// Render the add/edit form.
pub fn form(form: &BlogForm) {
    let heading = match form.editing() {
        Some(id) => format!("{} #{}", form_heading(form), id),
        None => form_heading(form).to_string(),
    };
    println!("{}", heading.bold());

    for field in Field::ALL {
        let value = form.get(field);
        let label = if field.is_required() {
            field.name().to_string()
        } else {
            format!("{} (optional)", field.name())
        };
        if value.is_empty() {
            output::field(&label, &"-".dimmed().to_string());
        } else {
            output::field(&label, value);
        }
    }
}

/// What the list part of the collection screen shows.
#[derive(Debug, PartialEq)]
pub enum ListBody<'a> {
    Loading,
    Empty,
    Entries(&'a [Blog]),
}

/// Entries are hidden while a load is outstanding.
pub fn list_body(view: &CollectionView) -> ListBody<'_> {
    if view.is_loading() {
        ListBody::Loading
    } else if view.is_empty_result() {
        ListBody::Empty
    } else {
        ListBody::Entries(view.blogs())
    }
}

/// Render the list part of the collection screen.
pub fn blog_list(view: &CollectionView) {
    if !view.search_term().is_empty() {
        output::field("search", view.search_term());
    }

    match list_body(view) {
        ListBody::Loading => output::status("Loading blogs..."),
        ListBody::Empty => output::status("No blogs found."),
        ListBody::Entries(blogs) => {
            for blog in blogs {
                summary(blog);
            }
        }
    }
}

/// One list entry.
pub fn summary(blog: &Blog) {
    println!(
        "{} {} {}",
        format!("[{}]", blog.id).cyan(),
        blog.title.bold(),
        format!("by {}", blog.author).dimmed()
    );
    if !blog.tags.is_empty() {
        println!("    {}", blog.tags.yellow());
    }
}

/// Render the detail screen.
pub fn detail(view: &DetailView) {
    match view.state() {
        FetchState::Idle | FetchState::Loading => output::status("Loading..."),
        FetchState::Failed(message) => output::banner(message),
        FetchState::Loaded(blog) => full(blog),
    }
}

/// Every field of one blog.
pub fn full(blog: &Blog) {
    println!("{}", blog.title.bold());
    output::field("id", &blog.id.to_string());
    output::field("author", &blog.author);
    if !blog.tags.is_empty() {
        output::field("tags", &blog.tags);
    }
    if let Some(slug) = &blog.slug {
        output::field("slug", slug);
    }
    if let Some(created_at) = &blog.created_at {
        output::field("created", &created_at.to_rfc3339());
    }
    println!();
    println!("{}", blog.content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::Blog;

    fn blog(id: u64, title: &str) -> Blog {
        serde_json::from_value(serde_json::json!({
            "id": id, "title": title, "content": "C", "author": "A", "tags": null
        }))
        .unwrap()
    }

    #[test]
    fn list_is_hidden_while_loading() {
        let mut view = CollectionView::new();
        let ticket = view.begin_load();
        assert_eq!(list_body(&view), ListBody::Loading);

        view.finish_load(ticket, Ok(vec![blog(1, "One")])).unwrap();
        assert!(matches!(list_body(&view), ListBody::Entries(b) if b.len() == 1));

        let _pending = view.set_search("zzz");
        assert_eq!(list_body(&view), ListBody::Loading);
    }

    #[test]
    fn empty_result_after_load() {
        let mut view = CollectionView::new();
        let ticket = view.begin_load();
        view.finish_load(ticket, Ok(Vec::new())).unwrap();
        assert_eq!(list_body(&view), ListBody::Empty);
    }

    #[test]
    fn heading_follows_edit_reference() {
        let mut form = BlogForm::new();
        assert_eq!(form_heading(&form), "Add Blog");

        form.load(&blog(3, "T"));
        assert_eq!(form_heading(&form), "Edit Blog");

        form.reset();
        assert_eq!(form_heading(&form), "Add Blog");
    }
}
