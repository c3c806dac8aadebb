//! The add/edit form.

use std::fmt;
use std::str::FromStr;

use blog_core::error::InvalidInputError;
use blog_core::{Blog, BlogFields, BlogId};

/// One editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
    Author,
    Tags,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Title, Field::Author, Field::Tags, Field::Content];

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Author => "author",
            Field::Tags => "tags",
        }
    }

    /// Tags are the only optional field.
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Tags)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = blog_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                InvalidInputError::Other {
                    message: format!("unknown field '{}'", s),
                }
                .into()
            })
    }
}

/// What submitting the form will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    /// No edit reference: create a new blog.
    Create,
    /// Update the blog with this identifier.
    Update(BlogId),
}

/// Client-owned mirror of a blog's editable fields plus an optional edit
/// reference.
///
/// With no reference, submitting creates a blog; with one, it updates that
/// blog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogForm {
    fields: BlogFields,
    editing: Option<BlogId>,
}

impl BlogForm {
    /// An empty form with no edit reference.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &BlogFields {
        &self.fields
    }

    /// The identifier being edited, if any.
    pub fn editing(&self) -> Option<&BlogId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.fields.title,
            Field::Content => &self.fields.content,
            Field::Author => &self.fields.author,
            Field::Tags => &self.fields.tags,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.fields.title = value,
            Field::Content => self.fields.content = value,
            Field::Author => self.fields.author = value,
            Field::Tags => self.fields.tags = value,
        }
    }

    /// Copy a blog's fields into the form and start editing it.
    pub fn load(&mut self, blog: &Blog) {
        self.fields = blog.fields();
        self.editing = Some(blog.id.clone());
    }

    /// Empty every field and drop the edit reference.
    pub fn reset(&mut self) {
        self.fields = BlogFields::default();
        self.editing = None;
    }

    pub fn target(&self) -> SubmitTarget {
        match &self.editing {
            Some(id) => SubmitTarget::Update(id.clone()),
            None => SubmitTarget::Create,
        }
    }

    /// True when all fields are empty and nothing is being edited.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.editing.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::blog;

    #[test]
    fn field_names_parse_case_insensitively() {
        assert_eq!("Title".parse::<Field>().unwrap(), Field::Title);
        assert_eq!(" tags ".parse::<Field>().unwrap(), Field::Tags);
        assert!("slug".parse::<Field>().is_err());
    }

    #[test]
    fn target_follows_edit_reference() {
        let mut form = BlogForm::new();
        assert_eq!(form.target(), SubmitTarget::Create);

        form.load(&blog(5, "Five"));
        assert_eq!(form.target(), SubmitTarget::Update(BlogId::from(5)));
        assert_eq!(form.get(Field::Title), "Five");
    }

    #[test]
    fn reset_clears_fields_and_reference() {
        let mut form = BlogForm::new();
        form.load(&blog(5, "Five"));
        form.set(Field::Tags, "edited");

        form.reset();

        assert!(form.is_empty());
        assert_eq!(form, BlogForm::new());
    }
}
