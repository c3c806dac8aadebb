//! Slug derivation.

/// Slug used when a title has no usable characters.
const FALLBACK_SLUG: &str = "blog";

/// Turn a title into a URL slug: lowercase ASCII words joined by `-`.
pub(crate) fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }

    let slug = slug.trim_matches(|c| c == '-' || c == '_');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Pick the first of `base`, `base-1`, `base-2`, ... not rejected by `taken`.
pub(crate) fn unique_slug(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }

    let mut n = 1;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_words() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust  --  async "), "rust-async");
        assert_eq!(slugify("snake_case title"), "snake_case-title");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("???"), FALLBACK_SLUG);
    }

    #[test]
    fn unique_slug_appends_counter() {
        let existing = ["post", "post-1"];
        let slug = unique_slug("post", |s| existing.contains(&s));
        assert_eq!(slug, "post-2");
        assert_eq!(unique_slug("other", |s| existing.contains(&s)), "other");
    }
}
