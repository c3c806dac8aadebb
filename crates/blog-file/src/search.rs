//! Server-side search matching.

use blog_core::Blog;

/// Split a search term into words. Commas separate words like whitespace.
pub(crate) fn search_words(term: &str) -> Vec<String> {
    term.replace(['\0', ','], " ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Every word must appear, case-insensitively, in the title, author or tags.
///
/// No words matches everything.
pub(crate) fn matches(blog: &Blog, words: &[String]) -> bool {
    let haystacks = [
        blog.title.to_lowercase(),
        blog.author.to_lowercase(),
        blog.tags.to_lowercase(),
    ];

    words
        .iter()
        .all(|word| haystacks.iter().any(|h| h.contains(word.as_str())))
}
