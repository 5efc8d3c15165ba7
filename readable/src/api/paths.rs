// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Paths of the Readable server endpoints, relative to the base url.

#[must_use]
pub fn categories() -> String { "/categories".into() }

/// All posts, or only the ones in one category.
#[must_use]
pub fn posts(maybe_category: Option<&str>) -> String {
    match maybe_category {
        Some(category) => format!("/{category}/posts"),
        None => "/posts".into(),
    }
}

#[must_use]
pub fn post(id: &str) -> String { format!("/posts/{id}") }

#[must_use]
pub fn post_comments(post_id: &str) -> String { format!("/posts/{post_id}/comments") }

#[must_use]
pub fn comments() -> String { "/comments".into() }

#[must_use]
pub fn comment(id: &str) -> String { format!("/comments/{id}") }

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(posts(None), "/posts")]
    #[test_case(posts(Some("react")), "/react/posts")]
    #[test_case(post("8xf0y6ziyjabvozdd253nd"), "/posts/8xf0y6ziyjabvozdd253nd")]
    #[test_case(post_comments("p1"), "/posts/p1/comments")]
    #[test_case(comment("c1"), "/comments/c1")]
    fn test_paths(actual: String, expected: &str) {
        assert_eq!(actual, expected);
    }
}
