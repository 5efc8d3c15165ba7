// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering,
          fmt::{Display, Formatter, Result},
          str::FromStr};

use crate::Post;

/// The post fields that a list of posts can be sorted by. The string forms are the wire
/// (camelCase) names of the fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumString, strum_macros::Display,
)]
pub enum PostSortField {
    #[strum(serialize = "voteScore")]
    VoteScore,
    #[strum(serialize = "timestamp")]
    Timestamp,
    #[strum(serialize = "title")]
    Title,
    #[strum(serialize = "author")]
    Author,
    #[strum(serialize = "commentCount")]
    CommentCount,
}

/// A field, and a direction. Written as the field name with an optional leading `-` for
/// descending, eg: `-voteScore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOption {
    pub field: PostSortField,
    pub descending: bool,
}

impl Default for SortOption {
    /// Highest score first.
    fn default() -> Self {
        Self {
            field: PostSortField::VoteScore,
            descending: true,
        }
    }
}

impl SortOption {
    #[must_use]
    pub fn compare(&self, lhs: &Post, rhs: &Post) -> Ordering {
        let ordering = match self.field {
            PostSortField::VoteScore => lhs.vote_score.cmp(&rhs.vote_score),
            PostSortField::Timestamp => lhs.timestamp.cmp(&rhs.timestamp),
            PostSortField::Title => lhs.title.cmp(&rhs.title),
            PostSortField::Author => lhs.author.cmp(&rhs.author),
            PostSortField::CommentCount => lhs.comment_count.cmp(&rhs.comment_count),
        };
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl FromStr for SortOption {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (descending, field) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        Ok(Self {
            field: PostSortField::from_str(field)?,
            descending,
        })
    }
}

impl Display for SortOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let sign = if self.descending { "-" } else { "" };
        write!(f, "{sign}{}", self.field)
    }
}
