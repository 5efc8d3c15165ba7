// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Category, Comment, Post};

#[must_use]
pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("react", "react"),
        Category::new("redux", "redux"),
        Category::new("udacity", "udacity"),
    ]
}

#[must_use]
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: "8xf0y6ziyjabvozdd253nd".into(),
            title: "Udacity is the best place to learn React".into(),
            body: "Everyone says so after all.".into(),
            author: "thingtwo".into(),
            category: "react".into(),
            timestamp: 1_467_166_872_634,
            vote_score: 6,
            comment_count: 2,
            processing: false,
        },
        Post {
            id: "6ni6ok3ym7mf1p33lnez".into(),
            title: "Learn Redux in 10 minutes!".into(),
            body: "Just kidding. It takes more than 10 minutes to learn technology.".into(),
            author: "thingone".into(),
            category: "redux".into(),
            timestamp: 1_468_479_767_190,
            vote_score: -5,
            comment_count: 0,
            processing: false,
        },
    ]
}

#[must_use]
pub fn sample_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "894tuq4ut84ut8v4t8wun89g".into(),
            parent_id: "8xf0y6ziyjabvozdd253nd".into(),
            body: "Hi there! I am a COMMENT.".into(),
            author: "thingtwo".into(),
            timestamp: 1_468_166_872_634,
            vote_score: 6,
            processing: false,
        },
        Comment {
            id: "8tu4bsun805n8un48ve89".into(),
            parent_id: "8xf0y6ziyjabvozdd253nd".into(),
            body: "Comments. Are. Cool.".into(),
            author: "thingone".into(),
            timestamp: 1_469_479_767_190,
            vote_score: -5,
            processing: false,
        },
    ]
}
