// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// A vote is always exactly one unit up or down, no matter what number it came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Vote {
    #[serde(rename = "upVote")]
    #[strum(serialize = "upVote")]
    Up,
    #[serde(rename = "downVote")]
    #[strum(serialize = "downVote")]
    Down,
}

impl Vote {
    /// Positive numbers are an up vote. Zero and negative numbers are a down vote.
    #[must_use]
    pub fn normalize(raw: i64) -> Self { if raw > 0 { Vote::Up } else { Vote::Down } }

    #[must_use]
    pub fn delta(self) -> i64 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }
}
