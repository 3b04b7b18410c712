//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// A sampled integer standing in for a user/record key
pub type Identifier = u32;

/// The two matching strategies being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// Exhaustive pairwise comparison, O(n^2)
    NestedLoops,
    /// Membership set built from the second list, O(n)
    SetLookup,
}

impl MatchStrategy {
    /// Legend label used on the chart
    pub fn label(&self) -> &'static str {
        match self {
            MatchStrategy::NestedLoops => "Nested Loops (O(n^2))",
            MatchStrategy::SetLookup => "Set-based Lookup (O(n))",
        }
    }

    /// Run this strategy's matcher
    pub fn run(&self, list_a: &[Identifier], list_b: &[Identifier]) -> Vec<Identifier> {
        match self {
            MatchStrategy::NestedLoops => crate::matching::find_matches_nested_loops(list_a, list_b),
            MatchStrategy::SetLookup => crate::matching::find_matches_using_set(list_a, list_b),
        }
    }
}

/// How much faster the set lookup ran than the nested loops at one size
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedupLevel {
    /// Set lookup was not faster
    None,
    /// Up to 10x
    Modest,
    /// 10x to 100x
    Large,
    /// Beyond 100x
    Dramatic,
}

impl SpeedupLevel {
    /// Classify a nested/set timing ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 1.0 {
            Self::None
        } else if ratio < 10.0 {
            Self::Modest
        } else if ratio < 100.0 {
            Self::Large
        } else {
            Self::Dramatic
        }
    }
}
