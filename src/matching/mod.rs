//! Matchers computing which identifiers of one list also occur in another
//!
//! Both matchers return the qualifying elements of `list_a` in their original
//! order, once per qualifying element. They differ only in cost:
//! [`find_matches_nested_loops`] compares every pair, while
//! [`find_matches_using_set`] hashes `list_b` once.

use crate::types::Identifier;
use std::collections::HashSet;

/// Quadratic matcher: scan `list_b` for every element of `list_a`
pub fn find_matches_nested_loops(list_a: &[Identifier], list_b: &[Identifier]) -> Vec<Identifier> {
    let mut matches = Vec::new();
    for &user_a in list_a {
        for &user_b in list_b {
            if user_a == user_b {
                matches.push(user_a);
                break;
            }
        }
    }
    matches
}

/// Linear matcher: build a membership set from `list_b`, then filter `list_a`
pub fn find_matches_using_set(list_a: &[Identifier], list_b: &[Identifier]) -> Vec<Identifier> {
    let set_b: HashSet<Identifier> = list_b.iter().copied().collect();
    list_a
        .iter()
        .copied()
        .filter(|user_a| set_b.contains(user_a))
        .collect()
}
