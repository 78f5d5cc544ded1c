//! Point redistribution when collapsing a scope into summary records.

use super::category::compose_description;

/// One record to create in place of a summarized scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub description: String,
    pub points: i64,
}

/// Split `total` into `count` shares; the remainder goes to the first share.
///
/// The shares always sum to `total`. Returns an empty vector for `count == 0`.
pub fn redistribute_points(total: i64, count: usize) -> Vec<i64> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as i64;
    let base = total / n;
    let remainder = total % n;

    let mut shares = vec![base; count];
    shares[0] += remainder;
    shares
}

/// Plan the replacement records for `category`.
///
/// Blank bodies are dropped; `None` when nothing is left, so the caller
/// never deletes a scope without replacements.
pub fn plan_summary(category: &str, bodies: &[String], total: i64) -> Option<Vec<SummaryItem>> {
    let bodies: Vec<&str> = bodies
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .collect();
    if bodies.is_empty() {
        return None;
    }

    let shares = redistribute_points(total, bodies.len());
    Some(
        bodies
            .into_iter()
            .zip(shares)
            .map(|(body, points)| SummaryItem {
                description: compose_description(category, body),
                points,
            })
            .collect(),
    )
}
