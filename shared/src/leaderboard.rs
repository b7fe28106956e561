//! Leaderboard ordering
//!
//! Pure ordering and rank lookup over company aggregates. The sort is stable:
//! companies with equal balances keep the order they were supplied in, which
//! the ranking service fixes to insertion order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CompanySize, Industry};

/// A company as it appears on the leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub name: String,
    pub industry: Industry,
    pub size: CompanySize,
    pub green_points: i32,
    pub total_footprint: f64,
}

/// Order entries by descending green points.
///
/// Ties keep their relative input order (stable sort), so callers that supply
/// entries in insertion order get a deterministic leaderboard.
pub fn order_by_green_points(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.green_points.cmp(&a.green_points));
    entries
}

/// 1-based rank of a company within an ordered leaderboard
pub fn rank_of(ordered: &[LeaderboardEntry], company_id: Uuid) -> Option<usize> {
    ordered.iter().position(|e| e.id == company_id).map(|p| p + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, points: i32) -> LeaderboardEntry {
        LeaderboardEntry {
            id: Uuid::new_v4(),
            name: name.to_string(),
            industry: Industry::Technology,
            size: CompanySize::Small,
            green_points: points,
            total_footprint: 0.0,
        }
    }

    #[test]
    fn orders_descending_by_points() {
        let ordered = order_by_green_points(vec![entry("low", 10), entry("high", 90)]);
        assert_eq!(ordered[0].name, "high");
        assert_eq!(ordered[1].name, "low");
    }

    #[test]
    fn equal_balances_keep_input_order() {
        let ordered = order_by_green_points(vec![
            entry("first", 50),
            entry("second", 50),
            entry("third", 50),
        ]);
        let names: Vec<_> = ordered.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn rank_is_one_based_position() {
        let a = entry("a", 500);
        let c = entry("c", 300);
        let c_id = c.id;
        let ordered = order_by_green_points(vec![a, entry("b", 500), c]);
        assert_eq!(rank_of(&ordered, c_id), Some(3));
    }

    #[test]
    fn rank_of_unknown_company_is_none() {
        let ordered = order_by_green_points(vec![entry("a", 1)]);
        assert_eq!(rank_of(&ordered, Uuid::new_v4()), None);
    }
}
