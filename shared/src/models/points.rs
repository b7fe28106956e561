//! Green-points ledger records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of points movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Earned,
    Deducted,
    Bonus,
    Milestone,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Earned => "EARNED",
            TransactionType::Deducted => "DEDUCTED",
            TransactionType::Bonus => "BONUS",
            TransactionType::Milestone => "MILESTONE",
        }
    }

    pub fn parse(s: &str) -> Option<TransactionType> {
        match s {
            "EARNED" => Some(TransactionType::Earned),
            "DEDUCTED" => Some(TransactionType::Deducted),
            "BONUS" => Some(TransactionType::Bonus),
            "MILESTONE" => Some(TransactionType::Milestone),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable entry in a company's points ledger
///
/// The company's `green_points` balance equals the signed sum of these
/// entries; every write path keeps the two consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenPointsTransaction {
    pub id: Uuid,
    pub company_id: Uuid,
    /// Signed points delta
    pub points: i32,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: Option<String>,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GreenPointsTransaction {
    /// Human-readable label for history views: description, else reason,
    /// else the transaction kind.
    pub fn activity(&self) -> String {
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            return description.to_string();
        }
        if let Some(reason) = self.reason.as_deref().filter(|r| !r.is_empty()) {
            return reason.to_string();
        }
        self.kind.as_str().replace('_', " ")
    }
}
