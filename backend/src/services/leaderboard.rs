//! Leaderboard and ranking service
//!
//! Read-only views over company aggregates. Rows are fetched in insertion
//! order and ranked with the stable ordering in `shared::leaderboard`, so
//! equal balances always resolve the same way.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::leaderboard::{order_by_green_points, rank_of, LeaderboardEntry};
use shared::models::{CompanySize, Industry};
use shared::types::{PaginatedResponse, Pagination, PaginationMeta};

/// Leaderboard service
#[derive(Clone)]
pub struct LeaderboardService {
    db: PgPool,
}

/// Database row for a leaderboard entry
#[derive(Debug, sqlx::FromRow)]
struct EntryRow {
    id: Uuid,
    name: String,
    industry: String,
    size: String,
    green_points: i32,
    total_footprint: f64,
}

impl From<EntryRow> for LeaderboardEntry {
    fn from(row: EntryRow) -> Self {
        LeaderboardEntry {
            id: row.id,
            name: row.name,
            industry: Industry::parse(&row.industry).unwrap_or(Industry::Other),
            size: CompanySize::parse(&row.size).unwrap_or(CompanySize::Small),
            green_points: row.green_points,
            total_footprint: row.total_footprint,
        }
    }
}

/// A company's own position on the leaderboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyRanking {
    pub rank: usize,
    pub company_id: Uuid,
    pub company_name: String,
    pub industry: Industry,
    pub green_points: i32,
}

impl LeaderboardService {
    /// Create a new LeaderboardService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Top companies by green points
    pub async fn top_companies(&self, limit: usize) -> AppResult<Vec<LeaderboardEntry>> {
        let mut ordered = self.ordered_entries(None).await?;
        ordered.truncate(limit);
        Ok(ordered)
    }

    /// Top companies within one industry
    pub async fn top_companies_by_industry(
        &self,
        industry: Industry,
        limit: usize,
    ) -> AppResult<Vec<LeaderboardEntry>> {
        let mut ordered = self.ordered_entries(Some(industry)).await?;
        ordered.truncate(limit);
        Ok(ordered)
    }

    /// Paged leaderboard, optionally filtered by industry
    pub async fn rankings(
        &self,
        industry: Option<Industry>,
        pagination: Pagination,
    ) -> AppResult<PaginatedResponse<LeaderboardEntry>> {
        let ordered = self.ordered_entries(industry).await?;
        let total_items = ordered.len() as u64;

        let start = (pagination.offset() as usize).min(ordered.len());
        let end = (start + pagination.limit() as usize).min(ordered.len());

        Ok(PaginatedResponse {
            data: ordered[start..end].to_vec(),
            pagination: PaginationMeta::new(pagination, total_items),
        })
    }

    /// A company's 1-based rank within the full ordering
    pub async fn my_ranking(&self, company_id: Uuid) -> AppResult<MyRanking> {
        let ordered = self.ordered_entries(None).await?;

        let rank = rank_of(&ordered, company_id)
            .ok_or_else(|| AppError::NotFound("Company".to_string()))?;
        let entry = &ordered[rank - 1];

        Ok(MyRanking {
            rank,
            company_id: entry.id,
            company_name: entry.name.clone(),
            industry: entry.industry,
            green_points: entry.green_points,
        })
    }

    /// Average latest footprint across an industry, if it has any companies
    pub async fn industry_average(&self, industry: Industry) -> AppResult<Option<f64>> {
        let average = sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(total_footprint) FROM companies WHERE industry = $1",
        )
        .bind(industry.as_str())
        .fetch_one(&self.db)
        .await?;

        Ok(average)
    }

    /// All companies ordered for the leaderboard.
    ///
    /// The query returns insertion order; the stable sort by points on top of
    /// it makes tie-breaks deterministic.
    async fn ordered_entries(
        &self,
        industry: Option<Industry>,
    ) -> AppResult<Vec<LeaderboardEntry>> {
        let rows = match industry {
            Some(industry) => {
                sqlx::query_as::<_, EntryRow>(
                    r#"
                    SELECT id, name, industry, size, green_points, total_footprint
                    FROM companies
                    WHERE industry = $1
                    ORDER BY created_at ASC, id ASC
                    "#,
                )
                .bind(industry.as_str())
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, EntryRow>(
                    r#"
                    SELECT id, name, industry, size, green_points, total_footprint
                    FROM companies
                    ORDER BY created_at ASC, id ASC
                    "#,
                )
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(order_by_green_points(
            rows.into_iter().map(|r| r.into()).collect(),
        ))
    }
}
