//! Green-points ledger service
//!
//! Owns the append-only transaction history and the cached balance on the
//! company aggregate. Awards are written inside the caller's transaction so
//! a footprint record can never commit without its points.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{GreenPointsTransaction, Industry, TransactionType};
use shared::rewards::{IndustryBenchmarks, RewardsPolicy};
use shared::types::{PaginatedResponse, Pagination, PaginationMeta};

/// Green-points service
#[derive(Clone)]
pub struct GreenPointsService {
    db: PgPool,
    policy: RewardsPolicy,
}

/// Database row for a points transaction
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    company_id: Uuid,
    points: i32,
    #[sqlx(rename = "type")]
    kind: String,
    description: Option<String>,
    reason: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<TransactionRow> for GreenPointsTransaction {
    fn from(row: TransactionRow) -> Self {
        GreenPointsTransaction {
            id: row.id,
            company_id: row.company_id,
            points: row.points,
            kind: TransactionType::parse(&row.kind).unwrap_or(TransactionType::Earned),
            description: row.description,
            reason: row.reason,
            created_at: row.created_at,
        }
    }
}

impl GreenPointsService {
    /// Create a new GreenPointsService over the default benchmark table
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            policy: RewardsPolicy::default(),
        }
    }

    /// Create a service over a substituted benchmark table
    pub fn with_benchmarks(db: PgPool, benchmarks: IndustryBenchmarks) -> Self {
        Self {
            db,
            policy: RewardsPolicy::new(benchmarks),
        }
    }

    /// Award points for a completed footprint calculation.
    ///
    /// Runs inside the caller's transaction: inserts the ledger entry and
    /// increments the cached balance in the database, so both commit or roll
    /// back with the footprint record. A non-positive award is a no-op.
    pub async fn award_for_calculation(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        company_id: Uuid,
        industry: Industry,
        total_emissions: f64,
    ) -> AppResult<i32> {
        let points = self.policy.points_for_calculation(industry, total_emissions);

        if points <= 0 {
            return Ok(0);
        }

        sqlx::query(
            r#"
            INSERT INTO green_points_transactions (company_id, points, type, description, reason)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(company_id)
        .bind(points)
        .bind(TransactionType::Earned.as_str())
        .bind("Points earned for carbon footprint calculation")
        .bind("CALCULATION")
        .execute(&mut **tx)
        .await?;

        // In-database increment keeps the balance consistent with the ledger
        // under concurrent calculations
        sqlx::query(
            "UPDATE companies SET green_points = green_points + $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(points)
        .bind(company_id)
        .execute(&mut **tx)
        .await?;

        Ok(points)
    }

    /// Current balance for a company
    pub async fn balance(&self, company_id: Uuid) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>("SELECT green_points FROM companies WHERE id = $1")
            .bind(company_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Company".to_string()))
    }

    /// Paged transaction history, newest first
    pub async fn history(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> AppResult<PaginatedResponse<GreenPointsTransaction>> {
        let total_items = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM green_points_transactions WHERE company_id = $1",
        )
        .bind(company_id)
        .fetch_one(&self.db)
        .await?;

        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, company_id, points, type, description, reason, created_at
            FROM green_points_transactions
            WHERE company_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(company_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(PaginatedResponse {
            data: rows.into_iter().map(|r| r.into()).collect(),
            pagination: PaginationMeta::new(pagination, total_items as u64),
        })
    }

    /// Full transaction history, newest first
    pub async fn transactions(&self, company_id: Uuid) -> AppResult<Vec<GreenPointsTransaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, company_id, points, type, description, reason, created_at
            FROM green_points_transactions
            WHERE company_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
