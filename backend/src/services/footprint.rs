//! Carbon footprint service
//!
//! Orchestrates one calculation request as a single unit of work: run the
//! calculator, append the footprint record, refresh the company aggregate,
//! and award green points. All four either commit or roll back together.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::GreenPointsService;
use shared::carbon::{CarbonCalculator, EmissionFactors};
use shared::models::{ActivityInput, CarbonFootprint, Industry};
use shared::rewards::IndustryBenchmarks;
use shared::types::{PaginatedResponse, Pagination, PaginationMeta};
use shared::validation::validate_activity_input;

/// Carbon footprint service
#[derive(Clone)]
pub struct FootprintService {
    db: PgPool,
    calculator: CarbonCalculator,
    points: GreenPointsService,
}

/// Database row for a footprint record
#[derive(Debug, sqlx::FromRow)]
struct FootprintRow {
    id: Uuid,
    company_id: Uuid,
    total_emissions: f64,
    scope1_emissions: f64,
    scope2_emissions: f64,
    scope3_emissions: f64,
    calculation_period: String,
    breakdown: serde_json::Value,
    inputs: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl From<FootprintRow> for CarbonFootprint {
    fn from(row: FootprintRow) -> Self {
        CarbonFootprint {
            id: row.id,
            company_id: row.company_id,
            total_emissions: row.total_emissions,
            scope1_emissions: row.scope1_emissions,
            scope2_emissions: row.scope2_emissions,
            scope3_emissions: row.scope3_emissions,
            calculation_period: row.calculation_period,
            breakdown: serde_json::from_value(row.breakdown).unwrap_or_default(),
            inputs: serde_json::from_value(row.inputs).unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

/// Response for one completed calculation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub id: Uuid,
    pub total_emissions: f64,
    pub scope1_emissions: f64,
    pub scope2_emissions: f64,
    pub scope3_emissions: f64,
    pub breakdown: BTreeMap<String, f64>,
    pub calculation_period: String,
    pub created_at: DateTime<Utc>,
}

impl FootprintService {
    /// Create a new FootprintService over the default factor and benchmark tables
    pub fn new(db: PgPool) -> Self {
        Self {
            calculator: CarbonCalculator::default(),
            points: GreenPointsService::new(db.clone()),
            db,
        }
    }

    /// Create a service over substituted factor and benchmark tables
    pub fn with_tables(
        db: PgPool,
        factors: EmissionFactors,
        benchmarks: IndustryBenchmarks,
    ) -> Self {
        Self {
            calculator: CarbonCalculator::new(factors),
            points: GreenPointsService::with_benchmarks(db.clone(), benchmarks),
            db,
        }
    }

    /// Run one footprint calculation for a company.
    ///
    /// The company row is locked for the duration of the transaction, which
    /// serializes concurrent calculations for the same company and keeps the
    /// balance increment free of lost updates.
    pub async fn calculate(
        &self,
        company_id: Uuid,
        input: ActivityInput,
    ) -> AppResult<CalculationResponse> {
        validate_activity_input(&input).map_err(|e| AppError::Validation {
            field: e.field.to_string(),
            message: e.message.to_string(),
        })?;

        let mut tx = self.db.begin().await?;

        let industry = sqlx::query_scalar::<_, String>(
            "SELECT industry FROM companies WHERE id = $1 FOR UPDATE",
        )
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Company".to_string()))?;
        let industry = Industry::parse(&industry).unwrap_or(Industry::Other);

        let summary = self.calculator.calculate(&input);

        let breakdown_json = serde_json::to_value(&summary.breakdown)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let inputs_json = serde_json::to_value(input.snapshot())
            .map_err(|e| AppError::Internal(e.to_string()))?;

        // Append the immutable footprint record
        let (footprint_id, created_at) = sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
            r#"
            INSERT INTO carbon_footprints (
                company_id, total_emissions, scope1_emissions, scope2_emissions,
                scope3_emissions, calculation_period, breakdown, inputs
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, created_at
            "#,
        )
        .bind(company_id)
        .bind(summary.total)
        .bind(summary.scope1)
        .bind(summary.scope2)
        .bind(summary.scope3)
        .bind(&input.calculation_period)
        .bind(&breakdown_json)
        .bind(&inputs_json)
        .fetch_one(&mut *tx)
        .await?;

        // The aggregate reflects only the latest calculation; history lives
        // in the ledger
        sqlx::query(
            r#"
            UPDATE companies
            SET total_footprint = $1, last_calculation_date = NOW(), updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(summary.total)
        .bind(company_id)
        .execute(&mut *tx)
        .await?;

        let awarded = self
            .points
            .award_for_calculation(&mut tx, company_id, industry, summary.total)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            company_id = %company_id,
            period = %input.calculation_period,
            total_kg = summary.total,
            points = awarded,
            "footprint calculated"
        );

        Ok(CalculationResponse {
            id: footprint_id,
            total_emissions: summary.total,
            scope1_emissions: summary.scope1,
            scope2_emissions: summary.scope2,
            scope3_emissions: summary.scope3,
            breakdown: summary.breakdown,
            calculation_period: input.calculation_period,
            created_at,
        })
    }

    /// Paged calculation history, newest first
    pub async fn history(
        &self,
        company_id: Uuid,
        pagination: Pagination,
    ) -> AppResult<PaginatedResponse<CarbonFootprint>> {
        let total_items = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM carbon_footprints WHERE company_id = $1",
        )
        .bind(company_id)
        .fetch_one(&self.db)
        .await?;

        let rows = sqlx::query_as::<_, FootprintRow>(
            r#"
            SELECT id, company_id, total_emissions, scope1_emissions, scope2_emissions,
                   scope3_emissions, calculation_period, breakdown, inputs, created_at
            FROM carbon_footprints
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

    /// Full calculation history, newest first
    pub async fn all_history(&self, company_id: Uuid) -> AppResult<Vec<CarbonFootprint>> {
        let rows = sqlx::query_as::<_, FootprintRow>(
            r#"
            SELECT id, company_id, total_emissions, scope1_emissions, scope2_emissions,
                   scope3_emissions, calculation_period, breakdown, inputs, created_at
            FROM carbon_footprints
            WHERE company_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Get one footprint record owned by the company
    pub async fn get_by_id(
        &self,
        company_id: Uuid,
        footprint_id: Uuid,
    ) -> AppResult<CarbonFootprint> {
        let row = sqlx::query_as::<_, FootprintRow>(
            r#"
            SELECT id, company_id, total_emissions, scope1_emissions, scope2_emissions,
                   scope3_emissions, calculation_period, breakdown, inputs, created_at
            FROM carbon_footprints
            WHERE id = $1 AND company_id = $2
            "#,
        )
        .bind(footprint_id)
        .bind(company_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Carbon footprint".to_string()))?;

        Ok(row.into())
    }
}
