//! Company profile service

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{Company, CompanySize, Industry};

/// Company profile service
#[derive(Clone)]
pub struct CompanyService {
    db: PgPool,
}

/// Database row for a company
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub industry: String,
    pub size: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
    pub green_points: i32,
    pub total_footprint: f64,
    pub last_calculation_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            industry: Industry::parse(&row.industry).unwrap_or(Industry::Other),
            size: CompanySize::parse(&row.size).unwrap_or(CompanySize::Small),
            description: row.description,
            website: row.website,
            address: row.address,
            phone: row.phone,
            logo_url: row.logo_url,
            green_points: row.green_points,
            total_footprint: row.total_footprint,
            last_calculation_date: row.last_calculation_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Partial profile update; only present fields overwrite
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyInput {
    pub name: Option<String>,
    pub industry: Option<Industry>,
    pub size: Option<CompanySize>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
}

impl CompanyService {
    /// Create a new CompanyService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get a company profile by ID
    pub async fn get_profile(&self, company_id: Uuid) -> AppResult<Company> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, name, industry, size, description, website, address, phone,
                   logo_url, green_points, total_footprint, last_calculation_date,
                   created_at, updated_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(company_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Company".to_string()))?;

        Ok(row.into())
    }

    /// Apply a partial profile update and return the new state
    pub async fn update_profile(
        &self,
        company_id: Uuid,
        input: UpdateCompanyInput,
    ) -> AppResult<Company> {
        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation {
                    field: "name".to_string(),
                    message: "Company name cannot be empty".to_string(),
                });
            }
        }

        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies SET
                name = COALESCE($2, name),
                industry = COALESCE($3, industry),
                size = COALESCE($4, size),
                description = COALESCE($5, description),
                website = COALESCE($6, website),
                address = COALESCE($7, address),
                phone = COALESCE($8, phone),
                logo_url = COALESCE($9, logo_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, industry, size, description, website, address, phone,
                      logo_url, green_points, total_footprint, last_calculation_date,
                      created_at, updated_at
            "#,
        )
        .bind(company_id)
        .bind(&input.name)
        .bind(input.industry.map(|i| i.as_str()))
        .bind(input.size.map(|s| s.as_str()))
        .bind(&input.description)
        .bind(&input.website)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.logo_url)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Company".to_string()))?;

        Ok(row.into())
    }
}
