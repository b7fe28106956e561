//! Company aggregate and its category enumerations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Industry category a company operates in
///
/// Closed enumeration: the benchmark table keys off these variants, so an
/// unrecognized value is a deserialization error rather than a silent default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Industry {
    Technology,
    Manufacturing,
    Retail,
    Healthcare,
    Education,
    Hospitality,
    Finance,
    Logistics,
    FoodBeverage,
    Construction,
    Energy,
    Agriculture,
    Other,
}

impl Industry {
    /// Database/wire string for the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "TECHNOLOGY",
            Industry::Manufacturing => "MANUFACTURING",
            Industry::Retail => "RETAIL",
            Industry::Healthcare => "HEALTHCARE",
            Industry::Education => "EDUCATION",
            Industry::Hospitality => "HOSPITALITY",
            Industry::Finance => "FINANCE",
            Industry::Logistics => "LOGISTICS",
            Industry::FoodBeverage => "FOOD_BEVERAGE",
            Industry::Construction => "CONSTRUCTION",
            Industry::Energy => "ENERGY",
            Industry::Agriculture => "AGRICULTURE",
            Industry::Other => "OTHER",
        }
    }

    /// Parse a database/wire string
    pub fn parse(s: &str) -> Option<Industry> {
        match s {
            "TECHNOLOGY" => Some(Industry::Technology),
            "MANUFACTURING" => Some(Industry::Manufacturing),
            "RETAIL" => Some(Industry::Retail),
            "HEALTHCARE" => Some(Industry::Healthcare),
            "EDUCATION" => Some(Industry::Education),
            "HOSPITALITY" => Some(Industry::Hospitality),
            "FINANCE" => Some(Industry::Finance),
            "LOGISTICS" => Some(Industry::Logistics),
            "FOOD_BEVERAGE" => Some(Industry::FoodBeverage),
            "CONSTRUCTION" => Some(Industry::Construction),
            "ENERGY" => Some(Industry::Energy),
            "AGRICULTURE" => Some(Industry::Agriculture),
            "OTHER" => Some(Industry::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Company headcount band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanySize {
    /// 1-50
    Small,
    /// 51-250
    Medium,
    /// 251-1000
    Large,
    /// 1000+
    Enterprise,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Small => "SMALL",
            CompanySize::Medium => "MEDIUM",
            CompanySize::Large => "LARGE",
            CompanySize::Enterprise => "ENTERPRISE",
        }
    }

    pub fn parse(s: &str) -> Option<CompanySize> {
        match s {
            "SMALL" => Some(CompanySize::Small),
            "MEDIUM" => Some(CompanySize::Medium),
            "LARGE" => Some(CompanySize::Large),
            "ENTERPRISE" => Some(CompanySize::Enterprise),
            _ => None,
        }
    }
}

/// A registered company and its aggregate state
///
/// `green_points` is a cache of the points-ledger sum and `total_footprint`
/// reflects only the most recent calculation; the full history lives in the
/// footprint and points ledgers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub industry: Industry,
    pub size: CompanySize,
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
