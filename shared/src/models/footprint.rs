//! Activity inputs and footprint ledger records

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::carbon::EmissionCategory;

/// Raw activity quantities submitted for one reporting period
///
/// Every quantity is optional: absent means "not applicable this period",
/// not zero. Present values must be non-negative (enforced at the boundary,
/// see [`crate::validation::validate_activity_input`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    /// kWh
    pub electricity: Option<f64>,
    /// liters
    pub fuel_petrol: Option<f64>,
    /// liters
    pub fuel_diesel: Option<f64>,
    /// km
    pub transport_car_petrol: Option<f64>,
    /// km
    pub transport_car_diesel: Option<f64>,
    /// km
    pub transport_truck: Option<f64>,
    /// kg
    pub waste_landfill: Option<f64>,
    /// kg
    pub waste_recycled: Option<f64>,
    /// cubic meters
    pub water: Option<f64>,
    /// kg
    pub paper: Option<f64>,
    /// Reporting period label, e.g. "2024-01"
    pub calculation_period: String,
}

impl ActivityInput {
    /// An input set with no activity data for the given period
    pub fn for_period(period: &str) -> Self {
        Self {
            electricity: None,
            fuel_petrol: None,
            fuel_diesel: None,
            transport_car_petrol: None,
            transport_car_diesel: None,
            transport_truck: None,
            waste_landfill: None,
            waste_recycled: None,
            water: None,
            paper: None,
            calculation_period: period.to_string(),
        }
    }

    /// Raw quantity for a category, if submitted
    pub fn value(&self, category: EmissionCategory) -> Option<f64> {
        match category {
            EmissionCategory::Electricity => self.electricity,
            EmissionCategory::FuelPetrol => self.fuel_petrol,
            EmissionCategory::FuelDiesel => self.fuel_diesel,
            EmissionCategory::TransportCarPetrol => self.transport_car_petrol,
            EmissionCategory::TransportCarDiesel => self.transport_car_diesel,
            EmissionCategory::TransportTruck => self.transport_truck,
            EmissionCategory::WasteLandfill => self.waste_landfill,
            EmissionCategory::WasteRecycled => self.waste_recycled,
            EmissionCategory::Water => self.water,
            EmissionCategory::Paper => self.paper,
        }
    }

    /// Snapshot of every present raw value, keyed by canonical category key.
    ///
    /// Unlike the emission breakdown, the snapshot keeps submitted zeros: it
    /// records what the caller sent, not what produced emissions.
    pub fn snapshot(&self) -> BTreeMap<String, f64> {
        EmissionCategory::ALL
            .iter()
            .filter_map(|c| self.value(*c).map(|v| (c.key().to_string(), v)))
            .collect()
    }
}

/// One immutable entry in a company's footprint ledger
///
/// Created exactly once per calculation, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonFootprint {
    pub id: Uuid,
    pub company_id: Uuid,
    /// kg CO2, scope1 + scope2 + scope3
    pub total_emissions: f64,
    pub scope1_emissions: f64,
    pub scope2_emissions: f64,
    pub scope3_emissions: f64,
    pub calculation_period: String,
    /// Per-category computed emissions (positive inputs only)
    pub breakdown: BTreeMap<String, f64>,
    /// Raw input snapshot as submitted
    pub inputs: BTreeMap<String, f64>,
    pub created_at: DateTime<Utc>,
}
