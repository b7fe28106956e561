//! Carbon-accounting engine
//!
//! Maps a period's activity inputs to scope-classified greenhouse-gas
//! emissions following the GHG Protocol (scope 1 direct combustion, scope 2
//! purchased energy, scope 3 other indirect). All arithmetic is plain f64
//! carried at full precision; rounding is left to presentation layers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::ActivityInput;

/// GHG Protocol emission scope
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Direct emissions from owned or controlled combustion sources
    Scope1,
    /// Indirect emissions from purchased electricity
    Scope2,
    /// All other indirect emissions (transport, waste, water, paper)
    Scope3,
}

/// Tracked activity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionCategory {
    Electricity,
    FuelPetrol,
    FuelDiesel,
    TransportCarPetrol,
    TransportCarDiesel,
    TransportTruck,
    WasteLandfill,
    WasteRecycled,
    Water,
    Paper,
}

impl EmissionCategory {
    /// Every category, in canonical accumulation order
    pub const ALL: [EmissionCategory; 10] = [
        EmissionCategory::Electricity,
        EmissionCategory::FuelPetrol,
        EmissionCategory::FuelDiesel,
        EmissionCategory::TransportCarPetrol,
        EmissionCategory::TransportCarDiesel,
        EmissionCategory::TransportTruck,
        EmissionCategory::WasteLandfill,
        EmissionCategory::WasteRecycled,
        EmissionCategory::Water,
        EmissionCategory::Paper,
    ];

    /// Canonical breakdown key, matching the API wire format
    pub fn key(&self) -> &'static str {
        match self {
            EmissionCategory::Electricity => "electricity",
            EmissionCategory::FuelPetrol => "fuelPetrol",
            EmissionCategory::FuelDiesel => "fuelDiesel",
            EmissionCategory::TransportCarPetrol => "transportCarPetrol",
            EmissionCategory::TransportCarDiesel => "transportCarDiesel",
            EmissionCategory::TransportTruck => "transportTruck",
            EmissionCategory::WasteLandfill => "wasteLandfill",
            EmissionCategory::WasteRecycled => "wasteRecycled",
            EmissionCategory::Water => "water",
            EmissionCategory::Paper => "paper",
        }
    }

    /// Measurement unit for the raw input
    pub fn unit(&self) -> &'static str {
        match self {
            EmissionCategory::Electricity => "kWh",
            EmissionCategory::FuelPetrol | EmissionCategory::FuelDiesel => "L",
            EmissionCategory::TransportCarPetrol
            | EmissionCategory::TransportCarDiesel
            | EmissionCategory::TransportTruck => "km",
            EmissionCategory::WasteLandfill
            | EmissionCategory::WasteRecycled
            | EmissionCategory::Paper => "kg",
            EmissionCategory::Water => "m3",
        }
    }

    /// Scope the category's emissions are accounted under
    pub fn scope(&self) -> Scope {
        match self {
            EmissionCategory::Electricity => Scope::Scope2,
            EmissionCategory::FuelPetrol | EmissionCategory::FuelDiesel => Scope::Scope1,
            EmissionCategory::TransportCarPetrol
            | EmissionCategory::TransportCarDiesel
            | EmissionCategory::TransportTruck
            | EmissionCategory::WasteLandfill
            | EmissionCategory::WasteRecycled
            | EmissionCategory::Water
            | EmissionCategory::Paper => Scope::Scope3,
        }
    }
}

/// Emission factor table (kg CO2 per unit of activity)
///
/// Injected into the calculator at construction so tests can substitute
/// factor sets without touching global state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmissionFactors {
    /// kg CO2 per kWh (grid average)
    pub electricity: f64,
    /// kg CO2 per liter of petrol
    pub fuel_petrol: f64,
    /// kg CO2 per liter of diesel
    pub fuel_diesel: f64,
    /// kg CO2 per km, petrol car
    pub transport_car_petrol: f64,
    /// kg CO2 per km, diesel car
    pub transport_car_diesel: f64,
    /// kg CO2 per km, truck
    pub transport_truck: f64,
    /// kg CO2 per kg of landfilled waste
    pub waste_landfill: f64,
    /// kg CO2 per kg of recycled waste
    pub waste_recycled: f64,
    /// kg CO2 per cubic meter of water
    pub water: f64,
    /// kg CO2 per kg of paper
    pub paper: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            electricity: 0.92,
            fuel_petrol: 2.31,
            fuel_diesel: 2.68,
            transport_car_petrol: 0.192,
            transport_car_diesel: 0.171,
            transport_truck: 0.285,
            waste_landfill: 0.5,
            waste_recycled: 0.1,
            water: 0.344,
            paper: 1.8,
        }
    }
}

impl EmissionFactors {
    /// Factor for a category
    pub fn factor(&self, category: EmissionCategory) -> f64 {
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
}

/// Result of a footprint calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmissionSummary {
    /// Direct combustion emissions (kg CO2)
    pub scope1: f64,
    /// Purchased-energy emissions (kg CO2)
    pub scope2: f64,
    /// Other indirect emissions (kg CO2)
    pub scope3: f64,
    /// scope1 + scope2 + scope3
    pub total: f64,
    /// Per-category emissions; only categories with a positive input appear
    pub breakdown: BTreeMap<String, f64>,
}

/// Pure calculator over an injected factor table
#[derive(Debug, Clone, Default)]
pub struct CarbonCalculator {
    factors: EmissionFactors,
}

impl CarbonCalculator {
    /// Create a calculator over a specific factor table
    pub fn new(factors: EmissionFactors) -> Self {
        Self { factors }
    }

    /// The factor table in use
    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// Compute the scope-classified emission summary for one period's inputs.
    ///
    /// Categories with an absent or exactly-zero input are omitted from the
    /// breakdown entirely. Inputs must already be validated non-negative;
    /// the calculator does not re-check.
    pub fn calculate(&self, input: &ActivityInput) -> EmissionSummary {
        let mut breakdown = BTreeMap::new();
        let (mut scope1, mut scope2, mut scope3) = (0.0, 0.0, 0.0);

        for category in EmissionCategory::ALL {
            let Some(value) = input.value(category) else {
                continue;
            };
            if value <= 0.0 {
                continue;
            }

            let emissions = value * self.factors.factor(category);
            breakdown.insert(category.key().to_string(), emissions);
            match category.scope() {
                Scope::Scope1 => scope1 += emissions,
                Scope::Scope2 => scope2 += emissions,
                Scope::Scope3 => scope3 += emissions,
            }
        }

        EmissionSummary {
            scope1,
            scope2,
            scope3,
            total: scope1 + scope2 + scope3,
            breakdown,
        }
    }
}
