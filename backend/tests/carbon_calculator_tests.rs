//! Tests for the carbon-accounting engine
//!
//! Covers scope classification, factor application, breakdown membership,
//! and the additivity of the three scope totals.

use proptest::prelude::*;
use shared::{ActivityInput, CarbonCalculator, EmissionFactors};

/// Helper to build an input with no activity data
fn empty_input() -> ActivityInput {
    ActivityInput::for_period("2024-01")
}

// =============================================================================
// Empty Input Tests
// =============================================================================

mod empty_input_set {
    use super::*;

    #[test]
    fn all_absent_yields_empty_breakdown_and_zero_totals() {
        let summary = CarbonCalculator::default().calculate(&empty_input());

        assert!(summary.breakdown.is_empty());
        assert_eq!(summary.scope1, 0.0);
        assert_eq!(summary.scope2, 0.0);
        assert_eq!(summary.scope3, 0.0);
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn all_zero_yields_empty_breakdown_and_zero_totals() {
        let input = ActivityInput {
            electricity: Some(0.0),
            fuel_petrol: Some(0.0),
            fuel_diesel: Some(0.0),
            transport_car_petrol: Some(0.0),
            transport_car_diesel: Some(0.0),
            transport_truck: Some(0.0),
            waste_landfill: Some(0.0),
            waste_recycled: Some(0.0),
            water: Some(0.0),
            paper: Some(0.0),
            calculation_period: "2024-01".to_string(),
        };
        let summary = CarbonCalculator::default().calculate(&input);

        assert!(summary.breakdown.is_empty());
        assert_eq!(summary.total, 0.0);
    }
}

// =============================================================================
// Scope Classification Tests
// =============================================================================

mod scope_classification {
    use super::*;

    #[test]
    fn electricity_accounts_under_scope2() {
        let input = ActivityInput {
            electricity: Some(100.0),
            ..empty_input()
        };
        let summary = CarbonCalculator::default().calculate(&input);

        assert_eq!(summary.scope2, 100.0 * 0.92);
        assert_eq!(summary.scope1, 0.0);
        assert_eq!(summary.scope3, 0.0);
    }

    #[test]
    fn fuels_account_under_scope1() {
        let input = ActivityInput {
            fuel_petrol: Some(100.0),
            fuel_diesel: Some(50.0),
            ..empty_input()
        };
        let summary = CarbonCalculator::default().calculate(&input);

        assert_eq!(summary.scope1, 100.0 * 2.31 + 50.0 * 2.68);
        assert_eq!(summary.scope2, 0.0);
        assert_eq!(summary.scope3, 0.0);
    }

    #[test]
    fn transport_waste_water_paper_account_under_scope3() {
        let input = ActivityInput {
            transport_car_petrol: Some(123.0),
            transport_car_diesel: Some(60.0),
            transport_truck: Some(40.0),
            waste_landfill: Some(7.0),
            waste_recycled: Some(3.0),
            water: Some(10.0),
            paper: Some(2.0),
            ..empty_input()
        };
        let summary = CarbonCalculator::default().calculate(&input);

        assert_eq!(summary.scope1, 0.0);
        assert_eq!(summary.scope2, 0.0);
        assert!(summary.scope3 > 0.0);
        assert_eq!(summary.breakdown.len(), 7);
    }

    #[test]
    fn mixed_input_splits_across_all_scopes() {
        let input = ActivityInput {
            electricity: Some(500.0),
            fuel_diesel: Some(20.0),
            water: Some(5.0),
            ..empty_input()
        };
        let summary = CarbonCalculator::default().calculate(&input);

        assert_eq!(summary.scope1, 20.0 * 2.68);
        assert_eq!(summary.scope2, 500.0 * 0.92);
        assert_eq!(summary.scope3, 5.0 * 0.344);
    }
}

// =============================================================================
// Factor Application Tests
// =============================================================================

mod factor_application {
    use super::*;

    #[test]
    fn each_category_applies_its_factor() {
        let input = ActivityInput {
            electricity: Some(1000.0),
            fuel_petrol: Some(100.0),
            fuel_diesel: Some(50.0),
            transport_car_petrol: Some(123.0),
            transport_car_diesel: Some(60.0),
            transport_truck: Some(40.0),
            waste_landfill: Some(7.0),
            waste_recycled: Some(3.0),
            water: Some(10.0),
            paper: Some(2.0),
            calculation_period: "2024-02".to_string(),
        };
        let summary = CarbonCalculator::default().calculate(&input);

        assert_eq!(summary.breakdown["electricity"], 1000.0 * 0.92);
        assert_eq!(summary.breakdown["fuelPetrol"], 100.0 * 2.31);
        assert_eq!(summary.breakdown["fuelDiesel"], 50.0 * 2.68);
        assert_eq!(summary.breakdown["transportCarPetrol"], 123.0 * 0.192);
        assert_eq!(summary.breakdown["transportCarDiesel"], 60.0 * 0.171);
        assert_eq!(summary.breakdown["transportTruck"], 40.0 * 0.285);
        assert_eq!(summary.breakdown["wasteLandfill"], 7.0 * 0.5);
        assert_eq!(summary.breakdown["wasteRecycled"], 3.0 * 0.1);
        assert_eq!(summary.breakdown["water"], 10.0 * 0.344);
        assert_eq!(summary.breakdown["paper"], 2.0 * 1.8);
    }

    #[test]
    fn substituted_factor_table_is_used() {
        let factors = EmissionFactors {
            electricity: 0.5,
            paper: 2.0,
            ..EmissionFactors::default()
        };
        let input = ActivityInput {
            electricity: Some(10.0),
            paper: Some(10.0),
            ..empty_input()
        };
        let summary = CarbonCalculator::new(factors).calculate(&input);

        assert_eq!(summary.breakdown["electricity"], 5.0);
        assert_eq!(summary.breakdown["paper"], 20.0);
    }
}

// =============================================================================
// Breakdown Membership Tests
// =============================================================================

mod breakdown_membership {
    use super::*;

    #[test]
    fn zero_valued_category_is_omitted() {
        let input = ActivityInput {
            electricity: Some(0.0),
            fuel_petrol: Some(10.0),
            ..empty_input()
        };
        let summary = CarbonCalculator::default().calculate(&input);

        assert!(!summary.breakdown.contains_key("electricity"));
        assert!(summary.breakdown.contains_key("fuelPetrol"));
        assert_eq!(summary.breakdown.len(), 1);
    }

    #[test]
    fn absent_category_is_omitted() {
        let input = ActivityInput {
            water: Some(3.0),
            ..empty_input()
        };
        let summary = CarbonCalculator::default().calculate(&input);

        assert_eq!(summary.breakdown.len(), 1);
        assert!(summary.breakdown.contains_key("water"));
    }

    #[test]
    fn input_snapshot_keeps_submitted_zeros() {
        // The raw snapshot records what was sent, unlike the breakdown
        let input = ActivityInput {
            electricity: Some(0.0),
            fuel_petrol: Some(10.0),
            ..empty_input()
        };
        let snapshot = input.snapshot();

        assert_eq!(snapshot.get("electricity"), Some(&0.0));
        assert_eq!(snapshot.get("fuelPetrol"), Some(&10.0));
        assert_eq!(snapshot.len(), 2);
    }
}

// =============================================================================
// End-to-End Value Tests
// =============================================================================

mod end_to_end {
    use super::*;

    #[test]
    fn electricity_1000_kwh() {
        let input = ActivityInput {
            electricity: Some(1000.0),
            ..empty_input()
        };
        let summary = CarbonCalculator::default().calculate(&input);

        assert_eq!(summary.breakdown["electricity"], 920.0);
        assert_eq!(summary.scope2, 920.0);
        assert_eq!(summary.scope1, 0.0);
        assert_eq!(summary.scope3, 0.0);
        assert_eq!(summary.total, 920.0);
    }

    #[test]
    fn calculation_is_deterministic() {
        let input = ActivityInput {
            electricity: Some(431.7),
            fuel_diesel: Some(88.2),
            transport_truck: Some(1043.0),
            waste_landfill: Some(12.5),
            ..empty_input()
        };
        let calculator = CarbonCalculator::default();

        let first = calculator.calculate(&input);
        let second = calculator.calculate(&input);
        assert_eq!(first, second);
    }
}

// =============================================================================
// Wire Format Tests
// =============================================================================

mod wire_format {
    use super::*;

    #[test]
    fn activity_input_accepts_camel_case_json() {
        let input: ActivityInput = serde_json::from_str(
            r#"{"electricity": 1000, "fuelPetrol": 20, "calculationPeriod": "2024-01"}"#,
        )
        .unwrap();

        assert_eq!(input.electricity, Some(1000.0));
        assert_eq!(input.fuel_petrol, Some(20.0));
        assert_eq!(input.fuel_diesel, None);
        assert_eq!(input.calculation_period, "2024-01");
    }

    #[test]
    fn summary_serializes_camel_case_breakdown_keys() {
        let input = ActivityInput {
            fuel_petrol: Some(10.0),
            waste_landfill: Some(2.0),
            ..empty_input()
        };
        let summary = CarbonCalculator::default().calculate(&input);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["breakdown"]["fuelPetrol"].is_number());
        assert!(json["breakdown"]["wasteLandfill"].is_number());
    }
}

// =============================================================================
// Property Tests
// =============================================================================

fn quantity() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (0.0..100_000.0f64).prop_map(Some)]
}

prop_compose! {
    fn activity_input()(
        electricity in quantity(),
        fuel_petrol in quantity(),
        fuel_diesel in quantity(),
        transport_car_petrol in quantity(),
        transport_car_diesel in quantity(),
        transport_truck in quantity(),
        waste_landfill in quantity(),
        waste_recycled in quantity(),
        water in quantity(),
        paper in quantity(),
    ) -> ActivityInput {
        ActivityInput {
            electricity,
            fuel_petrol,
            fuel_diesel,
            transport_car_petrol,
            transport_car_diesel,
            transport_truck,
            waste_landfill,
            waste_recycled,
            water,
            paper,
            calculation_period: "2024-01".to_string(),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The grand total is exactly the float sum of the three scope totals
    #[test]
    fn prop_total_is_sum_of_scopes(input in activity_input()) {
        let summary = CarbonCalculator::default().calculate(&input);
        prop_assert_eq!(summary.total, summary.scope1 + summary.scope2 + summary.scope3);
    }

    /// Breakdown keys correspond exactly to positive inputs
    #[test]
    fn prop_breakdown_holds_only_positive_inputs(input in activity_input()) {
        let summary = CarbonCalculator::default().calculate(&input);

        let positive_count = [
            input.electricity,
            input.fuel_petrol,
            input.fuel_diesel,
            input.transport_car_petrol,
            input.transport_car_diesel,
            input.transport_truck,
            input.waste_landfill,
            input.waste_recycled,
            input.water,
            input.paper,
        ]
        .iter()
        .filter(|v| v.is_some_and(|x| x > 0.0))
        .count();

        prop_assert_eq!(summary.breakdown.len(), positive_count);
    }

    /// Raising one input raises its breakdown entry and its scope total
    #[test]
    fn prop_monotonic_in_electricity(
        base in 0.0..100_000.0f64,
        delta in 1.0..10_000.0f64,
    ) {
        let calculator = CarbonCalculator::default();

        let lower = calculator.calculate(&ActivityInput {
            electricity: Some(base),
            ..ActivityInput::for_period("2024-01")
        });
        let higher = calculator.calculate(&ActivityInput {
            electricity: Some(base + delta),
            ..ActivityInput::for_period("2024-01")
        });

        prop_assert!(higher.scope2 > lower.scope2);
        prop_assert!(
            higher.breakdown["electricity"] > lower.breakdown.get("electricity").copied().unwrap_or(0.0)
        );
    }

    #[test]
    fn prop_monotonic_in_truck_transport(
        base in 0.0..100_000.0f64,
        delta in 1.0..10_000.0f64,
    ) {
        let calculator = CarbonCalculator::default();

        let lower = calculator.calculate(&ActivityInput {
            transport_truck: Some(base),
            ..ActivityInput::for_period("2024-01")
        });
        let higher = calculator.calculate(&ActivityInput {
            transport_truck: Some(base + delta),
            ..ActivityInput::for_period("2024-01")
        });

        prop_assert!(higher.scope3 > lower.scope3);
        prop_assert!(higher.total > lower.total);
    }
}
