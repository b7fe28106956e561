//! Tests for the green-points rewards policy
//!
//! Covers the benchmark table, the savings-to-points conversion, truncation
//! behavior, and the ledger/balance consistency invariant.

use proptest::prelude::*;
use shared::{Industry, IndustryBenchmarks, RewardsPolicy, PARTICIPATION_POINTS};

// =============================================================================
// Award Policy Tests
// =============================================================================

mod award_policy {
    use super::*;

    #[test]
    fn technology_at_half_benchmark_earns_500() {
        let policy = RewardsPolicy::default();
        // 7500 is 50% below the 15000 technology benchmark
        assert_eq!(policy.points_for_calculation(Industry::Technology, 7500.0), 500);
    }

    #[test]
    fn at_benchmark_earns_participation_floor() {
        let policy = RewardsPolicy::default();
        assert_eq!(
            policy.points_for_calculation(Industry::Technology, 15000.0),
            PARTICIPATION_POINTS
        );
        assert_eq!(
            policy.points_for_calculation(Industry::Manufacturing, 45000.0),
            PARTICIPATION_POINTS
        );
        assert_eq!(
            policy.points_for_calculation(Industry::Retail, 25000.0),
            PARTICIPATION_POINTS
        );
    }

    #[test]
    fn above_benchmark_earns_participation_floor() {
        let policy = RewardsPolicy::default();
        assert_eq!(
            policy.points_for_calculation(Industry::Technology, 1_000_000.0),
            PARTICIPATION_POINTS
        );
    }

    #[test]
    fn manufacturing_uses_its_own_benchmark() {
        let policy = RewardsPolicy::default();
        // 22500 is 50% below the 45000 manufacturing benchmark
        assert_eq!(
            policy.points_for_calculation(Industry::Manufacturing, 22500.0),
            500
        );
    }

    #[test]
    fn unlisted_industries_use_default_benchmark() {
        let policy = RewardsPolicy::default();
        // 12500 is 50% below the 25000 default benchmark
        for industry in [
            Industry::Healthcare,
            Industry::Education,
            Industry::Hospitality,
            Industry::Finance,
            Industry::Logistics,
            Industry::FoodBeverage,
            Industry::Construction,
            Industry::Energy,
            Industry::Agriculture,
            Industry::Other,
        ] {
            assert_eq!(policy.points_for_calculation(industry, 12500.0), 500);
        }
    }

    #[test]
    fn fractional_savings_truncate_not_round() {
        let policy = RewardsPolicy::default();
        // 920 kg against 15000: savings 93.8666...% -> 938.666... -> 938
        assert_eq!(policy.points_for_calculation(Industry::Technology, 920.0), 938);
    }

    #[test]
    fn zero_emissions_earn_full_savings() {
        let policy = RewardsPolicy::default();
        // 100% below benchmark -> 1000 points
        assert_eq!(policy.points_for_calculation(Industry::Technology, 0.0), 1000);
    }

    #[test]
    fn substituted_benchmark_table_is_used() {
        let policy = RewardsPolicy::new(IndustryBenchmarks {
            technology: 1000.0,
            manufacturing: 2000.0,
            retail: 3000.0,
            default: 4000.0,
        });

        assert_eq!(policy.points_for_calculation(Industry::Technology, 500.0), 500);
        assert_eq!(policy.points_for_calculation(Industry::Other, 2000.0), 500);
    }
}

// =============================================================================
// Balance Invariant Tests
// =============================================================================

/// Minimal in-memory points ledger mirroring the persistence contract: every
/// positive award appends a transaction and bumps the cached balance.
struct PointsLedger {
    balance: i32,
    transactions: Vec<i32>,
}

impl PointsLedger {
    fn new() -> Self {
        Self {
            balance: 0,
            transactions: Vec::new(),
        }
    }

    fn award(&mut self, policy: &RewardsPolicy, industry: Industry, total: f64) {
        let points = policy.points_for_calculation(industry, total);
        if points > 0 {
            self.transactions.push(points);
            self.balance += points;
        }
    }
}

mod balance_invariant {
    use super::*;

    #[test]
    fn balance_equals_transaction_sum_after_sequence() {
        let policy = RewardsPolicy::default();
        let mut ledger = PointsLedger::new();

        for total in [7500.0, 20000.0, 920.0, 0.0, 14999.0] {
            ledger.award(&policy, Industry::Technology, total);
        }

        assert_eq!(ledger.balance, ledger.transactions.iter().sum::<i32>());
        assert_eq!(ledger.transactions.len(), 5);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

fn any_industry() -> impl Strategy<Value = Industry> {
    prop_oneof![
        Just(Industry::Technology),
        Just(Industry::Manufacturing),
        Just(Industry::Retail),
        Just(Industry::Healthcare),
        Just(Industry::Logistics),
        Just(Industry::Other),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The policy never produces a negative award; a savings sliver under
    /// 0.1% can truncate to zero, which the workflow treats as a no-op
    #[test]
    fn prop_award_is_never_negative(
        industry in any_industry(),
        total in 0.0..10_000_000.0f64,
    ) {
        let points = RewardsPolicy::default().points_for_calculation(industry, total);
        prop_assert!(points >= 0);
    }

    /// Below benchmark the award is bounded by 100% savings
    #[test]
    fn prop_below_benchmark_award_is_bounded(
        industry in any_industry(),
        fraction in 0.0..1.0f64,
    ) {
        let policy = RewardsPolicy::default();
        let benchmark = policy.benchmarks().for_industry(industry);
        let total = benchmark * fraction;

        let points = policy.points_for_calculation(industry, total);
        prop_assert!((0..=1000).contains(&points));
    }

    /// At or above benchmark the award is exactly the participation floor
    #[test]
    fn prop_at_or_above_benchmark_is_flat(
        industry in any_industry(),
        excess in 0.0..1_000_000.0f64,
    ) {
        let policy = RewardsPolicy::default();
        let benchmark = policy.benchmarks().for_industry(industry);

        let points = policy.points_for_calculation(industry, benchmark + excess);
        prop_assert_eq!(points, PARTICIPATION_POINTS);
    }

    /// Balance stays equal to the transaction sum over any award sequence
    #[test]
    fn prop_balance_matches_ledger_sum(totals in prop::collection::vec(0.0..100_000.0f64, 0..50)) {
        let policy = RewardsPolicy::default();
        let mut ledger = PointsLedger::new();

        for total in totals {
            ledger.award(&policy, Industry::Retail, total);
        }

        prop_assert_eq!(ledger.balance, ledger.transactions.iter().sum::<i32>());
    }

    /// Same industry and total always award the same points
    #[test]
    fn prop_award_is_deterministic(
        industry in any_industry(),
        total in 0.0..1_000_000.0f64,
    ) {
        let policy = RewardsPolicy::default();
        prop_assert_eq!(
            policy.points_for_calculation(industry, total),
            policy.points_for_calculation(industry, total)
        );
    }
}
