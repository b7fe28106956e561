//! Green-points rewards policy
//!
//! Converts a computed total footprint into an integer points award measured
//! against a fixed monthly benchmark for the company's industry.

use serde::{Deserialize, Serialize};

use crate::models::Industry;

/// Points granted when a company's footprint meets or exceeds its benchmark
pub const PARTICIPATION_POINTS: i32 = 50;

/// Points per 1% of footprint below the industry benchmark
pub const POINTS_PER_SAVINGS_PERCENT: f64 = 10.0;

/// Industry benchmark table (kg CO2 per month)
///
/// Injected into the policy at construction; industries without an explicit
/// entry fall back to `default`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndustryBenchmarks {
    pub technology: f64,
    pub manufacturing: f64,
    pub retail: f64,
    pub default: f64,
}

impl Default for IndustryBenchmarks {
    fn default() -> Self {
        Self {
            technology: 15000.0,
            manufacturing: 45000.0,
            retail: 25000.0,
            default: 25000.0,
        }
    }
}

impl IndustryBenchmarks {
    /// Benchmark for an industry, falling back to the default entry
    pub fn for_industry(&self, industry: Industry) -> f64 {
        match industry {
            Industry::Technology => self.technology,
            Industry::Manufacturing => self.manufacturing,
            Industry::Retail => self.retail,
            _ => self.default,
        }
    }
}

/// Pure rewards policy over an injected benchmark table
#[derive(Debug, Clone, Default)]
pub struct RewardsPolicy {
    benchmarks: IndustryBenchmarks,
}

impl RewardsPolicy {
    /// Create a policy over a specific benchmark table
    pub fn new(benchmarks: IndustryBenchmarks) -> Self {
        Self { benchmarks }
    }

    /// The benchmark table in use
    pub fn benchmarks(&self) -> &IndustryBenchmarks {
        &self.benchmarks
    }

    /// Points award for one footprint calculation.
    ///
    /// Below benchmark: 10 points per 1% saved, truncated toward zero.
    /// At or above benchmark: the flat participation floor.
    pub fn points_for_calculation(&self, industry: Industry, total_emissions: f64) -> i32 {
        let benchmark = self.benchmarks.for_industry(industry);

        if total_emissions < benchmark {
            let savings_percent = (benchmark - total_emissions) / benchmark * 100.0;
            return (savings_percent * POINTS_PER_SAVINGS_PERCENT) as i32;
        }

        PARTICIPATION_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_of_benchmark_earns_500() {
        let policy = RewardsPolicy::default();
        assert_eq!(policy.points_for_calculation(Industry::Technology, 7500.0), 500);
    }

    #[test]
    fn at_benchmark_earns_participation_floor() {
        let policy = RewardsPolicy::default();
        assert_eq!(
            policy.points_for_calculation(Industry::Technology, 15000.0),
            PARTICIPATION_POINTS
        );
    }

    #[test]
    fn unlisted_industry_uses_default_benchmark() {
        let policy = RewardsPolicy::default();
        // 12500 is 50% below the 25000 default
        assert_eq!(policy.points_for_calculation(Industry::Agriculture, 12500.0), 500);
    }

    #[test]
    fn fractional_savings_truncate_toward_zero() {
        let policy = RewardsPolicy::default();
        // 920 / 15000 => 93.8666...% savings => 938.666... => 938
        assert_eq!(policy.points_for_calculation(Industry::Technology, 920.0), 938);
    }
}
