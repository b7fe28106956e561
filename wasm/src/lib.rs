//! WebAssembly module for the GreenTrace platform
//!
//! Provides client-side computation for:
//! - Carbon footprint estimation (same engine as the backend)
//! - Green points estimation against industry benchmarks
//! - Offline input validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::carbon::*;
pub use shared::models::*;
pub use shared::rewards::*;
pub use shared::validation::*;

/// kg CO2 per metric ton
const KG_TO_TONS: f64 = 0.001;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Calculate a scope-classified emission summary from activity inputs.
///
/// Takes the same camelCase JSON the backend accepts and returns the summary
/// as JSON, so client previews match server results exactly.
#[wasm_bindgen]
pub fn calculate_carbon_footprint(inputs_json: &str) -> Result<String, JsValue> {
    let input: ActivityInput = serde_json::from_str(inputs_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid inputs JSON: {}", e)))?;

    validate_activity_input(&input)
        .map_err(|e| JsValue::from_str(&format!("{}: {}", e.field, e.message)))?;

    let summary = CarbonCalculator::default().calculate(&input);
    serde_json::to_string(&summary)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Estimate the points award for a total footprint in an industry
#[wasm_bindgen]
pub fn estimate_green_points(industry: &str, total_emissions: f64) -> Result<i32, JsValue> {
    let industry = Industry::parse(industry)
        .ok_or_else(|| JsValue::from_str("Unknown industry"))?;

    Ok(RewardsPolicy::default().points_for_calculation(industry, total_emissions))
}

/// Monthly benchmark (kg CO2) for an industry
#[wasm_bindgen]
pub fn industry_benchmark(industry: &str) -> Result<f64, JsValue> {
    let industry = Industry::parse(industry)
        .ok_or_else(|| JsValue::from_str("Unknown industry"))?;

    Ok(IndustryBenchmarks::default().for_industry(industry))
}

/// Validate activity inputs before submission.
///
/// Returns an empty string when valid, otherwise "field: message".
#[wasm_bindgen]
pub fn validate_activity_inputs(inputs_json: &str) -> Result<String, JsValue> {
    let input: ActivityInput = serde_json::from_str(inputs_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid inputs JSON: {}", e)))?;

    Ok(match validate_activity_input(&input) {
        Ok(()) => String::new(),
        Err(e) => format!("{}: {}", e.field, e.message),
    })
}

/// Convert kg CO2 to metric tons
#[wasm_bindgen]
pub fn kg_to_tons(kg: f64) -> f64 {
    kg * KG_TO_TONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_carbon_footprint() {
        let result = calculate_carbon_footprint(
            r#"{"electricity": 1000, "calculationPeriod": "2024-01"}"#,
        )
        .unwrap();

        let summary: EmissionSummary = serde_json::from_str(&result).unwrap();
        assert_eq!(summary.scope2, 920.0);
        assert_eq!(summary.total, 920.0);
    }

    #[test]
    fn test_estimate_green_points() {
        assert_eq!(estimate_green_points("TECHNOLOGY", 7500.0).unwrap(), 500);
        assert_eq!(estimate_green_points("TECHNOLOGY", 20000.0).unwrap(), 50);
        assert!(estimate_green_points("SPACE_MINING", 100.0).is_err());
    }

    #[test]
    fn test_validate_activity_inputs() {
        let ok = validate_activity_inputs(
            r#"{"electricity": 10, "calculationPeriod": "2024-01"}"#,
        )
        .unwrap();
        assert!(ok.is_empty());

        let bad = validate_activity_inputs(
            r#"{"electricity": -10, "calculationPeriod": "2024-01"}"#,
        )
        .unwrap();
        assert!(bad.starts_with("electricity"));
    }

    #[test]
    fn test_kg_to_tons() {
        assert!((kg_to_tons(1500.0) - 1.5).abs() < 1e-12);
    }
}
