//! Validation boundary for the GreenTrace platform
//!
//! Everything the carbon-accounting core assumes about its inputs is enforced
//! here, before the core runs.

use crate::carbon::EmissionCategory;
use crate::models::ActivityInput;

/// A rejected input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validate an activity input set before it reaches the calculator.
///
/// Every submitted quantity must be a finite number >= 0 and the calculation
/// period must be non-empty. Absent quantities are fine.
pub fn validate_activity_input(input: &ActivityInput) -> Result<(), InvalidInput> {
    for category in EmissionCategory::ALL {
        if let Some(value) = input.value(category) {
            if !value.is_finite() {
                return Err(InvalidInput {
                    field: category.key(),
                    message: "must be a finite number",
                });
            }
            if value < 0.0 {
                return Err(InvalidInput {
                    field: category.key(),
                    message: "must be zero or positive",
                });
            }
        }
    }

    if input.calculation_period.trim().is_empty() {
        return Err(InvalidInput {
            field: "calculationPeriod",
            message: "calculation period is required",
        });
    }

    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}
