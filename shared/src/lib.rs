//! Shared types and domain logic for the GreenTrace platform
//!
//! This crate contains the carbon-accounting engine, the green-points rewards
//! policy, and the domain models shared between the backend and the WASM
//! client module.

pub mod carbon;
pub mod leaderboard;
pub mod models;
pub mod rewards;
pub mod types;
pub mod validation;

pub use carbon::*;
pub use leaderboard::*;
pub use models::*;
pub use rewards::*;
pub use types::*;
pub use validation::*;
