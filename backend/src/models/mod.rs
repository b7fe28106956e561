//! Database models for the GreenTrace platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
