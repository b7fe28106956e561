//! HTTP handlers for the GreenTrace platform

pub mod auth;
pub mod company;
pub mod footprint;
pub mod health;
pub mod leaderboard;
pub mod points;

pub use auth::*;
pub use company::*;
pub use footprint::*;
pub use health::*;
pub use leaderboard::*;
pub use points::*;
