//! Business logic services for the GreenTrace platform

pub mod auth;
pub mod company;
pub mod footprint;
pub mod leaderboard;
pub mod points;

pub use auth::AuthService;
pub use company::CompanyService;
pub use footprint::FootprintService;
pub use leaderboard::LeaderboardService;
pub use points::GreenPointsService;
