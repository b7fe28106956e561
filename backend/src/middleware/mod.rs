//! Request middleware for the GreenTrace platform

mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
