// Core recommendation functionality:
// - API client and transport seam
// - Request/response data structures
// - Configuration loading
// - Shared error types
// - The view state machine

// Export client module - API client for the recommendation endpoint
pub mod client;
pub use client::*;

// Export types module - Request/response data structures
pub mod types;
pub use types::*;

// Export config module - Configuration loading
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;

// Export view module - Loading/Error/Loaded state
pub mod view;
pub use view::{RecommendationView, ViewState};
