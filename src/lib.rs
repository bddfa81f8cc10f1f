//! ChemistTasker Client
//!
//! Client-side core of the pharmacy-staffing marketplace frontend:
//! - Endpoint registry for every backend route
//! - reqwest transport behind a mockable seam
//! - Onboarding verification resolution with v2 → legacy fallback
//! - Headless app-title view-model driven by an event bus

pub mod api;
pub mod config;
pub mod event_bus;
pub mod onboarding;
pub mod session;
pub mod title;
pub mod utils;

// Re-exports for convenience
pub use api::{ApiClient, ApiError, HttpTransport};
pub use config::ClientConfig;
pub use event_bus::{AppEvent, EventBus};
pub use onboarding::{RoleToken, VerificationResolver};
pub use title::{AppTitle, TitleProps};
