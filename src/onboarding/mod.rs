//! Onboarding Module
//!
//! Role normalization and verification-state resolution.

mod role;
mod verification;

pub use role::RoleToken;
pub use verification::{verified_flag, FailureClass, Resolution, VerificationResolver};
