//! Verification Resolver
//!
//! Resolves whether the user's onboarding record is verified. The v2 route is
//! tried first; a 404/405 means the role has not been migrated yet and the
//! legacy route is tried next. Anything else ends the sequence as unverified.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::role::RoleToken;
use crate::api::endpoints::onboarding;
use crate::api::{ApiClient, ApiError};

/// How a failed candidate affects the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Route missing or method not allowed: try the next candidate
    Skippable,
    /// Stop and report unverified
    Terminal,
}

impl FailureClass {
    pub fn of(err: &ApiError) -> Self {
        match err.status() {
            Some(404) | Some(405) => FailureClass::Skippable,
            _ => FailureClass::Terminal,
        }
    }
}

/// Outcome of one resolution sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub verified: bool,
    /// Candidate path that answered successfully, if any
    pub answered_by: Option<String>,
    /// Requests issued
    pub attempts: usize,
}

#[derive(Clone)]
pub struct VerificationResolver {
    client: ApiClient,
    category: String,
}

impl VerificationResolver {
    pub fn new(client: ApiClient, category: impl Into<String>) -> Self {
        Self {
            client,
            category: category.into(),
        }
    }

    pub fn for_role(client: ApiClient, role: &RoleToken, is_admin: bool) -> Self {
        Self::new(client, role.onboarding_category(is_admin))
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// v2 first, then legacy
    pub fn candidates(&self) -> [String; 2] {
        [
            onboarding::v2_detail(&self.category),
            onboarding::detail(&self.category),
        ]
    }

    pub async fn resolve(&self) -> bool {
        self.resolve_detailed().await.verified
    }

    pub async fn resolve_detailed(&self) -> Resolution {
        let mut attempts = 0;

        for path in self.candidates() {
            attempts += 1;
            match self.client.get(path.clone()).await {
                Ok(response) => {
                    let verified = verified_flag(&response.body);
                    info!(category = %self.category, verified, "verification resolved via {}", path);
                    return Resolution {
                        verified,
                        answered_by: Some(path),
                        attempts,
                    };
                }
                Err(err) => match FailureClass::of(&err) {
                    FailureClass::Skippable => {
                        debug!("{} not available ({}), trying next candidate", path, err);
                    }
                    FailureClass::Terminal => {
                        warn!("verification lookup failed: {}", err);
                        break;
                    }
                },
            }
        }

        Resolution {
            verified: false,
            answered_by: None,
            attempts,
        }
    }
}

/// `verified`, else `is_verified`, coerced to a boolean. Absent means false.
pub fn verified_flag(body: &Value) -> bool {
    let value = match body.get("verified") {
        Some(v) if !v.is_null() => Some(v),
        _ => body.get("is_verified"),
    };
    value.map(truthy).unwrap_or(false)
}

/// JSON truthiness: null, false, 0, NaN and "" are false
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flag_prefers_verified() {
        assert!(verified_flag(&json!({ "verified": true, "is_verified": false })));
        assert!(!verified_flag(&json!({ "verified": false, "is_verified": true })));
    }

    #[test]
    fn test_flag_falls_back_on_null_or_missing() {
        assert!(verified_flag(&json!({ "verified": null, "is_verified": true })));
        assert!(verified_flag(&json!({ "is_verified": true })));
        assert!(!verified_flag(&json!({})));
        assert!(!verified_flag(&Value::Null));
        assert!(!verified_flag(&json!([true])));
    }

    #[test]
    fn test_flag_truthiness() {
        assert!(verified_flag(&json!({ "verified": 1 })));
        assert!(!verified_flag(&json!({ "verified": 0 })));
        assert!(!verified_flag(&json!({ "verified": "" })));
        assert!(verified_flag(&json!({ "verified": "yes" })));
    }

    #[test]
    fn test_failure_classes() {
        let status = |status| ApiError::Status {
            status,
            path: "/p/".into(),
            body: Value::Null,
        };
        assert_eq!(FailureClass::of(&status(404)), FailureClass::Skippable);
        assert_eq!(FailureClass::of(&status(405)), FailureClass::Skippable);
        assert_eq!(FailureClass::of(&status(403)), FailureClass::Terminal);
        assert_eq!(FailureClass::of(&status(500)), FailureClass::Terminal);
        let transport = ApiError::Transport {
            path: "/p/".into(),
            message: "timeout".into(),
        };
        assert_eq!(FailureClass::of(&transport), FailureClass::Terminal);
    }
}
