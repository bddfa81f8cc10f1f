use serde::{Deserialize, Serialize};

/// Membership role that grants pharmacy-admin rights
pub const PHARMACY_ADMIN_ROLE: &str = "PHARMACY_ADMIN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub pharmacy: Option<u64>,
}

/// The signed-in user as the identity provider hands it over
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_pharmacy_admin: bool,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

impl SessionUser {
    /// Admin by backend flag, or by holding any PHARMACY_ADMIN membership
    pub fn is_pharmacy_admin(&self) -> bool {
        self.is_pharmacy_admin
            || self
                .memberships
                .iter()
                .any(|m| m.role.as_deref() == Some(PHARMACY_ADMIN_ROLE))
    }
}
