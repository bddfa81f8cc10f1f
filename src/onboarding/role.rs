use serde::{Deserialize, Serialize};

/// Normalized role label: trimmed, lower-cased, whitespace replaced by `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RoleToken(String);

impl RoleToken {
    pub fn from_label(label: &str) -> Self {
        let normalized = label
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        Self(normalized)
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Key used in API paths (`other_staff` is served as `otherstaff`)
    pub fn path_key(&self) -> &str {
        if self.0 == "other_staff" {
            "otherstaff"
        } else {
            &self.0
        }
    }

    /// Owners and pharmacy admins share the owner onboarding record
    pub fn onboarding_category(&self, is_admin: bool) -> &str {
        if self.0 == "owner" || is_admin {
            "owner"
        } else {
            self.path_key()
        }
    }

    pub fn dashboard_title(&self, is_admin: bool) -> &'static str {
        match self.0.as_str() {
            _ if is_admin => "Owner Dashboard",
            "owner" => "Owner Dashboard",
            "otherstaff" | "other_staff" => "Staff Dashboard",
            "explorer" => "Explorer",
            _ => "Pharmacist Dashboard",
        }
    }

    /// Only pharmacists and other staff switch workspaces
    pub fn switcher_visible(&self) -> bool {
        matches!(self.0.as_str(), "pharmacist" | "other_staff")
    }
}
