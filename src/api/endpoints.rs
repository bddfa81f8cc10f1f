//! Backend Route Table
//!
//! Every path the frontend talks to, grouped by backend area. Fixed routes are
//! constants; parameterized routes are builders that embed their arguments
//! verbatim (no percent-encoding). Paths are the literal backend contract,
//! including the few detail routes that have no trailing slash.

/// Role segment used by the onboarding routes. `other_staff` is served under
/// `otherstaff`.
fn onboarding_role(role: &str) -> &str {
    if role == "other_staff" {
        "otherstaff"
    } else {
        role
    }
}

pub mod auth {
    pub const LOGIN: &str = "/users/login/";
    pub const REGISTER: &str = "/users/register/";
    pub const REFRESH: &str = "/users/token/refresh/";
    pub const VERIFY_OTP: &str = "/users/verify-otp/";
    pub const RESEND_OTP: &str = "/users/resend-otp/";

    pub const MOBILE_REQUEST_OTP: &str = "/users/mobile/request-otp/";
    pub const MOBILE_VERIFY_OTP: &str = "/users/mobile/verify-otp/";
    pub const MOBILE_RESEND_OTP: &str = "/users/mobile/resend-otp/";

    pub const INVITE_ORG_USER: &str = "/users/invite-org-user/";
    pub const PASSWORD_RESET: &str = "/users/password-reset/";
    pub const PASSWORD_RESET_CONFIRM: &str = "/users/password-reset-confirm/";

    /// User search (invitations)
    pub const USERS: &str = "/users/";
}

pub mod dashboards {
    use std::fmt::Display;

    /// Note the underscore: this one lives outside `client-profile`
    pub const ORGANIZATIONS: &str = "/client_profile/organizations/";
    pub const OWNER: &str = "/client-profile/dashboard/owner/";
    pub const PHARMACIST: &str = "/client-profile/dashboard/pharmacist/";
    pub const OTHER_STAFF: &str = "/client-profile/dashboard/otherstaff/";
    pub const EXPLORER: &str = "/client-profile/dashboard/explorer/";

    pub fn organization(org_id: impl Display) -> String {
        format!("/client-profile/dashboard/organization/{org_id}/")
    }
}

pub mod onboarding {
    use super::onboarding_role;
    use std::fmt::Display;

    pub const CLAIM: &str = "/client-profile/owner-onboarding/claim/";

    pub fn detail(role: &str) -> String {
        format!("/client-profile/{}/onboarding/me/", onboarding_role(role))
    }

    pub fn create(role: &str) -> String {
        format!("/client-profile/{}/onboarding/", onboarding_role(role))
    }

    /// Expects an already-normalized category (`pharmacist`, `owner`,
    /// `otherstaff`, `explorer`)
    pub fn v2_detail(category: &str) -> String {
        format!("/client-profile/{category}/onboarding-v2/me/")
    }

    pub fn submit_referee_response(token: impl Display) -> String {
        format!("/client-profile/onboarding/submit-reference/{token}/")
    }

    pub fn referee_reject(pk: impl Display, ref_index: impl Display) -> String {
        format!("/client-profile/onboarding/referee-reject/{pk}/{ref_index}/")
    }
}

pub mod pharmacies {
    use std::fmt::Display;

    pub const LIST: &str = "/client-profile/pharmacies/";

    pub fn detail(pharmacy_id: impl Display) -> String {
        format!("/client-profile/pharmacies/{pharmacy_id}/")
    }
}

pub mod availability {
    use std::fmt::Display;

    pub const LIST: &str = "/client-profile/user-availability/";

    pub fn detail(id: impl Display) -> String {
        format!("/client-profile/user-availability/{id}/")
    }
}

pub mod chains {
    use std::fmt::Display;

    pub const LIST: &str = "/client-profile/chains/";

    pub fn detail(chain_id: impl Display) -> String {
        format!("/client-profile/chains/{chain_id}/")
    }

    pub fn add_pharmacy(chain_id: impl Display) -> String {
        format!("/client-profile/chains/{chain_id}/add_pharmacy/")
    }

    pub fn remove_pharmacy(chain_id: impl Display) -> String {
        format!("/client-profile/chains/{chain_id}/remove_pharmacy/")
    }

    pub fn add_user(chain_id: impl Display) -> String {
        format!("/client-profile/chains/{chain_id}/add_user/")
    }
}

pub mod memberships {
    use std::fmt::Display;

    /// List (GET) and create (POST) share one route
    pub const LIST: &str = "/client-profile/memberships/";
    pub const BULK_INVITE: &str = "/client-profile/memberships/bulk_invite/";
    pub const MINE: &str = "/client-profile/my-memberships/";
    pub const INVITE_LINKS: &str = "/client-profile/membership-invite-links/";
    pub const APPLICATIONS: &str = "/client-profile/membership-applications/";

    pub fn delete(membership_id: impl Display) -> String {
        format!("/client-profile/memberships/{membership_id}/")
    }

    /// Public: validate a magic invite link
    pub fn magic_info(token: impl Display) -> String {
        format!("/client-profile/magic/memberships/{token}/")
    }

    /// Public: apply through a magic invite link
    pub fn magic_apply(token: impl Display) -> String {
        format!("/client-profile/magic/memberships/{token}/apply/")
    }
}

pub mod shifts {
    use std::fmt::{self, Display};

    // Marketplace. Creating a shift posts to the community list.
    pub const COMMUNITY: &str = "/client-profile/community-shifts/";
    pub const PUBLIC: &str = "/client-profile/public-shifts/";

    // My shifts by status
    pub const ACTIVE: &str = "/client-profile/shifts/active/";
    pub const CONFIRMED: &str = "/client-profile/shifts/confirmed/";
    pub const HISTORY: &str = "/client-profile/shifts/history/";
    pub const MY_CONFIRMED: &str = "/client-profile/my-confirmed-shifts/";
    pub const MY_HISTORY: &str = "/client-profile/my-history-shifts/";
    pub const INTERESTS: &str = "/client-profile/shift-interests/";
    pub const REJECTIONS: &str = "/client-profile/shift-rejections/";

    // Public sharing
    pub const PUBLIC_JOB_BOARD: &str = "/client-profile/public-job-board/";
    pub const VIEW_SHARED: &str = "/client-profile/view-shared-shift/";

    /// Which assignment list an assigned profile is viewed from
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AssignedShiftKind {
        Confirmed,
        History,
    }

    impl AssignedShiftKind {
        pub fn as_str(&self) -> &'static str {
            match self {
                AssignedShiftKind::Confirmed => "confirmed",
                AssignedShiftKind::History => "history",
            }
        }
    }

    impl Display for AssignedShiftKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    pub fn express_interest(shift_id: impl Display) -> String {
        format!("/client-profile/shifts/{shift_id}/express_interest/")
    }

    pub fn reveal_profile(shift_id: impl Display) -> String {
        format!("/client-profile/shifts/{shift_id}/reveal_profile/")
    }

    pub fn accept_user(shift_id: impl Display) -> String {
        format!("/client-profile/shifts/{shift_id}/accept_user/")
    }

    pub fn community_detail(id: impl Display) -> String {
        format!("/client-profile/community-shifts/{id}")
    }

    pub fn public_detail(id: impl Display) -> String {
        format!("/client-profile/public-shifts/{id}")
    }

    pub fn active_detail(id: impl Display) -> String {
        format!("/client-profile/shifts/active/{id}")
    }

    pub fn confirmed_detail(id: impl Display) -> String {
        format!("/client-profile/shifts/confirmed/{id}/")
    }

    pub fn escalate_community(shift_id: impl Display) -> String {
        format!("/client-profile/community-shifts/{shift_id}/escalate/")
    }

    pub fn community_member_status(shift_id: impl Display) -> String {
        format!("/client-profile/community-shifts/{shift_id}/member_status/")
    }

    pub fn reject_community(shift_id: impl Display) -> String {
        format!("/client-profile/community-shifts/{shift_id}/reject/")
    }

    pub fn worker_detail(id: impl Display) -> String {
        format!("/client-profile/shifts/{id}/")
    }

    /// `kind` is normally an [`AssignedShiftKind`]
    pub fn view_assigned_profile(kind: impl Display, shift_id: impl Display) -> String {
        format!("/client-profile/shifts/{kind}/{shift_id}/view_assigned_profile/")
    }

    pub fn generate_share_link(shift_id: impl Display) -> String {
        format!("/client-profile/shifts/{shift_id}/generate-share-link/")
    }
}

pub mod roster {
    use std::fmt::Display;

    pub const OWNER: &str = "/client-profile/roster-owner/";
    pub const WORKER: &str = "/client-profile/roster-worker/";
    pub const CREATE_SHIFT_AND_ASSIGN: &str = "/client-profile/roster/create-and-assign-shift/";

    /// PATCH to edit, DELETE to remove
    pub fn manage_shift(shift_id: impl Display) -> String {
        format!("/client-profile/roster/manage-shifts/{shift_id}/")
    }

    pub fn escalate_shift(shift_id: impl Display) -> String {
        format!("/client-profile/roster/manage-shifts/{shift_id}/escalate/")
    }

    /// Assignments are deleted through the owner roster route
    pub fn delete_assignment(assignment_id: impl Display) -> String {
        format!("/client-profile/roster-owner/{assignment_id}/")
    }
}

pub mod leave {
    use std::fmt::Display;

    /// List (GET) and create (POST)
    pub const REQUESTS: &str = "/client-profile/leave-requests/";

    pub fn approve(leave_id: impl Display) -> String {
        format!("/client-profile/leave-requests/{leave_id}/approve/")
    }

    pub fn reject(leave_id: impl Display) -> String {
        format!("/client-profile/leave-requests/{leave_id}/reject/")
    }
}

pub mod invoices {
    use std::fmt::Display;

    pub const LIST: &str = "/client-profile/invoices/";
    pub const GENERATE: &str = "/client-profile/invoices/generate/";

    pub fn detail(id: impl Display) -> String {
        format!("/client-profile/invoices/{id}/")
    }

    pub fn preview(id: impl Display) -> String {
        format!("/client-profile/invoices/preview/{id}/")
    }

    pub fn pdf(id: impl Display) -> String {
        format!("/client-profile/invoices/{id}/pdf/")
    }

    pub fn send(id: impl Display) -> String {
        format!("/client-profile/invoices/{id}/send/")
    }
}

pub mod chat {
    use std::fmt::Display;

    pub const ROOMS: &str = "/client-profile/rooms/";
    pub const PARTICIPANTS: &str = "/client-profile/chat-participants/";
    pub const START_DM: &str = "/client-profile/rooms/start-dm/";
    pub const GET_OR_CREATE_GROUP: &str = "/client-profile/rooms/get-or-create-group/";
    pub const GET_OR_CREATE_DM_BY_USER: &str = "/client-profile/rooms/get-or-create-dm-by-user/";

    pub fn room_detail(id: impl Display) -> String {
        format!("/client-profile/rooms/{id}/")
    }

    pub fn room_messages(id: impl Display) -> String {
        format!("/client-profile/rooms/{id}/messages/")
    }

    pub fn room_mark_read(id: impl Display) -> String {
        format!("/client-profile/rooms/{id}/read/")
    }
}

pub mod explorer_posts {
    use std::fmt::Display;

    pub const LIST: &str = "/client-profile/explorer-posts/";
    pub const FEED: &str = "/client-profile/explorer-posts/feed/";

    pub fn detail(id: impl Display) -> String {
        format!("/client-profile/explorer-posts/{id}/")
    }

    pub fn by_profile(profile_id: impl Display) -> String {
        format!("/client-profile/explorer-posts/by-profile/{profile_id}/")
    }

    pub fn add_view(id: impl Display) -> String {
        format!("/client-profile/explorer-posts/{id}/view/")
    }

    pub fn like(id: impl Display) -> String {
        format!("/client-profile/explorer-posts/{id}/like/")
    }

    pub fn unlike(id: impl Display) -> String {
        format!("/client-profile/explorer-posts/{id}/unlike/")
    }

    pub fn attachments(id: impl Display) -> String {
        format!("/client-profile/explorer-posts/{id}/attachments/")
    }
}

pub mod ratings {
    pub const LIST: &str = "/client-profile/ratings/";
    pub const SUMMARY: &str = "/client-profile/ratings/summary/";
    pub const MINE: &str = "/client-profile/ratings/mine/";
    pub const PENDING: &str = "/client-profile/ratings/pending/";
}

/// True for routes whose successful writes change onboarding data
pub fn is_onboarding_path(path: &str) -> bool {
    path.contains("/onboarding")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onboarding_remaps_other_staff() {
        assert_eq!(onboarding::detail("other_staff"), "/client-profile/otherstaff/onboarding/me/");
        assert_eq!(onboarding::create("other_staff"), "/client-profile/otherstaff/onboarding/");
        assert_eq!(onboarding::detail("pharmacist"), "/client-profile/pharmacist/onboarding/me/");
    }

    #[test]
    fn test_v2_detail_is_verbatim() {
        assert_eq!(onboarding::v2_detail("otherstaff"), "/client-profile/otherstaff/onboarding-v2/me/");
        assert_eq!(onboarding::v2_detail("other_staff"), "/client-profile/other_staff/onboarding-v2/me/");
    }

    #[test]
    fn test_detail_routes_keep_missing_trailing_slash() {
        assert_eq!(shifts::community_detail(7), "/client-profile/community-shifts/7");
        assert_eq!(shifts::public_detail(7), "/client-profile/public-shifts/7");
        assert_eq!(shifts::active_detail(7), "/client-profile/shifts/active/7");
        assert_eq!(shifts::confirmed_detail(7), "/client-profile/shifts/confirmed/7/");
    }

    #[test]
    fn test_arguments_are_not_encoded() {
        assert_eq!(memberships::magic_info("a/b?c"), "/client-profile/magic/memberships/a/b?c/");
    }

    #[test]
    fn test_assigned_profile_kind() {
        assert_eq!(
            shifts::view_assigned_profile(shifts::AssignedShiftKind::History, 12),
            "/client-profile/shifts/history/12/view_assigned_profile/"
        );
    }

    #[test]
    fn test_is_onboarding_path() {
        assert!(is_onboarding_path(&onboarding::create("owner")));
        assert!(is_onboarding_path(onboarding::CLAIM));
        assert!(!is_onboarding_path(invoices::LIST));
    }
}
