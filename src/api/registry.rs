//! Endpoint Registry
//!
//! Name-keyed view over [`crate::api::endpoints`]. Each logical operation name
//! maps to exactly one descriptor; parameterized descriptors delegate to the
//! typed builders so the two can never drift apart.

use std::fmt;

use super::endpoints::*;
use super::error::{ApiError, ApiResult};

/// How a descriptor produces its path
#[derive(Clone, Copy)]
pub enum Route {
    Fixed(&'static str),
    Build(fn(&[&str]) -> String),
}

/// One registry entry
#[derive(Clone, Copy)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    pub params: &'static [&'static str],
    route: Route,
}

impl EndpointDescriptor {
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self.route, Route::Build(_))
    }

    /// Build the concrete path. Arguments are embedded verbatim.
    pub fn build(&self, args: &[&str]) -> ApiResult<String> {
        if args.len() != self.params.len() {
            return Err(ApiError::EndpointArity {
                name: self.name,
                expected: self.params.len(),
                got: args.len(),
            });
        }
        Ok(match self.route {
            Route::Fixed(path) => path.to_string(),
            Route::Build(f) => f(args),
        })
    }

    /// Path with `{param}` placeholders, for listings
    pub fn template(&self) -> String {
        match self.route {
            Route::Fixed(path) => path.to_string(),
            Route::Build(f) => {
                let placeholders: Vec<String> =
                    self.params.iter().map(|p| format!("{{{p}}}")).collect();
                let refs: Vec<&str> = placeholders.iter().map(String::as_str).collect();
                f(&refs)
            }
        }
    }
}

impl fmt::Debug for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointDescriptor")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("template", &self.template())
            .finish()
    }
}

macro_rules! fixed {
    ($name:literal, $path:expr) => {
        EndpointDescriptor { name: $name, params: &[], route: Route::Fixed($path) }
    };
}

macro_rules! build {
    ($name:literal, [$($param:literal),+], $f:expr) => {
        EndpointDescriptor { name: $name, params: &[$($param),+], route: Route::Build($f) }
    };
}

static REGISTRY: &[EndpointDescriptor] = &[
    // Auth
    fixed!("login", auth::LOGIN),
    fixed!("register", auth::REGISTER),
    fixed!("refresh", auth::REFRESH),
    fixed!("verifyOtp", auth::VERIFY_OTP),
    fixed!("resendOtp", auth::RESEND_OTP),
    fixed!("mobileRequestOtp", auth::MOBILE_REQUEST_OTP),
    fixed!("mobileVerifyOtp", auth::MOBILE_VERIFY_OTP),
    fixed!("mobileResendOtp", auth::MOBILE_RESEND_OTP),
    // Dashboards
    fixed!("organizations", dashboards::ORGANIZATIONS),
    build!("organizationDashboard", ["orgId"], |a| dashboards::organization(a[0])),
    fixed!("ownerDashboard", dashboards::OWNER),
    fixed!("pharmacistDashboard", dashboards::PHARMACIST),
    fixed!("otherStaffDashboard", dashboards::OTHER_STAFF),
    fixed!("explorerDashboard", dashboards::EXPLORER),
    // Onboarding
    build!("onboardingDetail", ["role"], |a| onboarding::detail(a[0])),
    build!("onboardingCreate", ["role"], |a| onboarding::create(a[0])),
    build!("onboardingV2Detail", ["role"], |a| onboarding::v2_detail(a[0])),
    build!("submitRefereeResponse", ["token"], |a| onboarding::submit_referee_response(a[0])),
    build!("refereeReject", ["pk", "refIndex"], |a| onboarding::referee_reject(a[0], a[1])),
    // Invite & claim
    fixed!("inviteOrgUser", auth::INVITE_ORG_USER),
    fixed!("passwordReset", auth::PASSWORD_RESET),
    fixed!("passwordResetConfirm", auth::PASSWORD_RESET_CONFIRM),
    fixed!("claimOnboarding", onboarding::CLAIM),
    // Pharmacies
    fixed!("pharmacies", pharmacies::LIST),
    build!("pharmacyDetail", ["pharmacyId"], |a| pharmacies::detail(a[0])),
    // User availability
    fixed!("userAvailabilityList", availability::LIST),
    build!("userAvailabilityDetail", ["id"], |a| availability::detail(a[0])),
    // Chains
    fixed!("chains", chains::LIST),
    build!("chainDetail", ["chainId"], |a| chains::detail(a[0])),
    build!("addPharmacyToChain", ["chainId"], |a| chains::add_pharmacy(a[0])),
    build!("removePharmacyFromChain", ["chainId"], |a| chains::remove_pharmacy(a[0])),
    build!("addUserToChain", ["chainId"], |a| chains::add_user(a[0])),
    // Users
    fixed!("users", auth::USERS),
    // Memberships
    fixed!("membershipList", memberships::LIST),
    fixed!("membershipCreate", memberships::LIST),
    fixed!("membershipBulkInvite", memberships::BULK_INVITE),
    build!("membershipDelete", ["membershipId"], |a| memberships::delete(a[0])),
    fixed!("membershipInviteLinks", memberships::INVITE_LINKS),
    fixed!("membershipApplications", memberships::APPLICATIONS),
    build!("magicMembershipInfo", ["token"], |a| memberships::magic_info(a[0])),
    build!("magicMembershipApply", ["token"], |a| memberships::magic_apply(a[0])),
    // Shifts
    fixed!("createShift", shifts::COMMUNITY),
    fixed!("getCommunityShifts", shifts::COMMUNITY),
    fixed!("getPublicShifts", shifts::PUBLIC),
    fixed!("getActiveShifts", shifts::ACTIVE),
    fixed!("getConfirmedShifts", shifts::CONFIRMED),
    fixed!("getHistoryShifts", shifts::HISTORY),
    fixed!("getMyConfirmedShifts", shifts::MY_CONFIRMED),
    fixed!("getMyHistoryShifts", shifts::MY_HISTORY),
    fixed!("getShiftInterests", shifts::INTERESTS),
    fixed!("getShiftRejections", shifts::REJECTIONS),
    build!("expressInterestInShift", ["shiftId"], |a| shifts::express_interest(a[0])),
    build!("revealProfile", ["shiftId"], |a| shifts::reveal_profile(a[0])),
    build!("acceptUserToShift", ["shiftId"], |a| shifts::accept_user(a[0])),
    build!("getCommunityShiftDetail", ["id"], |a| shifts::community_detail(a[0])),
    build!("getPublicShiftDetail", ["id"], |a| shifts::public_detail(a[0])),
    build!("getActiveShiftDetail", ["id"], |a| shifts::active_detail(a[0])),
    build!("getConfirmedShiftDetail", ["id"], |a| shifts::confirmed_detail(a[0])),
    build!("escalateCommunityShift", ["shiftId"], |a| shifts::escalate_community(a[0])),
    build!("getCommunityShiftMemberStatus", ["shiftId"], |a| shifts::community_member_status(a[0])),
    build!("rejectCommunityShift", ["shiftId"], |a| shifts::reject_community(a[0])),
    build!("getWorkerShiftDetail", ["id"], |a| shifts::worker_detail(a[0])),
    build!("viewAssignedShiftProfile", ["type", "shiftId"], |a| shifts::view_assigned_profile(a[0], a[1])),
    // Public shifts
    build!("generateShareLink", ["shiftId"], |a| shifts::generate_share_link(a[0])),
    fixed!("getPublicJobBoard", shifts::PUBLIC_JOB_BOARD),
    fixed!("getViewSharedShift", shifts::VIEW_SHARED),
    // Roster
    fixed!("getRosterOwner", roster::OWNER),
    fixed!("getRosterWorker", roster::WORKER),
    fixed!("createShiftAndAssign", roster::CREATE_SHIFT_AND_ASSIGN),
    // Leave requests
    fixed!("leaveRequests", leave::REQUESTS),
    fixed!("createLeaveRequest", leave::REQUESTS),
    build!("approveLeaveRequest", ["leaveId"], |a| leave::approve(a[0])),
    build!("rejectLeaveRequest", ["leaveId"], |a| leave::reject(a[0])),
    build!("rosterManageShift", ["shiftId"], |a| roster::manage_shift(a[0])),
    build!("rosterEscalateShift", ["shiftId"], |a| roster::escalate_shift(a[0])),
    build!("rosterDeleteAssignment", ["assignmentId"], |a| roster::delete_assignment(a[0])),
    // Invoices
    fixed!("invoices", invoices::LIST),
    build!("invoiceDetail", ["id"], |a| invoices::detail(a[0])),
    fixed!("generateInvoice", invoices::GENERATE),
    build!("invoicePreview", ["id"], |a| invoices::preview(a[0])),
    build!("invoicePdf", ["id"], |a| invoices::pdf(a[0])),
    build!("sendInvoice", ["id"], |a| invoices::send(a[0])),
    // Chat
    fixed!("rooms", chat::ROOMS),
    fixed!("chatParticipants", chat::PARTICIPANTS),
    build!("roomDetail", ["id"], |a| chat::room_detail(a[0])),
    build!("roomMessages", ["id"], |a| chat::room_messages(a[0])),
    build!("roomMarkRead", ["id"], |a| chat::room_mark_read(a[0])),
    fixed!("startDm", chat::START_DM),
    fixed!("myMemberships", memberships::MINE),
    fixed!("memberships", memberships::LIST),
    fixed!("getOrCreategroup", chat::GET_OR_CREATE_GROUP),
    fixed!("getOrCreateDmByUser", chat::GET_OR_CREATE_DM_BY_USER),
    // Explorer posts
    fixed!("explorerPosts", explorer_posts::LIST),
    build!("explorerPostDetail", ["id"], |a| explorer_posts::detail(a[0])),
    fixed!("explorerPostFeed", explorer_posts::FEED),
    build!("explorerPostByProfile", ["profileId"], |a| explorer_posts::by_profile(a[0])),
    build!("explorerPostAddView", ["id"], |a| explorer_posts::add_view(a[0])),
    build!("explorerPostLike", ["id"], |a| explorer_posts::like(a[0])),
    build!("explorerPostUnlike", ["id"], |a| explorer_posts::unlike(a[0])),
    build!("explorerPostAttachments", ["id"], |a| explorer_posts::attachments(a[0])),
    // Ratings
    fixed!("ratings", ratings::LIST),
    fixed!("ratingsSummary", ratings::SUMMARY),
    fixed!("ratingsMine", ratings::MINE),
    fixed!("ratingsPending", ratings::PENDING),
];

/// Every descriptor, in declaration order
pub fn all() -> &'static [EndpointDescriptor] {
    REGISTRY
}

pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|d| d.name)
}

pub fn lookup(name: &str) -> Option<&'static EndpointDescriptor> {
    REGISTRY.iter().find(|d| d.name == name)
}

/// Look up `name` and build it with `args`
pub fn build(name: &str, args: &[&str]) -> ApiResult<String> {
    lookup(name)
        .ok_or_else(|| ApiError::UnknownEndpoint(name.to_string()))?
        .build(args)
}
