mod common;

use serde_json::json;
use std::sync::Arc;

use chemisttasker::onboarding::{RoleToken, VerificationResolver};
use common::{client_for, ScriptedTransport};

const PHARMACIST_V2: &str = "/client-profile/pharmacist/onboarding-v2/me/";
const PHARMACIST_V1: &str = "/client-profile/pharmacist/onboarding/me/";

fn resolver(transport: &Arc<ScriptedTransport>, label: &str, is_admin: bool) -> VerificationResolver {
    VerificationResolver::for_role(client_for(transport), &RoleToken::from_label(label), is_admin)
}

#[tokio::test]
async fn test_v2_success_stops_after_one_request() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.ok(PHARMACIST_V2, json!({ "verified": true })).await;

    let resolution = resolver(&transport, "Pharmacist", false).resolve_detailed().await;

    assert!(resolution.verified);
    assert_eq!(resolution.attempts, 1);
    assert_eq!(resolution.answered_by.as_deref(), Some(PHARMACIST_V2));
    assert_eq!(transport.calls().await, vec![PHARMACIST_V2]);
}

#[tokio::test]
async fn test_v2_not_found_falls_back_to_legacy() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.status(PHARMACIST_V2, 404).await;
    transport.ok(PHARMACIST_V1, json!({ "is_verified": true })).await;

    let resolution = resolver(&transport, "pharmacist", false).resolve_detailed().await;

    assert!(resolution.verified);
    assert_eq!(resolution.answered_by.as_deref(), Some(PHARMACIST_V1));
    assert_eq!(transport.calls().await, vec![PHARMACIST_V2, PHARMACIST_V1]);
}

#[tokio::test]
async fn test_method_not_allowed_also_falls_back() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.status(PHARMACIST_V2, 405).await;
    transport.ok(PHARMACIST_V1, json!({ "verified": false })).await;

    let resolution = resolver(&transport, "pharmacist", false).resolve_detailed().await;

    assert!(!resolution.verified);
    assert_eq!(resolution.attempts, 2);
    assert_eq!(resolution.answered_by.as_deref(), Some(PHARMACIST_V1));
}

#[tokio::test]
async fn test_server_error_is_terminal() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.status(PHARMACIST_V2, 500).await;
    transport.ok(PHARMACIST_V1, json!({ "verified": true })).await;

    let resolution = resolver(&transport, "pharmacist", false).resolve_detailed().await;

    assert!(!resolution.verified);
    assert_eq!(resolution.answered_by, None);
    assert_eq!(transport.calls().await, vec![PHARMACIST_V2]);
}

#[tokio::test]
async fn test_transport_failure_is_terminal() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.transport_error(PHARMACIST_V2).await;

    let verified = resolver(&transport, "pharmacist", false).resolve().await;

    assert!(!verified);
    assert_eq!(transport.calls().await.len(), 1);
}

#[tokio::test]
async fn test_both_candidates_missing_is_pending() {
    // Nothing scripted: both routes answer 404
    let transport = Arc::new(ScriptedTransport::new());

    let resolution = resolver(&transport, "explorer", false).resolve_detailed().await;

    assert!(!resolution.verified);
    assert_eq!(resolution.attempts, 2);
    assert_eq!(
        transport.calls().await,
        vec![
            "/client-profile/explorer/onboarding-v2/me/",
            "/client-profile/explorer/onboarding/me/"
        ]
    );
}

#[tokio::test]
async fn test_missing_flag_counts_as_unverified() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.ok(PHARMACIST_V2, json!({ "status": "submitted" })).await;

    assert!(!resolver(&transport, "pharmacist", false).resolve().await);
    assert_eq!(transport.calls().await.len(), 1);
}

#[tokio::test]
async fn test_admin_owner_and_pharmacy_admin_use_owner_category() {
    for label in ["owner", "pharmacy_admin", "Pharmacy Admin"] {
        let transport = Arc::new(ScriptedTransport::new());
        let r = resolver(&transport, label, true);
        assert_eq!(r.category(), "owner");
        assert_eq!(
            r.candidates(),
            [
                "/client-profile/owner/onboarding-v2/me/".to_string(),
                "/client-profile/owner/onboarding/me/".to_string(),
            ]
        );

        r.resolve().await;
        assert_eq!(
            transport.calls().await,
            vec![
                "/client-profile/owner/onboarding-v2/me/",
                "/client-profile/owner/onboarding/me/"
            ]
        );
    }
}

#[tokio::test]
async fn test_other_staff_is_normalized_in_both_paths() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.status("/client-profile/otherstaff/onboarding-v2/me/", 404).await;
    transport
        .ok("/client-profile/otherstaff/onboarding/me/", json!({ "verified": true }))
        .await;

    let verified = resolver(&transport, "Other Staff", false).resolve().await;

    assert!(verified);
    assert_eq!(
        transport.calls().await,
        vec![
            "/client-profile/otherstaff/onboarding-v2/me/",
            "/client-profile/otherstaff/onboarding/me/"
        ]
    );
}
