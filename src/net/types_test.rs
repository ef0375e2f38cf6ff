use super::*;
use serde_json::json;

fn provider_user(email: Option<&str>, display_name: Option<&str>) -> ProviderUser {
    ProviderUser {
        id: "u-1".to_owned(),
        email: email.map(str::to_owned),
        display_name: display_name.map(str::to_owned),
    }
}

// =============================================================
// User derivation
// =============================================================

#[test]
fn username_prefers_display_name() {
    let user = User::from_provider(Some(&provider_user(Some("ada@example.com"), Some("Ada L."))));
    assert_eq!(user.username, "Ada L.");
    assert_eq!(user.email, "ada@example.com");
}

#[test]
fn username_falls_back_to_email_local_part() {
    let user = User::from_provider(Some(&provider_user(Some("grace@example.com"), None)));
    assert_eq!(user.username, "grace");
}

#[test]
fn empty_display_name_counts_as_absent() {
    let user = User::from_provider(Some(&provider_user(Some("grace@example.com"), Some(""))));
    assert_eq!(user.username, "grace");
}

#[test]
fn username_falls_back_to_guest_without_email() {
    let user = User::from_provider(Some(&provider_user(None, None)));
    assert_eq!(user.username, GUEST_USERNAME);
    assert_eq!(user.email, UNKNOWN_EMAIL);
}

#[test]
fn missing_provider_user_yields_guest() {
    let user = User::from_provider(None);
    assert_eq!(
        user,
        User {
            email: UNKNOWN_EMAIL.to_owned(),
            username: GUEST_USERNAME.to_owned(),
        }
    );
}

#[test]
fn local_part_rejects_empty_prefix() {
    assert_eq!(local_part("a@b.c"), Some("a"));
    assert_eq!(local_part("no-at-sign"), Some("no-at-sign"));
    assert_eq!(local_part("@b.c"), None);
    assert_eq!(local_part(""), None);
}

// =============================================================
// AuthChange
// =============================================================

#[test]
fn auth_change_without_session_is_unauthenticated() {
    let change = AuthChange::from_session(None);
    assert_eq!(change.status, AuthStatus::Unauthenticated);
    assert_eq!(change.local_user(), None);
}

#[test]
fn auth_change_with_session_yields_local_user() {
    let session = ProviderSession {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        user: Some(provider_user(Some("lin@example.com"), None)),
    };
    let change = AuthChange::from_session(Some(&session));
    assert_eq!(change.status, AuthStatus::Authenticated);
    assert_eq!(change.local_user().map(|u| u.username), Some("lin".to_owned()));
}

#[test]
fn authenticated_change_without_user_record_has_no_local_user() {
    let change = AuthChange {
        status: AuthStatus::Authenticated,
        user: None,
    };
    assert_eq!(change.local_user(), None);
}

// =============================================================
// Wire formats
// =============================================================

#[test]
fn provider_session_parses_nhost_camel_case() {
    let raw = json!({
        "accessToken": "at",
        "accessTokenExpiresIn": 900,
        "refreshToken": "rt",
        "refreshTokenId": "ignored",
        "user": {
            "id": "u-9",
            "email": "kim@example.com",
            "displayName": "Kim",
            "avatarUrl": "",
            "roles": ["user"]
        }
    });
    let session: ProviderSession = serde_json::from_value(raw).unwrap();
    assert_eq!(session.refresh_token, "rt");
    let user = session.user.unwrap();
    assert_eq!(user.display_name(), Some("Kim"));
    assert_eq!(user.email(), Some("kim@example.com"));
}

#[test]
fn webhook_response_title_is_optional() {
    let resp: WebhookResponse = serde_json::from_value(json!({ "summary": "x" })).unwrap();
    assert_eq!(resp.title, None);
}

#[test]
fn webhook_response_requires_summary() {
    let resp = serde_json::from_value::<WebhookResponse>(json!({ "title": "t" }));
    assert!(resp.is_err());
}

#[test]
fn webhook_request_serializes_video_url_key() {
    let body = serde_json::to_value(WebhookRequest {
        video_url: "https://youtu.be/abc".to_owned(),
    })
    .unwrap();
    assert_eq!(body, json!({ "video_url": "https://youtu.be/abc" }));
}

// =============================================================
// Summary
// =============================================================

#[test]
fn summary_without_title_uses_placeholder() {
    let resp = WebhookResponse {
        title: None,
        summary: "x".to_owned(),
    };
    let summary = Summary::from_response(resp, "2026-01-01T00:00:00.000Z".to_owned());
    assert_eq!(summary.title, UNTITLED_VIDEO);
    assert_eq!(summary.summary, "x");
    assert_eq!(summary.timestamp, "2026-01-01T00:00:00.000Z");
}

#[test]
fn summary_with_empty_title_uses_placeholder() {
    let resp = WebhookResponse {
        title: Some(String::new()),
        summary: "x".to_owned(),
    };
    assert_eq!(Summary::from_response(resp, String::new()).title, UNTITLED_VIDEO);
}

#[test]
fn summary_keeps_supplied_title() {
    let resp = WebhookResponse {
        title: Some("Rust in 100 seconds".to_owned()),
        summary: "fast".to_owned(),
    };
    assert_eq!(Summary::from_response(resp, String::new()).title, "Rust in 100 seconds");
}
