use super::*;
use crate::credential::{fleet_user_token, token_with_payload};

const PROTECTED_SAMPLE: [&str; 8] = [
    "/",
    "/fleet",
    "/schedule",
    "/support",
    "/invoices",
    "/account",
    "/news",
    "/may-appointments",
];

#[test]
fn missing_cookie_redirects_every_protected_path() {
    for path in PROTECTED_SAMPLE {
        assert_eq!(
            evaluate(path, None),
            GateDecision::RedirectToLogin,
            "path {path}"
        );
    }
}

#[test]
fn missing_cookie_allows_every_public_path() {
    for path in PUBLIC_PATHS {
        assert_eq!(evaluate(path, None), GateDecision::Allow, "path {path}");
    }
}

#[test]
fn malformed_credential_behaves_like_no_credential() {
    // 幂等降级：解码失败与无凭证必须完全一致
    for garbage in ["not-a-token", "a.b", "a.!!.c", ""] {
        for path in PROTECTED_SAMPLE {
            assert_eq!(evaluate(path, Some(garbage)), evaluate(path, None));
        }
        for path in PUBLIC_PATHS {
            assert_eq!(evaluate(path, Some(garbage)), evaluate(path, None));
        }
    }
}

#[test]
fn wrong_role_redirects_protected_paths() {
    let admin = token_with_payload(r#"{"role":"admin"}"#);
    for path in PROTECTED_SAMPLE {
        assert_eq!(
            evaluate(path, Some(&admin)),
            GateDecision::RedirectToLogin,
            "path {path}"
        );
    }
    assert_eq!(evaluate("/login", Some(&admin)), GateDecision::Allow);
}

#[test]
fn fleet_user_is_allowed_everywhere_including_public_paths() {
    let token = fleet_user_token();
    for path in PROTECTED_SAMPLE.iter().chain(PUBLIC_PATHS.iter()) {
        assert_eq!(
            evaluate(path, Some(&token)),
            GateDecision::Allow,
            "path {path}"
        );
    }
}

#[test]
fn public_classification_ignores_query_and_trailing_slash() {
    assert!(is_public_path("/reset-password?token=abc"));
    assert!(is_public_path("/login/"));
    assert!(!is_public_path("/"));
    assert!(!is_public_path("/loginx"));
    assert!(!is_public_path("/fleet?page=2"));
}
