//! Route authorization gate.
//!
//! Evaluated once per navigation, stateless: everything is re-derived from
//! the incoming path and the credential cookie. The policy is permissive —
//! a valid `fleet_user` credential allows every path, public ones included;
//! everyone else gets the public allow-list or a redirect to `/login`.
//! A decode failure is unauthenticated, never an error that escapes here.

use crate::credential::claims_or_none;

/// Paths reachable without a credential. Static, known at startup; there is
/// no per-resource permission model in the portal.
pub const PUBLIC_PATHS: [&str; 4] = ["/login", "/register", "/forgot-password", "/reset-password"];

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Pass the navigation through unmodified.
    Allow,
    /// Redirect to [`crate::LOGIN_PATH`].
    RedirectToLogin,
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allow)
    }
}

/// Whether a path sits on the unauthenticated allow-list. Query strings are
/// ignored (`/reset-password?token=...` is public).
pub fn is_public_path(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path);
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    PUBLIC_PATHS.contains(&path)
}

/// Decide access for one navigation.
///
/// `token` is the raw `accessToken` cookie value, if any.
pub fn evaluate(path: &str, token: Option<&str>) -> GateDecision {
    let fleet_user = claims_or_none(token).is_some_and(|claims| claims.is_fleet_user());

    if fleet_user {
        // 特权凭证：放行所有路径（含公开页，保留宽松策略）
        return GateDecision::Allow;
    }

    if is_public_path(path) {
        GateDecision::Allow
    } else {
        GateDecision::RedirectToLogin
    }
}

#[cfg(test)]
mod tests;
