//! Route access policy.
//!
//! Every route declares an [`Access`] level and a single guard function
//! resolves it against credential presence. Presence is the only check: token
//! expiry is discovered when an API call comes back 401.

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Visible regardless of the session.
    Open,
    /// Login and signup: hidden once a credential exists.
    PublicOnly,
    /// Requires a credential.
    Protected,
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

/// Decision of the guard for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

/// Central guard. Protected routes bounce to login without a credential;
/// public-only routes bounce to the dashboard with one.
pub fn resolve(access: Access, authenticated: bool) -> GuardOutcome {
    match (access, authenticated) {
        (Access::Protected, false) => GuardOutcome::Redirect(LOGIN_PATH),
        (Access::PublicOnly, true) => GuardOutcome::Redirect(HOME_PATH),
        _ => GuardOutcome::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn guard_table() {
        assert_eq!(resolve(Access::Open, false), GuardOutcome::Allow);
        assert_eq!(resolve(Access::Open, true), GuardOutcome::Allow);
        assert_eq!(resolve(Access::Protected, false), GuardOutcome::Redirect("/login"));
        assert_eq!(resolve(Access::Protected, true), GuardOutcome::Allow);
        assert_eq!(resolve(Access::PublicOnly, false), GuardOutcome::Allow);
        assert_eq!(resolve(Access::PublicOnly, true), GuardOutcome::Redirect("/dashboard"));
    }

    #[test]
    fn login_redirects_to_dashboard_after_sign_in() {
        let session = Session::in_memory();
        assert_eq!(resolve(Access::PublicOnly, session.is_authenticated()), GuardOutcome::Allow);
        session.sign_in("token-from-login");
        assert_eq!(
            resolve(Access::PublicOnly, session.is_authenticated()),
            GuardOutcome::Redirect(HOME_PATH)
        );
    }

    #[test]
    fn sign_out_sends_protected_routes_to_login() {
        let session = Session::in_memory();
        session.sign_in("t");
        session.sign_out();
        assert_eq!(
            resolve(Access::Protected, session.is_authenticated()),
            GuardOutcome::Redirect(LOGIN_PATH)
        );
    }
}
