//! Role-based redirect applied between the stored screen and the renderer.
//!
//! The guard only changes what is drawn. Stored state is left alone so the
//! user can still navigate away from the dashboard by hand.

use crate::role::{AuthSnapshot, UserRole};
use crate::screen::ScreenId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Not the landing screen, or nothing to redirect for.
    Pass,
    /// Landing screen while auth is unresolved; wait on it rather than flash.
    Hold,
    Redirect(ScreenId),
}

/// Landing redirect target for a settled role. Admins and public users stay put.
#[must_use]
pub const fn landing_redirect(role: UserRole) -> Option<ScreenId> {
    match role {
        UserRole::Artist => Some(ScreenId::ArtistDashboard),
        UserRole::Organizer => Some(ScreenId::OrganizerDashboard),
        UserRole::Public | UserRole::Admin => None,
    }
}

#[must_use]
pub fn evaluate(active: ScreenId, auth: &AuthSnapshot) -> GuardDecision {
    if !active.is_landing() {
        return GuardDecision::Pass;
    }
    if !auth.is_settled() {
        return GuardDecision::Hold;
    }
    auth.role()
        .and_then(landing_redirect)
        .map_or(GuardDecision::Pass, GuardDecision::Redirect)
}

/// Screen to render for the stored `active` screen under `auth`.
#[must_use]
pub fn effective_screen(active: ScreenId, auth: &AuthSnapshot) -> ScreenId {
    match evaluate(active, auth) {
        GuardDecision::Redirect(target) => {
            log::debug!("redirect guard: {active} -> {target}");
            target
        }
        GuardDecision::Hold | GuardDecision::Pass => active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::AppUser;

    fn signed_in(role: UserRole) -> AuthSnapshot {
        AuthSnapshot::signed_in(AppUser {
            id: "u".to_string(),
            email: "u@example.com".to_string(),
            role,
        })
    }

    #[test]
    fn landing_redirects_artists_and_organizers() {
        assert_eq!(
            effective_screen(ScreenId::PublicHome, &signed_in(UserRole::Artist)),
            ScreenId::ArtistDashboard
        );
        assert_eq!(
            effective_screen(ScreenId::PublicHome, &signed_in(UserRole::Organizer)),
            ScreenId::OrganizerDashboard
        );
        assert_eq!(
            effective_screen(ScreenId::PublicHome, &signed_in(UserRole::Public)),
            ScreenId::PublicHome
        );
        assert_eq!(
            effective_screen(ScreenId::PublicHome, &AuthSnapshot::signed_out()),
            ScreenId::PublicHome
        );
    }

    #[test]
    fn loading_holds_regardless_of_role() {
        for role in UserRole::ALL {
            let mut auth = signed_in(role);
            auth.is_loading = true;
            assert_eq!(evaluate(ScreenId::PublicHome, &auth), GuardDecision::Hold);
            assert_eq!(effective_screen(ScreenId::PublicHome, &auth), ScreenId::PublicHome);
        }
    }

    #[test]
    fn failed_auth_shows_landing() {
        let mut auth = signed_in(UserRole::Artist);
        auth.failure = Some("timeout".to_string());
        assert_eq!(effective_screen(ScreenId::PublicHome, &auth), ScreenId::PublicHome);
    }

    #[test]
    fn other_screens_pass_through() {
        for screen in ScreenId::ALL.into_iter().filter(|s| !s.is_landing()) {
            for auth in [
                signed_in(UserRole::Artist),
                signed_in(UserRole::Organizer),
                AuthSnapshot::loading(),
                AuthSnapshot::failed("x"),
            ] {
                assert_eq!(effective_screen(screen, &auth), screen);
            }
        }
    }

    #[test]
    fn guard_is_idempotent() {
        let auth = signed_in(UserRole::Artist);
        let first = effective_screen(ScreenId::PublicHome, &auth);
        for _ in 0..16 {
            assert_eq!(effective_screen(ScreenId::PublicHome, &auth), first);
        }
    }
}
