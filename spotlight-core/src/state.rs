use crate::params::{MergePolicy, NavParams};
use crate::role::UserRole;
use crate::screen::ScreenId;
use serde::{Deserialize, Serialize};

/// What is on screen right now. Created once at start, mutated only through
/// [`NavigationState::navigate`] and [`NavigationState::set_role`], never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    active: ScreenId,
    params: NavParams,
    is_authenticated: bool,
    #[serde(skip)]
    merge_policy: MergePolicy,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_policy(merge_policy: MergePolicy) -> Self {
        Self {
            merge_policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn active_screen(&self) -> ScreenId {
        self.active
    }

    #[must_use]
    pub const fn params(&self) -> &NavParams {
        &self.params
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub const fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    /// Role chosen in this session, `public` until one is set.
    #[must_use]
    pub fn user_role(&self) -> UserRole {
        self.params.user_role.unwrap_or_default()
    }

    /// Switch the active screen and fold `params` into the stored bag.
    pub fn navigate(&mut self, target: ScreenId, params: NavParams) {
        match self.merge_policy {
            MergePolicy::Accumulate => {
                let stale = self.params.carried_over(&params);
                if !stale.is_empty() {
                    log::debug!(
                        "navigate {} -> {target}: carrying over {}",
                        self.active,
                        stale.join(", ")
                    );
                }
                self.params.merge(params);
            }
            MergePolicy::Reset => {
                // The session role survives a reset, it is not a screen parameter.
                let role = self.params.user_role;
                self.params = params;
                if self.params.user_role.is_none() {
                    self.params.user_role = role;
                }
            }
        }
        log::debug!("navigate {} -> {target}", self.active);
        self.active = target;
    }

    /// Record the role picked during onboarding and mark the session signed in.
    pub fn set_role(&mut self, role: UserRole) {
        log::debug!("session role set to {role}");
        self.params.user_role = Some(role);
        self.is_authenticated = true;
    }

    /// Drop the session: role, params and screen go back to a fresh start.
    pub fn sign_out(&mut self) {
        log::debug!("session signed out on {}", self.active);
        *self = Self::with_policy(self.merge_policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ArtistRef;
    use serde_json::json;

    #[test]
    fn starts_on_landing_with_empty_params() {
        let state = NavigationState::new();
        assert_eq!(state.active_screen(), ScreenId::PublicHome);
        assert!(state.params().is_empty());
        assert!(!state.is_authenticated());
        assert_eq!(state.user_role(), UserRole::Public);
    }

    #[test]
    fn navigate_accumulates_params() {
        let mut state = NavigationState::new();
        state.navigate(
            ScreenId::SearchDiscover,
            NavParams::new().with_extra("x", json!(1)),
        );
        state.navigate(
            ScreenId::EventsGrid,
            NavParams::new().with_extra("y", json!(2)),
        );
        assert_eq!(state.active_screen(), ScreenId::EventsGrid);
        assert_eq!(state.params().extra.get("x"), Some(&json!(1)));
        assert_eq!(state.params().extra.get("y"), Some(&json!(2)));
    }

    #[test]
    fn stale_artist_survives_unrelated_navigation() {
        let mut state = NavigationState::new();
        state.navigate(
            ScreenId::ArtistProfile,
            NavParams::new().with_artist(ArtistRef::new("a-7")),
        );
        state.navigate(ScreenId::AdminDashboard, NavParams::new());
        assert_eq!(
            state.params().selected_artist.as_ref().map(|a| a.id.as_str()),
            Some("a-7")
        );
    }

    #[test]
    fn reset_policy_drops_old_keys_but_keeps_role() {
        let mut state = NavigationState::with_policy(MergePolicy::Reset);
        state.set_role(UserRole::Organizer);
        state.navigate(
            ScreenId::ArtistProfile,
            NavParams::new().with_artist(ArtistRef::new("a-7")),
        );
        state.navigate(ScreenId::Messaging, NavParams::new());
        assert!(state.params().selected_artist.is_none());
        assert_eq!(state.user_role(), UserRole::Organizer);
        assert_eq!(state.merge_policy(), MergePolicy::Reset);
    }

    #[test]
    fn set_role_authenticates() {
        let mut state = NavigationState::new();
        state.set_role(UserRole::Artist);
        assert!(state.is_authenticated());
        assert_eq!(state.user_role(), UserRole::Artist);
        assert_eq!(state.active_screen(), ScreenId::PublicHome);
    }
}
