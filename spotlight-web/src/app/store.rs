use spotlight_core::{NavCommand, Router, RouterConfig};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper so the root component is the only owner of the [`Router`].
/// Every navigation from a page arrives here as a dispatched [`NavCommand`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouterStore {
    pub router: Router,
}

impl RouterStore {
    #[must_use]
    pub fn new(config: &RouterConfig) -> Self {
        Self {
            router: Router::new(config),
        }
    }
}

impl Reducible for RouterStore {
    type Action = NavCommand;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.router.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotlight_core::{ArtistRef, NavParams, ScreenId, Tab, UserRole};

    #[test]
    fn reduce_applies_commands_in_order() {
        let store = Rc::new(RouterStore::default());
        let store = store.reduce(NavCommand::to(ScreenId::SearchDiscover));
        let store = store.reduce(NavCommand::with(
            ScreenId::ArtistProfile,
            NavParams::new().with_artist(ArtistRef::new("a-7")),
        ));
        let store = store.reduce(NavCommand::SetRole(UserRole::Organizer));

        let state = store.router.state();
        assert_eq!(state.active_screen(), ScreenId::ArtistProfile);
        assert_eq!(state.user_role(), UserRole::Organizer);
        assert!(state.is_authenticated());
    }

    #[test]
    fn reduce_leaves_previous_snapshot_untouched() {
        let before = Rc::new(RouterStore::default());
        let after = Rc::clone(&before).reduce(NavCommand::raw("messaging"));
        assert_eq!(before.router.active_screen(), ScreenId::PublicHome);
        assert_eq!(after.router.active_screen(), ScreenId::Messaging);
    }

    #[test]
    fn sign_out_drops_role_and_lands_home() {
        let store = Rc::new(RouterStore::default())
            .reduce(NavCommand::SetRole(UserRole::Admin))
            .reduce(NavCommand::to(ScreenId::AdminDashboard))
            .reduce(NavCommand::SignOut);

        let state = store.router.state();
        assert_eq!(state.active_screen(), ScreenId::PublicHome);
        assert_eq!(state.user_role(), UserRole::Public);
        assert!(!state.is_authenticated());
        assert_eq!(
            Tab::Profile.command(state.user_role(), state.is_authenticated()),
            NavCommand::with(
                ScreenId::LoginSignup,
                NavParams::new().with_return_to(ScreenId::PublicHome),
            )
        );
    }
}
