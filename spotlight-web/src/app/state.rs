use crate::app::store::RouterStore;
use spotlight_core::{AppUser, ArtistRef, AuthSnapshot, NavCommand, RouterConfig, UserRole};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Rc<RouterConfig>,
    pub store: UseReducerHandle<RouterStore>,
    pub auth: UseStateHandle<AuthSnapshot>,
    pub splash_done: UseStateHandle<bool>,
    pub recent: UseStateHandle<Vec<ArtistRef>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let config = use_memo((), |_| RouterConfig::load_from_static());
    let store = {
        let config = Rc::clone(&config);
        use_reducer(move || RouterStore::new(&config))
    };
    AppState {
        config,
        store,
        auth: use_state(AuthSnapshot::loading),
        splash_done: use_state(|| false),
        recent: use_state(Vec::<ArtistRef>::new),
    }
}

/// Id used for history keys while nobody is signed in.
pub const GUEST_ID: &str = "guest";

impl AppState {
    /// The only way pages mutate navigation.
    #[must_use]
    pub fn navigate(&self) -> Callback<NavCommand> {
        let store = self.store.clone();
        Callback::from(move |command: NavCommand| store.dispatch(command))
    }

    /// Record a chosen role in the router and in the session.
    #[must_use]
    pub fn choose_role(&self) -> Callback<UserRole> {
        let store = self.store.clone();
        let auth = self.auth.clone();
        Callback::from(move |role: UserRole| {
            store.dispatch(NavCommand::SetRole(role));
            let user = auth.user.clone().map_or_else(
                || AppUser {
                    id: GUEST_ID.to_string(),
                    email: String::new(),
                    role,
                },
                |user| AppUser { role, ..user },
            );
            auth.set(AuthSnapshot::signed_in(user));
        })
    }

    /// End the session in both the router and the auth snapshot.
    #[must_use]
    pub fn sign_out(&self) -> Callback<()> {
        let store = self.store.clone();
        let auth = self.auth.clone();
        Callback::from(move |()| {
            store.dispatch(NavCommand::SignOut);
            auth.set(AuthSnapshot::signed_out());
        })
    }

    #[must_use]
    pub fn user_id(&self) -> String {
        user_id_for(&self.auth)
    }
}

#[must_use]
pub fn user_id_for(auth: &AuthSnapshot) -> String {
    auth.user
        .as_ref()
        .map_or_else(|| GUEST_ID.to_string(), |u| u.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guests_share_one_history_key() {
        assert_eq!(user_id_for(&AuthSnapshot::signed_out()), GUEST_ID);
        let user = AppUser {
            id: "u-9".to_string(),
            email: "dj@example.com".to_string(),
            role: UserRole::Artist,
        };
        assert_eq!(user_id_for(&AuthSnapshot::signed_in(user)), "u-9");
    }
}
