use crate::config::RouterConfig;
use crate::guard;
use crate::params::NavParams;
use crate::registry::{self, ScreenView};
use crate::role::{AuthSnapshot, UserRole};
use crate::screen::ScreenId;
use crate::state::NavigationState;

/// A request to change navigation state. Screens never touch the state
/// directly; they send one of these to whoever owns the [`Router`].
#[derive(Clone, Debug, PartialEq)]
pub enum NavCommand {
    Navigate { target: ScreenId, params: NavParams },
    /// Target given as a string from outside the app, e.g. a deep link.
    NavigateRaw { target: String, params: NavParams },
    SetRole(UserRole),
    /// End the session and return to the landing screen with an empty bag.
    SignOut,
}

impl NavCommand {
    #[must_use]
    pub fn to(target: ScreenId) -> Self {
        Self::Navigate {
            target,
            params: NavParams::new(),
        }
    }

    #[must_use]
    pub const fn with(target: ScreenId, params: NavParams) -> Self {
        Self::Navigate { target, params }
    }

    #[must_use]
    pub fn raw(target: impl Into<String>) -> Self {
        Self::NavigateRaw {
            target: target.into(),
            params: NavParams::new(),
        }
    }
}

/// Sole owner of the navigation state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Router {
    state: NavigationState,
}

impl Router {
    #[must_use]
    pub fn new(config: &RouterConfig) -> Self {
        Self {
            state: NavigationState::with_policy(config.merge_policy),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub const fn active_screen(&self) -> ScreenId {
        self.state.active_screen()
    }

    #[must_use]
    pub const fn params(&self) -> &NavParams {
        self.state.params()
    }

    pub fn navigate(&mut self, target: ScreenId, params: NavParams) {
        self.state.navigate(target, params);
    }

    pub fn navigate_raw(&mut self, target: &str, params: NavParams) {
        self.state.navigate(ScreenId::resolve(target), params);
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.state.set_role(role);
    }

    pub fn sign_out(&mut self) {
        self.state.sign_out();
    }

    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::Navigate { target, params } => self.navigate(target, params),
            NavCommand::NavigateRaw { target, params } => self.navigate_raw(&target, params),
            NavCommand::SetRole(role) => self.set_role(role),
            NavCommand::SignOut => self.sign_out(),
        }
    }

    #[must_use]
    pub fn effective_screen(&self, auth: &AuthSnapshot) -> ScreenId {
        guard::effective_screen(self.state.active_screen(), auth)
    }

    /// Guard, then registry: the view the shell should mount right now.
    #[must_use]
    pub fn view(&self, auth: &AuthSnapshot) -> ScreenView {
        registry::render(self.effective_screen(auth), self.state.params())
    }
}
