use crate::params::{ArtistRef, NavParams};
use crate::role::UserRole;
use crate::router::NavCommand;
use crate::screen::ScreenId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Search,
    Events,
    Profile,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Home, Self::Search, Self::Events, Self::Profile];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::Events => "events",
            Self::Profile => "profile",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Discover",
            Self::Events => "Events",
            Self::Profile => "Profile",
        }
    }

    /// Where a tap on this tab goes for the current session.
    #[must_use]
    pub fn command(self, role: UserRole, is_authenticated: bool) -> NavCommand {
        match self {
            Self::Home => NavCommand::to(ScreenId::PublicHome),
            Self::Search => NavCommand::to(ScreenId::SearchDiscover),
            Self::Events => NavCommand::to(ScreenId::EventsGrid),
            Self::Profile if is_authenticated && role.has_profile() => NavCommand::with(
                ScreenId::ArtistProfile,
                NavParams::new().with_artist(ArtistRef::me()),
            ),
            Self::Profile if is_authenticated && role == UserRole::Admin => {
                NavCommand::to(ScreenId::AdminDashboard)
            }
            Self::Profile => NavCommand::with(
                ScreenId::LoginSignup,
                NavParams::new().with_return_to(ScreenId::PublicHome),
            ),
        }
    }

    /// Tab highlighted while `screen` is shown, if the bar is shown at all.
    #[must_use]
    pub const fn for_screen(screen: ScreenId) -> Option<Self> {
        match screen {
            ScreenId::PublicHome => Some(Self::Home),
            ScreenId::SearchDiscover => Some(Self::Search),
            ScreenId::EventsGrid | ScreenId::EventDetails => Some(Self::Events),
            ScreenId::ArtistProfile | ScreenId::LoginSignup => Some(Self::Profile),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tabs_ignore_session() {
        for role in UserRole::ALL {
            for auth in [false, true] {
                assert_eq!(Tab::Home.command(role, auth), NavCommand::to(ScreenId::PublicHome));
                assert_eq!(
                    Tab::Search.command(role, auth),
                    NavCommand::to(ScreenId::SearchDiscover)
                );
                assert_eq!(Tab::Events.command(role, auth), NavCommand::to(ScreenId::EventsGrid));
            }
        }
    }

    #[test]
    fn profile_tab_depends_on_role() {
        let own_profile = NavCommand::with(
            ScreenId::ArtistProfile,
            NavParams::new().with_artist(ArtistRef::me()),
        );
        let login = NavCommand::with(
            ScreenId::LoginSignup,
            NavParams::new().with_return_to(ScreenId::PublicHome),
        );
        assert_eq!(Tab::Profile.command(UserRole::Artist, true), own_profile);
        assert_eq!(Tab::Profile.command(UserRole::Organizer, true), own_profile);
        assert_eq!(
            Tab::Profile.command(UserRole::Admin, true),
            NavCommand::to(ScreenId::AdminDashboard)
        );
        assert_eq!(Tab::Profile.command(UserRole::Artist, false), login);
        assert_eq!(Tab::Profile.command(UserRole::Public, true), login);
    }

    #[test]
    fn highlight_follows_screen() {
        assert_eq!(Tab::for_screen(ScreenId::PublicHome), Some(Tab::Home));
        assert_eq!(Tab::for_screen(ScreenId::EventDetails), Some(Tab::Events));
        assert_eq!(Tab::for_screen(ScreenId::Payment), None);
        assert_eq!(Tab::Search.label(), "Discover");
        assert_eq!(Tab::Profile.id(), "profile");
    }
}
