use spotlight_core::ScreenId;
use yew_router::prelude::*;

/// Browser URLs. Every screen lives under `/s/<screen-id>`; the landing screen
/// is also reachable at `/`.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/s/:id")]
    Screen { id: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn from_screen(screen: ScreenId) -> Self {
        if screen.is_landing() {
            Self::Home
        } else {
            Self::Screen {
                id: screen.as_str().to_string(),
            }
        }
    }

    /// Raw identifier a deep link asks for. Unknown ids are passed through so
    /// the router can apply its landing fallback.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Home => Some(ScreenId::LANDING.as_str()),
            Self::Screen { id } => Some(id.as_str()),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_round_trips_through_its_route() {
        for screen in ScreenId::ALL {
            let route = Route::from_screen(screen);
            let target = route.target().unwrap();
            assert_eq!(ScreenId::resolve(target), screen);
        }
    }

    #[test]
    fn landing_lives_at_root() {
        assert_eq!(Route::from_screen(ScreenId::PublicHome), Route::Home);
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(
            Route::recognize("/s/artist-dashboard"),
            Some(Route::Screen {
                id: "artist-dashboard".to_string()
            })
        );
        assert_eq!(Route::NotFound.target(), None);
    }
}
