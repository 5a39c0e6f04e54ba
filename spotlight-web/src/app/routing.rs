#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
use crate::router::Route;
use spotlight_core::{NavCommand, ScreenId};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// URL to push after the stored screen changed, if the bar is out of date.
#[must_use]
pub fn next_route_for_screen(screen: ScreenId, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_screen(screen);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

/// Command for a URL the user typed or followed. Deep links are external
/// strings, so they go through the raw path and fall back to the landing screen.
#[must_use]
pub fn next_command_for_route(active: ScreenId, route: Option<&Route>) -> Option<NavCommand> {
    let target = route?.target()?;
    if ScreenId::resolve(target) == active {
        return None;
    }
    Some(NavCommand::raw(target))
}

/// Mirror the stored screen into the address bar. Waits for the splash so a
/// deep link is applied before the landing screen can overwrite it.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_screen(
    app_state: &AppState,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let active = app_state.store.router.active_screen();
    let ready = *app_state.splash_done;
    use_effect_with((active, ready, active_route), move |(active, ready, current)| {
        if !*ready {
            return;
        }
        if let (Some(nav), Some(new_route)) =
            (navigator.as_ref(), next_route_for_screen(*active, current.as_ref()))
        {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_screen_with_route(app_state: &AppState, route: Option<Route>) {
    let store = app_state.store.clone();
    use_effect_with(route, move |route| {
        if let Some(command) = next_command_for_route(store.router.active_screen(), route.as_ref()) {
            log::debug!("deep link {route:?}");
            store.dispatch(command);
        }
    });
}
