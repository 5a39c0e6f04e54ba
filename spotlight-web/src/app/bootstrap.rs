#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
use spotlight_core::RouterConfig;
#[cfg(target_arch = "wasm32")]
use spotlight_core::AuthSnapshot;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Splash duration in the form the browser timer takes.
#[must_use]
pub fn splash_delay_ms(config: &RouterConfig) -> i32 {
    i32::try_from(config.splash_ms).unwrap_or(i32::MAX)
}

/// Hold the splash for the configured time, then settle the session. The
/// shell has no identity backend of its own, so a session that is still
/// loading once the splash ends is treated as signed out.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let splash_done = app_state.splash_done.clone();
    let auth = app_state.auth.clone();
    let delay = splash_delay_ms(&app_state.config);
    use_effect_with((), move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = crate::dom::sleep_ms(delay).await {
                log::warn!(
                    "splash timer failed: {}",
                    crate::dom::js_error_message(&err)
                );
            }
            if auth.is_loading {
                auth.set(AuthSnapshot::signed_out());
            }
            splash_done.set(true);
        });
    });
}

/// Reload the recent-search list whenever the signed-in user changes.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_recent_searches(app_state: &AppState) {
    let recent = app_state.recent.clone();
    let config = app_state.config.clone();
    use_effect_with(app_state.user_id(), move |user_id| {
        recent.set(crate::storage::load_recent(&config, user_id));
    });
}
