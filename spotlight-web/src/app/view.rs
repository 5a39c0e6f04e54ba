use crate::app::state::AppState;
use crate::components::bottom_nav::BottomNav;
use crate::pages::{PageContext, ScreenOutlet, splash::SplashPage};
use spotlight_core::{ArtistRef, NavCommand, NavParams, ScreenId, Tab};
use yew::prelude::*;

fn page_context(state: &AppState) -> PageContext {
    let on_navigate = state.navigate();

    let on_open_artist = {
        let recent = state.recent.clone();
        let config = state.config.clone();
        let user_id = state.user_id();
        let on_navigate = on_navigate.clone();
        Callback::from(move |artist: ArtistRef| {
            recent.set(crate::storage::remember_artist(&config, &user_id, artist.clone()));
            on_navigate.emit(NavCommand::with(
                ScreenId::ArtistProfile,
                NavParams::new().with_artist(artist),
            ));
        })
    };
    let on_forget_artist = {
        let recent = state.recent.clone();
        let config = state.config.clone();
        let user_id = state.user_id();
        Callback::from(move |artist_id: String| {
            recent.set(crate::storage::forget_artist(&config, &user_id, &artist_id));
        })
    };
    let on_clear_recent = {
        let recent = state.recent.clone();
        let config = state.config.clone();
        let user_id = state.user_id();
        Callback::from(move |()| {
            crate::storage::clear_recent(&config, &user_id);
            recent.set(Vec::new());
        })
    };

    PageContext {
        on_navigate,
        on_choose_role: state.choose_role(),
        on_sign_out: state.sign_out(),
        on_open_artist,
        on_forget_artist,
        on_clear_recent,
        recent: (*state.recent).clone(),
        search_min_chars: state.config.search_min_chars,
        search_result_limit: state.config.search_result_limit,
    }
}

/// Tab bar props for `screen`, or `None` when its area runs full screen.
#[must_use]
pub fn tab_bar_for(screen: ScreenId) -> Option<Option<Tab>> {
    screen.shows_tab_bar().then(|| Tab::for_screen(screen))
}

/// Splash until the timer fires, then the guarded screen and, outside the
/// account and admin areas, the tab bar.
#[must_use]
pub fn render_app(state: &AppState) -> Html {
    if !*state.splash_done {
        return html! { <SplashPage /> };
    }

    let router = &state.store.router;
    let view = router.view(&state.auth);
    let screen = view.screen();
    let ctx = page_context(state);
    let tab_bar = tab_bar_for(screen).map(|active| {
        html! {
            <BottomNav
                active={active}
                role={router.state().user_role()}
                is_authenticated={router.state().is_authenticated()}
                on_navigate={ctx.on_navigate.clone()}
            />
        }
    });

    html! {
        <>
            <main id="main" role="main" data-area={screen.area().as_str()}>
                <ScreenOutlet view={view} ctx={ctx} />
            </main>
            { for tab_bar }
        </>
    }
}
