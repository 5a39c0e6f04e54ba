use yew::prelude::*;

#[function_component(SplashPage)]
pub fn splash_page() -> Html {
    html! {
        <section class="splash" aria-busy="true" aria-live="polite">
            <div class="splash-logo" aria-hidden="true">{ "🎤" }</div>
            <h1 class="splash-title">{ "Spotlight" }</h1>
            <p class="splash-tagline">{ "Book the talent. Own the night." }</p>
            <progress class="progress w-56" aria-label="Loading" />
        </section>
    }
}
