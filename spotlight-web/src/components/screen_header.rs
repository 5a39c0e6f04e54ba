use spotlight_core::NavCommand;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Where the back arrow goes; no arrow when unset.
    #[prop_or_default]
    pub back: Option<NavCommand>,
    pub on_navigate: Callback<NavCommand>,
}

#[function_component(ScreenHeader)]
pub fn screen_header(p: &Props) -> Html {
    let back = p.back.clone().map(|command| {
        let cb = p.on_navigate.clone();
        let onclick = Callback::from(move |_| cb.emit(command.clone()));
        html! {
            <button type="button" class="btn btn-ghost btn-sm" aria-label="Back" {onclick}>
                { "←" }
            </button>
        }
    });

    html! {
        <header class="screen-header" role="banner">
            { for back }
            <div>
                <h1 class="screen-title">{ p.title.clone() }</h1>
                if let Some(subtitle) = p.subtitle.clone() {
                    <p class="screen-subtitle">{ subtitle }</p>
                }
            </div>
        </header>
    }
}
