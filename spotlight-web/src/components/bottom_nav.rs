use spotlight_core::{NavCommand, Tab, UserRole};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Option<Tab>,
    pub role: UserRole,
    pub is_authenticated: bool,
    pub on_navigate: Callback<NavCommand>,
}

const fn icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "🏠",
        Tab::Search => "🔍",
        Tab::Events => "📅",
        Tab::Profile => "👤",
    }
}

#[function_component(BottomNav)]
pub fn bottom_nav(p: &Props) -> Html {
    let tabs = Tab::ALL.into_iter().map(|tab| {
        let command = tab.command(p.role, p.is_authenticated);
        let cb = p.on_navigate.clone();
        let onclick = Callback::from(move |_| cb.emit(command.clone()));
        let current = p.active == Some(tab);
        html! {
            <button
                type="button"
                id={format!("tab-{}", tab.id())}
                class={classes!("tab", current.then_some("tab-active"))}
                aria-current={current.then_some("page")}
                {onclick}
            >
                <span aria-hidden="true">{ icon(tab) }</span>
                <span>{ tab.label() }</span>
            </button>
        }
    });

    html! {
        <nav class="bottom-nav" role="navigation" aria-label="Main">
            { for tabs }
        </nav>
    }
}
