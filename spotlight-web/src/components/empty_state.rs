use spotlight_core::NavCommand;
use yew::prelude::*;

/// Shown when a screen opens without the payload it needs.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub action_label: Option<AttrValue>,
    #[prop_or_default]
    pub action: Option<NavCommand>,
    pub on_navigate: Callback<NavCommand>,
}

#[function_component(EmptyState)]
pub fn empty_state(p: &Props) -> Html {
    let action = p.action.clone().map(|command| {
        let cb = p.on_navigate.clone();
        let label = p.action_label.clone().unwrap_or_else(|| AttrValue::from("Go back"));
        let onclick = Callback::from(move |_| cb.emit(command.clone()));
        html! { <button type="button" class="btn btn-primary" {onclick}>{ label }</button> }
    });

    html! {
        <section class="empty-state" aria-live="polite">
            <h2>{ p.title.clone() }</h2>
            <p>{ p.message.clone() }</p>
            { for action }
        </section>
    }
}
