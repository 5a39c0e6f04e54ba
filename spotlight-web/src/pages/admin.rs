use crate::components::screen_header::ScreenHeader;
use spotlight_core::{NavCommand, ScreenId};
use yew::prelude::*;

const TOOLS: [ScreenId; 5] = [
    ScreenId::ModerateContent,
    ScreenId::ApproveBoost,
    ScreenId::ManageProfiles,
    ScreenId::ManageContests,
    ScreenId::ManageLiveEvents,
];

/// Title and one-line description of an admin tool screen.
#[must_use]
pub const fn tool_copy(screen: ScreenId) -> (&'static str, &'static str) {
    match screen {
        ScreenId::ModerateContent => ("Moderate Content", "Review flagged videos"),
        ScreenId::ApproveBoost => ("Approve Boosts", "Pending paid promotions"),
        ScreenId::ManageProfiles => ("Manage Profiles", "Verify and suspend accounts"),
        ScreenId::ManageContests => ("Manage Contests", "Open, close and judge contests"),
        ScreenId::ManageLiveEvents => ("Manage Live Events", "Oversee scheduled events"),
        _ => ("Admin", ""),
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AdminDashboardPageProps {
    pub on_navigate: Callback<NavCommand>,
    pub on_sign_out: Callback<()>,
}

#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page(props: &AdminDashboardPageProps) -> Html {
    let tools = TOOLS.into_iter().map(|screen| {
        let (title, blurb) = tool_copy(screen);
        let cb = props.on_navigate.clone();
        let onclick = Callback::from(move |_| cb.emit(NavCommand::to(screen)));
        html! {
            <button type="button" class="card action-card" {onclick}>
                <strong>{ title }</strong>
                <span>{ blurb }</span>
            </button>
        }
    });
    let sign_out = props.on_sign_out.reform(|_: MouseEvent| ());

    html! {
        <section class="admin-dashboard">
            <ScreenHeader title="Admin Dashboard" on_navigate={props.on_navigate.clone()} />
            <button type="button" id="sign-out" class="btn btn-outline btn-sm" onclick={sign_out}>{ "Sign Out" }</button>
            <h2>{ "Quick Actions" }</h2>
            <div class="tools">{ for tools }</div>
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AdminToolPageProps {
    pub on_navigate: Callback<NavCommand>,
    pub screen: ScreenId,
}

#[function_component(AdminToolPage)]
pub fn admin_tool_page(props: &AdminToolPageProps) -> Html {
    let (title, blurb) = tool_copy(props.screen);
    html! {
        <section class="admin-tool">
            <ScreenHeader
                title={title}
                subtitle={AttrValue::from(blurb)}
                back={NavCommand::to(ScreenId::AdminDashboard)}
                on_navigate={props.on_navigate.clone()}
            />
            <p class="hint">{ "Nothing waiting for review." }</p>
        </section>
    }
}
