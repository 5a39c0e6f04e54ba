//! One page component per screen, plus [`render_screen`], the exhaustive
//! mapping from a [`ScreenView`] to its page.

pub mod account;
pub mod admin;
pub mod artist;
pub mod organizer;
pub mod public;
pub mod splash;

use spotlight_core::{ArtistRef, NavCommand, ScreenView, UserRole};
use yew::prelude::*;

/// Callbacks and shared data handed to every page.
#[derive(Clone, PartialEq)]
pub struct PageContext {
    pub on_navigate: Callback<NavCommand>,
    pub on_choose_role: Callback<UserRole>,
    pub on_sign_out: Callback<()>,
    pub on_open_artist: Callback<ArtistRef>,
    pub on_forget_artist: Callback<String>,
    pub on_clear_recent: Callback<()>,
    pub recent: Vec<ArtistRef>,
    pub search_min_chars: usize,
    pub search_result_limit: usize,
}

impl PageContext {
    /// Context with only navigation wired up; the rest are no-ops.
    #[must_use]
    pub fn with_navigate(on_navigate: Callback<NavCommand>) -> Self {
        Self {
            on_navigate,
            on_choose_role: Callback::noop(),
            on_sign_out: Callback::noop(),
            on_open_artist: Callback::noop(),
            on_forget_artist: Callback::noop(),
            on_clear_recent: Callback::noop(),
            recent: Vec::new(),
            search_min_chars: 3,
            search_result_limit: 20,
        }
    }
}

#[must_use]
pub fn render_screen(view: &ScreenView, ctx: &PageContext) -> Html {
    let nav = ctx.on_navigate.clone();
    match view.clone() {
        ScreenView::PublicHome => html! {
            <public::PublicHomePage on_navigate={nav} on_open_artist={ctx.on_open_artist.clone()} />
        },
        ScreenView::SearchDiscover => html! {
            <public::SearchDiscoverPage
                on_navigate={nav}
                on_open_artist={ctx.on_open_artist.clone()}
                on_forget_artist={ctx.on_forget_artist.clone()}
                on_clear_recent={ctx.on_clear_recent.clone()}
                recent={ctx.recent.clone()}
                min_chars={ctx.search_min_chars}
                result_limit={ctx.search_result_limit}
            />
        },
        ScreenView::EventDetails { event, event_id } => html! {
            <public::EventDetailsPage on_navigate={nav} {event} {event_id} />
        },
        ScreenView::EventsGrid => html! { <public::EventsGridPage on_navigate={nav} /> },
        ScreenView::LoginSignup { return_to } => html! {
            <account::LoginSignupPage on_navigate={nav} {return_to} />
        },
        ScreenView::RoleSelection => html! {
            <account::RoleSelectionPage on_navigate={nav} on_choose_role={ctx.on_choose_role.clone()} />
        },
        ScreenView::ProfileSetup { role, mode, return_to } => html! {
            <account::ProfileFormPage on_navigate={nav} {role} {mode} {return_to} />
        },
        ScreenView::EditProfile { role, return_to } => html! {
            <account::ProfileFormPage
                on_navigate={nav}
                {role}
                mode={spotlight_core::FormMode::Edit}
                {return_to}
            />
        },
        ScreenView::ArtistDashboard => html! { <artist::ArtistDashboardPage on_navigate={nav} /> },
        ScreenView::ArtistProfile { artist, viewer } => html! {
            <artist::ArtistProfilePage on_navigate={nav} {artist} {viewer} />
        },
        ScreenView::UploadVideo => html! { <artist::UploadVideoPage on_navigate={nav} /> },
        ScreenView::ManageAvailability => html! {
            <artist::ManageAvailabilityPage on_navigate={nav} />
        },
        ScreenView::SubmitToContest => html! { <artist::SubmitToContestPage on_navigate={nav} /> },
        ScreenView::PurchaseBoost => html! { <artist::PurchaseBoostPage on_navigate={nav} /> },
        ScreenView::Payment => html! { <artist::PaymentPage on_navigate={nav} /> },
        ScreenView::OrganizerDashboard => html! {
            <organizer::OrganizerDashboardPage on_navigate={nav} />
        },
        ScreenView::CreateEvent { mode, event } => html! {
            <organizer::CreateEventPage on_navigate={nav} {mode} {event} />
        },
        ScreenView::RequestBooking { artist } => html! {
            <organizer::RequestBookingPage on_navigate={nav} {artist} />
        },
        ScreenView::Messaging { artist } => html! {
            <organizer::MessagingPage on_navigate={nav} {artist} />
        },
        ScreenView::AdminDashboard => html! { <admin::AdminDashboardPage on_navigate={nav} on_sign_out={ctx.on_sign_out.clone()} /> },
        ScreenView::ModerateContent
        | ScreenView::ApproveBoost
        | ScreenView::ManageContests
        | ScreenView::ManageLiveEvents
        | ScreenView::ManageProfiles => html! {
            <admin::AdminToolPage on_navigate={nav} screen={view.screen()} />
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ScreenOutletProps {
    pub view: ScreenView,
    pub ctx: PageContext,
}

/// Mounts the page for `view`.
#[function_component(ScreenOutlet)]
pub fn screen_outlet(props: &ScreenOutletProps) -> Html {
    html! {
        <div class="screen" data-screen={props.view.screen().as_str()}>
            { render_screen(&props.view, &props.ctx) }
        </div>
    }
}
