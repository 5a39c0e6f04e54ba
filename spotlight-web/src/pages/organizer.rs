use crate::components::{empty_state::EmptyState, screen_header::ScreenHeader};
use spotlight_core::{ArtistRef, EventRef, FormMode, NavCommand, NavParams, ScreenId};
use yew::prelude::*;

fn go(on_navigate: &Callback<NavCommand>, command: NavCommand) -> Callback<MouseEvent> {
    let cb = on_navigate.clone();
    Callback::from(move |_| cb.emit(command.clone()))
}

fn to_dashboard() -> NavCommand {
    NavCommand::to(ScreenId::OrganizerDashboard)
}

#[derive(Properties, Clone, PartialEq)]
pub struct OrganizerDashboardPageProps {
    pub on_navigate: Callback<NavCommand>,
}

#[function_component(OrganizerDashboardPage)]
pub fn organizer_dashboard_page(props: &OrganizerDashboardPageProps) -> Html {
    let nav = &props.on_navigate;
    html! {
        <section class="organizer-dashboard">
            <ScreenHeader title="Dashboard" subtitle={AttrValue::from("Welcome back!")} on_navigate={nav.clone()} />
            <button type="button" class="card" onclick={go(nav, NavCommand::to(ScreenId::SearchDiscover))}>
                { "Find artists" }
            </button>
            <button
                type="button"
                class="card"
                onclick={go(nav, NavCommand::with(
                    ScreenId::CreateEvent,
                    NavParams::new().with_mode(FormMode::Create),
                ))}
            >
                { "Create event" }
            </button>
            <h2>{ "Booking Requests" }</h2>
            <p class="hint">{ "No booking requests yet." }</p>
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct CreateEventPageProps {
    pub on_navigate: Callback<NavCommand>,
    pub mode: FormMode,
    pub event: Option<EventRef>,
}

#[function_component(CreateEventPage)]
pub fn create_event_page(props: &CreateEventPageProps) -> Html {
    let nav = &props.on_navigate;
    let editing = props.mode == FormMode::Edit;
    let title = if editing { "Edit Event" } else { "Create Event" };
    let existing = props.event.clone().unwrap_or_default();
    let onsubmit = {
        let cb = nav.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(to_dashboard());
        })
    };

    html! {
        <section class="create-event">
            <ScreenHeader title={title} back={to_dashboard()} on_navigate={nav.clone()} />
            if editing && props.event.is_none() {
                <p class="form-error" role="alert">{ "No event selected; saving will create a new one." }</p>
            }
            <form {onsubmit}>
                <label for="event-title">{ "Event title" }</label>
                <input id="event-title" type="text" value={existing.title.unwrap_or_default()} />
                <label for="event-venue">{ "Venue" }</label>
                <input id="event-venue" type="text" value={existing.venue.unwrap_or_default()} />
                <label for="event-date">{ "Date" }</label>
                <input id="event-date" type="datetime-local" value={existing.starts_at.unwrap_or_default()} />
                <button type="submit" class="btn btn-primary">{ if editing { "Save Changes" } else { "Publish Event" } }</button>
            </form>
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ArtistPayloadProps {
    pub on_navigate: Callback<NavCommand>,
    pub artist: Option<ArtistRef>,
}

fn missing_artist(nav: &Callback<NavCommand>, title: &'static str) -> Html {
    html! {
        <section class="missing-artist">
            <ScreenHeader title={title} back={to_dashboard()} on_navigate={nav.clone()} />
            <EmptyState
                title="No artist selected"
                message="Choose an artist first."
                action_label={AttrValue::from("Find artists")}
                action={NavCommand::to(ScreenId::SearchDiscover)}
                on_navigate={nav.clone()}
            />
        </section>
    }
}

#[function_component(RequestBookingPage)]
pub fn request_booking_page(props: &ArtistPayloadProps) -> Html {
    let nav = &props.on_navigate;
    let Some(artist) = props.artist.clone() else {
        return missing_artist(nav, "Request Booking");
    };
    let back = NavCommand::with(
        ScreenId::ArtistProfile,
        NavParams::new().with_artist(artist.clone()),
    );
    let onsubmit = {
        let cb = nav.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(to_dashboard());
        })
    };

    html! {
        <section class="request-booking">
            <ScreenHeader
                title="Request Booking"
                subtitle={AttrValue::from(artist.display_name().to_string())}
                back={back.clone()}
                on_navigate={nav.clone()}
            />
            <form {onsubmit}>
                <label for="booking-date">{ "Date" }</label>
                <input id="booking-date" type="date" />
                <label for="booking-notes">{ "Details" }</label>
                <textarea id="booking-notes" rows="4" />
                <div class="actions">
                    <button type="button" class="btn btn-outline" onclick={go(nav, back)}>{ "Cancel" }</button>
                    <button type="submit" class="btn btn-primary">{ "Send Request" }</button>
                </div>
            </form>
        </section>
    }
}

#[function_component(MessagingPage)]
pub fn messaging_page(props: &ArtistPayloadProps) -> Html {
    let nav = &props.on_navigate;
    let Some(artist) = props.artist.clone() else {
        return missing_artist(nav, "Messages");
    };
    html! {
        <section class="messaging">
            <ScreenHeader
                title={artist.display_name().to_string()}
                back={to_dashboard()}
                on_navigate={nav.clone()}
            />
            <p class="hint">{ "Start the conversation." }</p>
            <form class="composer" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <label for="message-input" class="sr-only">{ "Message" }</label>
                <input id="message-input" type="text" placeholder="Type a message" />
                <button type="submit" class="btn btn-primary">{ "Send" }</button>
            </form>
        </section>
    }
}
