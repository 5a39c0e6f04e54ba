use crate::components::{empty_state::EmptyState, screen_header::ScreenHeader};
use spotlight_core::{ArtistRef, FormMode, NavCommand, NavParams, ScreenId, UserRole};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct NavOnlyProps {
    pub on_navigate: Callback<NavCommand>,
}

fn go(on_navigate: &Callback<NavCommand>, command: NavCommand) -> Callback<MouseEvent> {
    let cb = on_navigate.clone();
    Callback::from(move |_| cb.emit(command.clone()))
}

fn to_dashboard() -> NavCommand {
    NavCommand::to(ScreenId::ArtistDashboard)
}

#[function_component(ArtistDashboardPage)]
pub fn artist_dashboard_page(props: &NavOnlyProps) -> Html {
    let nav = &props.on_navigate;
    let actions = [
        (ScreenId::UploadVideo, "Upload Video"),
        (ScreenId::ManageAvailability, "Availability"),
        (ScreenId::SubmitToContest, "Enter Contest"),
        (ScreenId::PurchaseBoost, "Boost Profile"),
    ]
    .into_iter()
    .map(|(screen, label)| {
        html! {
            <button type="button" class="btn action" onclick={go(nav, NavCommand::to(screen))}>{ label }</button>
        }
    });

    html! {
        <section class="artist-dashboard">
            <ScreenHeader title="Dashboard" on_navigate={nav.clone()} />
            <button
                type="button"
                class="card profile-card"
                onclick={go(nav, NavCommand::with(
                    ScreenId::ArtistProfile,
                    NavParams::new().with_artist(ArtistRef::me()),
                ))}
            >
                { "View my profile" }
            </button>
            <h2>{ "Quick Actions" }</h2>
            <div class="actions">{ for actions }</div>
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ArtistProfilePageProps {
    pub on_navigate: Callback<NavCommand>,
    pub artist: Option<ArtistRef>,
    pub viewer: UserRole,
}

/// Back arrow target: members go home to their dashboard from their own
/// profile, everyone else returns to search.
#[must_use]
pub fn profile_back(artist: Option<&ArtistRef>, viewer: UserRole) -> NavCommand {
    match artist {
        Some(a) if a.is_self() && viewer == UserRole::Organizer => {
            NavCommand::to(ScreenId::OrganizerDashboard)
        }
        Some(a) if a.is_self() => to_dashboard(),
        _ => NavCommand::to(ScreenId::SearchDiscover),
    }
}

#[function_component(ArtistProfilePage)]
pub fn artist_profile_page(props: &ArtistProfilePageProps) -> Html {
    let nav = &props.on_navigate;
    let back = profile_back(props.artist.as_ref(), props.viewer);

    let Some(artist) = props.artist.clone() else {
        return html! {
            <section class="artist-profile">
                <ScreenHeader title="Artist" back={back.clone()} on_navigate={nav.clone()} />
                <EmptyState
                    title="Artist not found"
                    message="Pick an artist from search to see their profile."
                    action_label={AttrValue::from("Search artists")}
                    action={back}
                    on_navigate={nav.clone()}
                />
            </section>
        };
    };

    let actions = if artist.is_self() {
        let edit = NavCommand::with(
            ScreenId::EditProfile,
            NavParams::new()
                .with_mode(FormMode::Edit)
                .with_return_to(ScreenId::ArtistProfile),
        );
        html! { <button type="button" class="btn" onclick={go(nav, edit)}>{ "Edit Profile" }</button> }
    } else {
        let book = NavCommand::with(
            ScreenId::RequestBooking,
            NavParams::new().with_artist(artist.clone()),
        );
        let message = NavCommand::with(
            ScreenId::Messaging,
            NavParams::new().with_artist(artist.clone()),
        );
        html! {
            <div class="actions">
                <button type="button" class="btn btn-primary" onclick={go(nav, book)}>{ "Request Booking" }</button>
                <button type="button" class="btn btn-outline" onclick={go(nav, message)}>{ "Message" }</button>
            </div>
        }
    };
    let name = if artist.is_self() && artist.name.is_none() {
        "My Profile".to_string()
    } else {
        artist.display_name().to_string()
    };

    html! {
        <section class="artist-profile">
            <ScreenHeader title={name} {back} on_navigate={nav.clone()} />
            if let Some(genre) = artist.genre.clone() {
                <p class="genre">{ genre }</p>
            }
            if let Some(location) = artist.location.clone() {
                <p class="location">{ location }</p>
            }
            if artist.is_boosted {
                <span class="badge badge-warning">{ "Featured" }</span>
            }
            if artist.is_available {
                <span class="badge badge-success">{ "Available" }</span>
            }
            { actions }
        </section>
    }
}

#[function_component(UploadVideoPage)]
pub fn upload_video_page(props: &NavOnlyProps) -> Html {
    let nav = &props.on_navigate;
    html! {
        <section class="upload-video">
            <ScreenHeader title="Upload Video" back={to_dashboard()} on_navigate={nav.clone()} />
            <label for="video-title">{ "Title" }</label>
            <input id="video-title" type="text" />
            <label for="video-file">{ "Video file" }</label>
            <input id="video-file" type="file" accept="video/*" />
            <div class="actions">
                <button type="button" class="btn btn-outline" onclick={go(nav, to_dashboard())}>{ "Cancel" }</button>
                <button type="button" class="btn btn-primary" onclick={go(nav, to_dashboard())}>{ "Upload" }</button>
            </div>
        </section>
    }
}

#[function_component(ManageAvailabilityPage)]
pub fn manage_availability_page(props: &NavOnlyProps) -> Html {
    let nav = &props.on_navigate;
    html! {
        <section class="manage-availability">
            <ScreenHeader title="Availability" back={to_dashboard()} on_navigate={nav.clone()} />
            <p class="hint">{ "Select the dates you are open for bookings." }</p>
            <div class="actions">
                <button type="button" class="btn btn-outline" onclick={go(nav, to_dashboard())}>{ "Cancel" }</button>
                <button type="button" class="btn btn-primary" onclick={go(nav, to_dashboard())}>{ "Save Changes" }</button>
            </div>
        </section>
    }
}

#[function_component(SubmitToContestPage)]
pub fn submit_to_contest_page(props: &NavOnlyProps) -> Html {
    let nav = &props.on_navigate;
    html! {
        <section class="submit-to-contest">
            <ScreenHeader title="Contests" back={to_dashboard()} on_navigate={nav.clone()} />
            <p class="hint">{ "Submit one of your videos to an open contest." }</p>
            <button type="button" class="btn btn-primary" onclick={go(nav, to_dashboard())}>{ "Submit Entry" }</button>
        </section>
    }
}

const BOOST_PLANS: [(&str, &str); 3] = [
    ("24 Hours", "$4.99"),
    ("7 Days", "$19.99"),
    ("30 Days", "$49.99"),
];

#[function_component(PurchaseBoostPage)]
pub fn purchase_boost_page(props: &NavOnlyProps) -> Html {
    let nav = &props.on_navigate;
    let plans = BOOST_PLANS.into_iter().map(|(length, price)| {
        html! {
            <li class="plan">
                <span>{ length }</span>
                <strong>{ price }</strong>
                <button type="button" class="btn" onclick={go(nav, NavCommand::to(ScreenId::Payment))}>{ "Select" }</button>
            </li>
        }
    });
    html! {
        <section class="purchase-boost">
            <ScreenHeader title="Boost Profile" back={to_dashboard()} on_navigate={nav.clone()} />
            <ul class="plans">{ for plans }</ul>
        </section>
    }
}

#[function_component(PaymentPage)]
pub fn payment_page(props: &NavOnlyProps) -> Html {
    let nav = &props.on_navigate;
    html! {
        <section class="payment">
            <ScreenHeader title="Payment" back={NavCommand::to(ScreenId::PurchaseBoost)} on_navigate={nav.clone()} />
            <label for="card-number">{ "Card number" }</label>
            <input id="card-number" type="text" inputmode="numeric" autocomplete="cc-number" />
            <button type="button" class="btn btn-primary" onclick={go(nav, to_dashboard())}>{ "Pay Now" }</button>
        </section>
    }
}
