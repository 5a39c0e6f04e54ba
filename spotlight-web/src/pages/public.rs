use crate::components::{empty_state::EmptyState, screen_header::ScreenHeader};
use spotlight_core::{ArtistRef, EventRef, NavCommand, NavParams, ScreenId, sanitize_query};
use yew::prelude::*;

fn go(on_navigate: &Callback<NavCommand>, command: NavCommand) -> Callback<MouseEvent> {
    let cb = on_navigate.clone();
    Callback::from(move |_| cb.emit(command.clone()))
}

#[derive(Properties, Clone, PartialEq)]
pub struct PublicHomePageProps {
    pub on_navigate: Callback<NavCommand>,
    pub on_open_artist: Callback<ArtistRef>,
    #[prop_or_default]
    pub featured: Vec<ArtistRef>,
}

#[function_component(PublicHomePage)]
pub fn public_home_page(props: &PublicHomePageProps) -> Html {
    let featured = props.featured.iter().cloned().map(|artist| {
        let open = props.on_open_artist.clone();
        let label = artist.display_name().to_string();
        let onclick = Callback::from(move |_| open.emit(artist.clone()));
        html! { <li><button type="button" class="link" {onclick}>{ label }</button></li> }
    });

    html! {
        <section class="public-home">
            <ScreenHeader title="Spotlight" subtitle={AttrValue::from("Live talent, booked in minutes")} on_navigate={props.on_navigate.clone()} />
            <div class="hero-actions">
                <button type="button" class="btn btn-primary" onclick={go(&props.on_navigate, NavCommand::to(ScreenId::SearchDiscover))}>
                    { "Discover artists" }
                </button>
                <button type="button" class="btn" onclick={go(&props.on_navigate, NavCommand::to(ScreenId::EventsGrid))}>
                    { "Browse events" }
                </button>
                <button
                    type="button"
                    class="btn btn-ghost"
                    onclick={go(&props.on_navigate, NavCommand::with(
                        ScreenId::LoginSignup,
                        NavParams::new().with_return_to(ScreenId::PublicHome),
                    ))}
                >
                    { "Sign in" }
                </button>
            </div>
            if !props.featured.is_empty() {
                <h2>{ "Featured" }</h2>
                <ul class="featured">{ for featured }</ul>
            }
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SearchDiscoverPageProps {
    pub on_navigate: Callback<NavCommand>,
    pub on_open_artist: Callback<ArtistRef>,
    pub on_forget_artist: Callback<String>,
    pub on_clear_recent: Callback<()>,
    pub recent: Vec<ArtistRef>,
    #[prop_or(3)]
    pub min_chars: usize,
    #[prop_or(20)]
    pub result_limit: usize,
    #[prop_or_default]
    pub results: Vec<ArtistRef>,
}

fn artist_row(
    artist: &ArtistRef,
    on_open: &Callback<ArtistRef>,
    on_forget: Option<&Callback<String>>,
) -> Html {
    let open = {
        let cb = on_open.clone();
        let artist = artist.clone();
        Callback::from(move |_| cb.emit(artist.clone()))
    };
    let forget = on_forget.map(|cb| {
        let cb = cb.clone();
        let id = artist.id.clone();
        let onclick = Callback::from(move |_| cb.emit(id.clone()));
        html! {
            <button type="button" class="btn btn-ghost btn-xs" aria-label="Remove" {onclick}>{ "✕" }</button>
        }
    });
    html! {
        <li class="artist-row">
            <button type="button" class="link" onclick={open}>
                <span class="artist-name">{ artist.display_name().to_string() }</span>
                if let Some(genre) = artist.genre.clone() {
                    <span class="artist-genre">{ genre }</span>
                }
            </button>
            { for forget }
        </li>
    }
}

#[function_component(SearchDiscoverPage)]
pub fn search_discover_page(props: &SearchDiscoverPageProps) -> Html {
    let query = use_state(String::new);
    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };
    let clear_recent = {
        let cb = props.on_clear_recent.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let cleaned = sanitize_query(&query, props.min_chars);
    let body = match cleaned {
        None if query.trim().is_empty() => {
            let rows = props
                .recent
                .iter()
                .map(|a| artist_row(a, &props.on_open_artist, Some(&props.on_forget_artist)));
            html! {
                <section class="recent" aria-label="Recent searches">
                    <div class="section-title">
                        <h2>{ "Recent" }</h2>
                        if !props.recent.is_empty() {
                            <button type="button" class="btn btn-ghost btn-xs" onclick={clear_recent}>{ "Clear all" }</button>
                        }
                    </div>
                    if props.recent.is_empty() {
                        <p class="hint">{ "Artists you open will show up here." }</p>
                    } else {
                        <ul>{ for rows }</ul>
                    }
                </section>
            }
        }
        None => html! {
            <p class="hint">{ format!("Type at least {} characters to search.", props.min_chars) }</p>
        },
        Some(term) if props.results.is_empty() => html! {
            <p class="hint">{ format!("No artists found for \"{term}\".") }</p>
        },
        Some(_) => {
            let rows = props
                .results
                .iter()
                .take(props.result_limit)
                .map(|a| artist_row(a, &props.on_open_artist, None));
            html! { <ul class="results">{ for rows }</ul> }
        }
    };

    html! {
        <section class="search-discover">
            <ScreenHeader
                title="Discover"
                back={NavCommand::to(ScreenId::PublicHome)}
                on_navigate={props.on_navigate.clone()}
            />
            <label for="search-input" class="sr-only">{ "Search artists" }</label>
            <input
                id="search-input"
                type="search"
                placeholder="Search artists, genres, cities"
                value={(*query).clone()}
                {oninput}
            />
            { body }
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct EventsGridPageProps {
    pub on_navigate: Callback<NavCommand>,
    #[prop_or_default]
    pub events: Vec<EventRef>,
}

#[function_component(EventsGridPage)]
pub fn events_grid_page(props: &EventsGridPageProps) -> Html {
    let cards = props.events.iter().map(|event| {
        let title = event.title.clone().unwrap_or_else(|| "Untitled event".to_string());
        let command = NavCommand::with(
            ScreenId::EventDetails,
            NavParams::new()
                .with_event_id(event.id.clone())
                .with_event(event.clone()),
        );
        html! {
            <li class="event-card">
                <button type="button" class="link" onclick={go(&props.on_navigate, command)}>{ title }</button>
            </li>
        }
    });

    html! {
        <section class="events-grid">
            <ScreenHeader
                title="Events"
                back={NavCommand::to(ScreenId::PublicHome)}
                on_navigate={props.on_navigate.clone()}
            />
            if props.events.is_empty() {
                <p class="hint">{ "No upcoming events yet." }</p>
            } else {
                <ul class="grid">{ for cards }</ul>
            }
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct EventDetailsPageProps {
    pub on_navigate: Callback<NavCommand>,
    pub event: Option<EventRef>,
    pub event_id: Option<String>,
}

#[function_component(EventDetailsPage)]
pub fn event_details_page(props: &EventDetailsPageProps) -> Html {
    let back = NavCommand::to(ScreenId::EventsGrid);
    let header = html! {
        <ScreenHeader title="Event" back={back.clone()} on_navigate={props.on_navigate.clone()} />
    };

    let Some(event) = props.event.clone() else {
        return match props.event_id.clone() {
            Some(id) => html! {
                <section class="event-details">
                    { header }
                    <p class="hint">{ format!("Loading event {id}…") }</p>
                </section>
            },
            None => html! {
                <section class="event-details">
                    { header }
                    <EmptyState
                        title="Event not found"
                        message="This event is no longer available."
                        action_label={AttrValue::from("All events")}
                        action={back}
                        on_navigate={props.on_navigate.clone()}
                    />
                </section>
            },
        };
    };

    let lineup = event.lineup.iter().map(|artist| {
        let command = NavCommand::with(
            ScreenId::ArtistProfile,
            NavParams::new().with_artist(artist.clone()),
        );
        html! {
            <li>
                <button type="button" class="link" onclick={go(&props.on_navigate, command)}>
                    { artist.display_name().to_string() }
                </button>
            </li>
        }
    });

    html! {
        <section class="event-details">
            { header }
            <h2>{ event.title.clone().unwrap_or_else(|| "Untitled event".to_string()) }</h2>
            if let Some(venue) = event.venue.clone() {
                <p class="venue">{ venue }</p>
            }
            if let Some(starts_at) = event.starts_at.clone() {
                <p class="starts-at">{ starts_at }</p>
            }
            if !event.lineup.is_empty() {
                <h3>{ "Lineup" }</h3>
                <ul class="lineup">{ for lineup }</ul>
            }
        </section>
    }
}
