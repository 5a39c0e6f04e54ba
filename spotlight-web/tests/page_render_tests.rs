use futures::executor::block_on;
use spotlight_core::{
    ArtistRef, EventRef, FormMode, NavCommand, NavParams, ScreenId, ScreenView, Tab, UserRole,
    render, render_raw,
};
use spotlight_web::components::bottom_nav::{BottomNav, Props as BottomNavProps};
use spotlight_web::pages::{
    PageContext, ScreenOutlet, ScreenOutletProps,
    account::{ProfileFormPage, ProfileFormPageProps},
    admin::{AdminDashboardPage, AdminDashboardPageProps},
    artist::{ArtistProfilePage, ArtistProfilePageProps, profile_back},
    public::{EventDetailsPage, EventDetailsPageProps, SearchDiscoverPage, SearchDiscoverPageProps},
    splash::SplashPage,
};
use yew::{Callback, LocalServerRenderer};

fn outlet(view: ScreenView) -> String {
    let props = ScreenOutletProps {
        view,
        ctx: PageContext::with_navigate(Callback::noop()),
    };
    block_on(LocalServerRenderer::<ScreenOutlet>::with_props(props).render())
}

#[test]
fn splash_shows_brand() {
    let html = block_on(LocalServerRenderer::<SplashPage>::new().render());
    assert!(html.contains("Spotlight"));
    assert!(html.contains("aria-busy=\"true\""));
}

#[test]
fn every_screen_mounts_without_params() {
    let params = NavParams::new();
    for screen in ScreenId::ALL {
        let html = outlet(render(screen, &params));
        assert!(
            html.contains(&format!("data-screen=\"{}\"", screen.as_str())),
            "{screen} did not mount"
        );
    }
}

#[test]
fn unknown_identifiers_mount_the_landing_page() {
    for raw in ["", "nope", "Public-Home", "artist-dashboard/extra"] {
        let html = outlet(render_raw(raw, &NavParams::new()));
        assert!(html.contains("data-screen=\"public-home\""), "{raw:?}");
        assert!(html.contains("Discover artists"));
    }
}

#[test]
fn artist_profile_without_artist_shows_empty_state() {
    let props = ArtistProfilePageProps {
        on_navigate: Callback::noop(),
        artist: None,
        viewer: UserRole::Public,
    };
    let html = block_on(LocalServerRenderer::<ArtistProfilePage>::with_props(props).render());
    assert!(html.contains("Artist not found"));
}

#[test]
fn artist_profile_offers_booking_to_visitors_and_editing_to_owner() {
    let visitor = ArtistProfilePageProps {
        on_navigate: Callback::noop(),
        artist: Some(ArtistRef::new("a-1").named("Maya Rivers")),
        viewer: UserRole::Organizer,
    };
    let html = block_on(LocalServerRenderer::<ArtistProfilePage>::with_props(visitor).render());
    assert!(html.contains("Maya Rivers"));
    assert!(html.contains("Request Booking"));
    assert!(!html.contains("Edit Profile"));

    let owner = ArtistProfilePageProps {
        on_navigate: Callback::noop(),
        artist: Some(ArtistRef::me()),
        viewer: UserRole::Artist,
    };
    let html = block_on(LocalServerRenderer::<ArtistProfilePage>::with_props(owner).render());
    assert!(html.contains("My Profile"));
    assert!(html.contains("Edit Profile"));
}

#[test]
fn profile_back_depends_on_owner_and_viewer() {
    let me = ArtistRef::me();
    assert_eq!(
        profile_back(Some(&me), UserRole::Organizer),
        NavCommand::to(ScreenId::OrganizerDashboard)
    );
    assert_eq!(
        profile_back(Some(&me), UserRole::Artist),
        NavCommand::to(ScreenId::ArtistDashboard)
    );
    assert_eq!(
        profile_back(Some(&ArtistRef::new("a-2")), UserRole::Artist),
        NavCommand::to(ScreenId::SearchDiscover)
    );
    assert_eq!(
        profile_back(None, UserRole::Public),
        NavCommand::to(ScreenId::SearchDiscover)
    );
}

#[test]
fn event_details_handles_missing_and_partial_payloads() {
    let missing = EventDetailsPageProps {
        on_navigate: Callback::noop(),
        event: None,
        event_id: None,
    };
    let html = block_on(LocalServerRenderer::<EventDetailsPage>::with_props(missing).render());
    assert!(html.contains("Event not found"));

    let id_only = EventDetailsPageProps {
        on_navigate: Callback::noop(),
        event: None,
        event_id: Some("ev-12".to_string()),
    };
    let html = block_on(LocalServerRenderer::<EventDetailsPage>::with_props(id_only).render());
    assert!(html.contains("ev-12"));

    let full = EventDetailsPageProps {
        on_navigate: Callback::noop(),
        event: Some(EventRef {
            title: Some("Friday Jazz Night".to_string()),
            venue: Some("Blue Room".to_string()),
            lineup: vec![ArtistRef::new("a-1").named("Maya Rivers")],
            ..EventRef::new("ev-12")
        }),
        event_id: Some("ev-12".to_string()),
    };
    let html = block_on(LocalServerRenderer::<EventDetailsPage>::with_props(full).render());
    assert!(html.contains("Friday Jazz Night"));
    assert!(html.contains("Blue Room"));
    assert!(html.contains("Maya Rivers"));
}

#[test]
fn search_lists_recent_artists() {
    let props = SearchDiscoverPageProps {
        on_navigate: Callback::noop(),
        on_open_artist: Callback::noop(),
        on_forget_artist: Callback::noop(),
        on_clear_recent: Callback::noop(),
        recent: vec![ArtistRef::new("a-1").named("Maya Rivers")],
        min_chars: 3,
        result_limit: 20,
        results: Vec::new(),
    };
    let html = block_on(LocalServerRenderer::<SearchDiscoverPage>::with_props(props).render());
    assert!(html.contains("Maya Rivers"));
    assert!(html.contains("Clear all"));
}

#[test]
fn search_without_history_shows_hint() {
    let props = SearchDiscoverPageProps {
        on_navigate: Callback::noop(),
        on_open_artist: Callback::noop(),
        on_forget_artist: Callback::noop(),
        on_clear_recent: Callback::noop(),
        recent: Vec::new(),
        min_chars: 3,
        result_limit: 20,
        results: Vec::new(),
    };
    let html = block_on(LocalServerRenderer::<SearchDiscoverPage>::with_props(props).render());
    assert!(html.contains("Artists you open will show up here."));
    assert!(!html.contains("Clear all"));
}

#[test]
fn profile_form_fields_follow_role() {
    let render_form = |role| {
        let props = ProfileFormPageProps {
            on_navigate: Callback::noop(),
            role,
            mode: FormMode::Setup,
            return_to: None,
        };
        block_on(LocalServerRenderer::<ProfileFormPage>::with_props(props).render())
    };
    let artist = render_form(UserRole::Artist);
    assert!(artist.contains("Genres"));
    assert!(artist.contains("Display name"));
    let organizer = render_form(UserRole::Organizer);
    assert!(organizer.contains("Company name"));
    assert!(!organizer.contains("Genres"));
}

#[test]
fn edit_profile_view_renders_edit_title() {
    let view = ScreenView::EditProfile {
        role: UserRole::Artist,
        return_to: Some(ScreenId::ArtistProfile),
    };
    assert!(outlet(view).contains("Edit Profile"));
}

#[test]
fn bottom_nav_marks_active_tab() {
    let props = BottomNavProps {
        active: Some(Tab::Search),
        role: UserRole::Public,
        is_authenticated: false,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<BottomNav>::with_props(props).render());
    for tab in Tab::ALL {
        assert!(html.contains(tab.label()));
    }
    assert!(html.contains("aria-current=\"page\""));
    assert_eq!(html.matches("aria-current").count(), 1);
}

#[test]
fn admin_dashboard_offers_sign_out() {
    let props = AdminDashboardPageProps {
        on_navigate: Callback::noop(),
        on_sign_out: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AdminDashboardPage>::with_props(props).render());
    assert!(html.contains("id=\"sign-out\""));
    assert!(html.contains("Sign Out"));
    assert!(html.contains("Moderate Content"));
}
