use crate::params::{ArtistRef, EventRef, FormMode, NavParams};
use crate::role::UserRole;
use crate::screen::ScreenId;

/// A screen ready to mount, with exactly the inputs that screen reads.
///
/// Payloads that may be missing are `Option`s; pages show an empty state for
/// `None` instead of failing.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenView {
    PublicHome,
    SearchDiscover,
    EventDetails {
        event: Option<EventRef>,
        event_id: Option<String>,
    },
    EventsGrid,
    LoginSignup {
        return_to: Option<ScreenId>,
    },
    RoleSelection,
    ProfileSetup {
        role: UserRole,
        mode: FormMode,
        return_to: Option<ScreenId>,
    },
    EditProfile {
        role: UserRole,
        return_to: Option<ScreenId>,
    },
    ArtistDashboard,
    ArtistProfile {
        artist: Option<ArtistRef>,
        viewer: UserRole,
    },
    UploadVideo,
    ManageAvailability,
    SubmitToContest,
    PurchaseBoost,
    Payment,
    OrganizerDashboard,
    CreateEvent {
        mode: FormMode,
        event: Option<EventRef>,
    },
    RequestBooking {
        artist: Option<ArtistRef>,
    },
    Messaging {
        artist: Option<ArtistRef>,
    },
    AdminDashboard,
    ModerateContent,
    ApproveBoost,
    ManageContests,
    ManageLiveEvents,
    ManageProfiles,
}

impl ScreenView {
    #[must_use]
    pub const fn screen(&self) -> ScreenId {
        match self {
            Self::PublicHome => ScreenId::PublicHome,
            Self::SearchDiscover => ScreenId::SearchDiscover,
            Self::EventDetails { .. } => ScreenId::EventDetails,
            Self::EventsGrid => ScreenId::EventsGrid,
            Self::LoginSignup { .. } => ScreenId::LoginSignup,
            Self::RoleSelection => ScreenId::RoleSelection,
            Self::ProfileSetup { .. } => ScreenId::ProfileSetup,
            Self::EditProfile { .. } => ScreenId::EditProfile,
            Self::ArtistDashboard => ScreenId::ArtistDashboard,
            Self::ArtistProfile { .. } => ScreenId::ArtistProfile,
            Self::UploadVideo => ScreenId::UploadVideo,
            Self::ManageAvailability => ScreenId::ManageAvailability,
            Self::SubmitToContest => ScreenId::SubmitToContest,
            Self::PurchaseBoost => ScreenId::PurchaseBoost,
            Self::Payment => ScreenId::Payment,
            Self::OrganizerDashboard => ScreenId::OrganizerDashboard,
            Self::CreateEvent { .. } => ScreenId::CreateEvent,
            Self::RequestBooking { .. } => ScreenId::RequestBooking,
            Self::Messaging { .. } => ScreenId::Messaging,
            Self::AdminDashboard => ScreenId::AdminDashboard,
            Self::ModerateContent => ScreenId::ModerateContent,
            Self::ApproveBoost => ScreenId::ApproveBoost,
            Self::ManageContests => ScreenId::ManageContests,
            Self::ManageLiveEvents => ScreenId::ManageLiveEvents,
            Self::ManageProfiles => ScreenId::ManageProfiles,
        }
    }
}

/// Build the view for `screen` from the stored params. Exhaustive over
/// [`ScreenId`], so there is no failure path.
#[must_use]
pub fn render(screen: ScreenId, params: &NavParams) -> ScreenView {
    let role = params.user_role.unwrap_or_default();
    match screen {
        ScreenId::PublicHome => ScreenView::PublicHome,
        ScreenId::SearchDiscover => ScreenView::SearchDiscover,
        ScreenId::EventDetails => ScreenView::EventDetails {
            event: params.selected_event.clone(),
            event_id: params
                .event_id
                .clone()
                .or_else(|| params.selected_event.as_ref().map(|ev| ev.id.clone())),
        },
        ScreenId::EventsGrid => ScreenView::EventsGrid,
        ScreenId::LoginSignup => ScreenView::LoginSignup {
            return_to: params.return_to,
        },
        ScreenId::RoleSelection => ScreenView::RoleSelection,
        ScreenId::ProfileSetup => ScreenView::ProfileSetup {
            role,
            mode: params.mode.unwrap_or(FormMode::Setup),
            return_to: params.return_to,
        },
        ScreenId::EditProfile => ScreenView::EditProfile {
            role,
            return_to: params.return_to,
        },
        ScreenId::ArtistDashboard => ScreenView::ArtistDashboard,
        ScreenId::ArtistProfile => ScreenView::ArtistProfile {
            artist: params.selected_artist.clone(),
            viewer: role,
        },
        ScreenId::UploadVideo => ScreenView::UploadVideo,
        ScreenId::ManageAvailability => ScreenView::ManageAvailability,
        ScreenId::SubmitToContest => ScreenView::SubmitToContest,
        ScreenId::PurchaseBoost => ScreenView::PurchaseBoost,
        ScreenId::Payment => ScreenView::Payment,
        ScreenId::OrganizerDashboard => ScreenView::OrganizerDashboard,
        ScreenId::CreateEvent => ScreenView::CreateEvent {
            mode: params.mode.unwrap_or(FormMode::Create),
            event: params.selected_event.clone(),
        },
        ScreenId::RequestBooking => ScreenView::RequestBooking {
            artist: params.selected_artist.clone(),
        },
        ScreenId::Messaging => ScreenView::Messaging {
            artist: params.selected_artist.clone(),
        },
        ScreenId::AdminDashboard => ScreenView::AdminDashboard,
        ScreenId::ModerateContent => ScreenView::ModerateContent,
        ScreenId::ApproveBoost => ScreenView::ApproveBoost,
        ScreenId::ManageContests => ScreenView::ManageContests,
        ScreenId::ManageLiveEvents => ScreenView::ManageLiveEvents,
        ScreenId::ManageProfiles => ScreenView::ManageProfiles,
    }
}

/// [`render`] for identifiers that arrive as strings. Unknown or malformed
/// input renders the landing screen.
#[must_use]
pub fn render_raw(raw: &str, params: &NavParams) -> ScreenView {
    render(ScreenId::resolve(raw), params)
}
