use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every view the app can show. The set is closed; strings from outside the
/// app (deep links, stored state) go through [`ScreenId::resolve`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    #[default]
    PublicHome,
    SearchDiscover,
    EventDetails,
    EventsGrid,
    LoginSignup,
    RoleSelection,
    ProfileSetup,
    EditProfile,
    ArtistDashboard,
    ArtistProfile,
    UploadVideo,
    ManageAvailability,
    SubmitToContest,
    PurchaseBoost,
    Payment,
    OrganizerDashboard,
    CreateEvent,
    RequestBooking,
    Messaging,
    AdminDashboard,
    ModerateContent,
    ApproveBoost,
    ManageContests,
    ManageLiveEvents,
    ManageProfiles,
}

/// Which part of the product a screen belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Area {
    Public,
    Account,
    Artist,
    Organizer,
    Admin,
}

impl Area {
    /// Account flows and admin tools run full screen, without the tab bar.
    #[must_use]
    pub const fn shows_tab_bar(self) -> bool {
        matches!(self, Self::Public | Self::Artist | Self::Organizer)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Account => "account",
            Self::Artist => "artist",
            Self::Organizer => "organizer",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen identifier `{0}`")]
pub struct UnknownScreen(pub String);

impl ScreenId {
    /// Initial screen and the target of every fallback.
    pub const LANDING: Self = Self::PublicHome;

    pub const ALL: [Self; 25] = [
        Self::PublicHome,
        Self::SearchDiscover,
        Self::EventDetails,
        Self::EventsGrid,
        Self::LoginSignup,
        Self::RoleSelection,
        Self::ProfileSetup,
        Self::EditProfile,
        Self::ArtistDashboard,
        Self::ArtistProfile,
        Self::UploadVideo,
        Self::ManageAvailability,
        Self::SubmitToContest,
        Self::PurchaseBoost,
        Self::Payment,
        Self::OrganizerDashboard,
        Self::CreateEvent,
        Self::RequestBooking,
        Self::Messaging,
        Self::AdminDashboard,
        Self::ModerateContent,
        Self::ApproveBoost,
        Self::ManageContests,
        Self::ManageLiveEvents,
        Self::ManageProfiles,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PublicHome => "public-home",
            Self::SearchDiscover => "search-discover",
            Self::EventDetails => "event-details",
            Self::EventsGrid => "events-grid",
            Self::LoginSignup => "login-signup",
            Self::RoleSelection => "role-selection",
            Self::ProfileSetup => "profile-setup",
            Self::EditProfile => "edit-profile",
            Self::ArtistDashboard => "artist-dashboard",
            Self::ArtistProfile => "artist-profile",
            Self::UploadVideo => "upload-video",
            Self::ManageAvailability => "manage-availability",
            Self::SubmitToContest => "submit-to-contest",
            Self::PurchaseBoost => "purchase-boost",
            Self::Payment => "payment",
            Self::OrganizerDashboard => "organizer-dashboard",
            Self::CreateEvent => "create-event",
            Self::RequestBooking => "request-booking",
            Self::Messaging => "messaging",
            Self::AdminDashboard => "admin-dashboard",
            Self::ModerateContent => "moderate-content",
            Self::ApproveBoost => "approve-boost",
            Self::ManageContests => "manage-contests",
            Self::ManageLiveEvents => "manage-live-events",
            Self::ManageProfiles => "manage-profiles",
        }
    }

    /// Strict lookup. Identifiers are matched exactly, no trimming or case folding.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownScreen`] when `raw` names no known screen.
    pub fn parse(raw: &str) -> Result<Self, UnknownScreen> {
        Self::ALL
            .iter()
            .copied()
            .find(|screen| screen.as_str() == raw)
            .ok_or_else(|| UnknownScreen(raw.to_string()))
    }

    /// Total lookup: anything unrecognised lands on [`ScreenId::LANDING`].
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|err| {
            log::warn!("{err}; falling back to {}", Self::LANDING);
            Self::LANDING
        })
    }

    #[must_use]
    pub const fn area(self) -> Area {
        match self {
            Self::PublicHome | Self::SearchDiscover | Self::EventDetails | Self::EventsGrid => {
                Area::Public
            }
            Self::LoginSignup | Self::RoleSelection | Self::ProfileSetup | Self::EditProfile => {
                Area::Account
            }
            Self::ArtistDashboard
            | Self::ArtistProfile
            | Self::UploadVideo
            | Self::ManageAvailability
            | Self::SubmitToContest
            | Self::PurchaseBoost
            | Self::Payment => Area::Artist,
            Self::OrganizerDashboard
            | Self::CreateEvent
            | Self::RequestBooking
            | Self::Messaging => Area::Organizer,
            Self::AdminDashboard
            | Self::ModerateContent
            | Self::ApproveBoost
            | Self::ManageContests
            | Self::ManageLiveEvents
            | Self::ManageProfiles => Area::Admin,
        }
    }

    #[must_use]
    pub const fn shows_tab_bar(self) -> bool {
        self.area().shows_tab_bar()
    }

    #[must_use]
    pub const fn is_landing(self) -> bool {
        matches!(self, Self::PublicHome)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
