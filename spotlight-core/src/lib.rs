//! Spotlight navigation core
//!
//! Platform-agnostic screen router for the Spotlight booking app: the closed
//! set of screens, the parameters passed between them, the role-based landing
//! redirect and the registry that turns a screen into a typed view.
//! No UI or platform-specific dependencies.

pub mod bottom_nav;
pub mod config;
#[cfg(feature = "async")]
pub mod controller;
pub mod guard;
pub mod params;
pub mod profile;
pub mod registry;
pub mod role;
pub mod router;
pub mod screen;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use bottom_nav::Tab;
pub use config::RouterConfig;
#[cfg(feature = "async")]
pub use controller::{ControllerError, NavigationController, NavigationHandle};
pub use guard::{GuardDecision, effective_screen, landing_redirect};
pub use params::{ArtistRef, EventRef, FormMode, MergePolicy, NavParams};
pub use profile::{ProfileDraft, ProfileError, ProfileInput, is_username_valid};
pub use registry::{ScreenView, render, render_raw};
pub use role::{AppUser, AuthSnapshot, UnknownRole, UserRole};
pub use router::{NavCommand, Router};
pub use screen::{Area, ScreenId, UnknownScreen};
pub use search::{
    HistoryError, MemoryStore, RecentSearchStore, RecentSearches, SearchOptions, haversine_km,
    sanitize_query,
};
pub use state::NavigationState;
