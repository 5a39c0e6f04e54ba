//! Parameters carried between screens.
//!
//! The keys screens actually exchange are typed fields; anything else rides in
//! [`NavParams::extra`] as raw JSON so callers can still pass ad hoc data.

use crate::role::UserRole;
use crate::screen::ScreenId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Artist reference handed from a list or card to a detail screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub is_boosted: bool,
}

impl ArtistRef {
    /// Id used when a member opens their own profile.
    pub const SELF_ID: &'static str = "me";

    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn me() -> Self {
        Self::new(Self::SELF_ID)
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn is_self(&self) -> bool {
        self.id == Self::SELF_ID
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Artist")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub lineup: Vec<ArtistRef>,
}

impl EventRef {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// How a form screen was entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
    #[default]
    Setup,
}

/// What happens to stored params on navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Shallow merge; keys not mentioned by the new call survive.
    #[default]
    Accumulate,
    /// Every navigation starts from an empty bag.
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_artist: Option<ArtistRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_event: Option<EventRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_to: Option<ScreenId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<FormMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role: Option<UserRole>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl NavParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_artist(mut self, artist: ArtistRef) -> Self {
        self.selected_artist = Some(artist);
        self
    }

    #[must_use]
    pub fn with_event(mut self, event: EventRef) -> Self {
        self.selected_event = Some(event);
        self
    }

    #[must_use]
    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    #[must_use]
    pub const fn with_return_to(mut self, screen: ScreenId) -> Self {
        self.return_to = Some(screen);
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: FormMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub const fn with_role(mut self, role: UserRole) -> Self {
        self.user_role = Some(role);
        self
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Names of the keys currently set, in wire spelling.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let typed = [
            ("selectedArtist", self.selected_artist.is_some()),
            ("selectedEvent", self.selected_event.is_some()),
            ("eventId", self.event_id.is_some()),
            ("returnTo", self.return_to.is_some()),
            ("mode", self.mode.is_some()),
            ("userRole", self.user_role.is_some()),
        ];
        typed
            .into_iter()
            .filter_map(|(name, set)| set.then(|| name.to_string()))
            .chain(self.extra.keys().cloned())
            .collect()
    }

    /// Shallow merge: every key set in `incoming` replaces the stored value,
    /// keys it leaves unset are kept.
    pub fn merge(&mut self, incoming: Self) {
        let Self {
            selected_artist,
            selected_event,
            event_id,
            return_to,
            mode,
            user_role,
            extra,
        } = incoming;
        if selected_artist.is_some() {
            self.selected_artist = selected_artist;
        }
        if selected_event.is_some() {
            self.selected_event = selected_event;
        }
        if event_id.is_some() {
            self.event_id = event_id;
        }
        if return_to.is_some() {
            self.return_to = return_to;
        }
        if mode.is_some() {
            self.mode = mode;
        }
        if user_role.is_some() {
            self.user_role = user_role;
        }
        self.extra.extend(extra);
    }

    /// Keys stored here that `incoming` does not mention.
    #[must_use]
    pub fn carried_over(&self, incoming: &Self) -> Vec<String> {
        let fresh = incoming.keys();
        self.keys()
            .into_iter()
            .filter(|key| !fresh.contains(key))
            .collect()
    }
}
