use crate::screen::ScreenId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Public,
    Artist,
    Organizer,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl UserRole {
    pub const ALL: [Self; 4] = [Self::Public, Self::Artist, Self::Organizer, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Artist => "artist",
            Self::Organizer => "organizer",
            Self::Admin => "admin",
        }
    }

    /// Home screen for a signed-in member of this role.
    #[must_use]
    pub const fn dashboard(self) -> Option<ScreenId> {
        match self {
            Self::Artist => Some(ScreenId::ArtistDashboard),
            Self::Organizer => Some(ScreenId::OrganizerDashboard),
            Self::Admin => Some(ScreenId::AdminDashboard),
            Self::Public => None,
        }
    }

    /// Artists and organizers own a public-facing profile.
    #[must_use]
    pub const fn has_profile(self) -> bool {
        matches!(self, Self::Artist | Self::Organizer)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Signed-in user as reported by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUser {
    pub id: String,
    pub email: String,
    pub role: UserRole,
}

/// Read-only view of the identity collaborator at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub user: Option<AppUser>,
    pub is_loading: bool,
    pub failure: Option<String>,
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

impl AuthSnapshot {
    /// Session lookup still in flight; the state every app start begins in.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
            failure: None,
        }
    }

    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
            failure: None,
        }
    }

    #[must_use]
    pub const fn signed_in(user: AppUser) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
            failure: None,
        }
    }

    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            user: None,
            is_loading: false,
            failure: Some(reason.into()),
        }
    }

    /// Role of the signed-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|user| user.role)
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !self.is_loading && self.failure.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> AppUser {
        AppUser {
            id: "u-1".to_string(),
            email: "maya@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn roles_parse_and_display() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
        }
        assert_eq!(
            "Artist".parse::<UserRole>(),
            Err(UnknownRole("Artist".to_string()))
        );
        let json = serde_json::to_string(&UserRole::Organizer).unwrap();
        assert_eq!(json, "\"organizer\"");
    }

    #[test]
    fn dashboards_by_role() {
        assert_eq!(UserRole::Artist.dashboard(), Some(ScreenId::ArtistDashboard));
        assert_eq!(
            UserRole::Organizer.dashboard(),
            Some(ScreenId::OrganizerDashboard)
        );
        assert_eq!(UserRole::Admin.dashboard(), Some(ScreenId::AdminDashboard));
        assert_eq!(UserRole::Public.dashboard(), None);
        assert!(UserRole::Artist.has_profile());
        assert!(!UserRole::Admin.has_profile());
    }

    #[test]
    fn snapshot_constructors() {
        assert!(AuthSnapshot::default().is_loading);
        assert!(AuthSnapshot::signed_out().is_settled());
        assert_eq!(
            AuthSnapshot::signed_in(user(UserRole::Artist)).role(),
            Some(UserRole::Artist)
        );
        let failed = AuthSnapshot::failed("network down");
        assert!(!failed.is_settled());
        assert_eq!(failed.role(), None);
    }
}
