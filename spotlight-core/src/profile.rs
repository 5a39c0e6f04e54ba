use crate::params::{ArtistRef, FormMode, NavParams};
use crate::role::UserRole;
use crate::router::NavCommand;
use crate::screen::ScreenId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_]{3,30}$").expect("valid username pattern"));

#[must_use]
pub fn is_username_valid(username: &str) -> bool {
    USERNAME.is_match(username)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Please enter company name.")]
    MissingCompany,
    #[error("Please enter your name.")]
    MissingName,
    #[error("Username: 3-30 chars, only letters, numbers, underscores. Use lowercase.")]
    InvalidUsername,
}

/// Raw form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub username: String,
    pub display_name: String,
    pub company: String,
    pub bio: String,
    pub city: String,
    pub genres: String,
}

/// Cleaned profile ready to hand to the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub username: Option<String>,
    pub display_name: String,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub genres: Option<Vec<String>>,
    pub instruments: Option<Vec<String>>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ProfileDraft {
    /// # Errors
    ///
    /// Returns a [`ProfileError`] describing the first field that fails.
    pub fn validate(&self, role: UserRole) -> Result<ProfileInput, ProfileError> {
        let name = if role == UserRole::Organizer {
            non_empty(&self.company).or_else(|| non_empty(&self.display_name))
        } else {
            non_empty(&self.display_name)
        };
        let display_name = name.ok_or(if role == UserRole::Organizer {
            ProfileError::MissingCompany
        } else {
            ProfileError::MissingName
        })?;

        let username = non_empty(&self.username).map(|u| u.to_lowercase());
        if username.as_deref().is_some_and(|u| !is_username_valid(u)) {
            return Err(ProfileError::InvalidUsername);
        }

        let genres: Vec<String> = self
            .genres
            .split(',')
            .filter_map(non_empty)
            .collect();
        let genres = (role == UserRole::Artist && !genres.is_empty()).then_some(genres);

        Ok(ProfileInput {
            username,
            display_name,
            bio: non_empty(&self.bio),
            city: non_empty(&self.city),
            instruments: genres.clone(),
            genres,
        })
    }
}

fn own_profile_return(return_to: Option<ScreenId>, mode: FormMode) -> Option<NavCommand> {
    match (mode, return_to) {
        (FormMode::Edit, Some(target)) => Some(NavCommand::with(
            target,
            NavParams::new().with_artist(ArtistRef::me()),
        )),
        _ => None,
    }
}

/// Where the profile form goes after a successful save.
#[must_use]
pub fn after_save(mode: FormMode, return_to: Option<ScreenId>) -> NavCommand {
    own_profile_return(return_to, mode).unwrap_or_else(|| NavCommand::to(ScreenId::PublicHome))
}

/// Where the profile form's back button goes.
#[must_use]
pub fn back_target(mode: FormMode, return_to: Option<ScreenId>) -> NavCommand {
    own_profile_return(return_to, mode).unwrap_or_else(|| NavCommand::to(ScreenId::RoleSelection))
}
