//! Client-side pieces of artist search: query cleanup, distance filtering and
//! the per-user list of recently opened artists.

use crate::params::ArtistRef;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use thiserror::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Strip characters the search backend treats as syntax and trim.
/// Returns `None` when what remains is too short to search for.
#[must_use]
pub fn sanitize_query(query: &str, min_chars: usize) -> Option<String> {
    let cleaned: String = query
        .chars()
        .map(|c| if matches!(c, ',' | '(' | ')') { ' ' } else { c })
        .collect();
    let cleaned = cleaned.trim();
    (cleaned.chars().count() >= min_chars).then(|| cleaned.to_string())
}

/// Great-circle distance in kilometres.
#[must_use]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchOptions {
    pub max_distance_km: Option<f64>,
    pub user_lat: Option<f64>,
    pub user_lon: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceFilter {
    pub max_km: f64,
    pub lat: f64,
    pub lon: f64,
}

impl DistanceFilter {
    #[must_use]
    pub fn admits(&self, lat: f64, lon: f64) -> bool {
        haversine_km(self.lat, self.lon, lat, lon) <= self.max_km
    }
}

impl SearchOptions {
    /// The filter only applies when all three inputs are present.
    #[must_use]
    pub const fn distance_filter(&self) -> Option<DistanceFilter> {
        match (self.max_distance_km, self.user_lat, self.user_lon) {
            (Some(max_km), Some(lat), Some(lon)) => Some(DistanceFilter { max_km, lat, lon }),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("search history storage failed: {0}")]
    Storage(String),
    #[error("search history is corrupt: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Key/value backend for the history list.
pub trait RecentSearchStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns an error if the key cannot be removed.
    fn delete(&self, key: &str) -> Result<(), Self::Error>;
}

/// In-process store, used by tests and the CLI.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl RecentSearchStore for MemoryStore {
    type Error = Infallible;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[must_use]
pub fn storage_key(user_id: &str) -> String {
    format!("spotlight_recent_artists_{user_id}")
}

/// Most-recent-first list of artists a user opened from search.
pub struct RecentSearches<S> {
    store: S,
    limit: usize,
}

impl<S: RecentSearchStore> RecentSearches<S> {
    pub const fn new(store: S, limit: usize) -> Self {
        Self { store, limit }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored list cannot be decoded.
    pub fn load(&self, user_id: &str) -> Result<Vec<ArtistRef>, HistoryError> {
        if user_id.is_empty() {
            return Ok(Vec::new());
        }
        let raw = self
            .store
            .read(&storage_key(user_id))
            .map_err(|err| HistoryError::Storage(err.to_string()))?;
        raw.map_or_else(|| Ok(Vec::new()), |json| Ok(serde_json::from_str(&json)?))
    }

    /// Put `artist` first, dropping any older entry with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be read back or saved.
    pub fn add(&self, user_id: &str, artist: ArtistRef) -> Result<Vec<ArtistRef>, HistoryError> {
        if user_id.is_empty() {
            return Ok(Vec::new());
        }
        let mut history = self.load(user_id)?;
        history.retain(|item| item.id != artist.id);
        history.insert(0, artist);
        history.truncate(self.limit);
        self.save(user_id, &history)?;
        Ok(history)
    }

    /// # Errors
    ///
    /// Returns an error if the list cannot be read back or saved.
    pub fn remove(&self, user_id: &str, artist_id: &str) -> Result<Vec<ArtistRef>, HistoryError> {
        if user_id.is_empty() {
            return Ok(Vec::new());
        }
        let mut history = self.load(user_id)?;
        history.retain(|item| item.id != artist_id);
        self.save(user_id, &history)?;
        Ok(history)
    }

    /// # Errors
    ///
    /// Returns an error if the backend cannot delete the list.
    pub fn clear(&self, user_id: &str) -> Result<Vec<ArtistRef>, HistoryError> {
        if !user_id.is_empty() {
            self.store
                .delete(&storage_key(user_id))
                .map_err(|err| HistoryError::Storage(err.to_string()))?;
        }
        Ok(Vec::new())
    }

    fn save(&self, user_id: &str, history: &[ArtistRef]) -> Result<(), HistoryError> {
        let json = serde_json::to_string(history)?;
        self.store
            .write(&storage_key(user_id), &json)
            .map_err(|err| HistoryError::Storage(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> RecentSearches<MemoryStore> {
        RecentSearches::new(MemoryStore::new(), 8)
    }

    #[test]
    fn sanitize_strips_syntax_and_enforces_length() {
        assert_eq!(sanitize_query(" jazz,(soul) ", 3).as_deref(), Some("jazz  soul"));
        assert_eq!(sanitize_query("dj", 3), None);
        assert_eq!(sanitize_query("(,)", 3), None);
        assert_eq!(sanitize_query("ñu ", 2).as_deref(), Some("ñu"));
    }

    #[test]
    fn haversine_matches_known_distance() {
        // New York to Los Angeles is roughly 3936 km.
        let km = haversine_km(40.7128, -74.0060, 34.0522, -118.2437);
        assert!((km - 3936.0).abs() < 10.0, "{km}");
        assert!(haversine_km(1.0, 1.0, 1.0, 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_filter_requires_all_inputs() {
        let partial = SearchOptions {
            max_distance_km: Some(50.0),
            user_lat: Some(40.7),
            user_lon: None,
        };
        assert!(partial.distance_filter().is_none());
        let full = SearchOptions {
            user_lon: Some(-74.0),
            ..partial
        };
        let filter = full.distance_filter().unwrap();
        assert!(filter.admits(40.75, -73.99));
        assert!(!filter.admits(34.05, -118.24));
    }

    #[test]
    fn add_dedupes_and_caps() {
        let recent = history();
        for i in 0..10 {
            recent.add("u1", ArtistRef::new(format!("a{i}"))).unwrap();
        }
        let list = recent.add("u1", ArtistRef::new("a5")).unwrap();
        assert_eq!(list.len(), 8);
        assert_eq!(list[0].id, "a5");
        assert_eq!(list.iter().filter(|a| a.id == "a5").count(), 1);
        assert_eq!(recent.load("u1").unwrap(), list);
    }

    #[test]
    fn history_is_per_user() {
        let recent = history();
        recent.add("u1", ArtistRef::new("a1")).unwrap();
        assert!(recent.load("u2").unwrap().is_empty());
        assert!(recent.store().raw("spotlight_recent_artists_u1").is_some());
    }

    #[test]
    fn remove_and_clear() {
        let recent = history();
        recent.add("u1", ArtistRef::new("a1")).unwrap();
        recent.add("u1", ArtistRef::new("a2")).unwrap();
        let list = recent.remove("u1", "a1").unwrap();
        assert_eq!(list, vec![ArtistRef::new("a2")]);
        assert!(recent.clear("u1").unwrap().is_empty());
        assert!(recent.load("u1").unwrap().is_empty());
    }

    #[test]
    fn empty_user_is_a_no_op() {
        let recent = history();
        assert!(recent.add("", ArtistRef::new("a1")).unwrap().is_empty());
        assert!(recent.store().raw(&storage_key("")).is_none());
    }

    #[test]
    fn corrupt_entries_surface_as_decode_errors() {
        let recent = history();
        recent
            .store()
            .write(&storage_key("u1"), "{not json")
            .unwrap();
        assert!(matches!(recent.load("u1"), Err(HistoryError::Decode(_))));
    }
}
