use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use spotlight_core::ScreenId;

pub mod properties;
pub mod race;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    FallbackTotality,
    MergeSemantics,
    GuardIdempotence,
    RoleRedirect,
    LoadingHold,
    NonLandingPassthrough,
    RaceLastWriteWins,
    BottomNav,
    RecentSearches,
    RandomWalk,
}

impl Scenario {
    pub const ALL: [Self; 10] = [
        Self::FallbackTotality,
        Self::MergeSemantics,
        Self::GuardIdempotence,
        Self::RoleRedirect,
        Self::LoadingHold,
        Self::NonLandingPassthrough,
        Self::RaceLastWriteWins,
        Self::BottomNav,
        Self::RecentSearches,
        Self::RandomWalk,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::FallbackTotality => "fallback-totality",
            Self::MergeSemantics => "merge-semantics",
            Self::GuardIdempotence => "guard-idempotence",
            Self::RoleRedirect => "role-redirect",
            Self::LoadingHold => "loading-hold",
            Self::NonLandingPassthrough => "non-landing-passthrough",
            Self::RaceLastWriteWins => "race-last-write-wins",
            Self::BottomNav => "bottom-nav",
            Self::RecentSearches => "recent-searches",
            Self::RandomWalk => "random-walk",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::FallbackTotality => "Unknown screen identifiers render the landing screen",
            Self::MergeSemantics => "Navigation merges params and keeps unrelated keys",
            Self::GuardIdempotence => "Redirect guard returns the same screen on every call",
            Self::RoleRedirect => "Artists and organizers skip the landing screen",
            Self::LoadingHold => "No redirect while the auth lookup is in flight",
            Self::NonLandingPassthrough => "Guard leaves every non-landing screen alone",
            Self::RaceLastWriteWins => "Later-resolving async navigation wins",
            Self::BottomNav => "Bottom navigation tabs resolve per role",
            Self::RecentSearches => "Recent search history dedupes and caps",
            Self::RandomWalk => "Random command sequences keep router invariants",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Run one iteration with inputs derived from `seed`.
    pub async fn run(self, seed: u64) -> Result<()> {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        match self {
            Self::FallbackTotality => properties::fallback_totality(&mut rng),
            Self::MergeSemantics => properties::merge_semantics(&mut rng),
            Self::GuardIdempotence => properties::guard_idempotence(&mut rng),
            Self::RoleRedirect => properties::role_redirect(),
            Self::LoadingHold => properties::loading_hold(&mut rng),
            Self::NonLandingPassthrough => properties::non_landing_passthrough(&mut rng),
            Self::RaceLastWriteWins => race::last_write_wins(&mut rng).await,
            Self::BottomNav => properties::bottom_nav(),
            Self::RecentSearches => properties::recent_searches(&mut rng),
            Self::RandomWalk => properties::random_walk(&mut rng),
        }
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    Scenario::ALL
        .iter()
        .map(|s| (s.key(), s.description()))
        .collect()
}

/// Expand `all` and drop unknown names, reporting each one.
pub fn expand_scenarios(names: &[String]) -> Vec<Scenario> {
    let mut out = Vec::new();
    for name in names {
        if name == "all" {
            out.extend(Scenario::ALL);
            continue;
        }
        match Scenario::from_key(name) {
            Some(s) => out.push(s),
            None => log::warn!("unknown scenario: {name}"),
        }
    }
    out.dedup();
    out
}

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz-_ ABCXYZ0123456789/?.";

/// A short identifier-looking string; sometimes a real one with noise added.
pub fn random_identifier(rng: &mut ChaCha20Rng) -> String {
    if rng.gen_bool(0.25) {
        let screen = ScreenId::ALL[rng.gen_range(0..ScreenId::ALL.len())];
        let mut s = screen.as_str().to_string();
        match rng.gen_range(0..3) {
            0 => s.push(' '),
            1 => s = s.to_uppercase(),
            _ => s.insert(0, '/'),
        }
        return s;
    }
    let len = rng.gen_range(0..24);
    (0..len)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect()
}
