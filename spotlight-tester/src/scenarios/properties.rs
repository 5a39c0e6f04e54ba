use anyhow::{Result, ensure};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde_json::json;
use spotlight_core::{
    AppUser, ArtistRef, AuthSnapshot, MemoryStore, NavCommand, NavParams, RecentSearches, Router,
    RouterConfig, ScreenId, ScreenView, Tab, UserRole, effective_screen, render, render_raw,
};

use super::random_identifier;

fn pick_screen(rng: &mut ChaCha20Rng) -> ScreenId {
    ScreenId::ALL[rng.gen_range(0..ScreenId::ALL.len())]
}

fn pick_role(rng: &mut ChaCha20Rng) -> Option<UserRole> {
    let idx = rng.gen_range(0..=UserRole::ALL.len());
    UserRole::ALL.get(idx).copied()
}

fn snapshot(role: Option<UserRole>, is_loading: bool) -> AuthSnapshot {
    AuthSnapshot {
        user: role.map(|role| AppUser {
            id: "tester".to_string(),
            email: "tester@example.com".to_string(),
            role,
        }),
        is_loading,
        failure: None,
    }
}

fn random_auth(rng: &mut ChaCha20Rng) -> AuthSnapshot {
    let mut auth = snapshot(pick_role(rng), rng.gen_bool(0.3));
    if rng.gen_bool(0.1) {
        auth.failure = Some("lookup failed".to_string());
    }
    auth
}

pub fn fallback_totality(rng: &mut ChaCha20Rng) -> Result<()> {
    let params = NavParams::new();
    let landing = render(ScreenId::LANDING, &params);
    for _ in 0..64 {
        let raw = random_identifier(rng);
        let view = render_raw(&raw, &params);
        match ScreenId::parse(&raw) {
            Ok(screen) => ensure!(view.screen() == screen, "{raw:?} should render itself"),
            Err(_) => ensure!(view == landing, "{raw:?} rendered {:?}", view.screen()),
        }
    }
    Ok(())
}

pub fn merge_semantics(rng: &mut ChaCha20Rng) -> Result<()> {
    let mut router = Router::default();
    let first = pick_screen(rng);
    let second = pick_screen(rng);
    let x: u32 = rng.r#gen();
    let y: u32 = rng.r#gen();
    router.apply(NavCommand::with(first, NavParams::new().with_extra("x", json!(x))));
    router.apply(NavCommand::with(second, NavParams::new().with_extra("y", json!(y))));

    ensure!(router.active_screen() == second, "active screen not switched");
    let expected = NavParams::new()
        .with_extra("x", json!(x))
        .with_extra("y", json!(y));
    ensure!(
        router.params() == &expected,
        "params {:?} != {:?}",
        router.params(),
        expected
    );
    Ok(())
}

pub fn guard_idempotence(rng: &mut ChaCha20Rng) -> Result<()> {
    for _ in 0..32 {
        let screen = if rng.gen_bool(0.5) {
            ScreenId::PublicHome
        } else {
            pick_screen(rng)
        };
        let auth = random_auth(rng);
        let first = effective_screen(screen, &auth);
        for _ in 0..8 {
            ensure!(
                effective_screen(screen, &auth) == first,
                "guard unstable for {screen} / {auth:?}"
            );
        }
    }
    Ok(())
}

pub fn role_redirect() -> Result<()> {
    let cases = [
        (Some(UserRole::Artist), ScreenId::ArtistDashboard),
        (Some(UserRole::Organizer), ScreenId::OrganizerDashboard),
        (Some(UserRole::Public), ScreenId::PublicHome),
        (None, ScreenId::PublicHome),
    ];
    for (role, expected) in cases {
        let got = effective_screen(ScreenId::PublicHome, &snapshot(role, false));
        ensure!(got == expected, "role {role:?}: expected {expected}, got {got}");
    }
    Ok(())
}

pub fn loading_hold(rng: &mut ChaCha20Rng) -> Result<()> {
    for _ in 0..16 {
        let role = pick_role(rng);
        let got = effective_screen(ScreenId::PublicHome, &snapshot(role, true));
        ensure!(got == ScreenId::PublicHome, "role {role:?} redirected to {got} while loading");
    }
    Ok(())
}

pub fn non_landing_passthrough(rng: &mut ChaCha20Rng) -> Result<()> {
    for screen in ScreenId::ALL.into_iter().filter(|s| !s.is_landing()) {
        let auth = random_auth(rng);
        let got = effective_screen(screen, &auth);
        ensure!(got == screen, "{screen} became {got} under {auth:?}");
    }
    Ok(())
}

pub fn bottom_nav() -> Result<()> {
    for role in UserRole::ALL {
        let signed_in = Tab::Profile.command(role, true);
        let expected = match role {
            UserRole::Artist | UserRole::Organizer => NavCommand::with(
                ScreenId::ArtistProfile,
                NavParams::new().with_artist(ArtistRef::me()),
            ),
            UserRole::Admin => NavCommand::to(ScreenId::AdminDashboard),
            UserRole::Public => NavCommand::with(
                ScreenId::LoginSignup,
                NavParams::new().with_return_to(ScreenId::PublicHome),
            ),
        };
        ensure!(signed_in == expected, "profile tab for {role}: {signed_in:?}");
    }
    for tab in Tab::ALL {
        let NavCommand::Navigate { target, .. } = tab.command(UserRole::Public, false) else {
            anyhow::bail!("tab {} produced a non-navigate command", tab.id());
        };
        ensure!(Tab::for_screen(target) == Some(tab), "{} does not highlight itself", tab.id());
    }
    Ok(())
}

pub fn recent_searches(rng: &mut ChaCha20Rng) -> Result<()> {
    let limit = RouterConfig::load_from_static().history_limit;
    let history = RecentSearches::new(MemoryStore::new(), limit);
    let mut last = Vec::new();
    for _ in 0..40 {
        let id = format!("artist-{}", rng.gen_range(0..12));
        last = history.add("tester", ArtistRef::new(id.clone()))?;
        ensure!(last.first().map(|a| a.id.as_str()) == Some(id.as_str()), "newest not first");
        ensure!(last.len() <= limit, "history grew to {}", last.len());
        let mut ids: Vec<&str> = last.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ensure!(ids.len() == last.len(), "duplicate ids in history");
    }
    ensure!(history.load("tester")? == last, "stored history differs");
    ensure!(history.clear("tester")?.is_empty(), "clear returned entries");
    Ok(())
}

pub fn random_walk(rng: &mut ChaCha20Rng) -> Result<()> {
    let mut router = Router::default();
    for step in 0..200 {
        let command = match rng.gen_range(0..10) {
            0..=5 => NavCommand::to(pick_screen(rng)),
            6 => NavCommand::with(
                pick_screen(rng),
                NavParams::new().with_artist(ArtistRef::new(format!("a{step}"))),
            ),
            7 | 8 => NavCommand::raw(random_identifier(rng)),
            _ => NavCommand::SetRole(pick_role(rng).unwrap_or_default()),
        };
        let expected_raw = match &command {
            NavCommand::NavigateRaw { target, .. } => Some(ScreenId::resolve(target)),
            _ => None,
        };
        router.apply(command);
        if let Some(expected) = expected_raw {
            ensure!(router.active_screen() == expected, "raw navigation resolved wrong");
        }

        let auth = random_auth(rng);
        let stored = router.active_screen();
        let view: ScreenView = router.view(&auth);
        ensure!(
            view.screen() == effective_screen(stored, &auth),
            "view/guard mismatch at step {step}"
        );
        ensure!(router.active_screen() == stored, "rendering mutated state");
    }
    Ok(())
}
