use anyhow::{Context, Result, ensure};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use spotlight_core::{NavParams, NavigationController, Router, ScreenId};
use std::time::Duration;

/// Two async completions navigate after different delays. The one that
/// resolves later must be the screen left on display.
pub async fn last_write_wins(rng: &mut ChaCha20Rng) -> Result<()> {
    let fast_ms = rng.gen_range(1..=5);
    let slow_ms = fast_ms + rng.gen_range(5..=10);
    let (slow_target, fast_target) = if rng.gen_bool(0.5) {
        (ScreenId::UploadVideo, ScreenId::ManageAvailability)
    } else {
        (ScreenId::Messaging, ScreenId::EventsGrid)
    };

    let (handle, controller) = NavigationController::spawn(Router::default());
    let spawn_after = |delay: u64, target: ScreenId| {
        let handle = handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            handle.navigate(target, NavParams::new())
        })
    };
    let slow = spawn_after(slow_ms, slow_target);
    let fast = spawn_after(fast_ms, fast_target);

    slow.await.context("slow task panicked")??;
    fast.await.context("fast task panicked")??;
    drop(handle);

    let router = controller.await.context("controller task panicked")?;
    ensure!(
        router.active_screen() == slow_target,
        "expected {slow_target} after {slow_ms}ms, found {}",
        router.active_screen()
    );
    Ok(())
}
