use spotlight_core::{NavParams, NavigationController, Router, ScreenId};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn later_completion_wins() {
    let (handle, controller) = NavigationController::spawn(Router::default());

    let slow = {
        let handle = handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.navigate(ScreenId::UploadVideo, NavParams::new())
        })
    };
    let fast = {
        let handle = handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            handle.navigate(ScreenId::ManageAvailability, NavParams::new())
        })
    };

    slow.await.unwrap().unwrap();
    fast.await.unwrap().unwrap();
    drop(handle);

    let router = controller.await.unwrap();
    assert_eq!(router.active_screen(), ScreenId::UploadVideo);
}

#[tokio::test(start_paused = true)]
async fn snapshots_follow_each_applied_command() {
    let (handle, controller) = NavigationController::spawn(Router::default());
    let mut updates = handle.subscribe();

    handle
        .navigate(ScreenId::EventsGrid, NavParams::new())
        .unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().active_screen(), ScreenId::EventsGrid);

    handle
        .navigate(ScreenId::EventDetails, NavParams::new().with_event_id("ev-4"))
        .unwrap();
    updates.changed().await.unwrap();
    let state = updates.borrow_and_update().clone();
    assert_eq!(state.active_screen(), ScreenId::EventDetails);
    assert_eq!(state.params().event_id.as_deref(), Some("ev-4"));

    drop(handle);
    controller.await.unwrap();
}
