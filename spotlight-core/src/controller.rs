//! Async front for the [`Router`]: one consumer task applies commands sent
//! from any number of handles, in arrival order.
//!
//! Nothing ties a command to the operation that produced it. When two async
//! completions both navigate, whichever sends last wins.

use crate::params::NavParams;
use crate::router::{NavCommand, Router};
use crate::role::UserRole;
use crate::screen::ScreenId;
use crate::state::NavigationState;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("navigation controller has shut down")]
    Closed,
}

/// Cloneable sender side of a running controller.
#[derive(Clone, Debug)]
pub struct NavigationHandle {
    commands: mpsc::UnboundedSender<NavCommand>,
    snapshots: watch::Receiver<NavigationState>,
}

impl NavigationHandle {
    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] once the consumer task has stopped.
    pub fn send(&self, command: NavCommand) -> Result<(), ControllerError> {
        self.commands
            .send(command)
            .map_err(|_| ControllerError::Closed)
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] once the consumer task has stopped.
    pub fn navigate(&self, target: ScreenId, params: NavParams) -> Result<(), ControllerError> {
        self.send(NavCommand::Navigate { target, params })
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] once the consumer task has stopped.
    pub fn set_role(&self, role: UserRole) -> Result<(), ControllerError> {
        self.send(NavCommand::SetRole(role))
    }

    /// State as of the last applied command.
    #[must_use]
    pub fn snapshot(&self) -> NavigationState {
        self.snapshots.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.snapshots.clone()
    }
}

pub struct NavigationController;

impl NavigationController {
    /// Start the consumer task. It runs until every handle is dropped and
    /// then yields the final router.
    #[must_use]
    pub fn spawn(router: Router) -> (NavigationHandle, JoinHandle<Router>) {
        let (commands, mut inbox) = mpsc::unbounded_channel::<NavCommand>();
        let (publish, snapshots) = watch::channel(router.state().clone());

        let task = tokio::spawn(async move {
            let mut router = router;
            while let Some(command) = inbox.recv().await {
                router.apply(command);
                // No subscribers left is fine; the router is still returned.
                let _ = publish.send(router.state().clone());
            }
            log::debug!("navigation controller stopped on {}", router.active_screen());
            router
        });

        (
            NavigationHandle {
                commands,
                snapshots,
            },
            task,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ArtistRef;

    #[tokio::test]
    async fn applies_commands_in_send_order() {
        let (handle, task) = NavigationController::spawn(Router::default());
        handle.navigate(ScreenId::SearchDiscover, NavParams::new()).unwrap();
        handle
            .navigate(
                ScreenId::ArtistProfile,
                NavParams::new().with_artist(ArtistRef::new("a-1")),
            )
            .unwrap();
        handle.set_role(UserRole::Organizer).unwrap();
        let mut updates = handle.subscribe();
        drop(handle);

        let router = task.await.unwrap();
        assert_eq!(router.active_screen(), ScreenId::ArtistProfile);
        assert!(router.state().is_authenticated());
        assert_eq!(updates.borrow_and_update().active_screen(), ScreenId::ArtistProfile);
    }

    #[tokio::test]
    async fn send_after_shutdown_reports_closed() {
        let (handle, task) = NavigationController::spawn(Router::default());
        task.abort();
        let _ = task.await;
        assert_eq!(
            handle.navigate(ScreenId::Payment, NavParams::new()),
            Err(ControllerError::Closed)
        );
        assert_eq!(handle.snapshot().active_screen(), ScreenId::PublicHome);
    }
}
