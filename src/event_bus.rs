//! Application Event Bus
//!
//! Process-wide publish/subscribe channel. Carries the "onboarding updated"
//! notification that makes mounted titles re-resolve their verification state.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::title::Workspace;

/// Application-wide events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum AppEvent {
    /// Onboarding data was saved somewhere in the application
    OnboardingUpdated,
    /// The active workspace changed
    WorkspaceChanged { workspace: Workspace },
    /// A verification resolution finished
    VerificationResolved { category: String, verified: bool },
}

pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    /// Publish an event to all subscribers. No subscribers is fine.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Global singleton instance of the EventBus
    pub static ref APP_EVENT_BUS: Arc<EventBus> = Arc::new(EventBus::new());
}

/// Publish on the global bus
#[macro_export]
macro_rules! emit_event {
    ($event:expr) => {
        $crate::event_bus::APP_EVENT_BUS.publish($event);
    };
}
