use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

use crate::event_bus::{AppEvent, EventBus};

/// Which side of the marketplace the user is working in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workspace {
    /// Shifts from the open community marketplace
    #[default]
    Platform,
    /// Shifts from the user's own pharmacies and chains
    Internal,
}

impl Workspace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Workspace::Platform => "platform",
            Workspace::Internal => "internal",
        }
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown workspace '{0}', expected platform or internal")]
pub struct UnknownWorkspace(pub String);

impl FromStr for Workspace {
    type Err = UnknownWorkspace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "platform" => Ok(Workspace::Platform),
            "internal" => Ok(Workspace::Internal),
            other => Err(UnknownWorkspace(other.to_string())),
        }
    }
}

/// Holder of the active workspace: the value/setter pair the title's switcher
/// reads and writes
pub struct WorkspaceContext {
    tx: watch::Sender<Workspace>,
    events: Option<Arc<EventBus>>,
}

impl WorkspaceContext {
    pub fn new(initial: Workspace) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx, events: None }
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn get(&self) -> Workspace {
        *self.tx.borrow()
    }

    /// Returns true if the workspace actually changed
    pub fn set(&self, workspace: Workspace) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == workspace {
                false
            } else {
                *current = workspace;
                true
            }
        });
        if changed {
            if let Some(events) = &self.events {
                events.publish(AppEvent::WorkspaceChanged { workspace });
            }
        }
        changed
    }

    pub fn subscribe(&self) -> watch::Receiver<Workspace> {
        self.tx.subscribe()
    }
}

impl Default for WorkspaceContext {
    fn default() -> Self {
        Self::new(Workspace::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("Internal".parse::<Workspace>().unwrap(), Workspace::Internal);
        assert_eq!(" platform ".parse::<Workspace>().unwrap(), Workspace::Platform);
        assert_eq!(
            "Somewhere".parse::<Workspace>(),
            Err(UnknownWorkspace("somewhere".to_string()))
        );
    }

    #[tokio::test]
    async fn test_set_publishes_only_on_change() {
        let bus = Arc::new(EventBus::new());
        let mut rx = bus.subscribe();
        let ctx = WorkspaceContext::new(Workspace::Platform).with_events(bus.clone());

        assert!(!ctx.set(Workspace::Platform));
        assert!(ctx.set(Workspace::Internal));
        assert_eq!(ctx.get(), Workspace::Internal);

        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::WorkspaceChanged { workspace: Workspace::Internal }
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_subscribers_see_latest() {
        let ctx = WorkspaceContext::default();
        let mut rx = ctx.subscribe();
        ctx.set(Workspace::Internal);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Workspace::Internal);
    }
}
