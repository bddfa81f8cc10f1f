//! App Title
//!
//! Headless view-model of the app-bar title: brand, role title, verification
//! chip and workspace switcher. Owns the verification state and keeps it fresh
//! by re-running the resolver on mount, on `OnboardingUpdated` and when the
//! role or admin status changes.

mod workspace;

pub use workspace::{UnknownWorkspace, Workspace, WorkspaceContext};

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::ApiClient;
use crate::event_bus::{AppEvent, EventBus};
use crate::onboarding::{RoleToken, VerificationResolver};
use crate::session::SessionUser;

pub const BRAND: &str = "ChemistTasker";

/// Inputs supplied by the surrounding application
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleProps {
    /// Raw role label, e.g. "Other Staff"
    pub role_label: String,
    pub user: SessionUser,
}

impl TitleProps {
    pub fn new(role_label: impl Into<String>, user: SessionUser) -> Self {
        Self {
            role_label: role_label.into(),
            user,
        }
    }

    pub fn role(&self) -> RoleToken {
        RoleToken::from_label(&self.role_label)
    }

    /// What a resolution depends on
    fn identity(&self) -> (RoleToken, bool) {
        (self.role(), self.user.is_pharmacy_admin())
    }
}

/// View state written by the resolution loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleState {
    pub verified: bool,
    /// Completed resolutions applied to this title
    pub resolutions: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Verified,
    Pending,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Pending => "Pending",
        }
    }
}

impl From<bool> for VerificationStatus {
    fn from(verified: bool) -> Self {
        if verified {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Pending
        }
    }
}

/// One rendering of the title
#[derive(Debug, Clone, PartialEq)]
pub struct TitleView {
    pub brand: &'static str,
    pub role_title: &'static str,
    pub status: VerificationStatus,
    /// Present only when the switcher is shown
    pub workspace: Option<Workspace>,
}

impl TitleView {
    pub fn show_switcher(&self) -> bool {
        self.workspace.is_some()
    }
}

impl fmt::Display for TitleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | [{}]", self.brand, self.role_title, self.status.label())?;
        if let Some(workspace) = self.workspace {
            write!(f, " | workspace: {}", workspace)?;
        }
        Ok(())
    }
}

/// A mounted title. Dropping it has the same effect as [`AppTitle::unmount`].
pub struct AppTitle {
    props: watch::Sender<TitleProps>,
    state: watch::Receiver<TitleState>,
    alive: Arc<AtomicBool>,
    workspace: Arc<WorkspaceContext>,
    task: Option<JoinHandle<()>>,
}

impl AppTitle {
    /// Mount the title and start resolving. Must be called inside a tokio
    /// runtime.
    pub fn mount(
        client: ApiClient,
        events: Arc<EventBus>,
        workspace: Arc<WorkspaceContext>,
        props: TitleProps,
    ) -> Self {
        // Subscribe before spawning so nothing published after mount is missed
        let notifications = events.subscribe();
        let (props_tx, props_rx) = watch::channel(props);
        let (state_tx, state_rx) = watch::channel(TitleState::default());
        let alive = Arc::new(AtomicBool::new(true));

        let task = tokio::spawn(resolution_loop(
            client,
            events,
            notifications,
            props_rx,
            state_tx,
            alive.clone(),
        ));

        Self {
            props: props_tx,
            state: state_rx,
            alive,
            workspace,
            task: Some(task),
        }
    }

    /// Replace the inputs. Resolution re-runs only if the role token or admin
    /// status changed.
    pub fn set_identity(&self, props: TitleProps) {
        self.props.send_replace(props);
    }

    pub fn props(&self) -> TitleProps {
        self.props.borrow().clone()
    }

    pub fn is_verified(&self) -> bool {
        self.state.borrow().verified
    }

    pub fn state(&self) -> watch::Receiver<TitleState> {
        self.state.clone()
    }

    pub fn workspace(&self) -> &WorkspaceContext {
        &self.workspace
    }

    pub fn render(&self) -> TitleView {
        let props = self.props.borrow();
        let role = props.role();
        let is_admin = props.user.is_pharmacy_admin();

        TitleView {
            brand: BRAND,
            role_title: role.dashboard_title(is_admin),
            status: self.is_verified().into(),
            workspace: role.switcher_visible().then(|| self.workspace.get()),
        }
    }

    /// Tear the title down. A pending resolution is abandoned and no result
    /// reaches the state afterwards. The returned handle completes once the
    /// loop exits.
    pub fn unmount(mut self) -> JoinHandle<()> {
        self.alive.store(false, Ordering::SeqCst);
        match self.task.take() {
            Some(task) => task,
            None => tokio::spawn(async {}),
        }
    }
}

impl Drop for AppTitle {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

async fn resolution_loop(
    client: ApiClient,
    events: Arc<EventBus>,
    mut notifications: broadcast::Receiver<AppEvent>,
    mut props: watch::Receiver<TitleProps>,
    state: watch::Sender<TitleState>,
    alive: Arc<AtomicBool>,
) {
    let mut identity = props.borrow_and_update().identity();

    loop {
        if !alive.load(Ordering::SeqCst) {
            return;
        }
        let resolver = VerificationResolver::for_role(client.clone(), &identity.0, identity.1);
        let resolve = resolver.resolve();
        tokio::pin!(resolve);

        // An identity change abandons the run in progress
        let verified = loop {
            tokio::select! {
                verified = &mut resolve => break Some(verified),
                changed = props.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    let next = props.borrow_and_update().identity();
                    if next != identity {
                        identity = next;
                        break None;
                    }
                }
            }
        };
        let Some(verified) = verified else {
            debug!("identity changed, discarding verification for {}", resolver.category());
            continue;
        };

        if !alive.load(Ordering::SeqCst) {
            debug!("title unmounted, discarding verification result");
            return;
        }
        state.send_modify(|s| {
            s.verified = verified;
            s.resolutions += 1;
        });
        events.publish(AppEvent::VerificationResolved {
            category: resolver.category().to_string(),
            verified,
        });

        // Wait for the next trigger
        loop {
            tokio::select! {
                event = notifications.recv() => match event {
                    Ok(AppEvent::OnboardingUpdated) => break,
                    Ok(_) => continue,
                    Err(RecvError::Lagged(missed)) => {
                        debug!("missed {} notifications, refreshing", missed);
                        drain(&mut notifications);
                        break;
                    }
                    Err(RecvError::Closed) => return,
                },
                changed = props.changed() => {
                    // Sender gone: the title was dropped
                    if changed.is_err() {
                        return;
                    }
                    let next = props.borrow_and_update().identity();
                    if next != identity {
                        identity = next;
                        break;
                    }
                }
            }
        }
    }
}

/// Discard everything queued; one refresh covers it
fn drain(notifications: &mut broadcast::Receiver<AppEvent>) {
    loop {
        match notifications.try_recv() {
            Ok(_) | Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => return,
        }
    }
}
