//! Login session.
//!
//! The session is read once from storage at startup and lives in the
//! [`Session`] resource. Views read the resource and send [`LoginEvent`] /
//! [`LogoutEvent`]; nothing outside this module touches the session keys.
//! There is no credential check, a username is all it takes.

use std::fmt;

use bevy::prelude::*;

use crate::app_state::Page;
use crate::config::{LOGGED_IN_KEY, LOGGED_IN_VALUE, USERNAME_KEY};
use crate::notifications::NotificationEvent;
use crate::storage::{KeyValueStore, LocalStorage, StorageError};
use crate::GardenSet;

#[derive(Debug)]
pub enum SessionError {
    EmptyUsername,
    /// The session changed in memory but could not be written.
    Storage(StorageError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyUsername => write!(f, "Please enter a username"),
            SessionError::Storage(e) => write!(f, "Session not saved: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Storage(e) => Some(e),
            SessionError::EmptyUsername => None,
        }
    }
}

impl From<StorageError> for SessionError {
    fn from(e: StorageError) -> Self {
        SessionError::Storage(e)
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    username: Option<String>,
}

impl Session {
    /// Read the session flags. Only the exact value `"true"` counts as logged
    /// in; read failures are logged and yield a logged-out session.
    pub fn init(store: &dyn KeyValueStore) -> Self {
        let logged_in = match store.get(LOGGED_IN_KEY) {
            Ok(value) => value.as_deref() == Some(LOGGED_IN_VALUE),
            Err(e) => {
                warn!("Session: could not read {LOGGED_IN_KEY}: {e}");
                false
            }
        };
        let username = match store.get(USERNAME_KEY) {
            Ok(value) => value.filter(|name| !name.is_empty()),
            Err(e) => {
                warn!("Session: could not read {USERNAME_KEY}: {e}");
                None
            }
        };
        Self {
            logged_in,
            username,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Name shown in the navbar.
    pub fn display_name(&self) -> &str {
        self.username().unwrap_or("Gardener")
    }

    /// Log in as `username` (trimmed). The session is active even when the
    /// write fails; the error then only means it will not survive a restart.
    pub fn login(&mut self, username: &str, store: &mut dyn KeyValueStore) -> Result<(), SessionError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        self.logged_in = true;
        self.username = Some(username.to_string());

        // The flag goes last so a failed write never leaves a stored login
        // without its username.
        store.set(USERNAME_KEY, username)?;
        store.set(LOGGED_IN_KEY, LOGGED_IN_VALUE)?;
        Ok(())
    }

    /// Log out and clear both session keys.
    pub fn teardown(&mut self, store: &mut dyn KeyValueStore) -> Result<(), SessionError> {
        self.logged_in = false;
        self.username = None;

        store.remove(LOGGED_IN_KEY)?;
        store.remove(USERNAME_KEY)?;
        Ok(())
    }
}

// =============================================================================
// Events
// =============================================================================

#[derive(Event, Debug, Clone)]
pub struct LoginEvent {
    pub username: String,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LogoutEvent;

// =============================================================================
// Systems
// =============================================================================

fn load_session(mut session: ResMut<Session>, storage: Res<LocalStorage>) {
    *session = Session::init(storage.store());
    info!(
        "Session: {}",
        if session.is_logged_in() {
            "logged in"
        } else {
            "logged out"
        }
    );
}

fn handle_session_events(
    mut logins: EventReader<LoginEvent>,
    mut logouts: EventReader<LogoutEvent>,
    mut session: ResMut<Session>,
    mut storage: ResMut<LocalStorage>,
    mut next_page: ResMut<NextState<Page>>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for event in logins.read() {
        match session.login(&event.username, storage.store_mut()) {
            Ok(()) => {
                notifications.send(NotificationEvent::info(format!(
                    "Welcome, {}!",
                    session.display_name()
                )));
                next_page.set(Page::Habits);
            }
            Err(SessionError::EmptyUsername) => {
                notifications.send(NotificationEvent::warning(
                    SessionError::EmptyUsername.to_string(),
                ));
            }
            Err(e) => {
                error!("Session: {e}");
                notifications.send(NotificationEvent::warning(e.to_string()));
                next_page.set(Page::Habits);
            }
        }
    }

    if logouts.read().count() > 0 && session.is_logged_in() {
        if let Err(e) = session.teardown(storage.store_mut()) {
            error!("Session: {e}");
            notifications.send(NotificationEvent::warning(e.to_string()));
        }
        notifications.send(NotificationEvent::info("Logged out"));
        next_page.set(Page::Home);
    }
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Session>()
            .add_event::<LoginEvent>()
            .add_event::<LogoutEvent>()
            .add_systems(Startup, load_session)
            .add_systems(Update, handle_session_events.in_set(GardenSet::Mutate));
    }
}
