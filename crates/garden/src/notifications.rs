//! Toast notifications.
//!
//! Feature systems emit `NotificationEvent`s which are collected into
//! `NotificationLog`. Active notifications auto-dismiss after a per-priority
//! timeout; every notification is also kept in a bounded history.

use bevy::prelude::*;

use crate::config::{NOTIFICATION_HISTORY, NOTIFICATION_TTL_INFO, NOTIFICATION_TTL_WARNING};

// =============================================================================
// Priority Levels
// =============================================================================

/// Notification priority, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationPriority {
    /// Something went wrong (storage failures).
    Warning,
    /// Neutral confirmation (login, logout, cart cleared).
    Info,
    /// Good news (habit completed, item added).
    Positive,
}

impl NotificationPriority {
    /// Auto-dismiss duration in seconds.
    pub fn ttl_secs(&self) -> f64 {
        match self {
            NotificationPriority::Warning => NOTIFICATION_TTL_WARNING,
            NotificationPriority::Info | NotificationPriority::Positive => NOTIFICATION_TTL_INFO,
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationPriority::Warning => "WARNING",
            NotificationPriority::Info => "INFO",
            NotificationPriority::Positive => "NICE",
        }
    }
}

// =============================================================================
// Notification Struct
// =============================================================================

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub text: String,
    pub priority: NotificationPriority,
    /// App time (elapsed seconds) when the notification was created.
    pub created_secs: f64,
    pub dismissed: bool,
}

// =============================================================================
// Bevy Event
// =============================================================================

/// Event emitted by feature systems to create a notification.
///
/// # Example
/// ```ignore
/// fn my_system(mut events: EventWriter<NotificationEvent>) {
///     events.send(NotificationEvent {
///         text: "Added Basil Plant to cart".to_string(),
///         priority: NotificationPriority::Positive,
///     });
/// }
/// ```
#[derive(Event, Debug, Clone)]
pub struct NotificationEvent {
    pub text: String,
    pub priority: NotificationPriority,
}

impl NotificationEvent {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Info,
        }
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Positive,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Warning,
        }
    }
}

/// Emitted by the notification ticker when the user closes a toast.
#[derive(Event, Debug, Clone, Copy)]
pub struct DismissNotificationEvent {
    pub id: u64,
}

// =============================================================================
// NotificationLog Resource
// =============================================================================

/// Active notifications plus the history of everything shown.
#[derive(Resource)]
pub struct NotificationLog {
    pub active: Vec<Notification>,
    pub history: Vec<Notification>,
    /// Maximum history size before old entries are trimmed.
    pub max_history: usize,
    next_id: u64,
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            history: Vec::new(),
            max_history: NOTIFICATION_HISTORY,
            next_id: 1,
        }
    }
}

impl NotificationLog {
    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a notification from an event, returning its id.
    pub fn push(&mut self, event: &NotificationEvent, now_secs: f64) -> u64 {
        let id = self.next_id();
        let notification = Notification {
            id,
            text: event.text.clone(),
            priority: event.priority,
            created_secs: now_secs,
            dismissed: false,
        };
        self.history.push(notification.clone());
        self.active.push(notification);

        if self.history.len() > self.max_history {
            let excess = self.history.len() - self.max_history;
            self.history.drain(0..excess);
        }
        id
    }

    /// Mark a notification as dismissed. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        if let Some(n) = self.active.iter_mut().find(|n| n.id == id) {
            n.dismissed = true;
        }
    }

    /// Remove dismissed and expired notifications from the active list.
    pub fn sweep(&mut self, now_secs: f64) {
        self.active.retain(|n| {
            !n.dismissed && now_secs - n.created_secs < n.priority.ttl_secs()
        });
    }
}

// =============================================================================
// Systems
// =============================================================================

fn collect_notifications(
    mut events: EventReader<NotificationEvent>,
    mut log: ResMut<NotificationLog>,
    time: Res<Time>,
) {
    let now = time.elapsed_secs_f64();
    for event in events.read() {
        log.push(event, now);
    }
}

fn handle_dismissals(
    mut events: EventReader<DismissNotificationEvent>,
    mut log: ResMut<NotificationLog>,
) {
    for event in events.read() {
        log.dismiss(event.id);
    }
}

fn sweep_expired_notifications(mut log: ResMut<NotificationLog>, time: Res<Time>) {
    if log.active.is_empty() {
        return;
    }
    log.sweep(time.elapsed_secs_f64());
}

// =============================================================================
// Plugin
// =============================================================================

pub struct NotificationsPlugin;

impl Plugin for NotificationsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NotificationLog>()
            .add_event::<NotificationEvent>()
            .add_event::<DismissNotificationEvent>()
            .add_systems(
                Update,
                (
                    collect_notifications,
                    handle_dismissals,
                    sweep_expired_notifications,
                )
                    .chain()
                    .after(crate::GardenSet::Persist),
            );
    }
}

// =============================================================================
// Tests
// =============================================================================
