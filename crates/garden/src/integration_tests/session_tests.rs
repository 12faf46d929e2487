use crate::app_state::Page;
use crate::config::{LOGGED_IN_KEY, USERNAME_KEY};
use crate::notifications::{NotificationLog, NotificationPriority};
use crate::session::{LoginEvent, LogoutEvent, Session};
use crate::test_harness::TestGarden;

#[test]
fn session_is_read_at_startup() {
    let garden = TestGarden::builder()
        .with_entry(LOGGED_IN_KEY, "true")
        .with_entry(USERNAME_KEY, "fern")
        .build();
    let session = garden.resource::<Session>();
    assert!(session.is_logged_in());
    assert_eq!(session.username(), Some("fern"));
}

#[test]
fn login_writes_keys_and_opens_habits() {
    let mut garden = TestGarden::new();
    garden.dispatch(LoginEvent {
        username: " fern ".to_string(),
    });
    garden.update();

    assert!(garden.resource::<Session>().is_logged_in());
    assert_eq!(garden.stored(LOGGED_IN_KEY).as_deref(), Some("true"));
    assert_eq!(garden.stored(USERNAME_KEY).as_deref(), Some("fern"));
    assert_eq!(garden.page(), Page::Habits);
}

#[test]
fn blank_login_is_rejected_with_warning() {
    let mut garden = TestGarden::new();
    garden.dispatch(LoginEvent {
        username: "   ".to_string(),
    });
    garden.update();

    assert!(!garden.resource::<Session>().is_logged_in());
    assert_eq!(garden.stored(LOGGED_IN_KEY), None);
    assert_eq!(garden.page(), Page::Home);
    let log = garden.resource::<NotificationLog>();
    assert!(log
        .history
        .iter()
        .any(|n| n.priority == NotificationPriority::Warning));
}

#[test]
fn logout_clears_keys_and_returns_home() {
    let mut garden = TestGarden::builder()
        .with_entry(LOGGED_IN_KEY, "true")
        .with_entry(USERNAME_KEY, "fern")
        .build();
    garden.dispatch(LogoutEvent);
    garden.update();

    assert!(!garden.resource::<Session>().is_logged_in());
    assert_eq!(garden.stored(LOGGED_IN_KEY), None);
    assert_eq!(garden.stored(USERNAME_KEY), None);
    assert_eq!(garden.page(), Page::Home);
}

#[test]
fn session_survives_restart_until_logout() {
    let mut garden = TestGarden::new();
    garden.dispatch(LoginEvent {
        username: "fern".to_string(),
    });
    let mut restarted = garden.restart();
    assert!(restarted.resource::<Session>().is_logged_in());

    restarted.dispatch(LogoutEvent);
    let again = restarted.restart();
    assert!(!again.resource::<Session>().is_logged_in());
}
