// Storage keys. These are shared with sessions persisted by earlier builds and
// must not change.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USERNAME_KEY: &str = "username";
pub const HABITS_KEY: &str = "gardenHabits";

/// Stored value of `LOGGED_IN_KEY` while a user is logged in.
pub const LOGGED_IN_VALUE: &str = "true";

/// Sentinel category selector meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Sales tax applied on top of the cart subtotal.
pub const TAX_RATE: f64 = 0.08;

/// Number of "add more items" suggestions shown next to the cart.
pub const MAX_SUGGESTIONS: usize = 3;

/// Number of tags shown on a gallery card before collapsing into "+N".
pub const TAG_PREVIEW_LIMIT: usize = 3;

/// Streak thresholds (in completions) for the display tiers.
pub const STREAK_WEEK: u32 = 7;
pub const STREAK_FORTNIGHT: u32 = 14;
pub const STREAK_MONTH: u32 = 30;

/// Auto-dismiss durations for on-screen notifications, in seconds.
pub const NOTIFICATION_TTL_WARNING: f64 = 8.0;
pub const NOTIFICATION_TTL_INFO: f64 = 4.0;

/// Maximum number of notifications kept in the history.
pub const NOTIFICATION_HISTORY: usize = 100;

/// Default file used by the native file-backed store.
pub const DEFAULT_STORAGE_FILE: &str = "garden_storage.json";
