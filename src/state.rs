use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::store::{ApiStore, InMemoryApiStore, NotificationFeed};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Sole owner of the API definitions
    pub store: Arc<dyn ApiStore>,
    pub notifications: NotificationFeed,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState backed by the system clock
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create AppState with a custom clock (for testing)
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let notifications = NotificationFeed::new(config.notification_capacity);
        let store: Arc<dyn ApiStore> =
            Arc::new(InMemoryApiStore::new(clock, notifications.clone()));

        Self {
            store,
            notifications,
            config,
        }
    }
}
