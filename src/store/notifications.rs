use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::{Notification, NotificationLevel};

/// Upper bound on the slots reserved up front; the feed grows past it on demand
const PREALLOCATED: usize = 64;

/// Bounded feed of recent notifications. Oldest entries fall off once
/// `capacity` is reached.
#[derive(Clone)]
pub struct NotificationFeed {
    inner: Arc<Mutex<VecDeque<Notification>>>,
    capacity: usize,
}

impl NotificationFeed {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(
                capacity.min(PREALLOCATED),
            ))),
            capacity,
        }
    }

    pub async fn push(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!(
                api_id = %notification.api_id,
                "{}",
                notification.message
            ),
            NotificationLevel::Info => tracing::debug!(
                api_id = %notification.api_id,
                "{}",
                notification.message
            ),
        }

        let mut inner = self.inner.lock().await;
        if inner.len() == self.capacity {
            inner.pop_front();
        }
        inner.push_back(notification);
    }

    /// Up to `limit` notifications, newest first, skipping the newest `offset`
    pub async fn recent(&self, offset: usize, limit: usize) -> Vec<Notification> {
        let inner = self.inner.lock().await;
        inner.iter().rev().skip(offset).take(limit).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let feed = NotificationFeed::new(10);
        for message in ["first", "second", "third"] {
            feed.push(Notification::success(
                message,
                Uuid::new_v4(),
                OffsetDateTime::UNIX_EPOCH,
            ))
            .await;
        }

        let recent = feed.recent(0, 2).await;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "third");
        assert_eq!(recent[1].message, "second");

        let older = feed.recent(2, 10).await;
        assert_eq!(older.len(), 1);
        assert_eq!(older[0].message, "first");
    }

    #[tokio::test]
    async fn test_capacity_drops_oldest() {
        let feed = NotificationFeed::new(2);
        for message in ["a", "b", "c"] {
            feed.push(Notification::success(
                message,
                Uuid::new_v4(),
                OffsetDateTime::UNIX_EPOCH,
            ))
            .await;
        }

        assert_eq!(feed.len().await, 2);
        let recent = feed.recent(0, 10).await;
        assert_eq!(recent[1].message, "b");
    }

    #[tokio::test]
    async fn test_huge_capacity_does_not_preallocate() {
        let feed = NotificationFeed::new(usize::MAX);
        feed.push(Notification::success(
            "only",
            Uuid::new_v4(),
            OffsetDateTime::UNIX_EPOCH,
        ))
        .await;
        assert_eq!(feed.len().await, 1);
    }
}
