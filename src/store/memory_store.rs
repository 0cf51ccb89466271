use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{AppError, AppResult};
use crate::models::{ApiDefinition, ApiFields, Notification};
use crate::services::{
    lifecycle, listing, ApiForm, FormPatch, ListQuery, PublishOutcome, Submission,
};
use crate::store::{ApiPage, ApiStore, NotificationFeed};

pub const CREATED_MESSAGE: &str = "API created successfully";
pub const UPDATED_MESSAGE: &str = "API updated successfully";
pub const PUBLISHED_MESSAGE: &str = "API published successfully";
pub const ALREADY_PUBLISHED_MESSAGE: &str = "API is already published";

/// Process-local store; everything is lost on restart
#[derive(Clone)]
pub struct InMemoryApiStore {
    records: Arc<Mutex<Vec<ApiDefinition>>>,
    clock: Arc<dyn Clock>,
    notifications: NotificationFeed,
}

impl InMemoryApiStore {
    pub fn new(clock: Arc<dyn Clock>, notifications: NotificationFeed) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            clock,
            notifications,
        }
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl ApiStore for InMemoryApiStore {
    // Notifications are pushed while the records lock is held so the feed
    // follows the order mutations were applied in.

    async fn create(&self, fields: ApiFields) -> AppResult<ApiDefinition> {
        let mut records = self.records.lock().await;
        let now = self.clock.now();
        let (next, created) = lifecycle::create(&records, Uuid::new_v4(), fields, now)?;
        *records = next;

        self.notifications
            .push(Notification::success(CREATED_MESSAGE, created.id, now))
            .await;
        Ok(created)
    }

    async fn update(&self, id: Uuid, fields: ApiFields) -> AppResult<ApiDefinition> {
        let mut records = self.records.lock().await;
        let now = self.clock.now();
        let (next, updated) = lifecycle::update(&records, id, fields, now)?;
        *records = next;

        self.notifications
            .push(Notification::success(UPDATED_MESSAGE, id, now))
            .await;
        Ok(updated)
    }

    async fn edit(&self, id: Uuid, patch: FormPatch) -> AppResult<ApiDefinition> {
        let mut records = self.records.lock().await;
        let now = self.clock.now();
        let current = records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound("Api".to_string()))?;

        let mut form = ApiForm::new();
        form.open_edit(current);
        form.fill(patch)?;
        let Submission::Update { fields, .. } = form.submit()? else {
            return Err(AppError::Internal("edit form submitted as create".to_string()));
        };

        let (next, updated) = lifecycle::update(&records, id, fields, now)?;
        *records = next;

        self.notifications
            .push(Notification::success(UPDATED_MESSAGE, id, now))
            .await;
        Ok(updated)
    }

    async fn publish(&self, id: Uuid) -> AppResult<PublishOutcome> {
        let mut records = self.records.lock().await;
        let now = self.clock.now();
        let (next, outcome) = lifecycle::publish(&records, id, now)?;
        *records = next;

        let notification = match &outcome {
            PublishOutcome::Published(_) => Notification::success(PUBLISHED_MESSAGE, id, now),
            PublishOutcome::AlreadyPublished(_) => {
                Notification::info(ALREADY_PUBLISHED_MESSAGE, id, now)
            }
        };
        self.notifications.push(notification).await;
        Ok(outcome)
    }

    async fn get(&self, id: Uuid) -> AppResult<ApiDefinition> {
        let records = self.records.lock().await;
        records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Api".to_string()))
    }

    async fn filter(&self, query: &str) -> AppResult<Vec<ApiDefinition>> {
        let records = self.records.lock().await;
        Ok(lifecycle::filter(&records, query)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn list(&self, params: &ListQuery) -> AppResult<ApiPage> {
        let records = self.records.lock().await;
        let page = listing::page(&records, params);
        Ok(ApiPage {
            rows: page.rows.into_iter().cloned().collect(),
            total: page.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::models::{ApiStatus, HttpMethod, NotificationLevel};
    use time::macros::datetime;
    use time::Duration;

    fn store() -> (InMemoryApiStore, Arc<ManualClock>, NotificationFeed) {
        let clock = Arc::new(ManualClock::new(datetime!(2024-01-15 10:30 UTC)));
        let feed = NotificationFeed::new(50);
        let store = InMemoryApiStore::new(clock.clone(), feed.clone());
        (store, clock, feed)
    }

    fn orders() -> ApiFields {
        ApiFields {
            name: "Orders API".to_string(),
            description: "x".to_string(),
            business: "Checkout".to_string(),
            method: HttpMethod::Post,
        }
    }

    #[tokio::test]
    async fn test_create_publish_filter_scenario() {
        let (store, clock, feed) = store();

        let created = store.create(orders()).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(created.status, ApiStatus::Draft);
        assert_eq!(created.created_at, created.updated_at);

        clock.advance(Duration::minutes(1));
        let outcome = store.publish(created.id).await.unwrap();
        let published = outcome.record();
        assert_eq!(published.status, ApiStatus::Published);
        assert!(published.updated_at > created.updated_at);

        let hits = store.filter("checkout").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, created.id);
        assert!(store.filter("billing").await.unwrap().is_empty());

        let recent = feed.recent(0, 10).await;
        assert_eq!(recent[0].message, PUBLISHED_MESSAGE);
        assert_eq!(recent[1].message, CREATED_MESSAGE);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let (store, _, _) = store();
        let a = store.create(orders()).await.unwrap();
        let b = store.create(orders()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_update_missing_id_reports_not_found() {
        let (store, _, feed) = store();
        store.create(orders()).await.unwrap();

        let result = store.update(Uuid::new_v4(), orders()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // Only the create notification
        assert_eq!(feed.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_with_frozen_clock_still_advances() {
        let (store, _, _) = store();
        let created = store.create(orders()).await.unwrap();

        let mut fields = orders();
        fields.name = "Orders v2".to_string();
        let updated = store.update(created.id, fields).await.unwrap();

        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_republish_is_quiet() {
        let (store, clock, feed) = store();
        let created = store.create(orders()).await.unwrap();
        let first = store.publish(created.id).await.unwrap().into_record();

        clock.advance(Duration::hours(1));
        let second = store.publish(created.id).await.unwrap();
        assert!(matches!(second, PublishOutcome::AlreadyPublished(_)));
        assert_eq!(second.record().updated_at, first.updated_at);

        let latest = &feed.recent(0, 1).await[0];
        assert_eq!(latest.level, NotificationLevel::Info);
        assert_eq!(latest.message, ALREADY_PUBLISHED_MESSAGE);
    }

    #[tokio::test]
    async fn test_submit_dispatches_on_mode() {
        let (store, clock, _) = store();
        let created = store
            .submit(Submission::Create(orders()))
            .await
            .unwrap();

        clock.advance(Duration::seconds(1));
        let mut fields = orders();
        fields.business = "Payments".to_string();
        let updated = store
            .submit(Submission::Update {
                id: created.id,
                fields,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.business, "Payments");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_edit_merges_patch_into_current_record() {
        let (store, clock, feed) = store();
        let created = store.create(orders()).await.unwrap();

        clock.advance(Duration::seconds(1));
        let edited = store
            .edit(
                created.id,
                FormPatch {
                    business: Some("Fulfilment".to_string()),
                    ..FormPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(edited.name, created.name);
        assert_eq!(edited.method, created.method);
        assert_eq!(edited.business, "Fulfilment");
        assert_eq!(feed.recent(0, 1).await[0].message, UPDATED_MESSAGE);
    }

    #[tokio::test]
    async fn test_edit_rejects_blank_field_without_change() {
        let (store, _, feed) = store();
        let created = store.create(orders()).await.unwrap();

        let result = store
            .edit(
                created.id,
                FormPatch {
                    name: Some("  ".to_string()),
                    ..FormPatch::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::InvalidFields(_))));
        assert_eq!(store.get(created.id).await.unwrap(), created);
        assert_eq!(feed.len().await, 1);
    }

    #[tokio::test]
    async fn test_edit_missing_id_reports_not_found() {
        let (store, _, _) = store();
        let result = store.edit(Uuid::new_v4(), FormPatch::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_edits_keep_every_field() {
        let (store, _, _) = store();
        let created = store.create(orders()).await.unwrap();

        for round in 0..50 {
            let name = format!("Orders {}", round);
            let business = format!("Team {}", round);

            let renamer = {
                let store = store.clone();
                let patch = FormPatch {
                    name: Some(name.clone()),
                    ..FormPatch::default()
                };
                tokio::spawn(async move { store.edit(created.id, patch).await })
            };
            let mover = {
                let store = store.clone();
                let patch = FormPatch {
                    business: Some(business.clone()),
                    ..FormPatch::default()
                };
                tokio::spawn(async move { store.edit(created.id, patch).await })
            };
            renamer.await.unwrap().unwrap();
            mover.await.unwrap().unwrap();

            let stored = store.get(created.id).await.unwrap();
            assert_eq!(stored.name, name);
            assert_eq!(stored.business, business);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_feed_follows_mutation_order() {
        let (store, _, feed) = store();

        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create(orders()).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored: Vec<Uuid> = store.filter("").await.unwrap().iter().map(|r| r.id).collect();
        let announced: Vec<Uuid> = feed
            .recent(0, 20)
            .await
            .iter()
            .rev()
            .map(|n| n.api_id)
            .collect();
        assert_eq!(announced, stored);
    }
}
