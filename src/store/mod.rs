pub mod memory_store;
pub mod notifications;

pub use memory_store::InMemoryApiStore;
pub use notifications::NotificationFeed;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{ApiDefinition, ApiFields};
use crate::services::{FormPatch, ListQuery, PublishOutcome, Submission};

/// Rows of one listing page, already filtered, sorted and windowed
#[derive(Debug, Clone)]
pub struct ApiPage {
    pub rows: Vec<ApiDefinition>,
    pub total: u64,
}

/// Owner of the API definition collection.
/// Sole writer; every mutation goes through one of these calls.
#[async_trait]
pub trait ApiStore: Send + Sync {
    /// Add a new draft record
    async fn create(&self, fields: ApiFields) -> AppResult<ApiDefinition>;

    /// Replace the mutable fields of an existing record
    async fn update(&self, id: Uuid, fields: ApiFields) -> AppResult<ApiDefinition>;

    /// Pre-fill the edit form from the current record, apply `patch`,
    /// validate and update, without releasing the collection in between
    async fn edit(&self, id: Uuid, patch: FormPatch) -> AppResult<ApiDefinition>;

    /// Move a record to published (idempotent)
    async fn publish(&self, id: Uuid) -> AppResult<PublishOutcome>;

    /// Get record by ID
    async fn get(&self, id: Uuid) -> AppResult<ApiDefinition>;

    /// Records matching `query` in store order
    async fn filter(&self, query: &str) -> AppResult<Vec<ApiDefinition>>;

    /// One page of the listing table
    async fn list(&self, params: &ListQuery) -> AppResult<ApiPage>;

    /// Apply a submitted form, creating or updating by its mode
    async fn submit(&self, submission: Submission) -> AppResult<ApiDefinition> {
        match submission {
            Submission::Create(fields) => self.create(fields).await,
            Submission::Update { id, fields } => self.update(id, fields).await,
        }
    }
}
