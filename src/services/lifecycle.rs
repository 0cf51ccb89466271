//! Pure state transitions over the record collection.
//!
//! Every function takes the current records by reference and returns the
//! next collection together with the affected record. Nothing here reads
//! the clock, generates ids or emits notifications; the store does that
//! around these calls.

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{ApiDefinition, ApiFields, ApiStatus};

/// Result of applying a publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Draft moved to published
    Published(ApiDefinition),
    /// Record was already published; nothing changed
    AlreadyPublished(ApiDefinition),
}

impl PublishOutcome {
    pub fn record(&self) -> &ApiDefinition {
        match self {
            Self::Published(r) | Self::AlreadyPublished(r) => r,
        }
    }

    pub fn into_record(self) -> ApiDefinition {
        match self {
            Self::Published(r) | Self::AlreadyPublished(r) => r,
        }
    }
}

/// Next `updated_at` for a record last touched at `previous`.
/// Strictly greater than `previous` even if the clock has not moved.
fn next_timestamp(previous: OffsetDateTime, now: OffsetDateTime) -> OffsetDateTime {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

fn position(records: &[ApiDefinition], id: Uuid) -> AppResult<usize> {
    records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound("Api".to_string()))
}

/// Append a new draft record built from validated fields
pub fn create(
    records: &[ApiDefinition],
    id: Uuid,
    fields: ApiFields,
    now: OffsetDateTime,
) -> AppResult<(Vec<ApiDefinition>, ApiDefinition)> {
    if records.iter().any(|r| r.id == id) {
        return Err(AppError::Conflict(format!("Api {}", id)));
    }

    let record = ApiDefinition {
        id,
        name: fields.name,
        description: fields.description,
        business: fields.business,
        method: fields.method,
        status: ApiStatus::Draft,
        created_at: now,
        updated_at: now,
    };

    let mut next = records.to_vec();
    next.push(record.clone());
    Ok((next, record))
}

/// Replace the mutable fields of the record with `id`
pub fn update(
    records: &[ApiDefinition],
    id: Uuid,
    fields: ApiFields,
    now: OffsetDateTime,
) -> AppResult<(Vec<ApiDefinition>, ApiDefinition)> {
    let index = position(records, id)?;
    let mut next = records.to_vec();
    let record = &mut next[index];

    record.name = fields.name;
    record.description = fields.description;
    record.business = fields.business;
    record.method = fields.method;
    record.updated_at = next_timestamp(record.updated_at, now);

    let updated = record.clone();
    Ok((next, updated))
}

/// Move the record with `id` to published. Re-publishing leaves the
/// collection untouched, including `updated_at`.
pub fn publish(
    records: &[ApiDefinition],
    id: Uuid,
    now: OffsetDateTime,
) -> AppResult<(Vec<ApiDefinition>, PublishOutcome)> {
    let index = position(records, id)?;

    if records[index].status.is_published() {
        let current = records[index].clone();
        return Ok((records.to_vec(), PublishOutcome::AlreadyPublished(current)));
    }

    let mut next = records.to_vec();
    let record = &mut next[index];
    record.status = ApiStatus::Published;
    record.updated_at = next_timestamp(record.updated_at, now);

    let published = record.clone();
    Ok((next, PublishOutcome::Published(published)))
}

/// Records whose name or business contains `query`, ignoring case, in
/// store order. An empty query keeps everything.
pub fn filter<'a>(records: &'a [ApiDefinition], query: &str) -> Vec<&'a ApiDefinition> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.matches_lowercase(&needle))
        .collect()
}
