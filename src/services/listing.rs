//! Table view over the record collection: filter, name sort, paging and
//! the per-row actions the console offers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ApiDefinition;
use crate::services::lifecycle;

/// Rows shown per page when the caller does not ask for a size
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Everything the table needs to derive one page of rows
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub query: String,
    /// `None` keeps store order
    pub name_sort: Option<SortOrder>,
    pub limit: u64,
    pub offset: u64,
}

/// Actions available on a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RowActions {
    pub view: bool,
    pub edit: bool,
    /// Disabled once the record is published
    pub publish: bool,
    pub publish_label: String,
}

impl RowActions {
    pub fn for_record(record: &ApiDefinition) -> Self {
        let published = record.status.is_published();
        Self {
            view: true,
            edit: true,
            publish: !published,
            publish_label: if published { "Published" } else { "Publish" }.to_string(),
        }
    }
}

/// One page of the table plus the size of the filtered set
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub rows: Vec<&'a ApiDefinition>,
    pub total: u64,
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort by name ignoring case, stable so equal names keep store order.
/// Names differing only in case fall back to byte order.
pub fn sort_by_name(rows: &mut [&ApiDefinition], order: SortOrder) {
    match order {
        SortOrder::Asc => rows.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOrder::Desc => rows.sort_by(|a, b| compare_names(&b.name, &a.name)),
    }
}

pub fn page<'a>(records: &'a [ApiDefinition], params: &ListQuery) -> Page<'a> {
    let mut rows = lifecycle::filter(records, &params.query);
    if let Some(order) = params.name_sort {
        sort_by_name(&mut rows, order);
    }

    let total = rows.len() as u64;
    let rows = rows
        .into_iter()
        .skip(params.offset as usize)
        .take(params.limit as usize)
        .collect();

    Page { rows, total }
}
