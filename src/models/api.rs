use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// HTTP method an API definition is exposed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Parse an exact upper-case method name
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }

    /// Tag colour used by the listing table
    pub fn tag_color(&self) -> &'static str {
        match self {
            Self::Get => "green",
            Self::Post => "blue",
            Self::Put => "orange",
            Self::Delete => "red",
        }
    }
}

/// Lifecycle status of an API definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    /// Editable, not yet published
    Draft,
    /// Published; never goes back to draft
    Published,
}

impl ApiStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    pub fn tag_color(&self) -> &'static str {
        match self {
            Self::Draft => "orange",
            Self::Published => "green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDefinition {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub business: String,
    pub method: HttpMethod,
    pub status: ApiStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The mutable part of an API definition, as accepted from the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFields {
    pub name: String,
    pub description: String,
    pub business: String,
    pub method: HttpMethod,
}

impl ApiDefinition {
    /// Current mutable fields of this record
    pub fn fields(&self) -> ApiFields {
        ApiFields {
            name: self.name.clone(),
            description: self.description.clone(),
            business: self.business.clone(),
            method: self.method,
        }
    }

    /// Case-insensitive substring match against name or business.
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.business.to_lowercase().contains(needle)
    }
}
