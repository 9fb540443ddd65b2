use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engine::{AnswerSet, PersonalityResult};

/// Identifier wrapper for marketplace listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// Scored quiz attached to a listing, with the raw answers kept for recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfileRecord {
    pub listing_id: ListingId,
    pub result: PersonalityResult,
    pub answers: AnswerSet,
    pub submitted_at: DateTime<Utc>,
}

/// Storage abstraction so the quiz service can be exercised without a database.
pub trait PersonalityProfileRepository: Send + Sync {
    /// Insert or replace the profile for the record's listing.
    fn upsert(&self, record: PersonalityProfileRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, listing_id: &ListingId)
        -> Result<Option<PersonalityProfileRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
