use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::bank::Question;
use super::engine::{AnswerSet, PersonalityResult, QuizScoringEngine};
use super::repository::{
    ListingId, PersonalityProfileRecord, PersonalityProfileRepository, RepositoryError,
};

/// Service composing the scoring engine with listing profile storage.
pub struct QuizService<R> {
    engine: Arc<QuizScoringEngine>,
    repository: Arc<R>,
}

impl<R> QuizService<R>
where
    R: PersonalityProfileRepository + 'static,
{
    pub fn new(engine: Arc<QuizScoringEngine>, repository: Arc<R>) -> Self {
        Self { engine, repository }
    }

    pub fn questions(&self) -> &[Question] {
        self.engine.bank().questions()
    }

    /// Score answers without attaching them to a listing.
    pub fn calculate(&self, answers: &AnswerSet) -> PersonalityResult {
        self.engine.score(answers)
    }

    /// Score answers and store the result against a listing, replacing any prior submission.
    pub fn submit(
        &self,
        listing_id: ListingId,
        answers: AnswerSet,
    ) -> Result<PersonalityProfileRecord, QuizServiceError> {
        if listing_id.0.trim().is_empty() {
            return Err(QuizServiceError::InvalidListing);
        }

        let result = self.engine.score(&answers);
        let record = PersonalityProfileRecord {
            listing_id,
            result,
            answers,
            submitted_at: Utc::now(),
        };

        self.repository.upsert(record.clone())?;
        info!(
            listing_id = %record.listing_id.0,
            personality = record.result.personality_type.name(),
            "stored listing personality profile"
        );

        Ok(record)
    }

    pub fn profile(
        &self,
        listing_id: &ListingId,
    ) -> Result<PersonalityProfileRecord, QuizServiceError> {
        let record = self
            .repository
            .fetch(listing_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error("listing id must not be empty")]
    InvalidListing,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
