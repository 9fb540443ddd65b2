use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::quiz::repository::{
    ListingId, PersonalityProfileRecord, PersonalityProfileRepository, RepositoryError,
};
use crate::quiz::{AnswerSet, QuestionBank, QuizScoringEngine, QuizService};

pub(super) fn engine() -> QuizScoringEngine {
    QuizScoringEngine::new(Arc::new(QuestionBank::standard()))
}

pub(super) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn answers(pairs: &[(u32, &str)]) -> AnswerSet {
    pairs
        .iter()
        .map(|(question, option)| (*question, option.to_string()))
        .collect()
}

pub(super) fn service<R>(repository: R) -> Arc<QuizService<R>>
where
    R: PersonalityProfileRepository + 'static,
{
    Arc::new(QuizService::new(Arc::new(engine()), Arc::new(repository)))
}

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    records: Arc<Mutex<HashMap<ListingId, PersonalityProfileRecord>>>,
}

impl MemoryProfiles {
    pub(super) fn stored(&self) -> usize {
        self.records.lock().expect("profiles mutex poisoned").len()
    }
}

impl PersonalityProfileRepository for MemoryProfiles {
    fn upsert(&self, record: PersonalityProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("profiles mutex poisoned");
        guard.insert(record.listing_id.clone(), record);
        Ok(())
    }

    fn fetch(
        &self,
        listing_id: &ListingId,
    ) -> Result<Option<PersonalityProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("profiles mutex poisoned");
        Ok(guard.get(listing_id).cloned())
    }
}

pub(super) struct UnavailableProfiles;

impl PersonalityProfileRepository for UnavailableProfiles {
    fn upsert(&self, _record: PersonalityProfileRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(
        &self,
        _listing_id: &ListingId,
    ) -> Result<Option<PersonalityProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let value = serde_json::from_slice(&body).expect("json body");
    (status, value)
}
