use cavoodle_market::quiz::{
    ListingId, PersonalityProfileRecord, PersonalityProfileRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local profile store; contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<ListingId, PersonalityProfileRecord>>>,
}

impl PersonalityProfileRepository for InMemoryProfileRepository {
    fn upsert(&self, record: PersonalityProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store poisoned".to_string()))?;
        guard.insert(record.listing_id.clone(), record);
        Ok(())
    }

    fn fetch(
        &self,
        listing_id: &ListingId,
    ) -> Result<Option<PersonalityProfileRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store poisoned".to_string()))?;
        Ok(guard.get(listing_id).cloned())
    }
}

/// Parse a `QUESTION=OPTION` pair such as `3=B`.
pub(crate) fn parse_answer(raw: &str) -> Result<(u32, String), String> {
    let (question, option) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=OPTION, got '{raw}'"))?;
    let question = question
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("question id '{}' is not a number ({err})", question.trim()))?;
    let option = option.trim();
    if option.is_empty() {
        return Err(format!("answer '{raw}' is missing an option id"));
    }
    Ok((question, option.to_string()))
}
