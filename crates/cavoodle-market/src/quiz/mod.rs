//! Personality quiz: question bank, trait accumulation and archetype classification.
//!
//! Scoring is deliberately lenient. Answers referencing unknown questions or
//! options are skipped, and weights for unrecognised traits are ignored, so a
//! submission never fails; only a malformed question bank is an error, and
//! that surfaces at startup.

pub mod bank;
pub mod catalog;
pub mod engine;
pub mod personality;
pub mod repository;
pub mod router;
pub mod service;
pub mod traits;

#[cfg(test)]
mod tests;

pub use bank::{Question, QuestionBank, QuestionBankError, QuizOption};
pub use catalog::{CatalogEntry, CatalogTraitScores};
pub use engine::{AnswerSet, PersonalityResult, QuizScoringEngine};
pub use personality::{classify, PersonalityProfile, PersonalityType};
pub use repository::{
    ListingId, PersonalityProfileRecord, PersonalityProfileRepository, RepositoryError,
};
pub use router::{quiz_router, QuizAnswersRequest};
pub use service::{QuizService, QuizServiceError};
pub use traits::{Trait, TraitScores};
