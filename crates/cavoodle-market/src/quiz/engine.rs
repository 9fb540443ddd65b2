use std::collections::BTreeMap;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bank::QuestionBank;
use super::personality::{classify, PersonalityType};
use super::traits::{Trait, TraitScores};

/// Submitted answers keyed by question id. Iterates in ascending question id.
pub type AnswerSet = BTreeMap<u32, String>;

const RATING_MIN: u32 = 1;
const RATING_MAX: u32 = 5;
const ENERGY_DIVISOR: u32 = 4;
const SASS_DIVISOR: u32 = 3;

/// Classification returned for a submitted answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityResult {
    pub personality_type: PersonalityType,
    pub personality_display_name: String,
    pub energy_level: u8,
    pub floof_factor: u8,
    pub sass_rating: u8,
    pub custom_bio: String,
}

/// Scores answer sets against a shared, immutable question bank.
#[derive(Debug, Clone)]
pub struct QuizScoringEngine {
    bank: Arc<QuestionBank>,
}

impl QuizScoringEngine {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Totals trait weights for every answer that resolves to a known question and option.
    pub fn accumulate(&self, answers: &AnswerSet) -> TraitScores {
        let mut scores = TraitScores::new();

        for (question_id, option_id) in answers {
            let Some(question) = self.bank.question(*question_id) else {
                debug!(question_id, "skipping answer for unknown question");
                continue;
            };
            let Some(option) = question.option(option_id) else {
                debug!(question_id, option_id = %option_id, "skipping unknown option");
                continue;
            };

            let dropped = scores.add_weights(&option.scores);
            if dropped > 0 {
                debug!(
                    question_id,
                    option_id = %option_id,
                    dropped,
                    "ignored weights for unrecognised traits"
                );
            }
        }

        scores
    }

    /// Scores with the calling thread's generator for the floof draw.
    pub fn score(&self, answers: &AnswerSet) -> PersonalityResult {
        self.score_with_rng(answers, &mut rand::thread_rng())
    }

    pub fn score_with_rng<R: Rng + ?Sized>(
        &self,
        answers: &AnswerSet,
        rng: &mut R,
    ) -> PersonalityResult {
        let scores = self.accumulate(answers);
        let personality_type = classify(&scores);

        PersonalityResult {
            personality_type,
            personality_display_name: personality_type.display_name().to_string(),
            energy_level: rating(scores.get(Trait::Energy) / ENERGY_DIVISOR),
            // Independent of the answers: floof is about the coat, not behavior.
            floof_factor: rng.gen_range(3..=5),
            sass_rating: rating(scores.get(Trait::Sass) / SASS_DIVISOR),
            custom_bio: personality_type.description().to_string(),
        }
    }
}

fn rating(raw: u32) -> u8 {
    raw.clamp(RATING_MIN, RATING_MAX) as u8
}
