use crate::infra::parse_answer;
use cavoodle_market::config::{AppConfig, QuizConfig};
use cavoodle_market::error::AppError;
use cavoodle_market::quiz::{
    AnswerSet, PersonalityResult, QuestionBank, QuizScoringEngine, TraitScores,
};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Load the question bank from a JSON file instead of the built-in quiz
    #[arg(long)]
    pub(crate) question_bank: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Answer as QUESTION=OPTION (repeatable), e.g. --answer 1=A --answer 3=B
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(u32, String)>,
    /// Load the question bank from a JSON file instead of the built-in quiz
    #[arg(long)]
    pub(crate) question_bank: Option<PathBuf>,
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

/// Resolve the bank the same way `serve` does: `QUIZ_QUESTION_BANK`, overridden by the flag.
fn quiz_config(question_bank: Option<PathBuf>) -> Result<QuizConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = question_bank {
        config.quiz.question_bank = Some(path);
    }
    Ok(config.quiz)
}

fn load_bank(question_bank: Option<PathBuf>) -> Result<QuestionBank, AppError> {
    Ok(quiz_config(question_bank)?.load_bank()?)
}

pub(crate) fn run_list_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let bank = load_bank(args.question_bank)?;

    for question in bank.questions() {
        println!("{}. {}", question.id, question.question);
        for option in &question.options {
            println!("   {}) {}", option.id, option.text);
        }
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        question_bank,
        json,
    } = args;

    let engine = QuizScoringEngine::new(Arc::new(load_bank(question_bank)?));
    let answers: AnswerSet = answers.into_iter().collect();
    let result = engine.score(&answers);

    if json {
        let rendered = serde_json::to_string_pretty(&result)?;
        println!("{rendered}");
    } else {
        let scores = engine.accumulate(&answers);
        print!("{}", render_result(&result, &scores));
    }

    Ok(())
}

fn render_result(result: &PersonalityResult, scores: &TraitScores) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({})\n",
        result.personality_display_name,
        result.personality_type.name()
    ));
    out.push_str(&format!("{}\n\n", result.custom_bio));
    out.push_str(&format!("Energy level: {}/5\n", result.energy_level));
    out.push_str(&format!("Floof factor: {}/5\n", result.floof_factor));
    out.push_str(&format!("Sass rating:  {}/5\n", result.sass_rating));

    let active: Vec<String> = scores
        .iter()
        .filter(|(_, total)| *total > 0)
        .map(|(kind, total)| format!("{}={}", kind.key(), total))
        .collect();
    if active.is_empty() {
        out.push_str("\nTrait totals: none (no recognised answers)\n");
    } else {
        out.push_str(&format!("\nTrait totals: {}\n", active.join(", ")));
    }

    out
}
