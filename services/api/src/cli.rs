use crate::quiz::{run_list_questions, run_score, QuestionsArgs, ScoreArgs};
use crate::server;
use cavoodle_market::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Cavoodle Marketplace",
    about = "Run the cavoodle marketplace backend or score personality quizzes from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the question bank or score a set of answers
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Print every question and its options
    Questions(QuestionsArgs),
    /// Score answers given as QUESTION=OPTION pairs
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load the question bank from a JSON file instead of the built-in quiz
    #[arg(long)]
    pub(crate) question_bank: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz {
            command: QuizCommand::Questions(args),
        } => run_list_questions(args),
        Command::Quiz {
            command: QuizCommand::Score(args),
        } => run_score(args),
    }
}
