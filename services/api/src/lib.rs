mod cli;
mod infra;
mod quiz;
mod routes;
mod server;

use cavoodle_market::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
