use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryProfileRepository};
use crate::routes::with_quiz_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cavoodle_market::config::AppConfig;
use cavoodle_market::error::AppError;
use cavoodle_market::quiz::{QuizScoringEngine, QuizService};
use cavoodle_market::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.question_bank.take() {
        config.quiz.question_bank = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let bank = config.quiz.load_bank()?;
    info!(
        questions = bank.len(),
        source = ?config.quiz.question_bank,
        "question bank loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(QuizScoringEngine::new(Arc::new(bank)));
    let repository = Arc::new(InMemoryProfileRepository::default());
    let quiz_service = Arc::new(QuizService::new(engine, repository));

    let app = with_quiz_routes(quiz_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "cavoodle marketplace backend ready");

    axum::serve(listener, app).await?;
    Ok(())
}
