use axum::{
    Form, Json, Router,
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    http::{HeaderValue, Method, StatusCode, header},
    response::Html,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::{Config, ConfigError};
use crate::error::ApiError;
use crate::generator::{QuestionGenerator, TemplateGenerator};
use crate::models::{
    DiagnosticRequest, DiagnosticResponse, ParseError, QuizRequest, QuizResponse,
};
use crate::render;

pub struct AppState {
    generator: Box<dyn QuestionGenerator>,
}

impl AppState {
    pub fn new(generator: Box<dyn QuestionGenerator>) -> Self {
        AppState { generator }
    }

    fn quiz_questions(&self, req: &QuizRequest) -> Result<Vec<String>, ParseError> {
        let (topic, difficulty) = req.parse()?;
        log::debug!("generating {} quiz on '{}'", difficulty, topic);

        let questions = self.generator.generate_quiz(&topic, difficulty);
        if questions.is_empty() {
            log::warn!("no quiz questions generated for '{}' ({})", topic, difficulty);
        }
        Ok(questions)
    }

    fn diagnostic_questions(&self, req: &DiagnosticRequest) -> Result<Vec<String>, ParseError> {
        let level = req.parse()?;
        log::debug!("generating diagnostic for {} student", level);

        let questions = self.generator.generate_diagnostic(level);
        if questions.is_empty() {
            log::warn!("no diagnostic questions generated for {} student", level);
        }
        Ok(questions)
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Box::new(TemplateGenerator::new()))
    }
}

/// Build the application router around the given state
///
/// # Arguments
/// * `state` - Shared state holding the question generator
/// * `allowed_origin` - Origin allowed for cross-origin calls, any when `None`
///
/// # Returns
/// * `Result<Router, ConfigError>` - The router, or an error if the origin is not a valid header value
pub fn router(
    state: Arc<AppState>,
    allowed_origin: Option<&str>,
) -> Result<Router, ConfigError> {
    let cors = cors_layer(allowed_origin)?;

    let app = Router::new()
        .route("/", get(serve_landing))
        .route("/health", get(health))
        .route("/generate_quiz", post(generate_quiz))
        .route("/generate_diagnostic", post(generate_diagnostic))
        .route("/quiz", post(quiz_page))
        .route("/diagnostic", post(diagnostic_page))
        .with_state(state)
        .layer(cors);

    Ok(app)
}

fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match allowed_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::default());
    let app = router(state, config.allowed_origin.as_deref())?;

    let listener = TcpListener::bind(config.bind_address()).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    match &config.allowed_origin {
        Some(origin) => log::info!("Cross-origin requests allowed from {}", origin),
        None => log::info!("Cross-origin requests allowed from any origin"),
    }

    axum::serve(listener, app).await?;

    Ok(())
}

#[axum::debug_handler]
async fn serve_landing() -> Html<&'static str> {
    Html(include_str!("./static/index.html"))
}

#[axum::debug_handler]
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[axum::debug_handler]
async fn generate_quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let questions = state.quiz_questions(&req)?;

    Ok(Json(QuizResponse::new(questions)))
}

#[axum::debug_handler]
async fn generate_diagnostic(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DiagnosticRequest>, JsonRejection>,
) -> Result<Json<DiagnosticResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let questions = state.diagnostic_questions(&req)?;

    Ok(Json(DiagnosticResponse::new(questions)))
}

// Form fallbacks for the landing page when scripts are disabled

#[axum::debug_handler]
async fn quiz_page(
    State(state): State<Arc<AppState>>,
    payload: Result<Form<QuizRequest>, FormRejection>,
) -> Result<Html<String>, (StatusCode, String)> {
    let Form(req) = payload.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;
    let questions = state
        .quiz_questions(&req)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let fragment = render::ordered_list("Quiz Questions:", &questions);
    Ok(Html(render::result_page(&fragment)))
}

#[axum::debug_handler]
async fn diagnostic_page(
    State(state): State<Arc<AppState>>,
    payload: Result<Form<DiagnosticRequest>, FormRejection>,
) -> Result<Html<String>, (StatusCode, String)> {
    let Form(req) = payload.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;
    let questions = state
        .diagnostic_questions(&req)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let fragment = render::ordered_list("Diagnostic Questions:", &questions);
    Ok(Html(render::result_page(&fragment)))
}
