//! Web server for the single-page UI

use super::page;
use super::stream::PageProgress;
use axum::{
    Form, Json, Router,
    body::Body,
    extract::State,
    response::Html,
    routing::get,
};
use codegen_application::{GenerateCodeUseCase, NoProgress, ProgressNotifier};
use codegen_domain::PipelineReport;
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, mpsc};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    use_case: Arc<GenerateCodeUseCase>,
    // One run at a time, start to finish
    run_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(use_case: GenerateCodeUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
            run_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn generate(&self, task: &str, progress: &dyn ProgressNotifier) -> PipelineReport {
        let _guard = self.run_lock.lock().await;
        self.use_case.execute_with_progress(task, progress).await
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub task: String,
}

/// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(generate_page))
        .route("/api/generate", axum::routing::post(generate_json))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(state: AppState, addr: &str) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    info!("Serving on http://{}", addr);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

async fn index() -> Html<String> {
    Html(page::render_form())
}

/// Sends the form right away, then each stage's blocks as it finishes
async fn generate_page(
    State(state): State<AppState>,
    Form(request): Form<GenerateRequest>,
) -> Html<Body> {
    let (tx, rx) = mpsc::unbounded_channel();
    let progress = PageProgress::start(tx, &request.task);

    tokio::spawn(async move {
        state.generate(&request.task, &progress).await;
        progress.finish();
    });

    let fragments = UnboundedReceiverStream::new(rx).map(Ok::<_, Infallible>);
    Html(Body::from_stream(fragments))
}

async fn generate_json(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Json<PipelineReport> {
    Json(state.generate(&request.task, &NoProgress).await)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "model": state.use_case.runner().model().model.as_str(),
    }))
}
