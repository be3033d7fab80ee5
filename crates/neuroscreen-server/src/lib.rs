//! HTTP analysis server — serves pipeline reports to dashboard frontends.
//!
//! The core pipeline is pure and synchronous; this crate is the
//! orchestrating shell. It owns the only mutable state in the system (a
//! bounded five-entry run history) and the artificial processing delay that
//! simulates analysis latency before each run. Presentation stays on the
//! client; every endpoint returns the pipeline's record as JSON.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use neuroscreen_core::pipeline::{AnalysisReport, AnalysisSource};

/// Maximum retained history entries; the oldest is evicted first.
pub const HISTORY_CAP: usize = 5;

/// Summary tuple kept per run, most-recent-first. Entries are read-only
/// snapshots; nothing in the core ever sees them.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub score: u32,
    pub level: String,
    pub color: &'static str,
    pub timestamp: u64,
}

impl RunSummary {
    fn from_report(report: &AnalysisReport) -> Self {
        let (source, seed) = match report.source {
            AnalysisSource::Simulated { seed, pathology } => (
                if pathology {
                    "simulated (pathological)".to_string()
                } else {
                    "simulated".to_string()
                },
                Some(seed),
            ),
            AnalysisSource::Csv { seed, .. } => ("csv".to_string(), Some(seed)),
        };
        Self {
            source,
            seed,
            score: report.risk.score,
            level: report.classification.level.to_string(),
            color: report.classification.color,
            timestamp: report.timestamp,
        }
    }
}

/// Shared server state.
struct AppState {
    history: Mutex<VecDeque<RunSummary>>,
    runs_served: AtomicU64,
    /// Artificial pre-analysis delay in milliseconds; shell concern only.
    delay_ms: u64,
}

impl AppState {
    async fn record(&self, report: &AnalysisReport) {
        let mut history = self.history.lock().await;
        push_summary(&mut history, RunSummary::from_report(report));
        self.runs_served.fetch_add(1, Ordering::Relaxed);
    }
}

/// Push a summary most-recent-first, evicting beyond [`HISTORY_CAP`].
fn push_summary(history: &mut VecDeque<RunSummary>, summary: RunSummary) {
    history.push_front(summary);
    history.truncate(HISTORY_CAP);
}

#[derive(Deserialize, Default)]
struct AnalyzeParams {
    seed: Option<u32>,
    pathology: Option<bool>,
}

#[derive(Deserialize, Default)]
struct IngestParams {
    seed: Option<u32>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    success: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    runs_served: u64,
    history_len: usize,
}

async fn handle_analyze(
    State(state): State<Arc<AppState>>,
    params: Option<Json<AnalyzeParams>>,
) -> Json<AnalysisReport> {
    let params = params.map(|Json(p)| p).unwrap_or_default();
    let seed = params.seed.unwrap_or_else(rand::random::<u32>);
    let pathology = params.pathology.unwrap_or(false);

    simulate_latency(state.delay_ms).await;
    let report = neuroscreen_core::run_simulated(pathology, seed);
    state.record(&report).await;
    Json(report)
}

async fn handle_ingest(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IngestParams>,
    body: String,
) -> Result<Json<AnalysisReport>, (StatusCode, Json<ErrorResponse>)> {
    let seed = params.seed.unwrap_or_else(rand::random::<u32>);

    simulate_latency(state.delay_ms).await;
    match neuroscreen_core::run_from_csv(&body, seed) {
        Ok(report) => {
            state.record(&report).await;
            Ok(Json(report))
        }
        Err(e) => {
            log::warn!("ingest rejected: {e}");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                    success: false,
                }),
            ))
        }
    }
}

async fn handle_history(State(state): State<Arc<AppState>>) -> Json<Vec<RunSummary>> {
    let history = state.history.lock().await;
    Json(history.iter().cloned().collect())
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let history = state.history.lock().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        runs_served: state.runs_served.load(Ordering::Relaxed),
        history_len: history.len(),
    })
}

async fn handle_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Neuroscreen Server",
        "version": neuroscreen_core::VERSION,
        "endpoints": {
            "/": "This API index",
            "/api/v1/analyze": {
                "method": "POST",
                "description": "Run the simulated pipeline and return the full analysis report",
                "body": {
                    "seed": "Optional u32 seed (random when omitted)",
                    "pathology": "Optional bool, default false",
                }
            },
            "/api/v1/ingest": {
                "method": "POST",
                "description": "Ingest CSV text (time,Fp1,F3,C3,P3,O1; >=128 numeric rows) and score it",
                "params": {
                    "seed": "Optional u32 seed for the coherence stage",
                }
            },
            "/api/v1/history": "Last 5 run summaries, most recent first",
            "/health": "Health check",
        },
        "examples": {
            "simulated": "curl -X POST localhost:8045/api/v1/analyze -H 'content-type: application/json' -d '{\"seed\":42,\"pathology\":true}'",
            "csv": "curl -X POST 'localhost:8045/api/v1/ingest?seed=42' --data-binary @recording.csv",
        }
    }))
}

async fn simulate_latency(delay_ms: u64) {
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}

/// Build the axum router.
pub fn build_router(delay_ms: u64) -> Router {
    let state = Arc::new(AppState {
        history: Mutex::new(VecDeque::with_capacity(HISTORY_CAP)),
        runs_served: AtomicU64::new(0),
        delay_ms,
    });

    Router::new()
        .route("/", get(handle_index))
        .route("/api/v1/analyze", post(handle_analyze))
        .route("/api/v1/ingest", post(handle_ingest))
        .route("/api/v1/history", get(handle_history))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Run the HTTP analysis server.
pub async fn run_server(host: &str, port: u16, delay_ms: u64) -> std::io::Result<()> {
    let app = build_router(delay_ms);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("listening on {addr} (delay {delay_ms} ms)");
    axum::serve(listener, app).await
}
