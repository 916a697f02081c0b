use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::analysis::analyze_workbook;
use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::report::{CHART_URL_PREFIX, ResultsPage, ResultsView};

/// Name of the multipart field carrying the workbook
pub const FILE_FIELD: &str = "file";

pub struct AppState {
    pub config: AppConfig,
    page: ResultsPage,
}

impl AppState {
    /// Compiles the results template and makes sure the chart directory exists
    pub fn new(config: AppConfig) -> Result<Self, AnalysisError> {
        std::fs::create_dir_all(&config.chart_dir)?;
        let page = ResultsPage::new()?;
        Ok(Self { config, page })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let charts = ServeDir::new(&state.config.chart_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(serve_upload_form).post(handle_upload))
        .route("/results", get(serve_results))
        .nest_service(CHART_URL_PREFIX, charts)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(config)?);
    let addr = state.config.bind_addr.clone();
    log::info!("writing charts to {}", state.config.chart_dir.display());

    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_upload_form() -> Html<&'static str> {
    Html(include_str!("./static/upload.html"))
}

async fn serve_results(State(state): State<Arc<AppState>>) -> Response {
    match state.page.render(&ResultsView::default()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handle_upload(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    match process_upload(state, multipart).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn process_upload(
    state: Arc<AppState>,
    mut multipart: Multipart,
) -> Result<String, AnalysisError> {
    let file_data = read_file_field(&mut multipart).await?;

    // Workbook parsing and PNG encoding are CPU bound
    tokio::task::spawn_blocking(move || {
        let config = &state.config;
        let analysis = analyze_workbook(
            &file_data,
            &config.chart_dir,
            config.chart_width,
            config.chart_height,
        )?;
        state
            .page
            .render(&ResultsView::new(&analysis.report, &analysis.charts))
    })
    .await
    .map_err(|e| AnalysisError::Internal(e.to_string()))?
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Vec<u8>, AnalysisError> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() == Some(FILE_FIELD) {
            let bytes = field.bytes().await.map_err(upload_error)?;
            return Ok(bytes.to_vec());
        }
    }

    Err(AnalysisError::MissingFile)
}

fn upload_error(e: MultipartError) -> AnalysisError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AnalysisError::TooLarge(e.body_text())
    } else {
        AnalysisError::Upload(e.body_text())
    }
}
