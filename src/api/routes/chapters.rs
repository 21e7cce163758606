//! Chapter and translation handlers.

use crate::api::AppState;
use crate::error::Result;
use crate::types::{ChapterSummary, MergedChapter, parse_chapter};
use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

/// GET /chapters - Summaries of all translated chapters
#[utoipa::path(
    get,
    path = "/chapters",
    tag = "chapters",
    responses(
        (status = 200, description = "Chapters with a translation, ascending by number", body = Vec<ChapterSummary>)
    )
)]
pub async fn list_chapters(State(state): State<AppState>) -> Json<Vec<ChapterSummary>> {
    Json(state.service.list_chapters().await)
}

/// GET /chapters/:number - One merged chapter
#[utoipa::path(
    get,
    path = "/chapters/{number}",
    tag = "chapters",
    params(
        ("number" = String, Path, description = "Chapter number (1-114)")
    ),
    responses(
        (status = 200, description = "Merged chapter", body = MergedChapter),
        (status = 404, description = "Not a number, out of range or not translated", body = crate::error::ApiError),
        (status = 500, description = "Translation listed but unreadable", body = crate::error::ApiError),
        (status = 502, description = "Upstream failed", body = crate::error::ApiError),
        (status = 503, description = "Upstream down and no offline data", body = crate::error::ApiError)
    )
)]
pub async fn get_chapter(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<MergedChapter>> {
    let chapter = parse_chapter(&number)?;
    let merged = state.service.get_chapter(chapter).await?;
    Ok(Json(merged))
}

/// GET /translations - Chapter numbers with a translation file
#[utoipa::path(
    get,
    path = "/translations",
    tag = "translations",
    responses(
        (status = 200, description = "Available chapter numbers, ascending", body = Vec<u16>)
    )
)]
pub async fn list_translations(State(state): State<AppState>) -> Json<Vec<u16>> {
    Json(state.service.list_available().await)
}

/// GET /diagnostics/translations - Load test of every translation file
#[utoipa::path(
    get,
    path = "/diagnostics/translations",
    tag = "translations",
    responses(
        (status = 200, description = "Per-chapter load report, never cached", body = crate::service::TranslationDiagnostics)
    )
)]
pub async fn translation_diagnostics(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.service.translation_diagnostics().await;
    (
        [(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")],
        Json(report),
    )
}
