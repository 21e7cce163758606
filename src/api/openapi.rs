//! OpenAPI documentation and schema generation
//!
//! The specification is generated at compile time with utoipa and served at
//! `/openapi.json` and through the Swagger UI.

use utoipa::OpenApi;

/// OpenAPI documentation for the tabasaran-quran REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "tabasaran-quran REST API",
        version = "0.1.0",
        description = "Quran chapters with Arabic text, transliteration, a Russian reference translation and the Tabasaran translation side by side",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Chapters
        crate::api::routes::list_chapters,
        crate::api::routes::get_chapter,

        // Translations
        crate::api::routes::list_translations,
        crate::api::routes::translation_diagnostics,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(schemas(
        crate::types::ChapterSummary,
        crate::types::MergedChapter,
        crate::types::MergedVerse,
        crate::types::VerseMetadata,
        crate::service::TranslationDiagnostics,
        crate::service::TranslationReport,
        crate::service::TranslationStatus,
        crate::error::ApiError,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "chapters", description = "Merged chapters and the chapter listing"),
        (name = "translations", description = "Tabasaran translation corpus and its diagnostics"),
        (name = "system", description = "Health check and OpenAPI document"),
    )
)]
pub struct ApiDoc;
