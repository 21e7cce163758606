//! REST API server demo
//!
//! Serves merged chapters over HTTP.
//!
//! ```text
//! cargo run --example serve                  # defaults
//! cargo run --example serve -- config.json   # settings from a JSON file
//! RUST_LOG=tabasaran_quran=debug cargo run --example serve
//! ```
//!
//! After starting, you can:
//! - View Swagger UI at http://localhost:8080/swagger-ui
//! - List chapters via GET http://localhost:8080/chapters
//! - Read a chapter via GET http://localhost:8080/chapters/1
//! - Check translation files via GET http://localhost:8080/diagnostics/translations

use std::sync::Arc;
use tabasaran_quran::api::start_api_server;
use tabasaran_quran::{ChapterService, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tabasaran_quran=info,tower_http=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    let service = Arc::new(ChapterService::new(&config)?);
    let config = Arc::new(config);
    let address = config.server.api.bind_address;

    println!("Starting tabasaran-quran REST API server");
    println!("Swagger UI: http://{address}/swagger-ui");
    println!("Chapters:   http://{address}/chapters");
    println!();
    println!("Press Ctrl+C to stop");

    start_api_server(service, config).await?;

    Ok(())
}
