//! Test configuration helpers: a translation directory on disk and a
//! service pointed at a mock upstream

use std::sync::Arc;
use std::time::Duration;
use tabasaran_quran::{ChapterService, Config};
use tempfile::TempDir;
use wiremock::MockServer;

/// Config reading translations from `dir` and verses from `upstream`
pub fn test_config(dir: &TempDir, upstream: &MockServer) -> Config {
    let mut config = Config::default();
    config.translations.dir = dir.path().to_path_buf();
    config.remote.base_url = upstream.uri();
    config.remote.request_timeout = Duration::from_secs(5);
    config.remote.cache_ttl = None;
    config
}

/// Service over a fresh translation directory and a mock upstream
///
/// The `TempDir` must outlive the service.
pub fn create_test_service(upstream: &MockServer) -> (Arc<ChapterService>, TempDir) {
    let dir = tempfile::tempdir().expect("create translation dir");
    let config = test_config(&dir, upstream);
    let service = ChapterService::new(&config).expect("valid test config");
    (Arc::new(service), dir)
}
