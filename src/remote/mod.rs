//! Upstream verse text.
//!
//! The [`RemoteSource`] trait is the seam between the chapter pipeline and the
//! network; [`AlQuranCloudClient`] implements it against the public
//! `api.alquran.cloud` REST API. Fetchers do I/O only: no merging, no retry.

use crate::error::Result;
use crate::types::RemoteChapter;
use async_trait::async_trait;

mod client;
mod wire;

pub use client::AlQuranCloudClient;

/// Source of upstream chapter text
///
/// # Errors
///
/// Implementations must return:
/// - [`Error::OutOfRange`](crate::Error::OutOfRange) for chapter numbers
///   outside 1..=114, before any I/O
/// - [`Error::RemoteUnavailable`](crate::Error::RemoteUnavailable) when the
///   service cannot produce the chapter; callers may fall back on it
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch one chapter in the given editions with a single request
    async fn fetch(&self, chapter: u16, editions: &[String]) -> Result<RemoteChapter>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
