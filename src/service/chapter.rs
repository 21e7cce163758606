//! Single-chapter assembly.

use crate::error::{Error, Result};
use crate::fallback;
use crate::types::{MergedChapter, checked_chapter};
use tracing::{debug, warn};

use super::ChapterService;

impl ChapterService {
    /// Produce the merged chapter for `chapter`
    ///
    /// Steps, in order:
    /// 1. Range check (no I/O)
    /// 2. Availability in the translation corpus
    /// 3. Translation load
    /// 4. Upstream fetch with all three editions, falling back to the offline
    ///    table when the upstream is unavailable
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfRange`] for numbers outside 1-114
    /// - [`Error::NotAvailable`] when no translation is advertised
    /// - [`Error::TranslationMissing`] when the advertised file cannot be read
    /// - [`Error::NoFallbackData`] when the upstream is down and the chapter has
    ///   no offline entry
    /// - any other upstream error unchanged
    pub async fn get_chapter(&self, chapter: u16) -> Result<MergedChapter> {
        let chapter = checked_chapter(u32::from(chapter))?;

        if !self.list_available().await.contains(&chapter) {
            return Err(Error::NotAvailable { chapter });
        }

        let translation = self
            .translations
            .load(chapter)
            .await
            .ok_or(Error::TranslationMissing { chapter })?;

        let editions = self.engine.editions().all();
        match self.remote.fetch(chapter, &editions).await {
            Ok(remote) => {
                debug!(chapter, source = self.remote.name(), "Fetched upstream chapter");
                Ok(self.engine.merge(&remote, Some(&translation)))
            }
            Err(Error::RemoteUnavailable { reason, .. }) => {
                warn!(chapter, reason = %reason, "Upstream unavailable, using offline metadata");
                fallback::build(chapter, Some(&translation))
            }
            Err(e) => Err(e),
        }
    }
}
