//! Chapter listing for the index page.

use crate::error::{Error, Result};
use crate::fallback;
use crate::types::ChapterSummary;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use super::ChapterService;

impl ChapterService {
    /// Summaries of every chapter with a translation, ascending by number
    ///
    /// Each chapter runs its own pipeline (translation load plus a
    /// canonical-only upstream fetch); at most
    /// `listing.max_concurrent_fetches` run at once. A chapter whose pipeline
    /// fails is logged and left out; the listing itself never fails.
    pub async fn list_chapters(&self) -> Vec<ChapterSummary> {
        let available = self.list_available().await;
        let limit = self.listing.max_concurrent_fetches.max(1);
        let requested = available.len();

        let results: Vec<(u16, Result<ChapterSummary>)> = stream::iter(available)
            .map(|chapter| async move { (chapter, self.summarize(chapter).await) })
            .buffered(limit)
            .collect()
            .await;

        let summaries: Vec<ChapterSummary> = results
            .into_iter()
            .filter_map(|(chapter, result)| match result {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!(chapter, error = %e, "Leaving chapter out of listing");
                    None
                }
            })
            .collect();

        info!(
            listed = summaries.len(),
            requested, "Built chapter listing"
        );
        summaries
    }

    async fn summarize(&self, chapter: u16) -> Result<ChapterSummary> {
        let translation = self
            .translations
            .load(chapter)
            .await
            .ok_or(Error::TranslationMissing { chapter })?;

        let canonical = [self.engine.editions().canonical.clone()];
        match self.remote.fetch(chapter, &canonical).await {
            Ok(remote) => Ok(ChapterSummary {
                number: chapter,
                name: remote.name,
                name_tabasaran: translation.sura_name,
                english_name: remote.english_name,
                english_name_translation: remote.english_name_translation,
            }),
            Err(Error::RemoteUnavailable { reason, .. }) => {
                warn!(chapter, reason = %reason, "Listing chapter from offline metadata");
                fallback::static_info(chapter)
                    .map(|info| info.summary(translation.sura_name))
                    .ok_or(Error::NoFallbackData { chapter })
            }
            Err(e) => Err(e),
        }
    }
}
