//! Sequential per-pair run driver.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{info, warn};

use wick_core::{Pair, SymbolListing, WickError};

use crate::config::ArchiveConfig;
use crate::merge::SeriesMerger;
use crate::publish::DatasetPublisher;

/// Counters for one full run over the pair universe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Pairs returned by the listing.
    pub pairs_total: usize,
    /// Pairs that passed the reference-asset filter.
    pub pairs_included: usize,
    /// Pairs whose series file was rewritten with new rows.
    pub pairs_updated: usize,
    /// Sum of rows added across all updated pairs.
    pub rows_added: i64,
}

/// Drives the series merger over every included pair, one pair at a time.
pub struct Archiver {
    listing: Arc<dyn SymbolListing>,
    merger: SeriesMerger,
    publisher: Option<Arc<dyn DatasetPublisher>>,
    config: ArchiveConfig,
}

impl Archiver {
    /// Build an archiver over `listing` and `merger`.
    #[must_use]
    pub fn new(listing: Arc<dyn SymbolListing>, merger: SeriesMerger, config: ArchiveConfig) -> Self {
        Self {
            listing,
            merger,
            publisher: None,
            config,
        }
    }

    /// Publish the dataset through `publisher` once the run completes.
    #[must_use]
    pub fn with_publisher(mut self, publisher: Arc<dyn DatasetPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Run one full update over all included pairs.
    ///
    /// The listing call is the only fatal failure; an individual pair's
    /// merge error degrades to a warning so one bad market cannot sink the
    /// run.
    ///
    /// # Errors
    /// Returns `WickError::Upstream` when the pair listing fails, before
    /// any pair is processed, and propagates the publisher's error when
    /// publication fails at the end of the run.
    pub async fn run(&self) -> Result<RunReport, WickError> {
        let mut pairs = self.listing.list_pairs().await?;
        let pairs_total = pairs.len();

        // Randomised processing order helps during testing and makes no
        // difference in production.
        pairs.shuffle(&mut rand::rng());

        let included: Vec<Pair> = pairs
            .into_iter()
            .filter(|pair| self.config.includes(pair))
            .collect();
        let mut report = RunReport {
            pairs_total,
            pairs_included: included.len(),
            ..RunReport::default()
        };

        for (n, pair) in included.iter().enumerate() {
            match self.merger.merge_series(pair).await {
                Ok(added) if added > 0 => {
                    info!(
                        %pair,
                        n = n + 1,
                        total = report.pairs_included,
                        rows = added,
                        "wrote new rows"
                    );
                    report.pairs_updated += 1;
                    report.rows_added += added;
                }
                Ok(_) => {}
                Err(err) => warn!(%pair, error = %err, "skipping pair after merge failure"),
            }
        }

        if let Some(publisher) = &self.publisher {
            publisher.publish().await?;
        }

        Ok(report)
    }
}
