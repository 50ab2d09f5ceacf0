//! Dataset publication seam.

use async_trait::async_trait;

use wick_core::WickError;

/// Republishes the finished series files as a compact public dataset.
///
/// The archiver only defines the seam and calls it once per completed run;
/// the compaction format and the hosting integration belong to the
/// implementor.
#[async_trait]
pub trait DatasetPublisher: Send + Sync {
    /// Publish the current dataset.
    ///
    /// # Errors
    /// Implementations surface their own failures as `WickError::Upstream`.
    async fn publish(&self) -> Result<(), WickError>;
}
