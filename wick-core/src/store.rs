//! CSV-backed persistence for candle series.
//!
//! One file per pair under a single data directory, named `BASE-QUOTE.csv`
//! with a header row in [`Candle::FIELD_NAMES`] order. A series file is read
//! fully at merge start and rewritten fully at merge end; the store never
//! appends, and it never deletes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Candle, Pair, WickError};

/// File-per-pair candle store rooted at one directory.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    dir: PathBuf,
}

impl SeriesStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns `WickError::Io` when the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, WickError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the series file for `pair`.
    #[must_use]
    pub fn path(&self, pair: &Pair) -> PathBuf {
        self.dir.join(format!("{}.csv", pair.file_stem()))
    }

    /// Load the full series for `pair`, or `None` when no file exists yet.
    ///
    /// A missing file is the normal state for a pair that has never been
    /// fetched, not an error.
    ///
    /// # Errors
    /// Returns `WickError::Csv` when an existing file cannot be parsed and
    /// `WickError::Io` when it cannot be read.
    pub fn load(&self, pair: &Pair) -> Result<Option<Vec<Candle>>, WickError> {
        let path = self.path(pair);
        if !path.exists() {
            return Ok(None);
        }
        let mut reader = csv::Reader::from_path(&path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        Ok(Some(rows))
    }

    /// Overwrite the series file for `pair` with `candles`.
    ///
    /// # Errors
    /// Returns `WickError::Csv` or `WickError::Io` when the file cannot be
    /// written.
    pub fn save(&self, pair: &Pair, candles: &[Candle]) -> Result<(), WickError> {
        let mut writer = csv::Writer::from_path(self.path(pair))?;
        for candle in candles {
            writer.serialize(candle)?;
        }
        writer.flush()?;
        Ok(())
    }
}
