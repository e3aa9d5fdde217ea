use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::loader::load_file;
use super::model::Dataset;
use crate::error::DashboardResult;

// ---------------------------------------------------------------------------
// DatasetCache – the one dataset of this process
// ---------------------------------------------------------------------------

/// Owns the lazily loaded dataset.
///
/// The file is read on the first successful [`DatasetCache::load`]; every later
/// call hands out the same `Arc`. A failed load leaves the cell empty so the
/// next call tries again.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceCell<Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached dataset, reading the file on first use.
    pub fn load(&self) -> DashboardResult<Arc<Dataset>> {
        self.cell
            .get_or_try_init(|| {
                let dataset = load_file(&self.path)?;
                log::info!(
                    "Loaded {} players from {}",
                    dataset.len(),
                    self.path.display()
                );
                Ok(Arc::new(dataset))
            })
            .cloned()
    }

    /// Whether the dataset has been read already.
    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
