use std::sync::Arc;

use crate::data::cache::DatasetCache;
use crate::data::filter::{apply, FilterDomains, FilterSelection, FilteredView};
use crate::data::metrics::Metrics;
use crate::data::model::Dataset;
use crate::data::ranking::{top_scorers, TopScorer};
use crate::error::{DashboardError, DashboardResult};

// ---------------------------------------------------------------------------
// One render cycle: cached dataset → filters → metrics → chart data
// ---------------------------------------------------------------------------

/// Everything the dashboard needs for one frame.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub dataset: Arc<Dataset>,
    pub domains: FilterDomains,
    /// Rows passing the current selection.
    pub visible: Vec<usize>,
    pub metrics: Metrics,
    pub top_scorers: Vec<TopScorer>,
}

impl DashboardView {
    pub fn filtered(&self) -> FilteredView<'_> {
        FilteredView::from_rows(&self.dataset, &self.visible)
    }
}

/// Run the whole pipeline for the current selection.
///
/// A missing selection is initialised to the defaults of the loaded dataset;
/// an existing one is kept inside the dataset's domains.
pub fn render_pipeline(
    cache: &DatasetCache,
    selection: &mut Option<FilterSelection>,
    top_n: usize,
) -> DashboardResult<DashboardView> {
    let dataset = cache.load()?;
    let domains = FilterDomains::from_dataset(&dataset);

    let selection = selection.get_or_insert_with(|| FilterSelection::full(&domains));
    selection.constrain_to(&domains);

    let view = apply(&dataset, selection);
    log::debug!("{} of {} players pass {:?}", view.len(), dataset.len(), selection);

    let metrics = Metrics::compute(&view);
    let top = top_scorers(&view, top_n);
    let visible = view.rows().to_vec();

    Ok(DashboardView {
        domains,
        visible,
        metrics,
        top_scorers: top,
        dataset: Arc::clone(&dataset),
    })
}

/// Text shown in place of the dashboard when the pipeline fails.
pub fn error_message(err: &DashboardError) -> String {
    format!("Error loading data: {err}")
}
