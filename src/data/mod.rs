/// Data layer: player table, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (schema checked here)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  loaded once, shared as Arc<Dataset>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → FilteredView (row indices)
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │ metrics   │   │ ranking   │  count / mean / sums, top-N by goals
///   └──────────┘   └──────────┘
/// ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod ranking;
