use std::path::PathBuf;

use crate::data::ranking::DEFAULT_TOP_N;

/// File read when neither the command line nor the environment names one.
pub const DEFAULT_DATASET_PATH: &str = "scout_dataset1.csv";

pub const ENV_DATASET: &str = "SCOUT_DATASET";
pub const ENV_TOP_N: &str = "SCOUT_TOP_N";

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    /// Bars in the top scorers chart.
    pub top_n: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl DashboardConfig {
    /// First CLI argument, then `SCOUT_DATASET`, then the default path.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::args().nth(1),
            std::env::var(ENV_DATASET).ok(),
            std::env::var(ENV_TOP_N).ok(),
        )
    }

    fn resolve(arg: Option<String>, env_path: Option<String>, env_top_n: Option<String>) -> Self {
        let defaults = Self::default();

        let dataset_path = arg
            .or(env_path)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.dataset_path);

        let top_n = match env_top_n.as_deref().map(str::trim) {
            None => defaults.top_n,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    log::warn!("Ignoring {ENV_TOP_N}={raw:?}: expected a positive integer");
                    defaults.top_n
                }
            },
        };

        Self { dataset_path, top_n }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(DashboardConfig::resolve(None, None, None), DashboardConfig::default());
        assert_eq!(DashboardConfig::default().top_n, 10);
    }

    #[test]
    fn argument_beats_environment() {
        let cfg = DashboardConfig::resolve(
            Some("cli.csv".into()),
            Some("env.csv".into()),
            Some("5".into()),
        );
        assert_eq!(cfg.dataset_path, PathBuf::from("cli.csv"));
        assert_eq!(cfg.top_n, 5);

        let cfg = DashboardConfig::resolve(None, Some("env.parquet".into()), None);
        assert_eq!(cfg.dataset_path, PathBuf::from("env.parquet"));
    }

    #[test]
    fn invalid_top_n_falls_back() {
        for raw in ["0", "-3", "ten"] {
            let cfg = DashboardConfig::resolve(None, None, Some(raw.into()));
            assert_eq!(cfg.top_n, DEFAULT_TOP_N);
        }
    }
}
