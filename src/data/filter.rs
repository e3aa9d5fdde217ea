use std::collections::{BTreeMap, BTreeSet};

use super::model::{Dataset, Dimension, PlayerRecord};

/// Label of the "no constraint" option in every categorical selector.
pub const ALL_LABEL: &str = "All";

// ---------------------------------------------------------------------------
// Selection primitives
// ---------------------------------------------------------------------------

/// Choice for one categorical dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Choice {
    #[default]
    All,
    Value(String),
}

impl Choice {
    pub fn label(&self) -> &str {
        match self {
            Choice::All => ALL_LABEL,
            Choice::Value(v) => v,
        }
    }

    /// Whether a cell value passes. Missing cells only pass `All`.
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Choice::All => true,
            Choice::Value(want) => value == Some(want.as_str()),
        }
    }
}

/// Closed age interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub low: u32,
    pub high: u32,
}

impl AgeRange {
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, age: u32) -> bool {
        self.low <= age && age <= self.high
    }

    /// Clamp both ends into `bounds`, keeping `low <= high`.
    pub fn clamp_to(&self, bounds: AgeRange) -> AgeRange {
        let low = self.low.clamp(bounds.low, bounds.high);
        let high = self.high.clamp(low, bounds.high);
        AgeRange { low, high }
    }
}

// ---------------------------------------------------------------------------
// Filter domains: what the sidebar offers
// ---------------------------------------------------------------------------

/// Age bounds used when the dataset has no rows.
pub const EMPTY_AGE_BOUNDS: AgeRange = AgeRange { low: 0, high: 0 };

/// Selectable values per dimension, derived from a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDomains {
    values: BTreeMap<Dimension, Vec<String>>,
    pub age_bounds: AgeRange,
}

impl FilterDomains {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut distinct: BTreeMap<Dimension, BTreeSet<&str>> = BTreeMap::new();
        for dim in Dimension::ALL {
            let set = distinct.entry(dim).or_default();
            set.extend(dataset.players().iter().filter_map(|p| p.category(dim)));
        }

        let values = distinct
            .into_iter()
            .map(|(dim, set)| (dim, set.into_iter().map(str::to_string).collect()))
            .collect();

        let ages = dataset.players().iter().map(|p| p.age);
        let age_bounds = match (ages.clone().min(), ages.max()) {
            (Some(low), Some(high)) => AgeRange { low, high },
            _ => EMPTY_AGE_BOUNDS,
        };

        FilterDomains { values, age_bounds }
    }

    /// Sorted distinct non-missing values of a dimension.
    pub fn values(&self, dim: Dimension) -> &[String] {
        self.values.get(&dim).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Selector options: `All` followed by [`FilterDomains::values`].
    pub fn options(&self, dim: Dimension) -> Vec<Choice> {
        std::iter::once(Choice::All)
            .chain(self.values(dim).iter().cloned().map(Choice::Value))
            .collect()
    }

    /// Option labels as displayed, `"All"` first.
    #[cfg(test)]
    pub fn labels(&self, dim: Dimension) -> Vec<String> {
        self.options(dim)
            .iter()
            .map(|c| c.label().to_string())
            .collect()
    }

    fn offers(&self, dim: Dimension, choice: &Choice) -> bool {
        match choice {
            Choice::All => true,
            Choice::Value(v) => self.values(dim).binary_search(v).is_ok(),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterSelection
// ---------------------------------------------------------------------------

/// The user's current constraints. Session-scoped, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub position: Choice,
    pub league: Choice,
    pub nationality: Choice,
    pub club: Choice,
    pub age: AgeRange,
}

impl FilterSelection {
    /// Default selection: every dimension `All`, the full age range.
    pub fn full(domains: &FilterDomains) -> Self {
        Self {
            position: Choice::All,
            league: Choice::All,
            nationality: Choice::All,
            club: Choice::All,
            age: domains.age_bounds,
        }
    }

    pub fn choice(&self, dim: Dimension) -> &Choice {
        match dim {
            Dimension::Position => &self.position,
            Dimension::League => &self.league,
            Dimension::Nationality => &self.nationality,
            Dimension::Club => &self.club,
        }
    }

    pub fn choice_mut(&mut self, dim: Dimension) -> &mut Choice {
        match dim {
            Dimension::Position => &mut self.position,
            Dimension::League => &mut self.league,
            Dimension::Nationality => &mut self.nationality,
            Dimension::Club => &mut self.club,
        }
    }

    /// Bring the selection back inside `domains`: unknown values fall back to
    /// `All` and the age range is clamped to the bounds.
    pub fn constrain_to(&mut self, domains: &FilterDomains) {
        for dim in Dimension::ALL {
            if !domains.offers(dim, self.choice(dim)) {
                *self.choice_mut(dim) = Choice::All;
            }
        }
        self.age = self.age.clamp_to(domains.age_bounds);
    }

    /// Whether a single player passes every constraint.
    pub fn matches(&self, player: &PlayerRecord) -> bool {
        self.age.contains(player.age)
            && Dimension::ALL
                .iter()
                .all(|&dim| self.choice(dim).admits(player.category(dim)))
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Rows of a dataset passing a selection, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    rows: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Rebuild a view from row indices computed earlier for the same dataset.
    /// Indices outside the dataset are dropped.
    pub fn from_rows(dataset: &'a Dataset, rows: &[usize]) -> Self {
        let rows = rows.iter().copied().filter(|&r| r < dataset.len()).collect();
        Self { dataset, rows }
    }

    /// Positional indices into the dataset.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn players(&self) -> impl Iterator<Item = &'a PlayerRecord> + '_ {
        let dataset = self.dataset;
        self.rows.iter().filter_map(move |&r| dataset.get(r))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Return the rows of `dataset` that satisfy every constraint of `selection`.
///
/// The age range is always checked; categorical constraints set to `All` are
/// skipped. No match yields an empty view, not an error.
pub fn apply<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    let rows = dataset
        .players()
        .iter()
        .enumerate()
        .filter(|(_, p)| selection.matches(p))
        .map(|(i, _)| i)
        .collect();
    FilteredView { dataset, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::player;

    fn sample() -> Dataset {
        let mut c = player("C", "Forward", 30, 8);
        c.club = "Chelsea".to_string();
        c.nationality = "France".to_string();
        Dataset::from_players(vec![
            player("A", "Forward", 20, 10),
            player("B", "Midfielder", 25, 5),
            c,
        ])
    }

    #[test]
    fn domains_are_sorted_distinct_with_all_first() {
        let mut ds = sample().players().to_vec();
        ds[1].position.clear();
        let domains = FilterDomains::from_dataset(&Dataset::from_players(ds));

        assert_eq!(domains.labels(Dimension::Position), vec!["All", "Forward"]);
        assert_eq!(
            domains.labels(Dimension::Club),
            vec!["All", "Arsenal", "Chelsea"]
        );
        assert_eq!(domains.age_bounds, AgeRange::new(20, 30));
    }

    #[test]
    fn empty_dataset_falls_back_to_zero_bounds() {
        let domains = FilterDomains::from_dataset(&Dataset::default());
        assert_eq!(domains.age_bounds, EMPTY_AGE_BOUNDS);
        assert_eq!(domains.labels(Dimension::League), vec!["All"]);
    }

    #[test]
    fn full_selection_is_identity() {
        let ds = sample();
        let sel = FilterSelection::full(&FilterDomains::from_dataset(&ds));
        let view = apply(&ds, &sel);
        assert_eq!(view.rows(), &[0, 1, 2]);
        assert!(view.players().eq(ds.players().iter()));
    }

    #[test]
    fn age_range_is_always_applied() {
        let ds = sample();
        let mut sel = FilterSelection::full(&FilterDomains::from_dataset(&ds));
        sel.age = AgeRange::new(26, 30);
        let names: Vec<_> = apply(&ds, &sel).players().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C"]);

        sel.age = AgeRange::new(20, 25);
        assert_eq!(apply(&ds, &sel).rows(), &[0, 1]);
    }

    #[test]
    fn categorical_filters_conjoin() {
        let ds = sample();
        let mut sel = FilterSelection::full(&FilterDomains::from_dataset(&ds));
        sel.position = Choice::Value("Forward".into());
        assert_eq!(apply(&ds, &sel).rows(), &[0, 2]);

        sel.club = Choice::Value("Chelsea".into());
        assert_eq!(apply(&ds, &sel).rows(), &[2]);

        sel.nationality = Choice::Value("England".into());
        assert!(apply(&ds, &sel).is_empty());
    }

    #[test]
    fn missing_category_only_matches_all() {
        let mut players = sample().players().to_vec();
        players[0].league.clear();
        let ds = Dataset::from_players(players);
        let mut sel = FilterSelection::full(&FilterDomains::from_dataset(&ds));
        assert_eq!(apply(&ds, &sel).len(), 3);

        sel.league = Choice::Value("Premier League".into());
        assert_eq!(apply(&ds, &sel).rows(), &[1, 2]);
    }

    #[test]
    fn views_are_deterministic_subsets() {
        let ds = sample();
        let domains = FilterDomains::from_dataset(&ds);
        let selections = [
            FilterSelection::full(&domains),
            FilterSelection {
                position: Choice::Value("Midfielder".into()),
                ..FilterSelection::full(&domains)
            },
            FilterSelection {
                age: AgeRange::new(21, 29),
                club: Choice::Value("Arsenal".into()),
                ..FilterSelection::full(&domains)
            },
            FilterSelection {
                age: AgeRange::new(40, 50),
                ..FilterSelection::full(&domains)
            },
        ];
        for sel in &selections {
            let first = apply(&ds, sel);
            let second = apply(&ds, sel);
            assert_eq!(first, second);
            assert!(first.len() <= ds.len());
            assert!(first.rows().windows(2).all(|w| w[0] < w[1]));
            assert!(first.rows().iter().all(|&r| r < ds.len()));
        }
    }

    #[test]
    fn constrain_to_resets_unknown_values_and_clamps_age() {
        let ds = sample();
        let domains = FilterDomains::from_dataset(&ds);
        let mut sel = FilterSelection {
            position: Choice::Value("Goalkeeper".into()),
            club: Choice::Value("Chelsea".into()),
            age: AgeRange::new(10, 60),
            ..FilterSelection::full(&domains)
        };
        sel.constrain_to(&domains);
        assert_eq!(sel.position, Choice::All);
        assert_eq!(sel.club, Choice::Value("Chelsea".into()));
        assert_eq!(sel.age, AgeRange::new(20, 30));
    }

    #[test]
    fn clamp_keeps_low_below_high() {
        let bounds = AgeRange::new(18, 35);
        assert_eq!(AgeRange::new(40, 20).clamp_to(bounds), AgeRange::new(35, 35));
        assert_eq!(AgeRange::new(20, 19).clamp_to(bounds), AgeRange::new(20, 20));
    }
}
