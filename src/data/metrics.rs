use super::filter::FilteredView;

/// Shown instead of a mean when there is nothing to average.
pub const NOT_AVAILABLE: &str = "N/A";

/// Scalar aggregates over a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub count: usize,
    /// `None` for an empty view.
    pub average_age: Option<f64>,
    pub total_goals: u64,
    pub total_assists: u64,
}

impl Metrics {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        let mut age_sum = 0u64;
        let mut total_goals = 0u64;
        let mut total_assists = 0u64;
        for p in view.players() {
            age_sum += u64::from(p.age);
            total_goals += u64::from(p.goals);
            total_assists += u64::from(p.assists);
        }

        let count = view.len();
        let average_age = (count > 0).then(|| age_sum as f64 / count as f64);

        Metrics {
            count,
            average_age,
            total_goals,
            total_assists,
        }
    }

    /// Mean age to one decimal place, or [`NOT_AVAILABLE`].
    pub fn average_age_label(&self) -> String {
        match self.average_age {
            Some(avg) => format!("{avg:.1}"),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, AgeRange, FilterDomains, FilterSelection};
    use crate::data::model::tests::player;
    use crate::data::model::Dataset;

    fn dataset() -> Dataset {
        let mut players = vec![
            player("A", "Forward", 20, 10),
            player("B", "Midfielder", 25, 5),
            player("C", "Forward", 30, 8),
        ];
        players[0].assists = 4;
        players[1].assists = 9;
        Dataset::from_players(players)
    }

    #[test]
    fn metrics_match_view() {
        let ds = dataset();
        let sel = FilterSelection::full(&FilterDomains::from_dataset(&ds));
        let view = apply(&ds, &sel);
        let m = Metrics::compute(&view);

        assert_eq!(m.count, view.len());
        assert_eq!(m.total_goals, view.players().map(|p| u64::from(p.goals)).sum::<u64>());
        assert_eq!(m.total_goals, 23);
        assert_eq!(m.total_assists, 13);
        assert_eq!(m.average_age_label(), "25.0");
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let ds = Dataset::from_players(vec![
            player("A", "Forward", 20, 0),
            player("B", "Forward", 21, 0),
            player("C", "Forward", 21, 0),
        ]);
        let sel = FilterSelection::full(&FilterDomains::from_dataset(&ds));
        assert_eq!(Metrics::compute(&apply(&ds, &sel)).average_age_label(), "20.7");
    }

    #[test]
    fn empty_view_uses_sentinel() {
        let ds = dataset();
        let mut sel = FilterSelection::full(&FilterDomains::from_dataset(&ds));
        sel.age = AgeRange::new(40, 45);
        let m = Metrics::compute(&apply(&ds, &sel));

        assert_eq!(m.count, 0);
        assert_eq!(m.average_age, None);
        assert_eq!(m.average_age_label(), NOT_AVAILABLE);
        assert_eq!(m.total_goals, 0);
        assert_eq!(m.total_assists, 0);
    }
}
