use super::filter::FilteredView;

/// Number of bars in the top scorers chart unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// One bar of the top scorers chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopScorer {
    pub name: String,
    pub goals: u32,
    pub position: String,
    pub club: String,
}

/// The `n` highest scorers of a view, most goals first.
///
/// The sort is stable, so players with equal goals keep their dataset order.
/// Views shorter than `n` return every row.
pub fn top_scorers(view: &FilteredView<'_>, n: usize) -> Vec<TopScorer> {
    let mut ranked: Vec<_> = view.players().collect();
    ranked.sort_by(|a, b| b.goals.cmp(&a.goals));
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|p| TopScorer {
            name: p.name.clone(),
            goals: p.goals,
            position: p.position.clone(),
            club: p.club.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, FilterDomains, FilterSelection};
    use crate::data::model::tests::player;
    use crate::data::model::Dataset;

    fn ranked(ds: &Dataset, n: usize) -> Vec<(String, u32)> {
        let sel = FilterSelection::full(&FilterDomains::from_dataset(ds));
        top_scorers(&apply(ds, &sel), n)
            .into_iter()
            .map(|t| (t.name, t.goals))
            .collect()
    }

    #[test]
    fn orders_by_goals_with_stable_ties() {
        let ds = Dataset::from_players(vec![
            player("A", "Forward", 20, 3),
            player("B", "Forward", 20, 7),
            player("C", "Forward", 20, 3),
            player("D", "Forward", 20, 9),
        ]);
        let names: Vec<_> = ranked(&ds, 10).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn keeps_only_top_n() {
        let players = (0..15)
            .map(|i| player(&format!("P{i}"), "Forward", 20, i))
            .collect();
        let top = ranked(&Dataset::from_players(players), DEFAULT_TOP_N);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0], ("P14".to_string(), 14));
        assert_eq!(top[9], ("P5".to_string(), 5));
    }

    #[test]
    fn short_and_empty_views() {
        let ds = Dataset::from_players(vec![player("A", "Forward", 20, 1)]);
        assert_eq!(ranked(&ds, DEFAULT_TOP_N).len(), 1);
        assert!(ranked(&Dataset::default(), DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn carries_hover_columns() {
        let mut b = player("B", "Defender", 22, 4);
        b.club = "Milan".to_string();
        let ds = Dataset::from_players(vec![player("A", "Forward", 20, 1), b]);
        let sel = FilterSelection::full(&FilterDomains::from_dataset(&ds));
        let top = top_scorers(&apply(&ds, &sel), 1);
        assert_eq!(
            top,
            vec![TopScorer {
                name: "B".into(),
                goals: 4,
                position: "Defender".into(),
                club: "Milan".into(),
            }]
        );
    }
}
