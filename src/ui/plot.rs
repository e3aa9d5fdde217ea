use eframe::egui::{RichText, Ui};
use egui_plot::{uniform_grid_spacer, Bar, BarChart, Plot};

use crate::color::goal_intensity;
use crate::data::ranking::TopScorer;

// ---------------------------------------------------------------------------
// Top scorers bar chart (Top Performers tab)
// ---------------------------------------------------------------------------

const BAR_WIDTH: f64 = 0.7;

/// Render the ranked goals chart. Bars sit at x = 0, 1, 2, … in rank order.
pub fn top_scorers_chart(ui: &mut Ui, scorers: &[TopScorer], top_n: usize) {
    ui.heading(format!("Top {top_n} Scorers"));
    if scorers.is_empty() {
        ui.label(RichText::new("No players match the current filters.").weak());
    }

    let max_goals = scorers.iter().map(|s| s.goals).max().unwrap_or(0);
    let bars: Vec<Bar> = scorers
        .iter()
        .enumerate()
        .map(|(rank, s)| {
            Bar::new(rank as f64, s.goals as f64)
                .width(BAR_WIDTH)
                .name(&s.name)
                .fill(goal_intensity(s.goals, max_goals))
        })
        .collect();

    let hover: Vec<String> = scorers.iter().map(hover_text).collect();
    let names: Vec<String> = scorers.iter().map(|s| s.name.clone()).collect();

    let chart = BarChart::new(bars).element_formatter(Box::new(move |bar: &Bar, _chart: &BarChart| {
        rank_of(bar.argument)
            .and_then(|rank| hover.get(rank).cloned())
            .unwrap_or_default()
    }));

    Plot::new("top_scorers")
        .x_axis_label("Name")
        .y_axis_label("Goals")
        .x_axis_formatter(move |mark, _range| axis_label(&names, mark.value))
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .include_y(0.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

/// Tooltip for one bar: the name, goals and the hover columns.
fn hover_text(s: &TopScorer) -> String {
    format!(
        "{}\nGoals: {}\nPosition: {}\nClub: {}",
        s.name,
        s.goals,
        display_or_dash(&s.position),
        display_or_dash(&s.club)
    )
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "–"
    } else {
        value
    }
}

/// Rank index at an x position, only for positions on a bar centre.
fn rank_of(x: f64) -> Option<usize> {
    let rounded = x.round();
    if rounded < 0.0 || (x - rounded).abs() > 1e-6 {
        return None;
    }
    Some(rounded as usize)
}

/// Tick label for an x position: the player name under each bar.
fn axis_label(names: &[String], x: f64) -> String {
    rank_of(x)
        .and_then(|rank| names.get(rank).cloned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_only_on_bar_centres() {
        let names = vec!["Kane".to_string(), "Salah".to_string()];
        assert_eq!(axis_label(&names, 0.0), "Kane");
        assert_eq!(axis_label(&names, 1.0), "Salah");
        assert_eq!(axis_label(&names, 0.5), "");
        assert_eq!(axis_label(&names, 2.0), "");
        assert_eq!(axis_label(&names, -1.0), "");
    }

    #[test]
    fn hover_shows_position_and_club() {
        let s = TopScorer {
            name: "Kane".into(),
            goals: 30,
            position: "Forward".into(),
            club: String::new(),
        };
        assert_eq!(hover_text(&s), "Kane\nGoals: 30\nPosition: Forward\nClub: –");
    }
}
