use std::path::Path;

use eframe::egui::{self, Color32, Frame, RichText, ScrollArea, Slider, Ui};

use crate::data::filter::{AgeRange, Choice, FilterDomains};
use crate::data::metrics::Metrics;
use crate::data::model::Dimension;
use crate::pipeline::DashboardView;
use crate::state::{AppState, Tab};

const SUCCESS_GREEN: Color32 = Color32::from_rgb(46, 139, 87);

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Returns `true` if any filter changed.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, view: Option<&DashboardView>) -> bool {
    ui.heading("Filters");
    ui.separator();

    let Some(view) = view else {
        ui.label("No dataset loaded.");
        return false;
    };
    let Some(before) = state.selection.clone() else {
        return false;
    };

    if view.dataset.is_empty() {
        ui.weak("The dataset has no rows.");
    } else {
        ui.label(
            RichText::new(format!("Loaded {} players", view.dataset.len())).color(SUCCESS_GREEN),
        );
    }
    ui.add_space(4.0);
    ui.strong("Filter Players");

    let domains = &view.domains;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            categorical_selector(ui, state, domains, &before.position, Dimension::Position);
            age_range(ui, state, domains.age_bounds, before.age);
            for dim in [Dimension::League, Dimension::Nationality, Dimension::Club] {
                categorical_selector(ui, state, domains, before.choice(dim), dim);
            }

            ui.add_space(8.0);
            if ui.button("Reset filters").clicked() {
                state.reset_filters(domains);
            }

            ui.separator();
            ui.label(RichText::new(format!("Showing {} players", view.visible.len())).strong());
        });

    state.selection.as_ref() != Some(&before)
}

fn categorical_selector(
    ui: &mut Ui,
    state: &mut AppState,
    domains: &FilterDomains,
    current: &Choice,
    dim: Dimension,
) {
    ui.label(dim.column());
    let mut picked = current.clone();
    egui::ComboBox::from_id_salt(dim.column())
        .selected_text(current.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in domains.options(dim) {
                let label = option.label().to_string();
                ui.selectable_value(&mut picked, option, label);
            }
        });
    if &picked != current {
        state.set_choice(dim, picked);
    }
    ui.add_space(4.0);
}

/// Two linked sliders forming a closed range.
fn age_range(ui: &mut Ui, state: &mut AppState, bounds: AgeRange, current: AgeRange) {
    ui.label(format!("Age Range  ({}–{})", current.low, current.high));
    let mut low = current.low;
    let mut high = current.high;
    if ui
        .add(Slider::new(&mut low, bounds.low..=bounds.high).text("min"))
        .changed()
    {
        state.set_age_low(low);
    }
    if ui
        .add(Slider::new(&mut high, bounds.low..=bounds.high).text("max"))
        .changed()
    {
        state.set_age_high(high);
    }
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar. Returns `true` if the filters were reset.
pub fn top_bar(
    ui: &mut Ui,
    state: &mut AppState,
    view: Option<&DashboardView>,
    source: &Path,
) -> bool {
    let mut reset = false;
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("View", |ui: &mut Ui| {
            let enabled = view.is_some();
            if ui.add_enabled(enabled, egui::Button::new("Reset filters")).clicked() {
                if let Some(v) = view {
                    state.reset_filters(&v.domains);
                    reset = true;
                }
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong("Digital Football Scouting Dashboard");
        ui.separator();
        ui.label(RichText::new(source.display().to_string()).weak());
    });
    reset
}

// ---------------------------------------------------------------------------
// Central area
// ---------------------------------------------------------------------------

/// Four metric cards side by side.
pub fn metrics_row(ui: &mut Ui, metrics: &Metrics) {
    ui.columns(4, |cols: &mut [Ui]| {
        metric_card(&mut cols[0], "Total Players", metrics.count.to_string());
        metric_card(&mut cols[1], "Average Age", metrics.average_age_label());
        metric_card(&mut cols[2], "Total Goals", metrics.total_goals.to_string());
        metric_card(&mut cols[3], "Total Assists", metrics.total_assists.to_string());
    });
}

fn metric_card(ui: &mut Ui, title: &str, value: String) {
    Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).weak());
        ui.label(RichText::new(value).size(26.0).strong());
    });
}

pub fn tab_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            ui.selectable_value(&mut state.active_tab, tab, tab.label());
        }
    });
}

pub fn placeholder(ui: &mut Ui, tab: Tab) {
    ui.heading(tab.label());
    ui.label(RichText::new("Nothing here yet.").weak());
}

/// Shown instead of the dashboard when the pipeline failed.
pub fn error_panel(ui: &mut Ui, message: &str) {
    Frame::group(ui.style())
        .fill(Color32::from_rgb(70, 20, 20))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(Color32::from_rgb(255, 120, 120)));
        });
}
