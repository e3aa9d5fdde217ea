use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::cache::DatasetCache;
use crate::error::DashboardResult;
use crate::pipeline::{render_pipeline, DashboardView};
use crate::state::{AppState, Tab};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScoutApp {
    pub config: DashboardConfig,
    pub cache: DatasetCache,
    pub state: AppState,
}

impl ScoutApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            cache: DatasetCache::new(config.dataset_path.clone()),
            config,
            state: AppState::default(),
        }
    }

    /// Run the pipeline and record the outcome. This is the one place a
    /// fault from any stage is caught.
    fn run_pipeline(&mut self) -> Option<DashboardView> {
        let result: DashboardResult<DashboardView> =
            render_pipeline(&self.cache, &mut self.state.selection, self.config.top_n);
        match result {
            Ok(view) => {
                self.state.clear_error();
                Some(view)
            }
            Err(e) => {
                self.state.report_error(&e);
                None
            }
        }
    }

    /// Recompute after a filter change. Panels drawn earlier this frame
    /// still show the old view, so another frame is requested.
    fn refresh(&mut self, ctx: &egui::Context) -> Option<DashboardView> {
        let view = self.run_pipeline();
        ctx.request_repaint();
        view
    }
}

impl eframe::App for ScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut view = self.run_pipeline();

        // ---- Top panel: menu bar ----
        let mut changed = false;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            changed |= panels::top_bar(ui, &mut self.state, view.as_ref(), self.cache.path());
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                changed |= panels::side_panel(ui, &mut self.state, view.as_ref());
            });

        // Filters changed this frame: recompute before drawing the results.
        if changed {
            view = self.refresh(ctx);
        }

        // ---- Central panel: metrics + tabs, or the error ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Digital Football Scouting Dashboard");
            ui.add_space(4.0);

            let Some(view) = view.as_ref() else {
                if let Some(msg) = &self.state.error_message {
                    panels::error_panel(ui, msg);
                }
                return;
            };

            panels::metrics_row(ui, &view.metrics);
            ui.separator();
            panels::tab_bar(ui, &mut self.state);
            ui.separator();

            match self.state.active_tab {
                Tab::TopPerformers => {
                    plot::top_scorers_chart(ui, &view.top_scorers, self.config.top_n)
                }
                Tab::PlayerList => table::player_table(ui, view),
                tab @ (Tab::Statistics | Tab::SearchPlayer) => panels::placeholder(ui, tab),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::data::filter::Choice;
    use crate::data::model::Dimension;

    #[test]
    fn filter_change_recomputes_and_requests_repaint() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scout.csv");
        std::fs::write(
            &path,
            "Name,Position,Age,League,Nationality,Club,Goals,Assists\n\
             A,Forward,20,Serie A,Italy,Roma,10,2\n\
             B,Midfielder,25,Serie A,Italy,Roma,5,6\n",
        )
        .unwrap();
        let mut app = ScoutApp::new(DashboardConfig {
            dataset_path: path,
            top_n: 10,
        });
        let ctx = egui::Context::default();

        assert_eq!(app.run_pipeline().unwrap().visible.len(), 2);

        app.state
            .set_choice(Dimension::Position, Choice::Value("Midfielder".into()));
        let view = app.refresh(&ctx).unwrap();

        assert_eq!(view.visible, vec![1]);
        assert!(ctx.has_requested_repaint());
    }
}
