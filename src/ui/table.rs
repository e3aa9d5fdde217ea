use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::pipeline::DashboardView;

const HEADERS: [&str; 8] = [
    "Name",
    "Position",
    "Age",
    "League",
    "Nationality",
    "Club",
    "Goals",
    "Assists",
];

const ROW_HEIGHT: f32 = 18.0;

/// Render the filtered players as a striped table (Player List tab).
pub fn player_table(ui: &mut Ui, view: &DashboardView) {
    let filtered = view.filtered();
    if filtered.is_empty() {
        ui.weak("No players match the current filters.");
        return;
    }
    let players: Vec<_> = filtered.players().collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(120.0))
        .columns(Column::auto().at_least(60.0), HEADERS.len() - 1)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, players.len(), |mut row| {
                let p = players[row.index()];
                let cells = [
                    p.name.clone(),
                    p.position.clone(),
                    p.age.to_string(),
                    p.league.clone(),
                    p.nationality.clone(),
                    p.club.clone(),
                    p.goals.to_string(),
                    p.assists.to_string(),
                ];
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
