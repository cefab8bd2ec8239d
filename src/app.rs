use eframe::egui;

use crate::data::model::ListingTable;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CarScopeApp {
    pub state: AppState,
}

impl CarScopeApp {
    pub fn new(table: ListingTable) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for CarScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: filtered rows (optional) ----
        if self.state.show_table {
            egui::TopBottomPanel::bottom("data_table")
                .resizable(true)
                .default_height(200.0)
                .show(ctx, |ui| {
                    panels::data_table(ui, &self.state);
                });
        }

        // ---- Central panel: scatter plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &mut self.state);
        });
    }
}
