use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::axis::AxisChoice;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Filter options");
    ui.separator();

    // Clone the option labels so we can mutate state inside the loop.
    let options: Vec<(String, String)> = state
        .options
        .iter()
        .map(|(label, opt)| (label.clone(), opt.brand.clone()))
        .collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Brand / Model multi-select ----
            let n_selected = state.selection.len();
            let n_total = options.len();
            let header_text = format!("Brand / Model  ({n_selected}/{n_total})");

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("brand_model")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_none();
                        }
                    });

                    for (label, brand) in &options {
                        let mut checked = state.selection.contains(label);
                        let text = RichText::new(label).color(state.color_map.color_for(brand));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_option(label);
                        }
                    }
                });

            ui.separator();

            // ---- X-axis selector ----
            ui.strong("X axis");
            let mut axis = state.axis;
            egui::ComboBox::from_id_salt("x_axis")
                .selected_text(axis.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for choice in AxisChoice::ALL {
                        ui.selectable_value(&mut axis, choice, choice.label());
                    }
                });
            if axis != state.axis {
                state.set_axis(axis);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} listings loaded, {} visible",
            state.table.len(),
            state.visible_indices.len()
        ));

        ui.separator();

        if ui
            .selectable_label(state.show_table, "Data table")
            .clicked()
        {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom data table
// ---------------------------------------------------------------------------

/// Render the filtered rows as a virtualized table.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let rows = &state.visible_indices;

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(90.0), 6)
        .header(20.0, |mut header| {
            for title in ["Brand", "Model", "Year", "Horsepower", "Odometer", "Price"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let listing = &state.table.listings[rows[row.index()]];
                row.col(|ui| {
                    ui.label(&listing.brand);
                });
                row.col(|ui| {
                    ui.label(&listing.model);
                });
                row.col(|ui| {
                    ui.label(listing.year.to_string());
                });
                row.col(|ui| {
                    ui.label(listing.horsepower.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", listing.odometer));
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", listing.price));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open listing data")
        .add_filter("Supported files", &["parquet", "pq", "csv", "json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} listings across {} brands",
                    table.len(),
                    table.brands.len()
                );
                state.replace_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
