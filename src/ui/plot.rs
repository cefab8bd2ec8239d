use std::collections::BTreeMap;

use eframe::egui::{self, Ui};
use egui_plot::{Legend, Plot, PlotBounds, PlotPoints, Points};

use crate::axis::AxisChoice;
use crate::data::model::ListingTable;
use crate::state::AppState;

const POINT_RADIUS: f32 = 2.5;
/// Hover hit radius, as a fraction of the visible plot extent.
const HOVER_RADIUS_FRAC: f64 = 0.02;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the price scatter plot in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    let axis = state.axis;

    ui.heading("Car Scatter Plot");
    ui.label(format!("{} against Price, color coded by brand", axis.label()));

    // One series per brand, in brand order (one legend entry per brand).
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.visible_indices {
        let listing = &state.table.listings[idx];
        series
            .entry(listing.brand.as_str())
            .or_default()
            .push([axis.value_of(listing), listing.price]);
    }

    let reset_view = std::mem::take(&mut state.reset_view);
    let table = &state.table;
    let visible = &state.visible_indices;
    let color_map = &state.color_map;

    let response = Plot::new("listing_plot")
        .legend(Legend::default())
        .x_axis_label(axis.label())
        .y_axis_label("Price")
        .show(ui, |plot_ui| {
            if reset_view {
                let [x_min, x_max] = axis.domain();
                let [y_min, y_max] = price_bounds(table, visible);
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
            }

            for (brand, points) in series {
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(brand)
                        .color(color_map.color_for(brand))
                        .radius(POINT_RADIUS),
                );
            }

            hovered_listing(plot_ui, table, visible, axis)
        });

    // Tooltip: brand, model, year, horsepower, price.
    if let Some(idx) = response.inner {
        let listing = &state.table.listings[idx];
        egui::show_tooltip_at_pointer(
            ui.ctx(),
            response.response.layer_id,
            egui::Id::new("listing_tooltip"),
            |ui| {
                ui.strong(format!("{} {}", listing.brand, listing.model));
                ui.label(format!("year: {}", listing.year));
                ui.label(format!("horsepower: {}", listing.horsepower));
                ui.label(format!("price: {:.0}", listing.price));
            },
        );
    }
}

/// Y range fitted to the visible prices, with a little headroom.
fn price_bounds(table: &ListingTable, visible: &[usize]) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &idx in visible {
        let price = table.listings[idx].price;
        min = min.min(price);
        max = max.max(price);
    }
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * 0.05).max(1.0);
    [(min - pad).max(0.0), max + pad]
}

/// Nearest visible listing within the hover radius, if any.
fn hovered_listing(
    plot_ui: &egui_plot::PlotUi,
    table: &ListingTable,
    visible: &[usize],
    axis: AxisChoice,
) -> Option<usize> {
    let pointer = plot_ui.pointer_coordinate()?;
    let bounds = plot_ui.plot_bounds();
    let (width, height) = (bounds.width(), bounds.height());
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let mut best: Option<(f64, usize)> = None;
    for &idx in visible {
        let listing = &table.listings[idx];
        let dx = (axis.value_of(listing) - pointer.x) / width;
        let dy = (listing.price - pointer.y) / height;
        let dist2 = dx * dx + dy * dy;
        if best.map_or(true, |(b, _)| dist2 < b) {
            best = Some((dist2, idx));
        }
    }

    best.and_then(|(dist2, idx)| (dist2.sqrt() < HOVER_RADIUS_FRAC).then_some(idx))
}
