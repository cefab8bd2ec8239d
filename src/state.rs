use crate::axis::AxisChoice;
use crate::color::ColorMap;
use crate::data::filter::{Selection, filtered_indices};
use crate::data::model::ListingTable;
use crate::data::options::{OptionMap, aggregate_options};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The table and option map are computed on load and read-only afterwards;
/// every interaction mutates only the selection/axis and the caches derived
/// from them.
pub struct AppState {
    /// Loaded dataset.  Replaced wholesale via File → Open…, never mutated.
    pub table: ListingTable,

    /// Label → (brand, model, count), derived from the table.
    pub options: OptionMap,

    /// Selected option labels.  Empty means "no rows displayed".
    pub selection: Selection,

    /// Chosen X-axis dimension.
    pub axis: AxisChoice,

    /// Indices of listings passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Brand → colour, derived from the table.
    pub color_map: ColorMap,

    /// Whether the bottom data table is shown.
    pub show_table: bool,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    /// Set whenever selection or axis changes; the plot consumes it to snap
    /// its bounds back to the fixed axis domain.
    pub reset_view: bool,
}

impl AppState {
    /// Build the state for a freshly loaded table: aggregate options, select
    /// the first option, colour by brand.
    pub fn new(table: ListingTable) -> Self {
        let options = aggregate_options(&table);
        let selection: Selection = options.keys().next().cloned().into_iter().collect();
        let color_map = ColorMap::new(&table.brands);
        let visible_indices = filtered_indices(&table, &selection, &options);

        AppState {
            table,
            options,
            selection,
            axis: AxisChoice::default(),
            visible_indices,
            color_map,
            show_table: false,
            status_message: None,
            reset_view: true,
        }
    }

    /// Swap in a newly loaded table.  Derived state is rebuilt and the
    /// selection resets to the new first option, so stale labels never
    /// survive a reload.
    pub fn replace_table(&mut self, table: ListingTable) {
        let axis = self.axis;
        *self = AppState::new(table);
        self.axis = axis;
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.table, &self.selection, &self.options);
        self.reset_view = true;
    }

    /// Toggle a single option label in the selection.
    pub fn toggle_option(&mut self, label: &str) {
        if !self.options.contains_key(label) {
            return;
        }
        if !self.selection.remove(label) {
            self.selection.insert(label.to_owned());
        }
        self.refilter();
    }

    /// Select every option.
    pub fn select_all(&mut self) {
        self.selection = self.options.keys().cloned().collect();
        self.refilter();
    }

    /// Clear the selection (shows an empty chart, not the full table).
    pub fn select_none(&mut self) {
        self.selection.clear();
        self.refilter();
    }

    /// Change the X axis.
    pub fn set_axis(&mut self, axis: AxisChoice) {
        if self.axis != axis {
            self.axis = axis;
            self.reset_view = true;
        }
    }
}
