use std::collections::{BTreeSet, HashSet};

use super::model::ListingTable;
use super::options::OptionMap;

// ---------------------------------------------------------------------------
// Filter predicate: which option labels are selected
// ---------------------------------------------------------------------------

/// The user's chosen subset of option labels.
pub type Selection = BTreeSet<String>;

/// Return indices of listings whose (brand, model) matches a selected option.
///
/// * An empty selection hides everything; it never falls back to "show all".
/// * Labels with no entry in `options` are skipped, not an error.
/// * Indices come back ascending, so the result is an order-preserving
///   subsequence of the table.
pub fn filtered_indices(
    table: &ListingTable,
    selection: &Selection,
    options: &OptionMap,
) -> Vec<usize> {
    if selection.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<(&str, &str)> = selection
        .iter()
        .filter_map(|label| options.get(label))
        .map(|opt| (opt.brand.as_str(), opt.model.as_str()))
        .collect();

    if wanted.is_empty() {
        return Vec::new();
    }

    table
        .listings
        .iter()
        .enumerate()
        .filter(|(_, listing)| wanted.contains(&listing.group_key()))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Listing;
    use crate::data::options::aggregate_options;

    fn listing(brand: &str, model: &str, price: f64) -> Listing {
        Listing {
            brand: brand.to_owned(),
            model: model.to_owned(),
            year: 2012,
            horsepower: 110,
            odometer: 90_000.0,
            price,
        }
    }

    fn sample_table() -> ListingTable {
        ListingTable::from_listings(vec![
            listing("Toyota", "Corolla", 12_000.0),
            listing("BMW", "X5", 35_000.0),
            listing("Toyota", "Yaris", 8_000.0),
            listing("Toyota", "Corolla", 13_500.0),
            listing("BMW", "3er", 21_000.0),
        ])
    }

    fn selection_of(labels: &[&str]) -> Selection {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn empty_selection_yields_no_rows() {
        let table = sample_table();
        let options = aggregate_options(&table);
        let indices = filtered_indices(&table, &Selection::new(), &options);
        assert!(indices.is_empty());
    }

    #[test]
    fn selection_matches_exactly_the_referenced_pairs() {
        let table = sample_table();
        let options = aggregate_options(&table);
        let selection = selection_of(&["Toyota - Corolla (2)"]);

        let indices = filtered_indices(&table, &selection, &options);
        assert_eq!(indices, vec![0, 3]);
        for &i in &indices {
            assert_eq!(table.listings[i].group_key(), ("Toyota", "Corolla"));
        }
    }

    #[test]
    fn result_preserves_table_order() {
        let table = sample_table();
        let options = aggregate_options(&table);
        let selection = selection_of(&["BMW - 3er (1)", "Toyota - Corolla (2)", "BMW - X5 (1)"]);

        let indices = filtered_indices(&table, &selection, &options);
        assert_eq!(indices, vec![0, 1, 3, 4]);
    }

    #[test]
    fn unknown_labels_are_silently_ignored() {
        let table = sample_table();
        let options = aggregate_options(&table);

        // A stale label alongside a valid one: only the valid one counts.
        let selection = selection_of(&["Opel - Astra (7)", "BMW - X5 (1)"]);
        let indices = filtered_indices(&table, &selection, &options);
        assert_eq!(indices, vec![1]);

        // Only stale labels: same as an empty selection.
        let selection = selection_of(&["Opel - Astra (7)"]);
        assert!(filtered_indices(&table, &selection, &options).is_empty());
    }

    #[test]
    fn selecting_all_options_reproduces_the_table() {
        let table = sample_table();
        let options = aggregate_options(&table);
        let selection: Selection = options.keys().cloned().collect();

        let indices = filtered_indices(&table, &selection, &options);
        assert_eq!(indices, (0..table.len()).collect::<Vec<_>>());
    }

    #[test]
    fn single_option_selection_end_to_end() {
        let table = ListingTable::from_listings(vec![
            Listing {
                brand: "Toyota".to_owned(),
                model: "Corolla".to_owned(),
                year: 2015,
                horsepower: 130,
                odometer: 80_000.0,
                price: 12_000.0,
            },
            Listing {
                brand: "BMW".to_owned(),
                model: "X5".to_owned(),
                year: 2018,
                horsepower: 250,
                odometer: 60_000.0,
                price: 35_000.0,
            },
        ]);
        let options = aggregate_options(&table);
        let selection = selection_of(&["Toyota - Corolla (1)"]);

        let indices = filtered_indices(&table, &selection, &options);
        assert_eq!(indices, vec![0]);
        let hit = &table.listings[0];
        assert_eq!(hit.year, 2015);
        assert_eq!(hit.horsepower, 130);
        assert_eq!(hit.price, 12_000.0);
    }
}
