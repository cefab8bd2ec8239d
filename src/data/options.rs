use std::collections::BTreeMap;

use super::model::{ListingTable, ModelOption};

// ---------------------------------------------------------------------------
// Option aggregation: distinct (brand, model) pairs with counts
// ---------------------------------------------------------------------------

/// Ordered map from display label to its option.
/// Label order coincides with (brand, model) order, so display is deterministic.
pub type OptionMap = BTreeMap<String, ModelOption>;

/// Group listings by (brand, model) and count each group.
///
/// Every distinct pair present in the table yields exactly one entry with
/// `count > 0`; an empty table yields an empty map.
pub fn aggregate_options(table: &ListingTable) -> OptionMap {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for listing in &table.listings {
        *counts.entry(listing.group_key()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((brand, model), count)| {
            let option = ModelOption {
                brand: brand.to_owned(),
                model: model.to_owned(),
                count,
            };
            (option.label(), option)
        })
        .collect()
}
