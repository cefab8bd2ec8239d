use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing – one row of the dataset
// ---------------------------------------------------------------------------

/// A single vehicle listing (one row of the source table).
///
/// Extra columns in the source file are ignored; these six are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub horsepower: i64,
    pub odometer: f64,
    pub price: f64,
}

impl Listing {
    /// The (brand, model) pair listings are grouped and filtered by.
    pub fn group_key(&self) -> (&str, &str) {
        (&self.brand, &self.model)
    }
}

// ---------------------------------------------------------------------------
// ModelOption – a selectable (brand, model) group
// ---------------------------------------------------------------------------

/// One selectable (brand, model) group with its listing count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOption {
    pub brand: String,
    pub model: String,
    pub count: usize,
}

impl ModelOption {
    /// Display key shown in the multi-select, e.g. `"Toyota - Corolla (12)"`.
    pub fn label(&self) -> String {
        format!("{} - {} ({})", self.brand, self.model, self.count)
    }
}

// ---------------------------------------------------------------------------
// ListingTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded table. Immutable after load; only replaced wholesale.
#[derive(Debug, Clone)]
pub struct ListingTable {
    /// All listings, in file order.
    pub listings: Vec<Listing>,
    /// Sorted distinct brands, used for colour mapping.
    pub brands: Vec<String>,
}

impl ListingTable {
    /// Build the table and its brand index from loaded rows.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let brands: BTreeSet<&str> = listings.iter().map(|l| l.brand.as_str()).collect();
        let brands = brands.into_iter().map(str::to_owned).collect();
        ListingTable { listings, brands }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(brand: &str, model: &str) -> Listing {
        Listing {
            brand: brand.to_owned(),
            model: model.to_owned(),
            year: 2015,
            horsepower: 130,
            odometer: 80_000.0,
            price: 12_000.0,
        }
    }

    #[test]
    fn from_listings_collects_sorted_distinct_brands() {
        let table = ListingTable::from_listings(vec![
            listing("Volkswagen", "Golf"),
            listing("BMW", "X5"),
            listing("BMW", "3er"),
            listing("Audi", "A4"),
        ]);
        assert_eq!(table.len(), 4);
        assert_eq!(table.brands, vec!["Audi", "BMW", "Volkswagen"]);
    }

    #[test]
    fn empty_table() {
        let table = ListingTable::from_listings(Vec::new());
        assert!(table.is_empty());
        assert!(table.brands.is_empty());
    }

    #[test]
    fn option_label_format() {
        let opt = ModelOption {
            brand: "Toyota".to_owned(),
            model: "Corolla".to_owned(),
            count: 1,
        };
        assert_eq!(opt.label(), "Toyota - Corolla (1)");
    }
}
