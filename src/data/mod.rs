/// Data layer: core types, loading, aggregation, and filtering.
///
/// Architecture:
/// ```text
///  .parquet / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ListingTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ListingTable  │  Vec<Listing>, brand index
///   └──────────────┘
///        │                │
///        ▼                ▼
///   ┌──────────┐    ┌──────────┐
///   │ options   │    │  filter   │
///   │ (groupby) │    │ (labels → │
///   │           │    │  indices) │
///   └──────────┘    └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
