use crate::data::model::Listing;

// ---------------------------------------------------------------------------
// X-axis dimension and its fixed display scale
// ---------------------------------------------------------------------------

/// The user-chosen X-axis dimension for the scatter plot.
///
/// The set is closed; there is no "unknown axis" case to handle at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AxisChoice {
    #[default]
    Year,
    Horsepower,
    Odometer,
}

impl AxisChoice {
    /// Every axis, in the order shown in the selector.
    pub const ALL: [AxisChoice; 3] = [
        AxisChoice::Year,
        AxisChoice::Horsepower,
        AxisChoice::Odometer,
    ];

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            AxisChoice::Year => "Year",
            AxisChoice::Horsepower => "Horsepower",
            AxisChoice::Odometer => "Odometer",
        }
    }

    /// Fixed numeric display domain `[min, max]` for this axis.
    pub fn domain(self) -> [f64; 2] {
        match self {
            AxisChoice::Year => [1990.0, 2030.0],
            AxisChoice::Horsepower => [50.0, 1000.0],
            AxisChoice::Odometer => [0.0, 300_000.0],
        }
    }

    /// The listing's value along this axis.
    pub fn value_of(self, listing: &Listing) -> f64 {
        match self {
            AxisChoice::Year => listing.year as f64,
            AxisChoice::Horsepower => listing.horsepower as f64,
            AxisChoice::Odometer => listing.odometer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_match_the_fixed_scales() {
        assert_eq!(AxisChoice::Year.domain(), [1990.0, 2030.0]);
        assert_eq!(AxisChoice::Horsepower.domain(), [50.0, 1000.0]);
        assert_eq!(AxisChoice::Odometer.domain(), [0.0, 300_000.0]);
    }

    #[test]
    fn exactly_three_choices_defaulting_to_year() {
        assert_eq!(AxisChoice::ALL.len(), 3);
        assert_eq!(AxisChoice::default(), AxisChoice::Year);
    }

    #[test]
    fn value_extraction_per_axis() {
        let listing = Listing {
            brand: "Toyota".to_owned(),
            model: "Corolla".to_owned(),
            year: 2015,
            horsepower: 130,
            odometer: 80_000.0,
            price: 12_000.0,
        };
        assert_eq!(AxisChoice::Year.value_of(&listing), 2015.0);
        assert_eq!(AxisChoice::Horsepower.value_of(&listing), 130.0);
        assert_eq!(AxisChoice::Odometer.value_of(&listing), 80_000.0);
    }
}
