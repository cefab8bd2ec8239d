use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: brand → Color32
// ---------------------------------------------------------------------------

/// Maps each brand to a stable, distinct colour.  The brand dimension drives
/// both the point colours and the legend.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the table's sorted distinct brands.
    pub fn new(brands: &[String]) -> Self {
        let palette = generate_palette(brands.len());
        let mapping: BTreeMap<String, Color32> = brands
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a brand.
    pub fn color_for(&self, brand: &str) -> Color32 {
        self.mapping
            .get(brand)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_yields_distinct_colors() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_palette() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn brands_get_stable_colors_and_unknown_falls_back() {
        let brands = vec!["BMW".to_owned(), "Toyota".to_owned()];
        let map = ColorMap::new(&brands);

        assert_eq!(map.color_for("BMW"), map.color_for("BMW"));
        assert_ne!(map.color_for("BMW"), map.color_for("Toyota"));
        assert_eq!(map.color_for("Opel"), Color32::GRAY);
    }
}
