//! Swatch catalog reference data
//!
//! The catalog is an ordered, read-only list loaded from `nuancier.json`.
//! Order matters: nearest-color ties resolve to the earlier entry. Non-public
//! entries stay in the catalog; filtering them is a host display concern.

use serde::Deserialize;

use crate::color::parse::{Rgb, normalize_hex};

const fn default_public() -> bool {
    true
}

/// One catalog entry with its commercial color references
#[derive(Clone, Debug, Deserialize)]
pub struct Swatch {
    /// Canonical hex value
    pub hex: String,
    /// Display name (French `nom` in the data files)
    #[serde(rename = "nom")]
    pub name: String,
    /// Internal reference code
    #[serde(rename = "id")]
    pub code: String,
    /// Pantone reference, when one exists
    #[serde(default)]
    pub pantone: Option<String>,
    /// RAL reference, when one exists
    #[serde(default)]
    pub ral: Option<String>,
    /// Whether the host shows this entry in public palettes
    #[serde(rename = "publique", default = "default_public")]
    pub is_public: bool,
}

/// Ordered set of swatches for one collection
#[derive(Clone, Debug, Default)]
pub struct SwatchCatalog {
    swatches: Vec<Swatch>,
}

impl SwatchCatalog {
    /// Build a catalog preserving the supplied order
    pub const fn new(swatches: Vec<Swatch>) -> Self {
        Self { swatches }
    }

    /// All entries in catalog order
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Entry whose normalized hex exactly matches the input
    pub fn find_exact(&self, hex: &str) -> Option<&Swatch> {
        let target = normalize_hex(hex)?;
        self.swatches
            .iter()
            .find(|swatch| normalize_hex(&swatch.hex).as_deref() == Some(target.as_str()))
    }

    /// Entry nearest to a color by squared RGB distance
    ///
    /// Ties resolve to the earlier catalog entry; entries whose hex does not
    /// parse are skipped.
    pub fn nearest(&self, target: Rgb) -> Option<&Swatch> {
        let mut best: Option<(&Swatch, u32)> = None;
        for swatch in &self.swatches {
            let Some(rgb) = Rgb::parse_hex(&swatch.hex) else {
                continue;
            };
            let distance = rgb.distance_sq(target);
            // Strict comparison keeps the earlier entry on ties
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((swatch, distance));
            }
        }
        best.map(|(swatch, _)| swatch)
    }
}
