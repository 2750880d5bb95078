//! Per-zone color assignment
//!
//! Zones are opaque identifiers shared by every variant of a collection. The
//! store owns the current zone-to-color mapping: created empty on collection
//! load, mutated only by explicit assignment, cleared only by [`reset`] or a
//! collection switch. All mutations are synchronous and immediately
//! observable; persistence belongs to the host.
//!
//! [`reset`]: ZoneColorStore::reset

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::color::parse::{Rgb, normalize_hex};
use crate::color::swatch::SwatchCatalog;
use crate::io::error::{Result, invalid_color};

/// Mapping from zone identifier to a normalized `#rrggbb` color
#[derive(Clone, Debug, Default)]
pub struct ZoneColorStore {
    colors: BTreeMap<String, String>,
}

impl ZoneColorStore {
    /// Create an empty store
    pub const fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Assign a color to a zone
    ///
    /// The input is validated as a 3- or 6-digit hex color (leading `#`
    /// optional) and stored in the lower-case `#rrggbb` normal form.
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` and leaves the store unchanged if the input is
    /// not a valid hex color.
    pub fn set_zone_color(&mut self, zone: &str, input: &str) -> Result<()> {
        let normalized = normalize_hex(input)
            .ok_or_else(|| invalid_color(&input, "expected a 3- or 6-digit hex color"))?;
        self.colors.insert(zone.to_string(), normalized);
        Ok(())
    }

    /// Current color of a zone, if assigned
    pub fn color(&self, zone: &str) -> Option<&str> {
        self.colors.get(zone).map(String::as_str)
    }

    /// All assignments in zone order
    pub const fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    /// Number of zones with an assigned color
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no zone has an assigned color
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Drop every assignment (collection switch or explicit reset)
    pub fn reset(&mut self) {
        self.colors.clear();
    }

    /// Whether two or more zones currently share a color
    ///
    /// Duplicate fills are flagged by hosts as a manufacturing and visual
    /// warning.
    pub fn has_duplicate_colors(&self) -> bool {
        let mut seen = HashSet::new();
        self.colors.values().any(|hex| !seen.insert(hex))
    }

    /// Seed the store from the raw fills of a collection's variants
    ///
    /// Each raw fill (hex, `rgb()`/`rgba()`, or a named color resolved
    /// through `names`) is normalized and snapped to the catalog: an exact
    /// match adopts the catalog's canonical hex, anything else the nearest
    /// entry by squared RGB distance. With an empty catalog the raw
    /// normalized hex is kept. Fills that parse as nothing leave their zone
    /// unset.
    pub fn extract_default_colors(
        &mut self,
        fills: &BTreeMap<String, String>,
        names: &HashMap<String, String>,
        catalog: &SwatchCatalog,
    ) {
        for (zone, raw_fill) in fills {
            let Some(rgb) = Rgb::parse_fill(raw_fill, names) else {
                continue;
            };
            let extracted = rgb.to_hex();

            let adopted = catalog
                .find_exact(&extracted)
                .or_else(|| catalog.nearest(rgb))
                .and_then(|swatch| normalize_hex(&swatch.hex))
                .unwrap_or(extracted);

            self.colors.insert(zone.clone(), adopted);
        }
    }
}
