//! Pattern, cell and selector definition types
//!
//! Mirrors the `calepinages.json` data format: each pattern declares a
//! repeating block of `block_size` cells and a sparse `matrix` of cell
//! specifications. Selectors that fail to parse degrade to the fixed
//! first-variant default instead of failing the whole file.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::io::error::{Result, invalid_definition};

/// Quarter-turn tile rotation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// No rotation
    #[default]
    R0,
    /// Quarter turn clockwise
    R90,
    /// Half turn
    R180,
    /// Three-quarter turn clockwise
    R270,
}

impl Rotation {
    /// All four rotations in ascending angle order
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Parse a degree value, accepting only the four quarter turns
    pub const fn from_degrees(degrees: u64) -> Option<Self> {
        match degrees {
            0 => Some(Self::R0),
            90 => Some(Self::R90),
            180 => Some(Self::R180),
            270 => Some(Self::R270),
            _ => None,
        }
    }
}

/// Which tile variant a cell shows
///
/// Indices are 1-based in definition files, matching the original data
/// format; the resolver converts to 0-based indices into the variant set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileSelector {
    /// A fixed 1-based variant index
    Fixed(usize),
    /// Uniform random draw among all available variants
    Any,
    /// Uniform random draw among a list of 1-based indices
    List(Vec<usize>),
}

impl TileSelector {
    fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => {
                n.as_u64().map_or(Self::Fixed(1), |i| Self::Fixed(i as usize))
            }
            serde_json::Value::String(s) if s == "any" => Self::Any,
            serde_json::Value::Array(items) => Self::List(
                items
                    .iter()
                    .filter_map(serde_json::Value::as_u64)
                    .map(|i| i as usize)
                    .collect(),
            ),
            // Malformed selectors resolve as the first variant, never an error
            _ => Self::Fixed(1),
        }
    }
}

impl Default for TileSelector {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

impl<'de> Deserialize<'de> for TileSelector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Which rotation a cell applies to its variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationSelector {
    /// A fixed quarter-turn rotation
    Fixed(Rotation),
    /// Uniform random draw among the four quarter turns
    Random,
}

impl RotationSelector {
    fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n
                .as_u64()
                .and_then(Rotation::from_degrees)
                .map_or(Self::Fixed(Rotation::R0), Self::Fixed),
            serde_json::Value::String(s) if s == "random" => Self::Random,
            _ => Self::Fixed(Rotation::R0),
        }
    }
}

impl Default for RotationSelector {
    fn default() -> Self {
        Self::Fixed(Rotation::R0)
    }
}

impl<'de> Deserialize<'de> for RotationSelector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Specification for one cell of the repeating block
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CellSpec {
    /// Variant selector
    pub tile: TileSelector,
    /// Rotation selector
    pub rot: RotationSelector,
}

/// One `matrix` entry as stored in definition files
#[derive(Clone, Debug, Deserialize)]
pub struct CellDefinition {
    /// Column within the block, `0 ≤ x < cols`
    pub x: u32,
    /// Row within the block, `0 ≤ y < rows`
    pub y: u32,
    /// Variant selector
    #[serde(default)]
    pub tile: TileSelector,
    /// Rotation selector
    #[serde(default)]
    pub rot: RotationSelector,
}

/// One pattern record as stored in `calepinages.json`
#[derive(Clone, Debug, Deserialize)]
pub struct PatternDefinition {
    /// Stable pattern identifier
    pub id: String,
    /// Display name (French `nom` in the data files)
    #[serde(rename = "nom")]
    pub name: String,
    /// Repeating block size as `[cols, rows]`
    pub block_size: [u32; 2],
    /// Sparse cell specifications; uncovered cells use the resolver fallback
    #[serde(default)]
    pub matrix: Vec<CellDefinition>,
}

/// A validated, immutable repeating pattern
///
/// The block tiles the infinite grid in all four directions. Cells the
/// definition leaves uncovered resolve to the first variant, unrotated.
#[derive(Clone, Debug)]
pub struct Pattern {
    id: String,
    name: String,
    cols: u32,
    rows: u32,
    cells: HashMap<(u32, u32), CellSpec>,
}

impl Pattern {
    /// Build a pattern from explicit parts
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either block dimension is zero
    /// - A cell lies outside the declared block
    /// - Two cells share the same `(x, y)` coordinates
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        block_size: (u32, u32),
        cells: impl IntoIterator<Item = ((u32, u32), CellSpec)>,
    ) -> Result<Self> {
        let (cols, rows) = block_size;
        if cols == 0 || rows == 0 {
            return Err(invalid_definition(format!(
                "block size {cols}x{rows} has an empty dimension"
            )));
        }

        let mut cell_map = HashMap::new();
        for ((x, y), spec) in cells {
            if x >= cols || y >= rows {
                return Err(invalid_definition(format!(
                    "cell ({x}, {y}) lies outside the {cols}x{rows} block"
                )));
            }
            if cell_map.insert((x, y), spec).is_some() {
                return Err(invalid_definition(format!(
                    "duplicate cell specification at ({x}, {y})"
                )));
            }
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            cols,
            rows,
            cells: cell_map,
        })
    }

    /// Build a pattern from a deserialized definition record
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Pattern::new`].
    pub fn from_definition(definition: PatternDefinition) -> Result<Self> {
        let [cols, rows] = definition.block_size;
        let cells = definition.matrix.into_iter().map(|cell| {
            (
                (cell.x, cell.y),
                CellSpec {
                    tile: cell.tile,
                    rot: cell.rot,
                },
            )
        });
        Self::new(definition.id, definition.name, (cols, rows), cells)
    }

    /// Stable pattern identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Repeating block size as `(cols, rows)`
    pub const fn block_size(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    /// Cell specification at block coordinates, if declared
    pub fn cell(&self, x: u32, y: u32) -> Option<&CellSpec> {
        self.cells.get(&(x, y))
    }
}
