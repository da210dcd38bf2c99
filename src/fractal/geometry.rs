//! Level-indexed pixel geometry for rendering nested boards.
//!
//! A row is looked up by *level*, not by absolute depth. The renderer computes
//! `level = depth - outer_view`, which lets one board be drawn either as a full
//! recursive view or embedded one level deeper without per-depth branching.

use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Pixel geometry for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Outer side length of the board, margins included
    pub size: f64,
    /// Gap between the outer edge and the grid
    pub margin: f64,
    /// Stroke width for grid lines and marks
    pub stroke: f64,
    /// Half-extent of an `X`, radius of an `O`
    pub radius: f64,
}

impl Geometry {
    pub const fn new(size: f64, margin: f64, stroke: f64, radius: f64) -> Self {
        Self {
            size,
            margin,
            stroke,
            radius,
        }
    }

    /// Side length of the grid once both margins are removed.
    pub fn inner_size(&self) -> f64 {
        self.size - 2.0 * self.margin
    }
}

/// Rows for levels 0 and 1.
pub const STANDARD_GEOMETRY: [Geometry; 2] = [
    Geometry::new(150.0, 5.0, 1.0, 10.0 * SQRT_2),
    Geometry::new(500.0, 25.0, 3.0, (100.0 / 3.0) * SQRT_2),
];

/// Ordered geometry rows, one per level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Geometry>", into = "Vec<Geometry>")]
pub struct GeometryTable {
    rows: Vec<Geometry>,
}

impl GeometryTable {
    /// Build a table from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] if the table is empty, a value is not
    /// positive and finite, a margin leaves no room for the grid, or a level is
    /// smaller than the one below it.
    pub fn new(rows: Vec<Geometry>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidGeometry {
                message: "table needs at least one level".to_string(),
            });
        }
        for (level, row) in rows.iter().enumerate() {
            let values = [row.size, row.margin, row.stroke, row.radius];
            if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(Error::InvalidGeometry {
                    message: format!("level {level} has a non-positive or non-finite value"),
                });
            }
            if row.inner_size() <= 0.0 {
                return Err(Error::InvalidGeometry {
                    message: format!(
                        "level {level} margin {} leaves no room inside size {}",
                        row.margin, row.size
                    ),
                });
            }
        }
        if let Some(level) = rows.windows(2).position(|pair| pair[0].size > pair[1].size) {
            return Err(Error::InvalidGeometry {
                message: format!(
                    "level {} is larger than level {}; outer levels must be drawn larger",
                    level,
                    level + 1
                ),
            });
        }
        Ok(Self { rows })
    }

    /// The two-level table the board was originally laid out with.
    pub fn standard() -> Self {
        Self {
            rows: STANDARD_GEOMETRY.to_vec(),
        }
    }

    /// Levels a board of `depth` can touch: the inner view of the root sits at
    /// `depth`, everything else below it.
    pub fn levels_required(depth: usize) -> usize {
        depth + 1
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Geometry] {
        &self.rows
    }

    pub fn get(&self, level: usize) -> Option<&Geometry> {
        self.rows.get(level)
    }

    /// Look up a (possibly negative) level.
    pub fn lookup(&self, level: isize) -> Result<&Geometry> {
        usize::try_from(level)
            .ok()
            .and_then(|l| self.rows.get(l))
            .ok_or(Error::MissingGeometry { level })
    }

    /// Append a row above the current top level.
    pub fn push(&mut self, row: Geometry) -> Result<()> {
        let mut rows = self.rows.clone();
        rows.push(row);
        *self = Self::new(rows)?;
        Ok(())
    }

    /// Extrapolate rows until the table covers `levels` levels.
    ///
    /// Margin, stroke and radius grow by the ratio between the top two rows
    /// (or triple when only one row exists). Size is always three children plus
    /// both margins, which is how the standard rows relate.
    #[must_use = "extended_to returns a new table; the original is unchanged"]
    pub fn extended_to(&self, levels: usize) -> Self {
        let mut rows = self.rows.clone();
        while rows.len() < levels {
            let top = rows[rows.len() - 1];
            let (margin_ratio, stroke_ratio, radius_ratio) = match rows.len() {
                1 => (3.0, 3.0, 3.0),
                n => {
                    let below = rows[n - 2];
                    (
                        top.margin / below.margin,
                        top.stroke / below.stroke,
                        top.radius / below.radius,
                    )
                }
            };
            let margin = top.margin * margin_ratio;
            rows.push(Geometry {
                size: 3.0 * top.size + 2.0 * margin,
                margin,
                stroke: top.stroke * stroke_ratio,
                radius: top.radius * radius_ratio,
            });
        }
        Self { rows }
    }
}

impl Default for GeometryTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Geometry>> for GeometryTable {
    type Error = Error;

    fn try_from(rows: Vec<Geometry>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<GeometryTable> for Vec<Geometry> {
    fn from(table: GeometryTable) -> Self {
        table.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rows_nest_exactly() {
        let table = GeometryTable::standard();
        let (small, large) = (table.get(0).unwrap(), table.get(1).unwrap());
        assert_eq!(3.0 * small.size + 2.0 * large.margin, large.size);
        assert_eq!(large.inner_size(), 450.0);
    }

    #[test]
    fn test_outer_levels_are_larger() {
        let table = GeometryTable::standard().extended_to(5);
        for pair in table.rows().windows(2) {
            assert!(pair[0].size <= pair[1].size);
        }
    }

    #[test]
    fn test_lookup_missing_level() {
        let table = GeometryTable::standard();
        assert!(matches!(
            table.lookup(-1),
            Err(Error::MissingGeometry { level: -1 })
        ));
        assert!(matches!(
            table.lookup(2),
            Err(Error::MissingGeometry { level: 2 })
        ));
        assert_eq!(table.lookup(1).unwrap().size, 500.0);
    }

    #[test]
    fn test_extension_keeps_existing_rows_and_nests() {
        let table = GeometryTable::standard().extended_to(3);
        assert_eq!(table.len(), 3);
        assert_eq!(&table.rows()[..2], &STANDARD_GEOMETRY[..]);
        let (mid, top) = (table.rows()[1], table.rows()[2]);
        assert_eq!(top.margin, 125.0);
        assert_eq!(top.size, 3.0 * mid.size + 2.0 * top.margin);
        assert!((top.stroke - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_extension_never_shrinks() {
        let table = GeometryTable::standard();
        assert_eq!(table.extended_to(1), table);
    }

    #[test]
    fn test_new_rejects_shrinking_levels() {
        let err = GeometryTable::new(vec![STANDARD_GEOMETRY[1], STANDARD_GEOMETRY[0]]).unwrap_err();
        assert!(err.to_string().contains("outer levels must be drawn larger"));
    }

    #[test]
    fn test_new_rejects_oversized_margin() {
        let err = GeometryTable::new(vec![Geometry::new(10.0, 5.0, 1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { .. }));
        assert!(GeometryTable::new(Vec::new()).is_err());
    }

    #[test]
    fn test_push_validates() {
        let mut table = GeometryTable::standard();
        assert!(table.push(Geometry::new(100.0, 5.0, 1.0, 1.0)).is_err());
        assert_eq!(table.len(), 2);
        table.push(Geometry::new(1600.0, 50.0, 5.0, 100.0)).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_serde_validates_rows() {
        let json = serde_json::to_string(&GeometryTable::standard()).unwrap();
        let parsed: GeometryTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, GeometryTable::standard());
        assert!(serde_json::from_str::<GeometryTable>("[]").is_err());
    }
}
