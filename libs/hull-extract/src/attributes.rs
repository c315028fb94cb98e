//! Optional per-facet attributes and whole-hull scalars.

use config::constants::MAX_TABLE_CELLS;
use hull_engine::{EngineSession, Facet};
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, ExtractResult};

/// Per-facet hyperplane rows: the unit normal components followed by
/// the plane offset.
///
/// One row per facet in walk order, `dimension + 1` columns. Facets the
/// engine produced no usable normal for get an all-zero row, so the
/// table always stays rectangular and row ordinals keep matching the
/// facet index table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalTable {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl NormalTable {
    /// Number of facet rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, always the hull dimension plus one.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The value at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// One facet's normal components and trailing offset.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// The flat row-major value buffer.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Builds the hyperplane table from the walked facets.
///
/// Only called when normal output was requested; the walk has already
/// run the engine's vertex-neighbor pass by then, so every facet that
/// has a normal carries a complete one. A facet whose normal is absent
/// or of the wrong length contributes a zero row.
pub fn build_normal_table(facets: &[Facet], dimension: usize) -> ExtractResult<NormalTable> {
    let cols = dimension + 1;
    let total = facets
        .len()
        .checked_mul(cols)
        .ok_or(ExtractError::Exhausted {
            what: "normals",
            cells: usize::MAX,
        })?;
    if total > MAX_TABLE_CELLS {
        return Err(ExtractError::exhausted("normals", total));
    }

    let mut values: Vec<f64> = Vec::new();
    values
        .try_reserve_exact(total)
        .map_err(|_| ExtractError::exhausted("normals", total))?;

    for facet in facets {
        match facet.normal() {
            Some(normal) if normal.len() == dimension => {
                values.extend_from_slice(normal);
                values.push(facet.offset());
            }
            _ => values.resize(values.len() + cols, 0.0),
        }
    }

    Ok(NormalTable {
        rows: facets.len(),
        cols,
        values,
    })
}

/// Whole-hull scalars read off the session after the walk.
///
/// The engine reports exact zero for a metric it never computed, so
/// zero is the presence gate: any other value, however small, is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarMetrics {
    area: Option<f64>,
    volume: Option<f64>,
}

impl ScalarMetrics {
    /// Reads the totals from a live session.
    pub fn read(session: &dyn EngineSession) -> Self {
        Self {
            area: computed(session.total_area()),
            volume: computed(session.total_volume()),
        }
    }

    /// Total surface area, if the engine computed it.
    #[inline]
    pub fn area(&self) -> Option<f64> {
        self.area
    }

    /// Total enclosed volume, if the engine computed it.
    #[inline]
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }
}

fn computed(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}
