//! Input point sets and point identifiers.
//!
//! The engine numbers input points starting at 1, so identifiers are
//! represented as [`NonZeroU32`] and zero is unrepresentable by
//! construction.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A 1-based identifier of an input point.
pub type PointId = NonZeroU32;

/// An input point set in row-major layout.
///
/// Coordinates are stored flat: point `i` occupies
/// `coords[i * dim .. (i + 1) * dim]`. The set is immutable once built;
/// the engine only ever reads it.
///
/// # Examples
///
/// ```
/// use hull_engine::PointSet;
///
/// let square = PointSet::from_rows(&[
///     [0.0, 0.0],
///     [1.0, 0.0],
///     [1.0, 1.0],
///     [0.0, 1.0],
/// ]);
/// assert_eq!(square.dim(), 2);
/// assert_eq!(square.len(), 4);
/// assert_eq!(square.point(2), &[1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    dim: usize,
    coords: Vec<f64>,
}

impl PointSet {
    /// Creates a point set from flat row-major coordinates.
    ///
    /// `coords.len()` must be a multiple of `dim`.
    pub fn from_flat(dim: usize, coords: Vec<f64>) -> Self {
        debug_assert!(dim > 0 || coords.is_empty());
        debug_assert!(dim == 0 || coords.len() % dim == 0);
        Self { dim, coords }
    }

    /// Creates a point set from one slice per point.
    ///
    /// All rows must have the same length; the first row fixes the
    /// dimension. An empty slice yields an empty zero-dimensional set.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let dim = rows.first().map_or(0, |row| row.as_ref().len());
        let mut coords = Vec::with_capacity(rows.len() * dim);
        for row in rows {
            debug_assert_eq!(row.as_ref().len(), dim);
            coords.extend_from_slice(row.as_ref());
        }
        Self { dim, coords }
    }

    /// Coordinate dimension of each point.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.coords.len() / self.dim
        }
    }

    /// Returns `true` if the set contains no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates of the point at `index`.
    #[inline]
    pub fn point(&self, index: usize) -> &[f64] {
        &self.coords[index * self.dim..(index + 1) * self.dim]
    }

    /// The flat row-major coordinate buffer.
    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }
}
