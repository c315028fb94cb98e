//! The facet index table and its construction from a walked facet
//! graph.

use config::constants::MAX_TABLE_CELLS;
use hull_engine::{Facet, FacetMode, PointId};
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, ExtractResult, ShapeWarning};

/// A rectangular table of per-facet vertex identifiers.
///
/// Each row is one facet in walk order; each cell is either a valid
/// 1-based [`PointId`] or `None` where the facet had no vertex for that
/// column. The `None` cells serialize as `null`, which managed hosts
/// map onto their missing-value representation. Raw zeros never leak
/// out of the table: absence is only ever expressed as `None`.
///
/// In triangulated mode the column count equals the hull dimension; in
/// polygonal mode it is the widest facet's vertex count, never less
/// than the dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetTable {
    rows: usize,
    cols: usize,
    cells: Vec<Option<PointId>>,
}

impl FacetTable {
    /// Number of facet rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of vertex columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// The cell at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<PointId> {
        self.cells[row * self.cols + col]
    }

    /// One facet's row of cells.
    #[inline]
    pub fn row(&self, row: usize) -> &[Option<PointId>] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// The flat row-major cell buffer.
    #[inline]
    pub fn cells(&self) -> &[Option<PointId>] {
        &self.cells
    }

    /// Number of sentinel (`None`) cells in the table.
    pub fn sentinel_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

/// Builds the facet index table from the walked facets.
///
/// The facets are consumed in walk order, one row each. Triangulated
/// mode keeps at most `dimension` vertices per facet and drops the
/// rest; polygonal mode keeps every vertex and pads narrower rows with
/// sentinels. Identifiers outside `1..=point_count` are not trusted and
/// become sentinels as well.
///
/// Shape anomalies are returned as warnings, never as errors. The only
/// failure here is [`ExtractError::Exhausted`], raised before the cell
/// buffer is reserved when the table would exceed the configured
/// limit.
///
/// # Examples
///
/// ```
/// use hull_engine::{Facet, FacetMode};
/// use hull_extract::table::build_facet_table;
///
/// # fn main() -> Result<(), hull_extract::ExtractError> {
/// let facets = vec![
///     Facet::new(vec![1, 2, 4]),
///     Facet::new(vec![2, 3, 4]),
/// ];
/// let (table, warnings) = build_facet_table(&facets, FacetMode::Triangulated, 3, 4)?;
/// assert_eq!((table.rows(), table.cols()), (2, 3));
/// assert!(warnings.is_empty());
/// assert_eq!(table.get(1, 0).map(|id| id.get()), Some(2));
/// # Ok(())
/// # }
/// ```
pub fn build_facet_table(
    facets: &[Facet],
    mode: FacetMode,
    dimension: usize,
    point_count: usize,
) -> ExtractResult<(FacetTable, Vec<ShapeWarning>)> {
    let cols = table_width(facets, mode, dimension);
    let total = facets
        .len()
        .checked_mul(cols)
        .ok_or(ExtractError::Exhausted {
            what: "facet index",
            cells: usize::MAX,
        })?;
    if total > MAX_TABLE_CELLS {
        return Err(ExtractError::exhausted("facet index", total));
    }

    let mut cells: Vec<Option<PointId>> = Vec::new();
    cells
        .try_reserve_exact(total)
        .map_err(|_| ExtractError::exhausted("facet index", total))?;

    let mut warnings = Vec::new();
    for (ordinal, facet) in facets.iter().enumerate() {
        let kept = kept_vertices(facet, mode, dimension);
        for &raw in kept {
            cells.push(validate_id(raw, point_count));
        }
        cells.resize(cells.len() + (cols - kept.len()), None);

        for (column, &raw) in facet.vertices().iter().enumerate().skip(kept.len()) {
            record(
                &mut warnings,
                ShapeWarning::ExtraVertex {
                    facet: ordinal,
                    column,
                    point: raw,
                },
            );
        }
        if facet.vertex_count() < dimension {
            record(
                &mut warnings,
                ShapeWarning::ShortFacet {
                    facet: ordinal,
                    vertices: facet.vertex_count(),
                    dimension,
                },
            );
        }
    }

    let table = FacetTable {
        rows: facets.len(),
        cols,
        cells,
    };
    Ok((table, warnings))
}

/// Column count of the table: the dimension in triangulated mode, the
/// widest facet otherwise, floored at the dimension either way.
fn table_width(facets: &[Facet], mode: FacetMode, dimension: usize) -> usize {
    if mode.is_triangulated() {
        dimension
    } else {
        facets
            .iter()
            .map(Facet::vertex_count)
            .max()
            .unwrap_or(0)
            .max(dimension)
    }
}

/// The leading vertex identifiers that stay in the table for one facet.
fn kept_vertices(facet: &Facet, mode: FacetMode, dimension: usize) -> &[u32] {
    let vertices = facet.vertices();
    if mode.is_triangulated() && vertices.len() > dimension {
        &vertices[..dimension]
    } else {
        vertices
    }
}

/// An identifier is only trusted when it addresses an input point.
fn validate_id(raw: u32, point_count: usize) -> Option<PointId> {
    PointId::new(raw).filter(|id| id.get() as usize <= point_count)
}

fn record(warnings: &mut Vec<ShapeWarning>, warning: ShapeWarning) {
    log::warn!("{warning}");
    warnings.push(warning);
}
