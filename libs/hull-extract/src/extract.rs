//! The extraction pipeline: one engine run in, one bundle out.

use hull_engine::{EngineRequest, Facet, HullEngine};

use crate::attributes::{build_normal_table, ScalarMetrics};
use crate::bundle::HullBundle;
use crate::error::ExtractResult;
use crate::guard::HandleGuard;
use crate::table::build_facet_table;
use crate::walk::FacetWalk;

/// Runs the engine against `request` and extracts a host-ready
/// [`HullBundle`] from the resulting session.
///
/// The session is walked exactly once. Facet rows, the optional
/// hyperplane table, and the hull scalars all come out of that single
/// traversal, and the facet reporting mode is taken from the request up
/// front and never re-read.
///
/// Whatever happens, the session is released exactly once: immediately
/// when the engine reports a fault or a table cannot be sized, or
/// deferred to the extracted bundle's [`EngineRef`](crate::EngineRef)
/// when extraction succeeds.
///
/// # Errors
///
/// [`ExtractError::Engine`](crate::ExtractError::Engine) when the
/// engine exits nonzero, with its diagnostics attached;
/// [`ExtractError::Exhausted`](crate::ExtractError::Exhausted) when an
/// output table would blow the configured cell limit.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use hull_engine::{EngineRequest, FacetMode, PointSet, ScriptedEngine};
/// use hull_extract::extract;
///
/// # fn main() -> Result<(), hull_extract::ExtractError> {
/// let engine = ScriptedEngine::new(2)
///     .with_facet(&[1, 2])
///     .with_facet(&[2, 4])
///     .with_facet(&[4, 3])
///     .with_facet(&[3, 1])
///     .with_area(4.0)
///     .with_volume(1.0);
///
/// let points = PointSet::from_rows(&[
///     [0.0, 0.0],
///     [1.0, 0.0],
///     [0.0, 1.0],
///     [1.0, 1.0],
/// ]);
/// let request = EngineRequest::new(&points, "Tv FA", Path::new("/tmp"), FacetMode::Triangulated);
///
/// let bundle = extract(&engine, &request)?;
/// assert_eq!(bundle.hull().rows(), 4);
/// assert_eq!(bundle.volume(), Some(1.0));
/// # Ok(())
/// # }
/// ```
pub fn extract(engine: &dyn HullEngine, request: &EngineRequest<'_>) -> ExtractResult<HullBundle> {
    let launch = engine.invoke(request);
    let mut guard = HandleGuard::open(launch.session);

    if let Some(fault) = launch.fault {
        guard.release();
        return Err(fault.into());
    }

    let facets: Vec<Facet> = FacetWalk::begin(guard.session_mut()).collect();
    let (hull, warnings) =
        build_facet_table(&facets, request.mode(), launch.dimension, launch.point_count)?;
    let normals = if guard.session().normals_requested() {
        Some(build_normal_table(&facets, launch.dimension)?)
    } else {
        None
    };
    let metrics = ScalarMetrics::read(guard.session());

    log::debug!(
        "extracted hull: {} facets x {} columns, {} warnings",
        hull.rows(),
        hull.cols(),
        warnings.len(),
    );
    Ok(HullBundle::assemble(
        hull,
        metrics,
        normals,
        guard.commit(),
        warnings,
    ))
}
