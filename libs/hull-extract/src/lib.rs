//! Result extraction and resource lifecycle for engine-computed convex
//! hulls.
//!
//! The engine computes hulls in its own memory and exposes them through
//! a session. This crate turns one such session into a host-ready
//! [`HullBundle`]: a rectangular facet index table, optional hyperplane
//! normals, optional whole-hull scalars, and the shape warnings
//! observed along the way. It also owns the session's lifetime, with
//! release guaranteed exactly once on every path through the pipeline.
//!
//! # Architecture
//!
//! ```text
//! extract(engine, request)
//!     │
//!     ├── HullEngine::invoke ──> EngineLaunch ──> HandleGuard (open)
//!     │       fault? ── release now ──> ExtractError::Engine
//!     │
//!     ├── FacetWalk ── single pass ──> Vec<Facet>
//!     ├── build_facet_table ──> FacetTable + ShapeWarnings
//!     ├── build_normal_table ──> NormalTable        (if requested)
//!     ├── ScalarMetrics::read ──> area / volume     (if computed)
//!     │
//!     └── guard.commit() ──> EngineRef ──> HullBundle
//!                              release deferred to the last reference
//! ```
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use hull_engine::{EngineRequest, FacetMode, PointSet, ScriptedEngine};
//! use hull_extract::extract;
//!
//! # fn main() -> Result<(), hull_extract::ExtractError> {
//! let engine = ScriptedEngine::new(2)
//!     .with_facet(&[1, 2])
//!     .with_facet(&[2, 3])
//!     .with_facet(&[3, 1]);
//! let points = PointSet::from_rows(&[[0.0, 0.0], [2.0, 0.0], [0.0, 2.0]]);
//! let request = EngineRequest::new(&points, "Tv", Path::new("/tmp"), FacetMode::Triangulated);
//!
//! let bundle = extract(&engine, &request)?;
//! assert_eq!(bundle.hull().rows(), 3);
//! assert!(bundle.is_bare());
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod bundle;
pub mod error;
pub mod extract;
pub mod guard;
pub mod table;
pub mod walk;

pub use attributes::{build_normal_table, NormalTable, ScalarMetrics};
pub use bundle::{BundleField, HullBundle};
pub use error::{ExtractError, ExtractResult, ShapeWarning};
pub use extract::extract;
pub use guard::{EngineHandle, EngineRef, HandleGuard};
pub use table::{build_facet_table, FacetTable};
pub use walk::FacetWalk;
