//! Seam to the external convex-hull engine.
//!
//! This crate defines the vocabulary shared between the extraction
//! pipeline and whatever actually computes hulls: input [`PointSet`]s,
//! invocation [`EngineRequest`]s, and the [`HullEngine`] /
//! [`EngineSession`] traits behind which an engine lives. Hull geometry
//! stays in engine-side memory for the lifetime of a session; callers
//! copy facets out through the session and release the session exactly
//! once when they are done.
//!
//! # Architecture
//!
//! ```text
//! PointSet + options ──> HullEngine::invoke ──> EngineLaunch
//!                                                 ├── metadata (dim, n, fault)
//!                                                 └── EngineSession
//!                                                       ├── facets() walk
//!                                                       ├── total_area / total_volume
//!                                                       └── release()
//! ```
//!
//! [`ScriptedEngine`] is the in-tree implementation: a deterministic
//! replay engine used by the extraction tests and by downstream code
//! that needs hulls without a native engine present.

pub mod points;
pub mod request;
pub mod scripted;
pub mod session;

pub use points::{PointId, PointSet};
pub use request::{EngineRequest, FacetMode};
pub use scripted::{EngineProbe, ScriptedEngine};
pub use session::{EngineFault, EngineLaunch, EngineSession, Facet, HullEngine};
