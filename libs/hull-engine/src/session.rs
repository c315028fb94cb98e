//! Engine sessions and the facet records they expose.
//!
//! A [`HullEngine`] invocation always yields an [`EngineLaunch`], even
//! when the engine fails: the launched session still owns engine-side
//! state that must be released, so the caller gets it back on every
//! path and decides when to free it.

use crate::EngineRequest;

/// One facet copied out of the engine's facet graph.
///
/// Vertex identifiers are 1-based and reported verbatim from the
/// engine; downstream layers validate them against the input point
/// count. The normal, when present, holds one component per coordinate
/// axis with the plane offset kept separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    vertices: Vec<u32>,
    normal: Option<Vec<f64>>,
    offset: f64,
}

impl Facet {
    /// Creates a facet from its vertex identifiers, in the engine's
    /// reporting order.
    pub fn new(vertices: Vec<u32>) -> Self {
        Self {
            vertices,
            normal: None,
            offset: 0.0,
        }
    }

    /// Attaches the facet's hyperplane normal and offset.
    pub fn with_normal(mut self, normal: Vec<f64>, offset: f64) -> Self {
        self.normal = Some(normal);
        self.offset = offset;
        self
    }

    /// Vertex identifiers of this facet.
    #[inline]
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    /// Number of vertices on this facet.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Hyperplane normal components, if the engine produced them.
    #[inline]
    pub fn normal(&self) -> Option<&[f64]> {
        self.normal.as_deref()
    }

    /// Hyperplane offset paired with [`Facet::normal`].
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

/// Diagnostic payload of a failed engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineFault {
    /// Nonzero engine exit code.
    pub code: i32,
    /// First diagnostic line reported by the engine.
    pub summary: String,
    /// Continuation of the diagnostic, possibly empty.
    pub detail: String,
}

/// Outcome of one engine invocation.
///
/// The session is present unconditionally. On failure (`fault` is
/// `Some`) it carries no usable hull, but engine-side allocations still
/// exist behind it and must be released exactly once.
pub struct EngineLaunch {
    /// Live engine session owning engine-side state.
    pub session: Box<dyn EngineSession>,
    /// Coordinate dimension the engine ran in.
    pub dimension: usize,
    /// Number of input points the engine saw.
    pub point_count: usize,
    /// Failure diagnostics, `None` when the engine exited cleanly.
    pub fault: Option<EngineFault>,
}

impl EngineLaunch {
    /// The engine exit code: zero on success, the fault code otherwise.
    pub fn exit_code(&self) -> i32 {
        self.fault.as_ref().map_or(0, |fault| fault.code)
    }
}

impl std::fmt::Debug for EngineLaunch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineLaunch")
            .field("dimension", &self.dimension)
            .field("point_count", &self.point_count)
            .field("fault", &self.fault)
            .finish_non_exhaustive()
    }
}

/// A live engine run holding the computed hull in engine-side memory.
///
/// Sessions hand out facets in the engine's native enumeration order;
/// that order is a contract of the engine and is never re-derived on
/// this side of the seam. [`EngineSession::release`] frees everything
/// the session owns and is called exactly once by the lifecycle layer;
/// no other method may be called afterwards.
pub trait EngineSession {
    /// Coordinate dimension of the hull.
    fn dimension(&self) -> usize;

    /// Number of input points the hull was computed from.
    fn point_count(&self) -> usize;

    /// Number of facets the walk will yield.
    fn facet_count(&self) -> usize;

    /// Whether the invocation asked for hyperplane normal output.
    fn normals_requested(&self) -> bool;

    /// Runs the engine's one-time vertex-neighbor pass.
    ///
    /// Required before facet normals are read; walking without it is
    /// fine when no normal output was requested.
    fn compute_vertex_neighbors(&mut self);

    /// Streams the facets in the engine's native enumeration order.
    ///
    /// The walk is finite and single-shot: callers traverse it at most
    /// once per session.
    fn facets(&self) -> Box<dyn Iterator<Item = Facet> + '_>;

    /// Total surface area of the hull as reported by the engine.
    fn total_area(&self) -> f64;

    /// Total enclosed volume of the hull as reported by the engine.
    fn total_volume(&self) -> f64;

    /// Frees all engine-side resources of this session.
    fn release(&mut self);
}

/// An engine capable of computing convex hulls.
pub trait HullEngine {
    /// Runs the engine against `request`.
    ///
    /// Always returns a launch carrying a live session, even when the
    /// run fails; the caller owns the release on every path.
    fn invoke(&self, request: &EngineRequest<'_>) -> EngineLaunch;
}
