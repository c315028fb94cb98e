//! A deterministic, fully scripted engine.
//!
//! [`ScriptedEngine`] replays a facet graph fixed at construction time
//! instead of computing anything. It backs the extraction tests and
//! gives downstream integrations a hermetic engine to develop against,
//! while still observing the real engine's conventions: the `n` option
//! flag requests normal output, and failed runs still hand back a live
//! session that must be released.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::{EngineFault, EngineLaunch, EngineRequest, EngineSession, Facet, HullEngine};

/// Shared counters observing a scripted session from the outside.
///
/// Probes are cheap handles onto the same counters; clone one out of
/// the engine before invoking and read it after the session is gone.
#[derive(Debug, Clone, Default)]
pub struct EngineProbe {
    releases: Arc<AtomicUsize>,
    neighbor_passes: Arc<AtomicUsize>,
}

impl EngineProbe {
    /// Creates a probe with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times sessions observed by this probe were released.
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    /// How many vertex-neighbor passes the observed sessions ran.
    pub fn neighbor_passes(&self) -> usize {
        self.neighbor_passes.load(Ordering::SeqCst)
    }

    fn record_release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }

    fn record_neighbor_pass(&self) {
        self.neighbor_passes.fetch_add(1, Ordering::SeqCst);
    }
}

/// An engine that replays a scripted facet graph.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use hull_engine::{EngineRequest, FacetMode, HullEngine, PointSet, ScriptedEngine};
///
/// let engine = ScriptedEngine::new(2)
///     .with_facet(&[1, 2])
///     .with_facet(&[2, 3])
///     .with_facet(&[3, 1])
///     .with_area(2.0 + 2.0f64.sqrt());
///
/// let points = PointSet::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
/// let request = EngineRequest::new(&points, "Tv", Path::new("/tmp"), FacetMode::Triangulated);
/// let launch = engine.invoke(&request);
/// assert_eq!(launch.exit_code(), 0);
/// assert_eq!(launch.session.facet_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedEngine {
    dimension: usize,
    facets: Vec<Facet>,
    area: f64,
    volume: f64,
    fault: Option<EngineFault>,
    probe: EngineProbe,
}

impl ScriptedEngine {
    /// Creates an engine scripted for hulls of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            facets: Vec::new(),
            area: 0.0,
            volume: 0.0,
            fault: None,
            probe: EngineProbe::new(),
        }
    }

    /// Scripts one facet from its 1-based vertex identifiers.
    pub fn with_facet(mut self, vertices: &[u32]) -> Self {
        self.facets.push(Facet::new(vertices.to_vec()));
        self
    }

    /// Scripts one facet including its hyperplane normal and offset.
    pub fn with_facet_normal(mut self, vertices: &[u32], normal: &[f64], offset: f64) -> Self {
        self.facets
            .push(Facet::new(vertices.to_vec()).with_normal(normal.to_vec(), offset));
        self
    }

    /// Scripts the total surface area the session will report.
    pub fn with_area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    /// Scripts the total enclosed volume the session will report.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Scripts the run to fail with the given exit code and diagnostics.
    ///
    /// The launched session is still live and still counts a release.
    pub fn with_fault(mut self, code: i32, summary: &str, detail: &str) -> Self {
        self.fault = Some(EngineFault {
            code,
            summary: summary.to_string(),
            detail: detail.to_string(),
        });
        self
    }

    /// A probe observing every session this engine launches.
    pub fn probe(&self) -> EngineProbe {
        self.probe.clone()
    }
}

impl HullEngine for ScriptedEngine {
    fn invoke(&self, request: &EngineRequest<'_>) -> EngineLaunch {
        log::debug!(
            "scripted engine run: {} ({} points, dim {})",
            request.command(),
            request.points().len(),
            self.dimension,
        );
        let session = ScriptedSession {
            dimension: self.dimension,
            point_count: request.points().len(),
            facets: self.facets.clone(),
            area: self.area,
            volume: self.volume,
            normals_requested: request.has_option("n"),
            released: false,
            probe: self.probe.clone(),
        };
        EngineLaunch {
            session: Box::new(session),
            dimension: self.dimension,
            point_count: request.points().len(),
            fault: self.fault.clone(),
        }
    }
}

/// A live replay of a scripted facet graph.
#[derive(Debug)]
struct ScriptedSession {
    dimension: usize,
    point_count: usize,
    facets: Vec<Facet>,
    area: f64,
    volume: f64,
    normals_requested: bool,
    released: bool,
    probe: EngineProbe,
}

impl EngineSession for ScriptedSession {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn point_count(&self) -> usize {
        self.point_count
    }

    fn facet_count(&self) -> usize {
        self.facets.len()
    }

    fn normals_requested(&self) -> bool {
        self.normals_requested
    }

    fn compute_vertex_neighbors(&mut self) {
        debug_assert!(!self.released);
        self.probe.record_neighbor_pass();
    }

    fn facets(&self) -> Box<dyn Iterator<Item = Facet> + '_> {
        debug_assert!(!self.released);
        Box::new(self.facets.iter().cloned())
    }

    fn total_area(&self) -> f64 {
        self.area
    }

    fn total_volume(&self) -> f64 {
        self.volume
    }

    fn release(&mut self) {
        debug_assert!(!self.released, "session released twice");
        self.released = true;
        self.facets = Vec::new();
        self.probe.record_release();
        log::trace!("scripted session released");
    }
}
