//! Single-pass traversal of a session's facet graph.

use hull_engine::{EngineSession, Facet};

/// A one-shot walk over every facet of a live session.
///
/// The walk yields facets in the engine's native enumeration order and
/// is consumed at most once per session. Beginning the walk runs the
/// engine's vertex-neighbor pass first when normal output was
/// requested, so facet normals read during the walk are complete.
pub struct FacetWalk<'s> {
    inner: Box<dyn Iterator<Item = Facet> + 's>,
    remaining: usize,
}

impl<'s> FacetWalk<'s> {
    /// Begins the walk over `session`'s facets.
    pub fn begin(session: &'s mut dyn EngineSession) -> Self {
        if session.normals_requested() {
            session.compute_vertex_neighbors();
        }
        let session: &'s dyn EngineSession = session;
        Self {
            remaining: session.facet_count(),
            inner: session.facets(),
        }
    }
}

impl Iterator for FacetWalk<'_> {
    type Item = Facet;

    fn next(&mut self) -> Option<Facet> {
        let facet = self.inner.next();
        if facet.is_some() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        facet
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
