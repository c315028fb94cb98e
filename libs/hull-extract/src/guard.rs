//! Engine session lifetime management.
//!
//! Every launched session is released exactly once, no matter how the
//! extraction ends. [`HandleGuard`] owns the session while extraction
//! is in flight: failing runs release it synchronously, successful runs
//! commit it into an [`EngineRef`] whose last clone releases it, and a
//! guard dropped mid-flight (an early return or a panic unwinding
//! through the pipeline) releases it on the spot.

use std::fmt;
use std::sync::Arc;

use hull_engine::EngineSession;

/// Sole owner of a committed session; releases it when dropped.
pub struct EngineHandle {
    session: Box<dyn EngineSession>,
}

impl EngineHandle {
    /// The live session behind this handle.
    #[inline]
    pub fn session(&self) -> &dyn EngineSession {
        self.session.as_ref()
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.session.release();
        log::debug!("engine session released");
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandle")
            .field("facet_count", &self.session.facet_count())
            .finish_non_exhaustive()
    }
}

/// A shared reference to a committed session.
///
/// Clones are cheap and keep the session alive together; the release
/// runs when the last clone is dropped. Extracted bundles hold one of
/// these, so engine-side hull state outlives the bundle it backs.
#[derive(Clone)]
pub struct EngineRef {
    handle: Arc<EngineHandle>,
}

impl EngineRef {
    /// The live session behind this reference.
    #[inline]
    pub fn session(&self) -> &dyn EngineSession {
        self.handle.session()
    }
}

impl fmt::Debug for EngineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineRef")
            .field("refs", &Arc::strong_count(&self.handle))
            .finish_non_exhaustive()
    }
}

/// Owns a freshly launched session until its fate is decided.
///
/// The guard starts open. [`HandleGuard::release`] frees the session
/// immediately; [`HandleGuard::commit`] converts it into an
/// [`EngineRef`] with deferred release. Both consume the guard, so
/// exactly one of them can ever run, and dropping a still-open guard
/// releases the session as a last resort.
pub struct HandleGuard {
    session: Option<Box<dyn EngineSession>>,
}

impl HandleGuard {
    /// Takes ownership of a launched session.
    pub fn open(session: Box<dyn EngineSession>) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// The guarded session.
    #[inline]
    pub fn session(&self) -> &dyn EngineSession {
        match self.session.as_deref() {
            Some(session) => session,
            // Emptied only by the consuming methods below.
            None => unreachable!("guard session already taken"),
        }
    }

    /// The guarded session, mutably.
    #[inline]
    pub fn session_mut(&mut self) -> &mut dyn EngineSession {
        match self.session.as_deref_mut() {
            Some(session) => session,
            None => unreachable!("guard session already taken"),
        }
    }

    /// Releases the session now. Used when the run it came from failed
    /// and nothing will ever read from it.
    pub fn release(mut self) {
        if let Some(mut session) = self.session.take() {
            session.release();
            log::debug!("engine session released without commit");
        }
    }

    /// Commits the session for shared use beyond the extraction.
    pub fn commit(mut self) -> EngineRef {
        match self.session.take() {
            Some(session) => EngineRef {
                handle: Arc::new(EngineHandle { session }),
            },
            None => unreachable!("guard session already taken"),
        }
    }
}

impl Drop for HandleGuard {
    fn drop(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.release();
            log::debug!("engine session released by abandoned guard");
        }
    }
}

impl fmt::Debug for HandleGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleGuard")
            .field("open", &self.session.is_some())
            .finish()
    }
}
