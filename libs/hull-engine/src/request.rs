//! Engine invocation requests.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::PointSet;

/// How the engine reports facets of the hull.
///
/// The mode is fixed for the lifetime of one invocation; extraction
/// layers read it once up front and never re-interrogate it mid-walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetMode {
    /// Every facet is a simplex of exactly `dim` vertices. Engines in
    /// this mode are typically run with a triangulation option such as
    /// `Qt`.
    Triangulated,
    /// Facets keep their native vertex counts, which may differ from
    /// facet to facet.
    Polygonal,
}

impl FacetMode {
    /// Returns `true` for [`FacetMode::Triangulated`].
    #[inline]
    pub fn is_triangulated(self) -> bool {
        matches!(self, FacetMode::Triangulated)
    }
}

/// One engine invocation: the points to hull and how to run the engine.
///
/// The point set is borrowed and never mutated. `workspace` names a
/// scratch directory the engine may write debug output into; this layer
/// only forwards it.
#[derive(Debug, Clone)]
pub struct EngineRequest<'a> {
    points: &'a PointSet,
    options: &'a str,
    workspace: &'a Path,
    mode: FacetMode,
}

impl<'a> EngineRequest<'a> {
    /// Bundles the inputs of a single invocation.
    pub fn new(points: &'a PointSet, options: &'a str, workspace: &'a Path, mode: FacetMode) -> Self {
        Self {
            points,
            options,
            workspace,
            mode,
        }
    }

    /// Like [`EngineRequest::new`] with the conventional option string
    /// hosts use when they have no preference.
    pub fn with_default_options(points: &'a PointSet, workspace: &'a Path, mode: FacetMode) -> Self {
        Self::new(
            points,
            config::constants::DEFAULT_ENGINE_OPTIONS,
            workspace,
            mode,
        )
    }

    /// The points to compute the hull of.
    #[inline]
    pub fn points(&self) -> &'a PointSet {
        self.points
    }

    /// Engine option flags, whitespace separated.
    #[inline]
    pub fn options(&self) -> &'a str {
        self.options
    }

    /// Scratch directory for engine-side debug output.
    #[inline]
    pub fn workspace(&self) -> &'a Path {
        self.workspace
    }

    /// The facet reporting mode of this invocation.
    #[inline]
    pub fn mode(&self) -> FacetMode {
        self.mode
    }

    /// The full command line handed to the engine: the fixed command
    /// word followed by the option flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use hull_engine::{EngineRequest, FacetMode, PointSet};
    ///
    /// let points = PointSet::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
    /// let request = EngineRequest::new(&points, "Qt Tv", Path::new("/tmp"), FacetMode::Triangulated);
    /// assert_eq!(request.command(), "qhull Qt Tv");
    /// ```
    pub fn command(&self) -> String {
        let options = self.options.trim();
        if options.is_empty() {
            config::constants::ENGINE_COMMAND.to_string()
        } else {
            format!("{} {}", config::constants::ENGINE_COMMAND, options)
        }
    }

    /// Returns `true` if `flag` appears among the option flags.
    pub fn has_option(&self, flag: &str) -> bool {
        self.options.split_whitespace().any(|f| f == flag)
    }
}
