//! Error and warning types for hull extraction.
//!
//! Failures split into two camps: the engine itself reporting a bad
//! run, and this side failing to reserve memory for the output tables.
//! Facet shape anomalies are not failures; they become [`ShapeWarning`]
//! values recorded on the extracted bundle.

use std::fmt;

use hull_engine::EngineFault;
use thiserror::Error;

/// Errors that abort an extraction.
///
/// Whichever variant is returned, the engine session backing the run
/// has already been released by the time the error reaches the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExtractError {
    /// The engine exited with a nonzero code.
    #[error("received exit code {code} from the engine: {summary}{detail}")]
    Engine {
        /// Nonzero exit code reported by the engine.
        code: i32,
        /// First diagnostic line from the engine.
        summary: String,
        /// Continuation of the diagnostic, possibly empty.
        detail: String,
    },

    /// An output table would exceed the configured cell limit, or its
    /// storage could not be reserved.
    #[error("failed to reserve {what} storage for {cells} cells")]
    Exhausted {
        /// Which table was being sized.
        what: &'static str,
        /// Number of cells the table needed.
        cells: usize,
    },
}

impl ExtractError {
    /// Creates an engine failure error from its exit code and the two
    /// diagnostic strings reported alongside it.
    pub fn engine(code: i32, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Engine {
            code,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Creates a resource exhaustion error for the named table.
    pub fn exhausted(what: &'static str, cells: usize) -> Self {
        Self::Exhausted { what, cells }
    }
}

impl From<EngineFault> for ExtractError {
    fn from(fault: EngineFault) -> Self {
        Self::Engine {
            code: fault.code,
            summary: fault.summary,
            detail: fault.detail,
        }
    }
}

/// Result alias for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// A non-fatal facet shape anomaly observed while building the facet
/// index table.
///
/// Warnings never abort extraction. They are recorded on the bundle in
/// the order they were observed and mirrored to the `log` facade as
/// they occur. Facet ordinals count from zero in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeWarning {
    /// A facet reported fewer vertices than the hull dimension; the
    /// missing cells were left as sentinels.
    ShortFacet {
        /// Ordinal of the facet in walk order.
        facet: usize,
        /// Number of vertices the facet reported.
        vertices: usize,
        /// Hull dimension the count fell short of.
        dimension: usize,
    },

    /// A triangulated-mode facet reported more vertices than the hull
    /// dimension; the excess vertex was dropped from the table.
    ExtraVertex {
        /// Ordinal of the facet in walk order.
        facet: usize,
        /// Position of the dropped vertex within the facet.
        column: usize,
        /// 1-based identifier of the dropped point.
        point: u32,
    },
}

impl fmt::Display for ShapeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortFacet {
                facet, vertices, ..
            } => {
                write!(f, "facet {facet} only has {vertices} vertices")
            }
            Self::ExtraVertex {
                facet,
                column,
                point,
            } => {
                write!(f, "extra vertex {column} of facet {facet} = {point}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display_includes_code_and_diagnostics() {
        let error = ExtractError::engine(6, "qhull input error\n", "option 'x' is not recognized\n");
        let text = error.to_string();
        assert!(text.contains("exit code 6"));
        assert!(text.contains("qhull input error"));
        assert!(text.contains("option 'x' is not recognized"));
    }

    #[test]
    fn test_engine_error_from_fault() {
        let fault = EngineFault {
            code: 2,
            summary: "near-degenerate input".to_string(),
            detail: String::new(),
        };
        let error = ExtractError::from(fault);
        assert_eq!(
            error,
            ExtractError::engine(2, "near-degenerate input", "")
        );
    }

    #[test]
    fn test_exhausted_display_names_the_table() {
        let error = ExtractError::exhausted("facet index", 40_000_000);
        let text = error.to_string();
        assert!(text.contains("facet index"));
        assert!(text.contains("40000000"));
    }

    #[test]
    fn test_short_facet_warning_display() {
        let warning = ShapeWarning::ShortFacet {
            facet: 7,
            vertices: 2,
            dimension: 3,
        };
        assert_eq!(warning.to_string(), "facet 7 only has 2 vertices");
    }

    #[test]
    fn test_extra_vertex_warning_display() {
        let warning = ShapeWarning::ExtraVertex {
            facet: 4,
            column: 3,
            point: 12,
        };
        assert_eq!(warning.to_string(), "extra vertex 3 of facet 4 = 12");
    }
}
