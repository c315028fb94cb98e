//! # Configuration Constants
//!
//! Centralized constants for the hull extraction pipeline. Engine invocation
//! defaults and output-table safety bounds are defined here.
//!
//! ## Categories
//!
//! - **Engine**: Defaults for composing the external engine invocation
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// ENGINE CONSTANTS
// =============================================================================

/// Command word prefixed to the option string handed to the external engine.
///
/// The engine expects its own name as the first word of the command line it
/// parses, followed by whitespace-separated option flags.
///
/// # Example
///
/// ```rust
/// use config::constants::ENGINE_COMMAND;
///
/// let options = "Qt Tv";
/// let command = format!("{} {}", ENGINE_COMMAND, options);
/// assert_eq!(command, "qhull Qt Tv");
/// ```
pub const ENGINE_COMMAND: &str = "qhull";

/// Conventional option string hosts pass when they have no preference.
///
/// `Tv` asks the engine to verify the structure it built. Hosts remain free
/// to pass any option string; this layer never interprets it.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_ENGINE_OPTIONS;
///
/// let options: Option<&str> = None;
/// let effective = options.unwrap_or(DEFAULT_ENGINE_OPTIONS);
/// assert_eq!(effective, "Tv");
/// ```
pub const DEFAULT_ENGINE_OPTIONS: &str = "Tv";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of cells in a single output table.
///
/// Safety limit applied before allocating the facet index table or the
/// normals table. Sizing beyond this bound is reported as resource
/// exhaustion instead of attempting the allocation.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TABLE_CELLS;
///
/// let rows = 1000usize;
/// let cols = 4usize;
/// assert!(rows * cols < MAX_TABLE_CELLS);
/// ```
pub const MAX_TABLE_CELLS: usize = 10_000_000;
