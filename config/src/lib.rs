//! # Config Crate
//!
//! Centralized configuration constants for the hull extraction pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ENGINE_COMMAND, MAX_TABLE_CELLS};
//!
//! // Compose the command line handed to the external engine
//! let command = format!("{} Qt", ENGINE_COMMAND);
//! assert!(command.starts_with("qhull"));
//!
//! // Bound output table sizing before allocating
//! let cells = 100usize * 4usize;
//! assert!(cells < MAX_TABLE_CELLS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine Compatible**: Defaults match the external engine's conventions
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
