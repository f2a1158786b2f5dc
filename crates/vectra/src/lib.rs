//! # Vectra
//!
//! Demonstration programs for the two ownership variants in `vectra_core`.
//!
//! ## Binaries
//!
//! - `exclusive_demo`: copy duplicates, move empties the source
//! - `shared_demo`: copy aliases, a write through one handle is seen by all
//!
//! Both run a fixed sequence, print `Vector3D(x, y, z)` lines to stdout,
//! log to stderr, and exit 0.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vectra::{config::ScenarioConfig, scenario};
//!
//! let config = ScenarioConfig::embedded()?;
//! let report = scenario::run_exclusive(&config.exclusive, &mut std::io::stdout().lock())?;
//! assert_eq!(report.skipped, 1);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod app;
pub mod config;
pub mod logging;
pub mod scenario;

/// Re-export of the ownership primitives.
pub use vectra_core as core;

pub use app::Demo;
pub use config::{ScenarioConfig, VariantConfig};
pub use scenario::{normalize_shared, run_exclusive, run_shared, ScenarioReport};
