//! # Vectra Core
//!
//! A 3-component `f64` vector in two ownership flavours:
//! - [`ExclusiveVector3D`]: one owner, deep copies, moves that empty the source
//! - [`SharedVector3D`]: reference-counted buffer, writes seen by every handle
//!
//! ## Rules
//!
//! 1. **Buffer is fixed-size** - always three components while valid
//! 2. **Moved-from access fails fast** - never silently returns garbage
//! 3. **Single-threaded** - shared handles cannot leave their thread
//!
//! ## Example
//!
//! ```rust,ignore
//! use vectra_core::{ExclusiveVector3D, SharedVector3D};
//!
//! let mut owned = ExclusiveVector3D::new(1.0, 2.0, 3.0);
//! let moved = owned.take();
//! moved.print()?;                    // Vector3D(1, 2, 3)
//!
//! let shared = SharedVector3D::new(3.0, 0.0, 4.0);
//! shared.clone().normalize();
//! shared.print()?;                   // Vector3D(0.6, 0, 0.8)
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffer;
pub mod error;
pub mod ownership;
pub mod render;

pub use buffer::{Coords, COMPONENTS};
pub use error::{VectorError, VectorResult};
pub use ownership::{ExclusiveVector3D, SharedVector3D};
pub use render::{format_component, render_vector, write_vector};
