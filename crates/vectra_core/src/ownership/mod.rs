//! # Ownership Variants
//!
//! Two independent designs for the same 3D vector value.
//!
//! ## Aliasing
//!
//! | Variant             | Copy                  | Move                    |
//! |---------------------|-----------------------|-------------------------|
//! | `ExclusiveVector3D` | new buffer, same data | buffer taken, source empty |
//! | `SharedVector3D`    | same buffer, count +1 | plain Rust move         |

mod exclusive;
mod shared;

pub use exclusive::ExclusiveVector3D;
pub use shared::SharedVector3D;
