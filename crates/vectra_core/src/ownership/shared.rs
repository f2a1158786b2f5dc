//! # Shared Ownership
//!
//! A vector whose buffer is jointly owned by every handle cloned from it.
//!
//! ```text
//!   v1 ──┐
//!   v2 ──┼──► Rc<RefCell<[x, y, z]>>   (strong count = 3)
//!   v3 ──┘
//!
//!   v2.normalize()  →  v1, v2, v3 all read the unit vector
//!   drop(v3)        →  count = 2, buffer still alive
//! ```
//!
//! ## Thread Safety
//!
//! NOT thread-safe. The handle is `!Send` and `!Sync`, so the compiler keeps
//! it on the thread that created it.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use crate::buffer::{Coords, COMPONENTS};
use crate::error::{VectorError, VectorResult};
use crate::render;

/// A 3D vector backed by a reference-counted heap buffer.
///
/// Cloning a handle never copies components: the clone points at the same
/// buffer, and a write through any handle is seen by all of them.
///
/// # Example
///
/// ```rust,ignore
/// let v1 = SharedVector3D::new(3.0, 0.0, 4.0);
/// let v2 = v1.clone();
/// v2.normalize();
/// assert_eq!(v1.x(), 0.6);
/// ```
#[derive(Clone)]
pub struct SharedVector3D {
    coords: Rc<RefCell<Coords>>,
}

impl SharedVector3D {
    /// Creates a vector with the given components on a fresh buffer.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from(Coords::new(x, y, z))
    }

    /// Copy-assign: re-points this handle at `other`'s buffer.
    ///
    /// If both handles already share a buffer this is a no-op. Otherwise this
    /// handle's reference to its old buffer is released.
    pub fn assign(&mut self, other: &Self) {
        if self.shares_buffer_with(other) {
            return;
        }
        tracing::debug!(
            handles = Rc::strong_count(&other.coords) + 1,
            "shared handle re-assigned"
        );
        *self = other.clone();
    }

    /// Number of live handles on this buffer, including `self`.
    #[inline]
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.coords)
    }

    /// Returns true if both handles point at the same buffer.
    #[inline]
    #[must_use]
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.coords, &other.coords)
    }

    /// Number of components. Always 3.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        COMPONENTS
    }

    /// Always false: a shared buffer is never emptied.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Snapshot of the buffer.
    #[inline]
    #[must_use]
    pub fn coords(&self) -> Coords {
        *self.coords.borrow()
    }

    /// Returns all three components.
    #[must_use]
    pub fn components(&self) -> [f64; COMPONENTS] {
        self.coords().to_array()
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.borrow().x
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.borrow().y
    }

    /// Returns the Z component.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.coords.borrow().z
    }

    /// Sets the X component for every handle.
    pub fn set_x(&self, x: f64) {
        self.coords.borrow_mut().x = x;
    }

    /// Sets the Y component for every handle.
    pub fn set_y(&self, y: f64) {
        self.coords.borrow_mut().y = y;
    }

    /// Sets the Z component for every handle.
    pub fn set_z(&self, z: f64) {
        self.coords.borrow_mut().z = z;
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.coords.borrow().length()
    }

    /// Scales the shared buffer in place to unit length.
    ///
    /// Every handle on the buffer observes the result. A zero vector is left
    /// unchanged.
    pub fn normalize(&self) {
        self.coords.borrow_mut().normalize();
    }

    /// Writes `Vector3D(x, y, z)` followed by a newline.
    ///
    /// # Errors
    ///
    /// [`VectorError::Output`] if the writer fails.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> VectorResult<()> {
        let line = render::render_vector(self.coords().as_slice());
        writeln!(out, "{line}").map_err(|e| VectorError::Output(e.to_string()))
    }

    /// Prints `Vector3D(x, y, z)` to standard output.
    ///
    /// # Errors
    ///
    /// Same as [`Self::write_to`].
    pub fn print(&self) -> VectorResult<()> {
        self.write_to(&mut std::io::stdout().lock())
    }
}

impl Default for SharedVector3D {
    fn default() -> Self {
        Self::from(Coords::ZERO)
    }
}

impl From<Coords> for SharedVector3D {
    fn from(coords: Coords) -> Self {
        Self {
            coords: Rc::new(RefCell::new(coords)),
        }
    }
}

impl Drop for SharedVector3D {
    fn drop(&mut self) {
        if Rc::strong_count(&self.coords) == 1 {
            tracing::trace!("last handle dropped, releasing shared buffer");
        }
    }
}

impl fmt::Display for SharedVector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_vector(f, self.coords().as_slice())
    }
}

impl fmt::Debug for SharedVector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coords = self.coords();
        f.debug_struct("SharedVector3D")
            .field("x", &coords.x)
            .field("y", &coords.y)
            .field("z", &coords.z)
            .field("handles", &self.handle_count())
            .finish()
    }
}
