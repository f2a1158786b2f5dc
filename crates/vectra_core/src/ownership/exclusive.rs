//! # Exclusive Ownership
//!
//! A vector whose buffer belongs to exactly one instance at a time.
//!
//! ```text
//!   v1 ──► [1, 2, 3]          clone:  v1 ──► [1, 2, 3]
//!                                     v2 ──► [1, 2, 3]   (new allocation)
//!
//!   v3 = v1.take():           v1 ──► (empty, len 0)
//!                             v3 ──► [1, 2, 3]           (same allocation)
//! ```
//!
//! A plain Rust move leaves nothing behind to observe, so the "moved-from"
//! state is made explicit with [`ExclusiveVector3D::take`] and
//! [`ExclusiveVector3D::move_assign`]. Reading an emptied vector fails fast.

use std::fmt;
use std::io::Write;

use crate::buffer::{Coords, COMPONENTS};
use crate::error::{VectorError, VectorResult};
use crate::render;

/// A 3D vector backed by an exclusively owned heap buffer.
///
/// Every read of a moved-from vector fails fast except `Display`, which
/// renders the empty buffer as `Vector3D()` so `to_string()` never panics.
/// Use [`Self::write_to`] or [`Self::print`] to get the error instead.
///
/// # Example
///
/// ```rust,ignore
/// let mut v1 = ExclusiveVector3D::new(1.0, 2.0, 3.0);
/// let v2 = v1.clone();       // independent copy
/// let v3 = v1.take();        // v1 is now empty
///
/// assert_eq!(v3.x(), 1.0);
/// assert!(v1.is_moved_from());
/// ```
#[derive(Clone, PartialEq)]
pub struct ExclusiveVector3D {
    /// The owned buffer, `None` once moved out.
    coords: Option<Box<Coords>>,
}

impl ExclusiveVector3D {
    /// Creates a vector with the given components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: Some(Box::new(Coords::new(x, y, z))),
        }
    }

    /// Number of live components: 3, or 0 after a move.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        if self.coords.is_some() {
            COMPONENTS
        } else {
            0
        }
    }

    /// Returns true once the buffer has been moved out.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_none()
    }

    /// Alias of [`Self::is_empty`] that reads better at call sites.
    #[inline]
    #[must_use]
    pub fn is_moved_from(&self) -> bool {
        self.is_empty()
    }

    /// Move-construct: returns a new vector owning this buffer and leaves
    /// `self` emptied. No component is copied.
    #[must_use = "the buffer is moved into the returned vector"]
    pub fn take(&mut self) -> Self {
        tracing::debug!(moved = self.coords.is_some(), "exclusive buffer moved out");
        Self {
            coords: self.coords.take(),
        }
    }

    /// Move-assign: releases this buffer, then takes `other`'s and empties it.
    pub fn move_assign(&mut self, other: &mut Self) {
        tracing::debug!(
            released = self.coords.is_some(),
            moved = other.coords.is_some(),
            "exclusive buffer move-assigned"
        );
        self.coords = None;
        self.coords = other.coords.take();
    }

    /// Copy-assign: replaces this vector's values with a duplicate of `other`'s.
    ///
    /// The existing allocation is reused when there is one. Copying from an
    /// emptied vector empties `self`.
    pub fn copy_assign(&mut self, other: &Self) {
        match (&mut self.coords, &other.coords) {
            (Some(mine), Some(theirs)) => **mine = **theirs,
            (slot, theirs) => *slot = theirs.clone(),
        }
    }

    fn buffer(&self) -> VectorResult<&Coords> {
        self.coords.as_deref().ok_or(VectorError::MovedFrom)
    }

    fn buffer_mut(&mut self) -> &mut Coords {
        match self.coords.as_deref_mut() {
            Some(coords) => coords,
            None => moved_from(),
        }
    }

    /// Returns all three components.
    ///
    /// # Errors
    ///
    /// [`VectorError::MovedFrom`] if the buffer was moved out.
    pub fn try_components(&self) -> VectorResult<[f64; COMPONENTS]> {
        self.buffer().map(|coords| coords.to_array())
    }

    /// Returns the X component.
    ///
    /// # Errors
    ///
    /// [`VectorError::MovedFrom`] if the buffer was moved out.
    pub fn try_x(&self) -> VectorResult<f64> {
        self.buffer().map(|coords| coords.x)
    }

    /// Returns the Y component.
    ///
    /// # Errors
    ///
    /// [`VectorError::MovedFrom`] if the buffer was moved out.
    pub fn try_y(&self) -> VectorResult<f64> {
        self.buffer().map(|coords| coords.y)
    }

    /// Returns the Z component.
    ///
    /// # Errors
    ///
    /// [`VectorError::MovedFrom`] if the buffer was moved out.
    pub fn try_z(&self) -> VectorResult<f64> {
        self.buffer().map(|coords| coords.z)
    }

    /// Returns all three components.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was moved out.
    #[must_use]
    pub fn components(&self) -> [f64; COMPONENTS] {
        self.try_components().unwrap_or_else(|_| moved_from())
    }

    /// Returns the X component.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was moved out.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.try_x().unwrap_or_else(|_| moved_from())
    }

    /// Returns the Y component.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was moved out.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.try_y().unwrap_or_else(|_| moved_from())
    }

    /// Returns the Z component.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was moved out.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.try_z().unwrap_or_else(|_| moved_from())
    }

    /// Sets the X component.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was moved out.
    pub fn set_x(&mut self, x: f64) {
        self.buffer_mut().x = x;
    }

    /// Sets the Y component.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was moved out.
    pub fn set_y(&mut self, y: f64) {
        self.buffer_mut().y = y;
    }

    /// Sets the Z component.
    ///
    /// # Panics
    ///
    /// Panics if the buffer was moved out.
    pub fn set_z(&mut self, z: f64) {
        self.buffer_mut().z = z;
    }

    /// Writes `Vector3D(x, y, z)` followed by a newline.
    ///
    /// # Errors
    ///
    /// [`VectorError::MovedFrom`] if the buffer was moved out, without
    /// writing anything; [`VectorError::Output`] if the writer fails.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> VectorResult<()> {
        let coords = self.buffer()?;
        let line = render::render_vector(coords.as_slice());
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

impl Default for ExclusiveVector3D {
    fn default() -> Self {
        Self {
            coords: Some(Box::default()),
        }
    }
}

impl From<Coords> for ExclusiveVector3D {
    fn from(coords: Coords) -> Self {
        Self {
            coords: Some(Box::new(coords)),
        }
    }
}

impl fmt::Display for ExclusiveVector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.coords.as_deref().map_or(&[][..], Coords::as_slice);
        render::write_vector(f, components)
    }
}

impl fmt::Debug for ExclusiveVector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coords.as_deref() {
            Some(coords) => f
                .debug_struct("ExclusiveVector3D")
                .field("x", &coords.x)
                .field("y", &coords.y)
                .field("z", &coords.z)
                .finish(),
            None => f.write_str("ExclusiveVector3D(<moved>)"),
        }
    }
}

#[cold]
#[track_caller]
fn moved_from() -> ! {
    panic!("{}", VectorError::MovedFrom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let v = ExclusiveVector3D::default();
        assert_eq!(v.components(), [0.0, 0.0, 0.0]);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_getters() {
        let v = ExclusiveVector3D::new(1.5, -2.0, 3.25);
        assert_eq!(v.x(), 1.5);
        assert_eq!(v.y(), -2.0);
        assert_eq!(v.z(), 3.25);
    }

    #[test]
    fn test_clone_is_independent() {
        let v = ExclusiveVector3D::new(1.0, 2.0, 3.0);
        let mut w = v.clone();
        w.set_x(10.0);
        w.set_z(-1.0);

        assert_eq!(v.components(), [1.0, 2.0, 3.0]);
        assert_eq!(w.components(), [10.0, 2.0, -1.0]);
    }

    #[test]
    fn test_take_empties_source() {
        let mut v = ExclusiveVector3D::new(1.0, 2.0, 3.0);
        let w = v.take();

        assert_eq!(w.components(), [1.0, 2.0, 3.0]);
        assert!(v.is_moved_from());
        assert_eq!(v.len(), 0);
        assert_eq!(v.try_x(), Err(VectorError::MovedFrom));
        assert_eq!(v.try_components(), Err(VectorError::MovedFrom));
    }

    #[test]
    fn test_take_does_not_reallocate() {
        let mut v = ExclusiveVector3D::new(1.0, 2.0, 3.0);
        let before = v.coords.as_deref().map(|c| c as *const Coords);
        let w = v.take();
        let after = w.coords.as_deref().map(|c| c as *const Coords);
        assert_eq!(before, after);
    }

    #[test]
    #[should_panic(expected = "moved-from")]
    fn test_getter_after_move_fails_fast() {
        let mut v = ExclusiveVector3D::new(1.0, 2.0, 3.0);
        let _w = v.take();
        let _ = v.x();
    }

    #[test]
    #[should_panic(expected = "moved-from")]
    fn test_setter_after_move_fails_fast() {
        let mut v = ExclusiveVector3D::new(1.0, 2.0, 3.0);
        let _w = v.take();
        v.set_y(5.0);
    }

    #[test]
    fn test_move_assign() {
        let mut target = ExclusiveVector3D::new(9.0, 9.0, 9.0);
        let mut source = ExclusiveVector3D::new(1.0, 2.0, 3.0);
        target.move_assign(&mut source);

        assert_eq!(target.components(), [1.0, 2.0, 3.0]);
        assert!(source.is_moved_from());
    }

    #[test]
    fn test_copy_assign_reuses_allocation() {
        let mut target = ExclusiveVector3D::new(9.0, 9.0, 9.0);
        let source = ExclusiveVector3D::new(1.0, 2.0, 3.0);
        let before = target.coords.as_deref().map(|c| c as *const Coords);

        target.copy_assign(&source);

        assert_eq!(target.components(), [1.0, 2.0, 3.0]);
        assert_eq!(target.coords.as_deref().map(|c| c as *const Coords), before);
        assert_eq!(source.components(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_copy_assign_revives_emptied_target() {
        let mut target = ExclusiveVector3D::new(9.0, 9.0, 9.0);
        let _moved = target.take();
        target.copy_assign(&ExclusiveVector3D::new(4.0, 5.0, 6.0));
        assert_eq!(target.components(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_copy_assign_from_emptied_source() {
        let mut target = ExclusiveVector3D::new(1.0, 1.0, 1.0);
        let mut source = ExclusiveVector3D::new(2.0, 2.0, 2.0);
        let _moved = source.take();
        target.copy_assign(&source);
        assert!(target.is_moved_from());
    }

    #[test]
    fn test_print_to_stdout() {
        assert!(ExclusiveVector3D::new(1.0, 2.0, 3.0).print().is_ok());
    }

    #[test]
    fn test_write_to() {
        let v = ExclusiveVector3D::new(1.0, 2.0, 3.0);
        let mut out = Vec::new();
        v.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Vector3D(1, 2, 3)\n");
    }

    #[test]
    fn test_write_to_after_move_writes_nothing() {
        let mut v = ExclusiveVector3D::new(1.0, 2.0, 3.0);
        let _w = v.take();
        let mut out = Vec::new();
        assert_eq!(v.write_to(&mut out), Err(VectorError::MovedFrom));
        assert!(out.is_empty());
    }

    #[test]
    fn test_display() {
        let mut v = ExclusiveVector3D::new(0.5, 0.0, -4.0);
        assert_eq!(v.to_string(), "Vector3D(0.5, 0, -4)");
        let _w = v.take();
        assert_eq!(v.to_string(), "Vector3D()");
        assert_eq!(format!("{v:?}"), "ExclusiveVector3D(<moved>)");
    }
}
