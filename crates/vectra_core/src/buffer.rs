//! # Coordinate Buffer
//!
//! The fixed-size block of three `f64` that both vector variants put on the
//! heap. It is plain old data so it can be zeroed and viewed as a slice
//! without copying.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Number of components in a valid buffer.
pub const COMPONENTS: usize = 3;

/// Three ordered components (x, y, z).
///
/// Serialized as a plain `[x, y, z]` array.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f64; COMPONENTS]", into = "[f64; COMPONENTS]")]
pub struct Coords {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Coords {
    /// Creates a new buffer value.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates from array
    #[inline]
    #[must_use]
    pub const fn from_array(arr: [f64; COMPONENTS]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Converts to array
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; COMPONENTS] {
        [self.x, self.y, self.z]
    }

    /// The components as a slice, without copying.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// The components as a mutable slice, without copying.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    /// Length squared (avoids sqrt)
    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scales the buffer in place to unit length.
    ///
    /// A zero-length buffer is left untouched, so this never divides by zero.
    /// A NaN length fails the `> 0` test and is left untouched as well.
    pub fn normalize(&mut self) {
        let length = self.length();
        if length > 0.0 {
            for component in self.as_mut_slice() {
                *component /= length;
            }
        }
    }
}

impl From<[f64; COMPONENTS]> for Coords {
    fn from(arr: [f64; COMPONENTS]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Coords> for [f64; COMPONENTS] {
    fn from(coords: Coords) -> Self {
        coords.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::size_of::<Coords>(), COMPONENTS * 8);
        assert_eq!(Coords::new(1.0, 2.0, 3.0).as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_zeroed_is_default() {
        let zeroed: Coords = Zeroable::zeroed();
        assert_eq!(zeroed, Coords::default());
        assert_eq!(zeroed, Coords::ZERO);
    }

    #[test]
    fn test_mut_slice_writes_through() {
        let mut coords = Coords::ZERO;
        coords.as_mut_slice()[2] = 7.5;
        assert_eq!(coords.z, 7.5);
    }

    #[test]
    fn test_length() {
        let coords = Coords::new(3.0, 4.0, 0.0);
        assert!((coords.length() - 5.0).abs() < f64::EPSILON);
        assert!((coords.length_squared() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize() {
        let mut coords = Coords::new(3.0, 0.0, 4.0);
        coords.normalize();
        assert!((coords.x - 0.6).abs() < 1e-12);
        assert!(coords.y.abs() < 1e-12);
        assert!((coords.z - 0.8).abs() < 1e-12);
        assert!((coords.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut coords = Coords::ZERO;
        coords.normalize();
        assert_eq!(coords, Coords::ZERO);
        assert!(coords.as_slice().iter().all(|c| !c.is_nan()));
    }

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Holder {
        origin: Coords,
    }

    #[test]
    fn test_serde_as_array() {
        let holder: Holder = toml::from_str("origin = [3.0, 0.0, -4.5]").unwrap();
        assert_eq!(holder.origin, Coords::new(3.0, 0.0, -4.5));

        let text = toml::to_string(&holder).unwrap();
        assert_eq!(toml::from_str::<Holder>(&text).unwrap(), holder);
        assert!(toml::from_str::<Holder>("origin = [1.0, 2.0]").is_err());
    }

    #[test]
    fn test_array_conversion() {
        let coords = Coords::from([1.0, -2.0, 0.5]);
        assert_eq!(coords.to_array(), [1.0, -2.0, 0.5]);
    }
}
