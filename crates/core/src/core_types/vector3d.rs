//! Double-precision 3D vector for world-space math
//!
//! `Vector3d` carries positions and directions at `f64` precision so that
//! large-world terrain and LOD calculations do not accumulate `f32` error.
//! Values cross into the host engine as [`Vec3`] (single precision) through
//! explicit widening/narrowing conversions.
//!
//! # Numeric semantics
//! - All arithmetic follows IEEE-754. Nothing is clamped, checked or special-cased.
//! - `normalized()` of a zero vector divides by zero and yields non-finite
//!   components. Check `magnitude()` first if zero-length input is possible.
//! - `rotate()` expects a unit axis. A non-unit axis scales the result as well
//!   as rotating it.
//! - Equality is exact per component. `Vector3d` deliberately implements neither
//!   `Eq` nor `Hash`: it cannot be used as a hash-map key.
//!
//! # Usage
//! ```
//! use lod_math_core::{Vec3, Vector3d};
//!
//! let a = Vector3d::new(1.0, 0.0, 0.0);
//! let b = Vector3d::new(0.0, 1.0, 0.0);
//! assert_eq!(Vector3d::cross(a, b), Vector3d::new(0.0, 0.0, 1.0));
//! assert_eq!(a + b, Vector3d::new(1.0, 1.0, 0.0));
//!
//! // Mixed precision: the host vector is widened per component
//! let host = Vec3::new(0.5, 0.25, 2.0);
//! assert_eq!(a + host, Vector3d::new(1.5, 0.25, 2.0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::trace;

use super::vec3::{Vec3, Vec3d};

/// Squared-length deviation from 1.0 above which a rotation axis is reported
/// as non-unit in trace output.
const AXIS_UNIT_TOLERANCE: f64 = 1e-6;

/// Double-precision 3D vector.
///
/// A plain `Copy` value with public fields. Copies never alias, so handing a
/// vector to another thread is always by value. Mutating a shared instance
/// needs `&mut`, which the borrow checker keeps exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    /// Zero vector
    pub const ZERO: Vector3d = Vector3d::new(0.0, 0.0, 0.0);

    /// All components one
    pub const ONE: Vector3d = Vector3d::new(1.0, 1.0, 1.0);

    /// Unit X axis
    pub const X: Vector3d = Vector3d::new(1.0, 0.0, 0.0);

    /// Unit Y axis
    pub const Y: Vector3d = Vector3d::new(0.0, 1.0, 0.0);

    /// Unit Z axis
    pub const Z: Vector3d = Vector3d::new(0.0, 0.0, 1.0);

    /// Create a vector from its three components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3d { x, y, z }
    }

    /// Widen a host single-precision vector. Every `f32` is exactly
    /// representable as `f64`, so this is lossless.
    #[inline]
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        Vector3d {
            x: f64::from(v.x),
            y: f64::from(v.y),
            z: f64::from(v.z),
        }
    }

    /// Narrow to the host single-precision vector.
    ///
    /// Each component is cast with `as f32` (round to nearest). Values beyond
    /// the `f32` range become infinite.
    #[inline]
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// `x² + y² + z²`
    #[inline]
    #[must_use]
    pub fn sqr_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    /// Vector scaled by `1 / magnitude`.
    ///
    /// A zero vector is not special-cased: `1 / 0` is infinite and the
    /// resulting components are NaN.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            trace!("normalizing zero-length vector, result is non-finite");
        }
        *self * (1.0 / magnitude)
    }

    /// True when no component is NaN or infinite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Right-handed cross product `u × v`.
    #[inline]
    #[must_use]
    pub fn cross(u: Vector3d, v: Vector3d) -> Vector3d {
        Vector3d {
            x: u.y * v.z - u.z * v.y,
            y: u.z * v.x - u.x * v.z,
            z: u.x * v.y - u.y * v.x,
        }
    }

    /// Dot product `u · v`.
    #[inline]
    #[must_use]
    pub fn dot(u: Vector3d, v: Vector3d) -> f64 {
        u.x * v.x + u.y * v.y + u.z * v.z
    }

    /// Rotate `v` by `rad` radians about axis `n` (right-hand rule).
    ///
    /// Builds the Rodrigues rotation matrix from `n`:
    ///
    /// ```text
    /// | t·nx·nx + c      t·nx·ny − s·nz   t·nx·nz + s·ny |
    /// | t·nx·ny + s·nz   t·ny·ny + c      t·ny·nz − s·nx |
    /// | t·nx·nz − s·ny   t·ny·nz + s·nx   t·nz·nz + c    |
    /// ```
    ///
    /// with `c = cos(rad)`, `s = sin(rad)`, `t = 1 − c`.
    ///
    /// `n` must be a unit vector. It is used as given: a non-unit axis
    /// produces a combined rotation and scale.
    #[must_use]
    pub fn rotate(v: Vector3d, rad: f64, n: Vector3d) -> Vector3d {
        if (n.sqr_magnitude() - 1.0).abs() > AXIS_UNIT_TOLERANCE {
            trace!(axis = %n, "rotating about a non-unit axis");
        }

        let c = rad.cos();
        let s = rad.sin();
        let t = 1.0 - c;

        let a11 = t * n.x * n.x + c;
        let a12 = t * n.x * n.y - s * n.z;
        let a13 = t * n.x * n.z + s * n.y;

        let a21 = t * n.x * n.y + s * n.z;
        let a22 = t * n.y * n.y + c;
        let a23 = t * n.y * n.z - s * n.x;

        let a31 = t * n.x * n.z - s * n.y;
        let a32 = t * n.y * n.z + s * n.x;
        let a33 = t * n.z * n.z + c;

        Vector3d {
            x: a11 * v.x + a12 * v.y + a13 * v.z,
            y: a21 * v.x + a22 * v.y + a23 * v.z,
            z: a31 * v.x + a32 * v.y + a33 * v.z,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<Vec3> for Vector3d {
    #[inline]
    fn from(v: Vec3) -> Self {
        Vector3d::from_vec3(v)
    }
}

impl From<Vector3d> for Vec3 {
    #[inline]
    fn from(v: Vector3d) -> Self {
        v.to_vec3()
    }
}

impl From<Vec3d> for Vector3d {
    #[inline]
    fn from(v: Vec3d) -> Self {
        Vector3d::new(v.x, v.y, v.z)
    }
}

impl From<Vector3d> for Vec3d {
    #[inline]
    fn from(v: Vector3d) -> Self {
        Vec3d::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Vector3d {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3d::new(x, y, z)
    }
}

impl From<Vector3d> for [f64; 3] {
    #[inline]
    fn from(v: Vector3d) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ============================================================================
// ARITHMETIC
// ============================================================================

impl Add for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn add(self, rhs: Vector3d) -> Vector3d {
        Vector3d::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn sub(self, rhs: Vector3d) -> Vector3d {
        Vector3d::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vec3> for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn add(self, rhs: Vec3) -> Vector3d {
        self + Vector3d::from_vec3(rhs)
    }
}

impl Add<Vector3d> for Vec3 {
    type Output = Vector3d;
    #[inline]
    fn add(self, rhs: Vector3d) -> Vector3d {
        Vector3d::from_vec3(self) + rhs
    }
}

impl Sub<Vec3> for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vector3d {
        self - Vector3d::from_vec3(rhs)
    }
}

impl Sub<Vector3d> for Vec3 {
    type Output = Vector3d;
    #[inline]
    fn sub(self, rhs: Vector3d) -> Vector3d {
        Vector3d::from_vec3(self) - rhs
    }
}

impl Mul<f64> for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn mul(self, rhs: f64) -> Vector3d {
        Vector3d::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3d> for f64 {
    type Output = Vector3d;
    #[inline]
    fn mul(self, rhs: Vector3d) -> Vector3d {
        Vector3d::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl Neg for Vector3d {
    type Output = Vector3d;
    #[inline]
    fn neg(self) -> Vector3d {
        Vector3d::new(-self.x, -self.y, -self.z)
    }
}
