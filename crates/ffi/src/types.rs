//! FFI-exposed vector types.
//!
//! These mirror `Vector3d` and the engine's single-precision vector with a stable
//! C-compatible memory layout (`#[repr(C)]`), so C/C++/C# callers can pass them
//! by value or in contiguous buffers.

use lod_math_core::{Vec3, Vector3d};

/// Double-precision 3-vector as seen from C.
///
/// ```c
/// LodDouble3 position = { 1250000.0, 42.5, -830000.0 };
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LodDouble3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

/// Single-precision 3-vector as seen from C (engine render/physics space).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LodFloat3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl From<LodDouble3> for Vector3d {
    #[inline]
    fn from(v: LodDouble3) -> Self {
        Vector3d::new(v.x, v.y, v.z)
    }
}

impl From<Vector3d> for LodDouble3 {
    #[inline]
    fn from(v: Vector3d) -> Self {
        LodDouble3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<LodFloat3> for Vec3 {
    #[inline]
    fn from(v: LodFloat3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for LodFloat3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        LodFloat3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}
