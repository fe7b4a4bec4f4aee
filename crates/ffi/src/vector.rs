//! By-value FFI wrappers for `Vector3d` operations.
//!
//! None of these can fail: IEEE-754 edge cases come back as non-finite
//! components exactly as they do in Rust, and the last-error state is untouched.

use lod_math_core::{Vec3, Vector3d};

use crate::types::{LodDouble3, LodFloat3};

/// Build a vector from three components.
#[no_mangle]
pub extern "C" fn lod_vec3d_new(x: f64, y: f64, z: f64) -> LodDouble3 {
    Vector3d::new(x, y, z).into()
}

/// Widen an engine vector to double precision (lossless).
#[no_mangle]
pub extern "C" fn lod_vec3d_from_float3(v: LodFloat3) -> LodDouble3 {
    Vector3d::from_vec3(v.into()).into()
}

/// Narrow to an engine vector. Components are rounded to the nearest `float`.
#[no_mangle]
pub extern "C" fn lod_vec3d_to_float3(v: LodDouble3) -> LodFloat3 {
    Vector3d::from(v).to_vec3().into()
}

/// `a + b`
#[no_mangle]
pub extern "C" fn lod_vec3d_add(a: LodDouble3, b: LodDouble3) -> LodDouble3 {
    (Vector3d::from(a) + Vector3d::from(b)).into()
}

/// `a - b`
#[no_mangle]
pub extern "C" fn lod_vec3d_sub(a: LodDouble3, b: LodDouble3) -> LodDouble3 {
    (Vector3d::from(a) - Vector3d::from(b)).into()
}

/// `a + b` with `b` widened from single precision.
#[no_mangle]
pub extern "C" fn lod_vec3d_add_float3(a: LodDouble3, b: LodFloat3) -> LodDouble3 {
    (Vector3d::from(a) + Vec3::from(b)).into()
}

/// `a + b` with `a` widened from single precision.
#[no_mangle]
pub extern "C" fn lod_float3_add_vec3d(a: LodFloat3, b: LodDouble3) -> LodDouble3 {
    (Vec3::from(a) + Vector3d::from(b)).into()
}

/// `a - b` with `b` widened from single precision.
#[no_mangle]
pub extern "C" fn lod_vec3d_sub_float3(a: LodDouble3, b: LodFloat3) -> LodDouble3 {
    (Vector3d::from(a) - Vec3::from(b)).into()
}

/// `a - b` with `a` widened from single precision.
#[no_mangle]
pub extern "C" fn lod_float3_sub_vec3d(a: LodFloat3, b: LodDouble3) -> LodDouble3 {
    (Vec3::from(a) - Vector3d::from(b)).into()
}

/// `v * scalar`. There is no divide; multiply by the reciprocal instead.
#[no_mangle]
pub extern "C" fn lod_vec3d_scale(v: LodDouble3, scalar: f64) -> LodDouble3 {
    (Vector3d::from(v) * scalar).into()
}

/// Dot product `a · b`.
#[no_mangle]
pub extern "C" fn lod_vec3d_dot(a: LodDouble3, b: LodDouble3) -> f64 {
    Vector3d::dot(a.into(), b.into())
}

/// Right-handed cross product `a × b`.
#[no_mangle]
pub extern "C" fn lod_vec3d_cross(a: LodDouble3, b: LodDouble3) -> LodDouble3 {
    Vector3d::cross(a.into(), b.into()).into()
}

/// Rotate `v` by `rad` radians about `axis` (right-hand rule).
///
/// `axis` must be unit length; it is not normalized, so a non-unit axis also
/// scales the result.
#[no_mangle]
pub extern "C" fn lod_vec3d_rotate(v: LodDouble3, rad: f64, axis: LodDouble3) -> LodDouble3 {
    Vector3d::rotate(v.into(), rad, axis.into()).into()
}

/// Euclidean length.
#[no_mangle]
pub extern "C" fn lod_vec3d_magnitude(v: LodDouble3) -> f64 {
    Vector3d::from(v).magnitude()
}

/// Squared length.
#[no_mangle]
pub extern "C" fn lod_vec3d_sqr_magnitude(v: LodDouble3) -> f64 {
    Vector3d::from(v).sqr_magnitude()
}

/// Unit vector in the direction of `v`.
///
/// A zero vector returns NaN components. Check `lod_vec3d_magnitude` first if
/// zero-length input is possible.
#[no_mangle]
pub extern "C" fn lod_vec3d_normalized(v: LodDouble3) -> LodDouble3 {
    Vector3d::from(v).normalized().into()
}

/// Exact component-wise equality (no tolerance; NaN is never equal).
#[no_mangle]
pub extern "C" fn lod_vec3d_equals(a: LodDouble3, b: LodDouble3) -> bool {
    Vector3d::from(a) == Vector3d::from(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn d3(x: f64, y: f64, z: f64) -> LodDouble3 {
        lod_vec3d_new(x, y, z)
    }

    #[test]
    fn test_basic_algebra() {
        assert_eq!(lod_vec3d_add(d3(1.0, 0.0, 0.0), d3(0.0, 1.0, 0.0)), d3(1.0, 1.0, 0.0));
        assert_eq!(lod_vec3d_sub(d3(1.0, 1.0, 0.0), d3(0.0, 1.0, 0.0)), d3(1.0, 0.0, 0.0));
        assert_eq!(lod_vec3d_scale(d3(1.0, -2.0, 3.0), 2.0), d3(2.0, -4.0, 6.0));
        assert_eq!(lod_vec3d_dot(d3(1.0, 2.0, 3.0), d3(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(lod_vec3d_cross(d3(1.0, 0.0, 0.0), d3(0.0, 1.0, 0.0)), d3(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_mixed_precision() {
        let d = d3(1.0, 2.0, 3.0);
        let f = LodFloat3 { x: 0.5, y: 0.5, z: 0.5 };
        assert_eq!(lod_vec3d_add_float3(d, f), d3(1.5, 2.5, 3.5));
        assert_eq!(lod_float3_add_vec3d(f, d), d3(1.5, 2.5, 3.5));
        assert_eq!(lod_vec3d_sub_float3(d, f), d3(0.5, 1.5, 2.5));
        assert_eq!(lod_float3_sub_vec3d(f, d), d3(-0.5, -1.5, -2.5));
    }

    #[test]
    fn test_mixed_precision_keeps_double_operand() {
        let d = d3(1.0e8 + 0.125, 0.1, 1.0 / 3.0);
        let f = LodFloat3 { x: 0.5, y: 0.5, z: 0.5 };
        assert_ne!(lod_vec3d_from_float3(lod_vec3d_to_float3(d)), d);

        let sum = d3(1.0e8 + 0.625, 0.1 + 0.5, 1.0 / 3.0 + 0.5);
        assert_eq!(lod_vec3d_add_float3(d, f), sum);
        assert_eq!(lod_float3_add_vec3d(f, d), sum);
        assert_eq!(lod_vec3d_sub_float3(d, f), d3(1.0e8 - 0.375, 0.1 - 0.5, 1.0 / 3.0 - 0.5));
        assert_eq!(
            lod_float3_sub_vec3d(f, d),
            d3(0.5 - (1.0e8 + 0.125), 0.5 - 0.1, 0.5 - 1.0 / 3.0)
        );
    }

    #[test]
    fn test_precision_conversion() {
        let f = LodFloat3 { x: 0.1, y: -7.25, z: 1.0e6 };
        let d = lod_vec3d_from_float3(f);
        assert_eq!(d.x, f64::from(0.1_f32));
        assert_eq!(lod_vec3d_to_float3(d), f);
    }

    #[test]
    fn test_magnitude_and_normalize() {
        assert_eq!(lod_vec3d_magnitude(d3(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(lod_vec3d_sqr_magnitude(d3(3.0, 4.0, 0.0)), 25.0);
        let n = lod_vec3d_normalized(d3(0.0, 0.0, 8.0));
        assert_eq!(n, d3(0.0, 0.0, 1.0));
        let zero = lod_vec3d_normalized(d3(0.0, 0.0, 0.0));
        assert!(zero.x.is_nan() && zero.y.is_nan() && zero.z.is_nan());
    }

    #[test]
    fn test_rotate() {
        let r = lod_vec3d_rotate(d3(1.0, 0.0, 0.0), FRAC_PI_2, d3(0.0, 0.0, 1.0));
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equals() {
        assert!(lod_vec3d_equals(d3(1.0, 2.0, 3.0), d3(1.0, 2.0, 3.0)));
        assert!(!lod_vec3d_equals(d3(1.0, 2.0, 3.0), d3(1.0, 2.0, 3.0000001)));
        assert!(!lod_vec3d_equals(d3(f64::NAN, 0.0, 0.0), d3(f64::NAN, 0.0, 0.0)));
    }
}
