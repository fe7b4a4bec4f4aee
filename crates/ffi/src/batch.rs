//! Buffer operations for handing many positions to the engine at once.
//!
//! Typical use is a terrain/LOD pass that keeps vertex positions in double
//! precision and narrows the whole chunk for upload, or spins a chunk of points
//! about an axis in place.
use std::mem::size_of;
use std::slice;

use lod_math_core::Vector3d;

use crate::error::{DefaultLodMathError, LodMathErrorCode};
use crate::helpers::{clear_last_error, track_error};
use crate::types::{LodDouble3, LodFloat3};

/// Validate a caller buffer of `count` elements of `T`.
/// Rejects null pointers and counts whose byte size could not be addressed.
/// `T` must not be zero-sized.
fn check_buffer<T>(ptr: *const T, name: &str, count: usize) -> Result<(), DefaultLodMathError> {
    debug_assert_ne!(size_of::<T>(), 0, "check_buffer requires a sized element type");
    if ptr.is_null() {
        return Err(DefaultLodMathError::null_pointer(name));
    }
    let max = isize::MAX.unsigned_abs() / size_of::<T>();
    if count > max {
        return Err(DefaultLodMathError::invalid_length("count", count, max));
    }
    Ok(())
}

/// Narrow `count` double-precision vectors from `src` into `dst`.
///
/// # Returns
/// - `LodMathErrorCode::Ok` on success (`count == 0` is a no-op)
/// - `LodMathErrorCode::NullPointer` if `src` or `dst` is null and `count > 0`
/// - `LodMathErrorCode::InvalidLength` if `count` exceeds the addressable maximum
///
/// # Safety
/// - `src` must point to `count` readable `LodDouble3` values
/// - `dst` must point to `count` writable `LodFloat3` values
/// - The two buffers must not overlap
#[no_mangle]
pub unsafe extern "C" fn lod_vec3d_to_float3_batch(
    src: *const LodDouble3,
    dst: *mut LodFloat3,
    count: usize,
) -> LodMathErrorCode {
    if count == 0 {
        clear_last_error();
        return LodMathErrorCode::Ok;
    }
    if let Err(error) = check_buffer(src, "src", count)
        .and_then(|()| check_buffer(dst.cast_const(), "dst", count))
    {
        return track_error(&error);
    }

    let src = slice::from_raw_parts(src, count);
    let dst = slice::from_raw_parts_mut(dst, count);
    for (out, v) in dst.iter_mut().zip(src) {
        *out = Vector3d::from(*v).to_vec3().into();
    }

    clear_last_error();
    LodMathErrorCode::Ok
}

/// Rotate `count` vectors in `points` by `rad` radians about `axis`, in place.
///
/// `axis` must be unit length; it is used as given.
///
/// # Returns
/// - `LodMathErrorCode::Ok` on success (`count == 0` is a no-op)
/// - `LodMathErrorCode::NullPointer` if `points` is null and `count > 0`
/// - `LodMathErrorCode::InvalidLength` if `count` exceeds the addressable maximum
///
/// # Safety
/// `points` must point to `count` readable and writable `LodDouble3` values.
#[no_mangle]
pub unsafe extern "C" fn lod_vec3d_rotate_batch(
    points: *mut LodDouble3,
    count: usize,
    rad: f64,
    axis: LodDouble3,
) -> LodMathErrorCode {
    if count == 0 {
        clear_last_error();
        return LodMathErrorCode::Ok;
    }
    if let Err(error) = check_buffer(points.cast_const(), "points", count) {
        return track_error(&error);
    }

    let points = slice::from_raw_parts_mut(points, count);
    let axis = Vector3d::from(axis);
    for p in points.iter_mut() {
        *p = Vector3d::rotate(Vector3d::from(*p), rad, axis).into();
    }

    clear_last_error();
    LodMathErrorCode::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{lod_math_get_last_error, lod_math_get_last_error_code, LodMathError};
    use approx::assert_relative_eq;
    use std::ffi::CStr;
    use std::f64::consts::PI;
    use std::ptr;

    fn last_error_message() -> Option<String> {
        let msg = lod_math_get_last_error();
        if msg.is_null() {
            return None;
        }
        // SAFETY: non-null pointer returned by lod_math_get_last_error on this thread.
        Some(unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned())
    }

    #[test]
    fn test_to_float3_batch_narrows_every_element() {
        let src = [
            LodDouble3 { x: 1.0, y: 2.0, z: 3.0 },
            LodDouble3 { x: 0.1, y: -0.5, z: 1.0e7 },
        ];
        let mut dst = [LodFloat3::default(); 2];
        let code = unsafe { lod_vec3d_to_float3_batch(src.as_ptr(), dst.as_mut_ptr(), src.len()) };
        assert_eq!(code, LodMathErrorCode::Ok);
        assert_eq!(dst[0], LodFloat3 { x: 1.0, y: 2.0, z: 3.0 });
        assert_eq!(dst[1], LodFloat3 { x: 0.1, y: -0.5, z: 1.0e7 });
        assert_eq!(lod_math_get_last_error_code(), LodMathErrorCode::Ok);
        assert!(last_error_message().is_none());
    }

    #[test]
    fn test_to_float3_batch_null_pointer() {
        let mut dst = [LodFloat3::default(); 1];
        let code = unsafe { lod_vec3d_to_float3_batch(ptr::null(), dst.as_mut_ptr(), 1) };
        assert_eq!(code, LodMathErrorCode::NullPointer);
        assert_eq!(lod_math_get_last_error_code(), LodMathErrorCode::NullPointer);
        assert_eq!(
            last_error_message().as_deref(),
            Some("Parameter 'src' cannot be null")
        );
    }

    #[test]
    fn test_zero_count_accepts_null_and_clears_error() {
        let code = unsafe { lod_vec3d_rotate_batch(ptr::null_mut(), 1, 1.0, LodDouble3::default()) };
        assert_eq!(code, LodMathErrorCode::NullPointer);

        let code = unsafe { lod_vec3d_to_float3_batch(ptr::null(), ptr::null_mut(), 0) };
        assert_eq!(code, LodMathErrorCode::Ok);
        assert_eq!(lod_math_get_last_error_code(), LodMathErrorCode::Ok);
        assert!(last_error_message().is_none());
    }

    #[test]
    fn test_oversized_count_is_rejected() {
        let mut points = [LodDouble3::default(); 1];
        let code =
            unsafe { lod_vec3d_rotate_batch(points.as_mut_ptr(), usize::MAX, 1.0, LodDouble3::default()) };
        assert_eq!(code, LodMathErrorCode::InvalidLength);
        assert!(last_error_message().is_some_and(|m| m.starts_with("Parameter 'count'")));
    }

    #[test]
    fn test_check_buffer_limit_scales_with_element_size() {
        let point = LodDouble3::default();
        let max = isize::MAX.unsigned_abs() / size_of::<LodDouble3>();
        assert!(check_buffer(ptr::from_ref(&point), "points", max).is_ok());
        let err = check_buffer(ptr::from_ref(&point), "points", max + 1).unwrap_err();
        assert_eq!(err.code(), LodMathErrorCode::InvalidLength);
    }

    #[test]
    #[should_panic(expected = "sized element type")]
    fn test_check_buffer_rejects_zero_sized_elements() {
        let _ = check_buffer(ptr::from_ref(&()), "unit", 1);
    }

    #[test]
    fn test_rotate_batch_in_place() {
        let mut points = [
            LodDouble3 { x: 1.0, y: 0.0, z: 0.0 },
            LodDouble3 { x: 0.0, y: 2.0, z: 5.0 },
        ];
        let axis = LodDouble3 { x: 0.0, y: 0.0, z: 1.0 };
        let code = unsafe { lod_vec3d_rotate_batch(points.as_mut_ptr(), points.len(), PI, axis) };
        assert_eq!(code, LodMathErrorCode::Ok);
        assert_relative_eq!(points[0].x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(points[0].y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(points[1].y, -2.0, epsilon = 1e-12);
        assert_relative_eq!(points[1].z, 5.0, epsilon = 1e-12);
    }
}
