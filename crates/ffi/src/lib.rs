//! C ABI for `lod-math-core`.
//!
//! Lets C/C++/C# engine code (Godot, Unreal, Unity native plugins) use the
//! double-precision vector math directly. A C header, `LodMathFFI.h`, is
//! generated at the workspace root by `build.rs`.
//!
//! - By-value functions (`lod_vec3d_*`, `lod_float3_*`) never fail.
//! - Buffer functions return `LodMathErrorCode`; details of the last failure on
//!   the calling thread are available from `lod_math_get_last_error()`.

mod batch;
mod error;
mod helpers;
mod types;
mod vector;

pub use batch::{lod_vec3d_rotate_batch, lod_vec3d_to_float3_batch};
pub use error::{lod_math_get_last_error, lod_math_get_last_error_code, LodMathErrorCode};
pub use types::{LodDouble3, LodFloat3};
pub use vector::{
    lod_float3_add_vec3d, lod_float3_sub_vec3d, lod_vec3d_add, lod_vec3d_add_float3,
    lod_vec3d_cross, lod_vec3d_dot, lod_vec3d_equals, lod_vec3d_from_float3,
    lod_vec3d_magnitude, lod_vec3d_new, lod_vec3d_normalized, lod_vec3d_rotate,
    lod_vec3d_scale, lod_vec3d_sqr_magnitude, lod_vec3d_sub, lod_vec3d_sub_float3,
    lod_vec3d_to_float3,
};
