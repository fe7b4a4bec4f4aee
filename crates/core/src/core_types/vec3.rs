//! Host vector aliases for engine interop.

use nalgebra::Vector3;

/// Single-precision 3D vector supplied by the host engine.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`, the type rendering and
/// physics code hands across the engine boundary. [`crate::Vector3d`] widens
/// from it and narrows back into it.
pub type Vec3 = Vector3<f32>;

/// Double-precision nalgebra vector, for handing [`crate::Vector3d`] values to
/// linear-algebra code without a precision change.
pub type Vec3d = Vector3<f64>;
