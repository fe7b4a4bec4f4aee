//! LOD Math Core Library
//!
//! Double-precision vector math for large-world terrain and level-of-detail
//! systems embedded in a game engine. World-space work happens in `f64` through
//! [`Vector3d`]; results are narrowed to the engine's single-precision [`Vec3`]
//! only at the rendering/physics boundary.
//!
//! ## Numeric Behaviour
//!
//! - Pure value semantics: every operation is a synchronous, side-effect free
//!   computation over `Copy` inputs
//! - IEEE-754 edge cases (division by zero, NaN) propagate silently; nothing
//!   panics and nothing returns an error
//! - Exact component-wise equality, no epsilon

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::{Vec3, Vec3d, Vector3d};
