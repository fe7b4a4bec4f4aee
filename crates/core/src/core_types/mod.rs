//! Core types and utilities

pub mod vec3;
pub mod vector3d;

pub use vec3::{Vec3, Vec3d};
pub use vector3d::Vector3d;
