//! A small linear algebra and geometry library for 3D graphics and simulation code.
//!
//! # Motivation
//!
//! Simulation engines need a compact set of numeric value types in their public APIs: vectors,
//! matrices, quaternions, angles, and rectangles. This library provides exactly those, with a
//! focus on double precision (`f64`), while staying generic over the element type so that `f32`
//! twins of every alias exist as well.
//!
//! Existing Rust libraries have problems and limitations that make them unsuitable for this use
//! case:
//!
//! - Some of them aim for maximum flexibility, and pay the complexity cost associated with that.
//! - Many libraries still see frequent breaking changes, which causes unnecessary churn for
//!   dependants that expose these types in their own public APIs.
//! - Most are `f32`-first, with double precision as an afterthought, while simulation code
//!   routinely needs `f64` throughout.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions.
//! - Support only a single, row-major, unpadded data layout for matrices. Transforms follow the
//!   **row-vector convention**: vectors multiply onto matrices from the left (`v * m`), the
//!   translation of an affine 4x4 transform lives in its last row, and `a * b` is the transform
//!   that applies `a` first. Quaternion composition `a * b` matches this order.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Degenerate numeric input does not panic: inverting a singular matrix returns the zero
//!   matrix, normalizing a zero-length vector is a no-op, and decomposing a degenerate transform
//!   returns [`None`]. Only contract violations (out-of-bounds indexing) panic.
//! - Don't have any unstable public dependencies.

pub mod approx;
mod angle;
mod matrix;
mod quat;
mod rect;
mod scalar;
mod traits;
mod vector;

pub use angle::*;
pub use matrix::*;
pub use quat::*;
pub use rect::*;
pub use scalar::*;
pub use traits::*;
pub use vector::*;
