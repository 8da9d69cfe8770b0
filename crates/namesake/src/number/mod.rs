//! Numeric traits for the outputs of distances and scores.
//!
//! Distances are counts and may be returned as any primitive unsigned
//! integer (`u8`, `u16`, `u32`, `u64`, `u128`, `usize`). Similarity scores
//! lie in `[0, 1]` and may be returned as `f32` or `f64`.

mod _number;
mod _variants;

pub use _number::Number;
pub use _variants::{Float, UInt};
