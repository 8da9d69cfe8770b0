//! Number variants for unsigned integers and floats.

use super::Number;

/// Sub-trait of `Number` for all unsigned integer types.
///
/// Edit distances are returned as `UInt`s.
pub trait UInt: Number {}

/// Macro to implement `UInt` for all unsigned integer types.
macro_rules! impl_uint {
    ($($ty:ty),*) => {
        $(
            impl UInt for $ty {}
        )*
    }
}

impl_uint!(u8, u16, u32, u64, u128, usize);

/// Sub-trait of `Number` for all floating point types.
///
/// Similarity scores are returned as `Float`s.
pub trait Float: Number {}

impl Float for f32 {}

impl Float for f64 {}
