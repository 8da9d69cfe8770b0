//! A `Number` is the output type of a distance or score.

/// Distances and scores are represented as `Number`s.
pub trait Number: Copy {
    /// Casts a number to `Self`. This may be a lossy conversion.
    fn from<T: Number>(n: T) -> Self;

    /// Returns the number as a `f64`. This may be a lossy conversion.
    fn as_f64(self) -> f64;

    /// Returns the number as a `u64`. This may be a lossy conversion.
    fn as_u64(self) -> u64;
}

/// A macro to implement the `Number` trait for primitive floats.
macro_rules! impl_number_float {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_lossless)]
            impl Number for $ty {
                fn from<T: Number>(n: T) -> Self {
                    n.as_f64() as $ty
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn as_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    }
}

impl_number_float!(f32, f64);

/// A macro to implement the `Number` trait for primitive unsigned integers.
macro_rules! impl_number_uint {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_lossless, clippy::cast_precision_loss)]
            impl Number for $ty {
                fn from<T: Number>(n: T) -> Self {
                    n.as_u64() as $ty
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn as_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    }
}

impl_number_uint!(u8, u16, u32, u64, u128, usize);
