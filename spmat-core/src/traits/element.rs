//! Matrix element type constraints
//!
//! Only signed integer types can be stored. Arithmetic goes through the
//! checked operations so that overflow surfaces as an error instead of
//! wrapping.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - Eq: Zero-elision relies on exact comparison
/// - FromStr + Display: Round-trip through the text format
pub trait MatrixElement: Copy + Eq + Debug + Display + FromStr + 'static {
    /// The additive identity, never stored in a matrix
    const ZERO: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Lossless conversion into the `i128` accumulator used by multiply
    fn widen(self) -> i128;

    /// Convert an accumulated sum back, `None` when it does not fit
    fn narrow(wide: i128) -> Option<Self>;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_matrix_element {
    ($($t:ty),*) => {
        $(
            impl MatrixElement for $t {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                fn widen(self) -> i128 {
                    i128::from(self)
                }

                fn narrow(wide: i128) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_matrix_element!(i32, i64, i128);
