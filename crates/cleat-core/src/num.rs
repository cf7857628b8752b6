// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Strong Value Numerics
//!
//! `num_traits` forwarding for [`StrongValue`], so tagged quantities slot
//! into generic numeric code without unwrapping. Identities (`Zero`, `One`),
//! bounds (`Bounded`), and the checked and saturating arithmetic families
//! are forwarded whenever the underlying type provides them; every result is
//! re-wrapped under the same tag.
//!
//! ## Motivation
//!
//! Plain operators panic or wrap on overflow exactly like the underlying
//! type. Code that wants explicit overflow handling reaches for
//! `checked_add` and friends; without these impls that would mean
//! unwrapping, operating, and re-wrapping by hand at every call site.
//!
//! ## Highlights
//!
//! - `Zero`, `One`, and `Bounded` construct wrapped identities and limits.
//! - Checked: add/sub/mul/div/rem/neg returning `Option<Self>`.
//! - Saturating: add/sub/mul clamping to the underlying type's bounds.
//! - [`Numeric`] collects the usual bounds for generic quantity code.
//!
//! ## Usage
//!
//! ```rust
//! use cleat_core::strong_value_tag;
//! use cleat_core::value::StrongValue;
//! use num_traits::{CheckedAdd, SaturatingAdd, Zero};
//!
//! strong_value_tag!(WidthTag: "Width");
//! type Width = StrongValue<i32, WidthTag>;
//!
//! assert!(Width::zero().is_zero());
//! assert_eq!(Width::new(i32::MAX).checked_add(&Width::new(1)), None);
//! assert_eq!(
//!     Width::new(i32::MAX).saturating_add(&Width::new(1)),
//!     Width::new(i32::MAX)
//! );
//! ```

use std::ops::{Add, Div, Mul, Rem, Sub};

use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, One,
    SaturatingAdd, SaturatingMul, SaturatingSub, Zero,
};

use crate::value::StrongValue;

impl<T, Tag> Zero for StrongValue<T, Tag>
where
    T: Zero,
{
    #[inline]
    fn zero() -> Self {
        Self::new(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl<T, Tag> One for StrongValue<T, Tag>
where
    T: One,
{
    #[inline]
    fn one() -> Self {
        Self::new(T::one())
    }
}

impl<T, Tag> Bounded for StrongValue<T, Tag>
where
    T: Bounded,
{
    #[inline]
    fn min_value() -> Self {
        Self::new(T::min_value())
    }

    #[inline]
    fn max_value() -> Self {
        Self::new(T::max_value())
    }
}

macro_rules! forward_checked_op {
    ($trait_name:ident, $method:ident) => {
        impl<T, Tag> $trait_name for StrongValue<T, Tag>
        where
            T: $trait_name,
        {
            #[inline]
            fn $method(&self, v: &Self) -> Option<Self> {
                self.value.$method(&v.value).map(Self::new)
            }
        }
    };
}

forward_checked_op!(CheckedAdd, checked_add);
forward_checked_op!(CheckedSub, checked_sub);
forward_checked_op!(CheckedMul, checked_mul);
forward_checked_op!(CheckedDiv, checked_div);
forward_checked_op!(CheckedRem, checked_rem);

impl<T, Tag> CheckedNeg for StrongValue<T, Tag>
where
    T: CheckedNeg,
{
    #[inline]
    fn checked_neg(&self) -> Option<Self> {
        self.value.checked_neg().map(Self::new)
    }
}

macro_rules! forward_saturating_op {
    ($trait_name:ident, $method:ident) => {
        impl<T, Tag> $trait_name for StrongValue<T, Tag>
        where
            T: $trait_name,
        {
            #[inline]
            fn $method(&self, v: &Self) -> Self {
                Self::new(self.value.$method(&v.value))
            }
        }
    };
}

forward_saturating_op!(SaturatingAdd, saturating_add);
forward_saturating_op!(SaturatingSub, saturating_sub);
forward_saturating_op!(SaturatingMul, saturating_mul);

/// A trait alias for value types that behave like numbers: copyable,
/// comparable, printable, with identities and the basic binary operators.
///
/// Both bare numeric primitives and their strong wrappers satisfy it, so a
/// generic signature written against `Numeric` accepts either. Floats are
/// deliberately in scope, which is why ordering is only `PartialOrd` and
/// `Hash` is not required.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::strong_value_tag;
/// # use cleat_core::value::StrongValue;
/// use cleat_core::num::Numeric;
///
/// strong_value_tag!(WidthTag: "Width");
/// type Width = StrongValue<i32, WidthTag>;
///
/// fn span<N: Numeric>(lo: N, hi: N) -> N {
///     hi - lo
/// }
///
/// assert_eq!(span(Width::new(3), Width::new(10)), Width::new(7));
/// assert_eq!(span(3, 10), 7);
/// ```
pub trait Numeric:
    Sized
    + Copy
    + PartialEq
    + PartialOrd
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + One
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + Rem<Self, Output = Self>
{
}

impl<T> Numeric for T where
    T: Sized
        + Copy
        + PartialEq
        + PartialOrd
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + One
        + Add<Self, Output = Self>
        + Sub<Self, Output = Self>
        + Mul<Self, Output = Self>
        + Div<Self, Output = Self>
        + Rem<Self, Output = Self>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strong_value_tag;

    use proptest::prelude::*;

    strong_value_tag!(WidthTag: "Width");

    type Width = StrongValue<i32, WidthTag>;

    #[test]
    fn test_zero_and_one() {
        assert_eq!(Width::zero().copied(), 0);
        assert!(Width::zero().is_zero());
        assert!(!Width::new(3).is_zero());

        assert_eq!(Width::one().copied(), 1);
        assert!(Width::one().is_one());
    }

    #[test]
    fn test_bounded() {
        assert_eq!(Width::min_value().copied(), i32::MIN);
        assert_eq!(Width::max_value().copied(), i32::MAX);
    }

    #[test]
    fn test_checked_overflow_returns_none() {
        assert_eq!(Width::max_value().checked_add(&Width::one()), None);
        assert_eq!(Width::min_value().checked_sub(&Width::one()), None);
        assert_eq!(Width::max_value().checked_mul(&Width::new(2)), None);
        assert_eq!(Width::min_value().checked_neg(), None);
    }

    #[test]
    fn test_checked_in_range() {
        assert_eq!(
            Width::new(2).checked_add(&Width::new(3)),
            Some(Width::new(5))
        );
        assert_eq!(Width::new(5).checked_neg(), Some(Width::new(-5)));
    }

    #[test]
    fn test_checked_division_by_zero_returns_none() {
        assert_eq!(Width::new(1).checked_div(&Width::zero()), None);
        assert_eq!(Width::new(1).checked_rem(&Width::zero()), None);
    }

    #[test]
    fn test_saturating_clamps_to_bounds() {
        assert_eq!(
            Width::max_value().saturating_add(&Width::one()),
            Width::max_value()
        );
        assert_eq!(
            Width::min_value().saturating_sub(&Width::one()),
            Width::min_value()
        );
        assert_eq!(
            Width::max_value().saturating_mul(&Width::new(2)),
            Width::max_value()
        );
    }

    #[test]
    fn test_generic_fold_over_wrapped_quantities() {
        fn total<N: Numeric>(values: &[N]) -> N {
            values.iter().copied().fold(N::zero(), |acc, v| acc + v)
        }

        let widths = [Width::new(1), Width::new(2), Width::new(3)];
        assert_eq!(total(&widths), Width::new(6));
        assert_eq!(total(&[1, 2, 3]), 6);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: checked and saturating results agree with the
        /// underlying `i32` operations for all inputs, including the
        /// overflowing ones.
        #[test]
        fn prop_checked_and_saturating_forward(a in any::<i32>(), b in any::<i32>()) {
            let wa = Width::new(a);
            let wb = Width::new(b);

            prop_assert_eq!(wa.checked_add(&wb), a.checked_add(b).map(Width::new));
            prop_assert_eq!(wa.checked_sub(&wb), a.checked_sub(b).map(Width::new));
            prop_assert_eq!(wa.checked_mul(&wb), a.checked_mul(b).map(Width::new));
            prop_assert_eq!(wa.checked_div(&wb), a.checked_div(b).map(Width::new));

            prop_assert_eq!(wa.saturating_add(&wb), Width::new(a.saturating_add(b)));
            prop_assert_eq!(wa.saturating_mul(&wb), Width::new(a.saturating_mul(b)));
        }
    }
}
