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

//! # Strong Value Arithmetic
//!
//! Operator implementations for [`StrongValue`]. Every operator is
//! homogeneous: both operands carry the same underlying type and the same
//! tag, and the result keeps that tag. Mixing tags, or mixing a wrapper with
//! a bare value, is a compile error.
//!
//! An operator exists on a wrapper exactly when the underlying type
//! implements it. Binary operators require `T: Op<Output = T>`; compound
//! assignment forwards the underlying type's own `OpAssign` implementation
//! rather than rebuilding it from the binary form. Overflow and division by
//! zero behave exactly as they do on the underlying type; the wrapper adds
//! no checking of its own (see [`crate::num`] for checked and saturating
//! variants).
//!
//! ## Type errors
//!
//! Operands with different tags never combine:
//!
//! ```compile_fail
//! use cleat_core::strong_value_tag;
//! use cleat_core::value::StrongValue;
//!
//! strong_value_tag!(WidthTag: "Width");
//! strong_value_tag!(LengthTag: "Length");
//!
//! let w = StrongValue::<i32, WidthTag>::new(4);
//! let l = StrongValue::<i32, LengthTag>::new(3);
//! let _ = w + l;
//! ```
//!
//! The compound forms are gated the same way:
//!
//! ```compile_fail
//! use cleat_core::strong_value_tag;
//! use cleat_core::value::StrongValue;
//!
//! strong_value_tag!(WidthTag: "Width");
//! strong_value_tag!(LengthTag: "Length");
//!
//! let mut w = StrongValue::<i32, WidthTag>::new(4);
//! w += StrongValue::<i32, LengthTag>::new(3);
//! ```
//!
//! And a wrapper never grows an operator its underlying type lacks:
//!
//! ```compile_fail
//! use cleat_core::strong_value_tag;
//! use cleat_core::value::StrongValue;
//!
//! strong_value_tag!(FlagTag: "Flag");
//!
//! let a = StrongValue::<bool, FlagTag>::new(true);
//! let b = StrongValue::<bool, FlagTag>::new(false);
//! let _ = a + b;
//! ```

use crate::value::StrongValue;

macro_rules! impl_strong_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T, Tag> std::ops::$trait_name for StrongValue<T, Tag>
        where
            T: std::ops::$trait_name<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.value $op rhs.value)
            }
        }

        impl<T, Tag> std::ops::$assign_trait for StrongValue<T, Tag>
        where
            T: std::ops::$assign_trait,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                std::ops::$assign_trait::$assign_method(&mut self.value, rhs.value);
            }
        }
    };
}

impl_strong_op!(Add, add, AddAssign, add_assign, +);
impl_strong_op!(Sub, sub, SubAssign, sub_assign, -);
impl_strong_op!(Mul, mul, MulAssign, mul_assign, *);
impl_strong_op!(Div, div, DivAssign, div_assign, /);
impl_strong_op!(Rem, rem, RemAssign, rem_assign, %);

impl<T, Tag> std::ops::Neg for StrongValue<T, Tag>
where
    T: std::ops::Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.value)
    }
}
