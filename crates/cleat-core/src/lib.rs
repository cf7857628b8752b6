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

//! # Cleat Core
//!
//! Zero-cost strong typedefs. `StrongValue<T, Tag>` wraps a value of type `T`
//! together with a compile-time tag, producing a nominal type that shares the
//! runtime representation of `T` but is not interchangeable with bare `T` or
//! with wrappers over the same `T` under a different tag. Mixing two tags is
//! a type error, never a runtime condition.
//!
//! ## Modules
//!
//! - `tag`: The `StrongValueTag` marker trait and the `strong_value_tag!`
//!   declaration macro. Tags carry no runtime state; they exist purely to
//!   partition the type space.
//! - `value`: The `StrongValue<T, Tag>` wrapper itself: explicit
//!   construction, access, conversions, and equality/ordering/hashing that
//!   delegate to `T`.
//! - `ops`: Arithmetic operator forwarding (`+`, `-`, `*`, `/`, `%`, unary
//!   `-`, and the compound-assignment forms), each gated individually on `T`
//!   supporting that exact operator.
//! - `fmt`: `Display`, `Debug`, and `FromStr` forwarding. A strong value
//!   formats byte-identically to its underlying value; `Debug` adds the tag
//!   name for diagnostics.
//! - `num`: Conditional forwarding of `num_traits` capabilities (`Zero`,
//!   `One`, `Bounded`, checked and saturating arithmetic) plus the
//!   `Numeric` aggregate bound for generic code.
//!
//! ## Motivation
//!
//! Programs routinely move several quantities that share a representation.
//! A raw `i32` width and a raw `i32` length interchange silently and invite
//! hard-to-trace bugs. A strong typedef makes each quantity its own type at
//! zero runtime cost: the wrapper is `#[repr(transparent)]` over `T` and
//! every operation compiles down to the bare-`T` equivalent.
//!
//! The wrapper never widens or narrows what `T` can do. Every capability
//! (comparison, each arithmetic operator, hashing, formatting, parsing) is
//! forwarded iff `T` itself has it, and failure behavior (overflow, division
//! by zero, malformed parse input) is exactly `T`'s own.
//!
//! ## Usage
//!
//! ```rust
//! use cleat_core::strong_value_tag;
//! use cleat_core::value::StrongValue;
//!
//! strong_value_tag!(WidthTag: "Width");
//! type Width = StrongValue<i32, WidthTag>;
//!
//! let total = Width::new(3) + Width::new(7);
//! assert_eq!(total, Width::new(10));
//! assert_eq!(total.to_string(), "10");
//! assert_eq!("789".parse::<Width>().unwrap(), Width::new(789));
//! ```
//!
//! ## Type errors
//!
//! Two tags over the same underlying type are unrelated types. Comparing
//! them does not compile:
//!
//! ```compile_fail
//! use cleat_core::strong_value_tag;
//! use cleat_core::value::StrongValue;
//!
//! strong_value_tag!(WidthTag: "Width");
//! strong_value_tag!(LengthTag: "Length");
//!
//! let w = StrongValue::<i32, WidthTag>::new(5);
//! let l = StrongValue::<i32, LengthTag>::new(5);
//! let _ = w == l; // cannot compare different tags
//! ```
//!
//! Neither does passing a strong value where the bare underlying type is
//! expected:
//!
//! ```compile_fail
//! use cleat_core::strong_value_tag;
//! use cleat_core::value::StrongValue;
//!
//! strong_value_tag!(WidthTag: "Width");
//!
//! fn takes_raw(_: i32) {}
//! takes_raw(StrongValue::<i32, WidthTag>::new(5)); // explicit unwrap required
//! ```

pub mod fmt;
pub mod num;
pub mod ops;
pub mod tag;
pub mod value;
