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

//! # Strong Value Tags
//!
//! Compile-time markers that distinguish otherwise identical wrapper
//! instantiations. A tag is never instantiated and never stored; it only
//! participates in the type of a `StrongValue<T, Tag>`, so two wrappers over
//! the same `T` with different tags are unrelated types.
//!
//! ## Declaring tags
//!
//! Any type implementing [`StrongValueTag`] works as a tag. The
//! [`strong_value_tag!`](crate::strong_value_tag) macro declares one as an
//! uninhabited `enum`, which makes "never instantiated" a structural
//! guarantee rather than a convention. A hand-written unit struct is equally
//! valid:
//!
//! ```rust
//! use cleat_core::tag::StrongValueTag;
//!
//! pub struct TickTag;
//!
//! impl StrongValueTag for TickTag {
//!     const NAME: &'static str = "Tick";
//! }
//! ```
//!
//! Tags need no derives: every trait implemented on `StrongValue` bounds the
//! underlying type alone, so the tag's own capabilities never matter.

/// A trait to tag strong values with a name for debugging purposes.
///
/// `NAME` feeds the `Debug` rendering of a strong value (`Name(value)`);
/// it has no other runtime role.
///
/// # Examples
///
/// ```rust
/// # use cleat_core::tag::StrongValueTag;
///
/// pub struct WidthTag;
///
/// impl StrongValueTag for WidthTag {
///     const NAME: &'static str = "Width";
/// }
///
/// assert_eq!(WidthTag::NAME, "Width");
/// ```
pub trait StrongValueTag {
    const NAME: &'static str;
}

/// Declares a strong value tag as an uninhabited `enum` and implements
/// [`StrongValueTag`] for it.
///
/// The optional label becomes the tag's `NAME`; when omitted, the type name
/// itself is used. Pair the tag with a type alias to get a one-line nominal
/// type:
///
/// # Examples
///
/// ```rust
/// use cleat_core::strong_value_tag;
/// use cleat_core::tag::StrongValueTag;
/// use cleat_core::value::StrongValue;
///
/// strong_value_tag!(pub WidthTag: "Width");
/// pub type Width = StrongValue<i32, WidthTag>;
///
/// strong_value_tag!(RowTag);
///
/// assert_eq!(WidthTag::NAME, "Width");
/// assert_eq!(RowTag::NAME, "RowTag");
/// assert_eq!(format!("{:?}", Width::new(5)), "Width(5)");
/// ```
#[macro_export]
macro_rules! strong_value_tag {
    ($(#[$meta:meta])* $vis:vis $name:ident: $label:literal) => {
        $(#[$meta])*
        $vis enum $name {}

        impl $crate::tag::StrongValueTag for $name {
            const NAME: &'static str = $label;
        }
    };
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        $vis enum $name {}

        impl $crate::tag::StrongValueTag for $name {
            const NAME: &'static str = stringify!($name);
        }
    };
}
