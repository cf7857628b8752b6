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

//! # Strong Value Wrapper (Zero-Cost)
//!
//! Phantom-tagged wrapper around an arbitrary underlying type to prevent
//! mixing values from different domains (e.g., widths vs. lengths that are
//! both `i32`). `StrongValue<T, Tag>` carries a tag type that encodes intent
//! at the type level, while compiling down to a transparent `T` (no runtime
//! overhead).
//!
//! ## Motivation
//!
//! Domain quantities routinely share a representation. Raw `i32` widths and
//! `i32` lengths interchange silently and invite hard-to-trace bugs. A
//! phantom tag turns that mistake into a compile error with minimal ceremony
//! and excellent ergonomics.
//!
//! ## Highlights
//!
//! - Comparison, ordering, hashing, cloning, and `Default` forward to the
//!   underlying type; the tag needs no capabilities of its own.
//! - Auto traits (`Send`, `Sync`, `Unpin`) depend only on `T`, never on the
//!   tag.
//! - Conversions: `From<T>` inward, [`into_inner`](StrongValue::into_inner)
//!   outward. Nothing implicit in either direction.
//! - Zero-cost: `#[repr(transparent)]` over `T`.
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
//! let w = Width::new(5);
//! assert_eq!(w.copied(), 5);
//! assert_eq!(w, Width::new(5));
//! ```
//!
//! ## Type errors
//!
//! A bare value never becomes a wrapper without an explicit call:
//!
//! ```compile_fail
//! use cleat_core::strong_value_tag;
//! use cleat_core::value::StrongValue;
//!
//! strong_value_tag!(WidthTag: "Width");
//! type Width = StrongValue<i32, WidthTag>;
//!
//! fn takes_width(_: Width) {}
//! takes_width(5);
//! ```
//!
//! And one tag's wrapper never stands in for another's:
//!
//! ```compile_fail
//! use cleat_core::strong_value_tag;
//! use cleat_core::value::StrongValue;
//!
//! strong_value_tag!(WidthTag: "Width");
//! strong_value_tag!(LengthTag: "Length");
//!
//! let l = StrongValue::<i32, LengthTag>::new(5);
//! let w: StrongValue<i32, WidthTag> = l;
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A strongly typed value that is associated with a specific tag type `Tag`.
///
/// This struct wraps a value of type `T` and uses a phantom type parameter
/// `Tag` to provide type safety and prevent mixing values of different
/// domains that share a representation.
///
/// All capability traits are implemented manually with bounds on `T` alone,
/// so a wrapper is exactly as capable as its underlying type and the tag can
/// stay a bare marker.
///
/// # Examples
///
/// ```rust
/// use cleat_core::strong_value_tag;
/// use cleat_core::value::StrongValue;
///
/// strong_value_tag!(LengthTag: "Length");
/// type Length = StrongValue<i32, LengthTag>;
///
/// let l = Length::new(12);
/// assert_eq!(*l.get(), 12);
/// ```
#[repr(transparent)]
pub struct StrongValue<T, Tag> {
    pub(crate) value: T,
    // `fn() -> Tag` keeps auto traits and variance independent of the tag,
    // which never exists at runtime anyway.
    pub(crate) _marker: PhantomData<fn() -> Tag>,
}

impl<T, Tag> StrongValue<T, Tag> {
    /// Creates a new `StrongValue` wrapping the given value.
    ///
    /// Construction is always explicit; there is no implicit promotion from
    /// a bare `T` at use sites.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::strong_value_tag;
    /// # use cleat_core::value::StrongValue;
    /// strong_value_tag!(WidthTag: "Width");
    /// type Width = StrongValue<i32, WidthTag>;
    ///
    /// let w = Width::new(5);
    /// assert_eq!(w.copied(), 5);
    /// ```
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns a shared reference to the underlying value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::strong_value_tag;
    /// # use cleat_core::value::StrongValue;
    /// strong_value_tag!(NameTag: "Name");
    /// type Name = StrongValue<String, NameTag>;
    ///
    /// let n = Name::new("berth-4".to_string());
    /// assert_eq!(n.get(), "berth-4");
    /// ```
    #[inline(always)]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Consumes the wrapper and returns the underlying value.
    ///
    /// This is the only outward conversion; call it where a bare `T` is
    /// genuinely required.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::strong_value_tag;
    /// # use cleat_core::value::StrongValue;
    /// strong_value_tag!(NameTag: "Name");
    /// type Name = StrongValue<String, NameTag>;
    ///
    /// let n = Name::new("berth-4".to_string());
    /// let raw: String = n.into_inner();
    /// assert_eq!(raw, "berth-4");
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Maps the underlying value through `f`, keeping the tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::strong_value_tag;
    /// # use cleat_core::value::StrongValue;
    /// strong_value_tag!(WidthTag: "Width");
    ///
    /// let w = StrongValue::<i32, WidthTag>::new(5);
    /// let doubled = w.map(|v| v * 2);
    /// assert_eq!(doubled.copied(), 10);
    ///
    /// let text: StrongValue<String, WidthTag> = doubled.map(|v| v.to_string());
    /// assert_eq!(text.get(), "10");
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> StrongValue<U, Tag>
    where
        F: FnOnce(T) -> U,
    {
        StrongValue::new(f(self.value))
    }
}

impl<T, Tag> StrongValue<T, Tag>
where
    T: Copy,
{
    /// Returns the underlying value by copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cleat_core::strong_value_tag;
    /// # use cleat_core::value::StrongValue;
    /// strong_value_tag!(WidthTag: "Width");
    /// type Width = StrongValue<i32, WidthTag>;
    ///
    /// let w = Width::new(5);
    /// assert_eq!(w.copied(), 5);
    /// assert_eq!(w.copied(), 5); // `w` is still usable
    /// ```
    #[inline(always)]
    pub const fn copied(&self) -> T {
        self.value
    }
}

impl<T, Tag> From<T> for StrongValue<T, Tag> {
    /// Wraps a bare `T`. Still explicit at the call site (`.into()` or
    /// `From::from`), never a silent coercion.
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, Tag> AsRef<T> for StrongValue<T, Tag> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

// The capability impls below are written by hand instead of derived: a
// derive would bound the tag parameter as well, forcing every tag to carry
// derives it never uses.

impl<T, Tag> Clone for StrongValue<T, Tag>
where
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T, Tag> Copy for StrongValue<T, Tag> where T: Copy {}

impl<T, Tag> Default for StrongValue<T, Tag>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, Tag> PartialEq for StrongValue<T, Tag>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T, Tag> Eq for StrongValue<T, Tag> where T: Eq {}

impl<T, Tag> PartialOrd for StrongValue<T, Tag>
where
    T: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T, Tag> Ord for StrongValue<T, Tag>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T, Tag> Hash for StrongValue<T, Tag>
where
    T: Hash,
{
    /// Feeds exactly the bytes the underlying value would feed, so a wrapper
    /// hashes identically to its `T` under any hasher.
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
