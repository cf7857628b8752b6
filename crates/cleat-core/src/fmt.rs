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

//! # Strong Value Formatting and Parsing
//!
//! Text conversions for [`StrongValue`]. `Display` (and the numeric
//! formatting traits) forward straight to the underlying value, so the
//! rendered text is byte-identical to the bare `T` and all format flags pass
//! through. `Debug` is the one decorated form: it prints the tag's `NAME`
//! around the underlying `Debug` rendering, which is where the tag earns its
//! keep in logs and assertions.
//!
//! Parsing goes through the underlying type's `FromStr`, with the underlying
//! error type surfacing unchanged.
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
//! let w = Width::new(42);
//! assert_eq!(format!("{}", w), "42");
//! assert_eq!(format!("{:?}", w), "Width(42)");
//!
//! let parsed: Width = "17".parse().unwrap();
//! assert_eq!(parsed, Width::new(17));
//! ```

use crate::tag::StrongValueTag;
use crate::value::StrongValue;

macro_rules! impl_strong_fmt {
    ($($trait_name:ident),* $(,)?) => {
        $(
            impl<T, Tag> std::fmt::$trait_name for StrongValue<T, Tag>
            where
                T: std::fmt::$trait_name,
            {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    self.value.fmt(f)
                }
            }
        )*
    };
}

impl_strong_fmt!(Display, Binary, LowerExp, LowerHex, Octal, UpperExp, UpperHex);

impl<T, Tag> std::fmt::Debug for StrongValue<T, Tag>
where
    T: std::fmt::Debug,
    Tag: StrongValueTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", Tag::NAME, self.value)
    }
}

impl<T, Tag> std::str::FromStr for StrongValue<T, Tag>
where
    T: std::str::FromStr,
{
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        T::from_str(s).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strong_value_tag;
    use std::num::IntErrorKind;

    use proptest::prelude::*;

    strong_value_tag!(WidthTag: "Width");
    strong_value_tag!(NameTag: "Name");

    type Width = StrongValue<i32, WidthTag>;
    type Name = StrongValue<String, NameTag>;

    #[test]
    fn test_display_matches_underlying() {
        let w = Width::new(42);
        assert_eq!(format!("{}", w), "42");
        assert_eq!(format!("{}", w), format!("{}", 42));
    }

    #[test]
    fn test_display_respects_format_flags() {
        let w = Width::new(42);
        assert_eq!(format!("{:>6}", w), format!("{:>6}", 42));
        assert_eq!(format!("{:+}", w), "+42");
        assert_eq!(format!("{:04}", w), "0042");

        let f = StrongValue::<f64, WidthTag>::new(2.5);
        assert_eq!(format!("{:.3}", f), "2.500");
    }

    #[test]
    fn test_display_string_is_unquoted() {
        let n = Name::new("pier".to_string());
        assert_eq!(format!("{}", n), "pier");
    }

    #[test]
    fn test_debug_is_decorated() {
        assert_eq!(format!("{:?}", Width::new(7)), "Width(7)");
        // The inner rendering is the underlying Debug, quotes and all.
        assert_eq!(
            format!("{:?}", Name::new("pier".to_string())),
            "Name(\"pier\")"
        );
    }

    #[test]
    fn test_numeric_format_traits_forward() {
        let w = Width::new(255);
        assert_eq!(format!("{:x}", w), "ff");
        assert_eq!(format!("{:#X}", w), "0xFF");
        assert_eq!(format!("{:b}", w), "11111111");
        assert_eq!(format!("{:o}", w), "377");
        assert_eq!(
            format!("{:e}", StrongValue::<f64, WidthTag>::new(1500.0)),
            "1.5e3"
        );
    }

    #[test]
    fn test_parse() {
        let parsed: Width = "17".parse().unwrap();
        assert_eq!(parsed, Width::new(17));

        let negative: Width = "-3".parse().unwrap();
        assert_eq!(negative, Width::new(-3));
    }

    #[test]
    fn test_parse_error_is_the_underlying_error() {
        let err = "abc".parse::<Width>().unwrap_err();
        assert_eq!(*err.kind(), IntErrorKind::InvalidDigit);

        let err = "".parse::<Width>().unwrap_err();
        assert_eq!(*err.kind(), IntErrorKind::Empty);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the wrapper renders byte-identically to the bare value.
        #[test]
        fn prop_display_transparent(v in any::<i32>()) {
            prop_assert_eq!(format!("{}", Width::new(v)), format!("{}", v));
            prop_assert_eq!(format!("{:>12}", Width::new(v)), format!("{:>12}", v));
        }

        /// Property: displaying then parsing restores the original wrapper.
        #[test]
        fn prop_display_parse_round_trip(v in any::<i32>()) {
            let rendered = format!("{}", Width::new(v));
            prop_assert_eq!(rendered.parse::<Width>().unwrap(), Width::new(v));
        }
    }
}
