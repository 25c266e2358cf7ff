//! `bstr` support for `StrView`.

use core::cmp::Ordering;
use core::fmt;

use bstr::{BStr, BString};

use super::StrView;

impl<'a> StrView<'a> {
    /// Reinterprets the view as a [`BStr`], the conventionally-UTF-8 byte
    /// slice.
    ///
    /// No copy; the result borrows the original storage.
    #[inline]
    #[must_use]
    pub fn as_bstr(&self) -> &'a BStr {
        BStr::new(self.as_slice())
    }
}

impl core::borrow::Borrow<BStr> for StrView<'_> {
    #[inline]
    fn borrow(&self) -> &BStr {
        self.as_bstr()
    }
}

impl AsRef<BStr> for StrView<'_> {
    #[inline]
    fn as_ref(&self) -> &BStr {
        self.as_bstr()
    }
}

impl<'a> From<&'a BStr> for StrView<'a> {
    #[inline]
    fn from(value: &'a BStr) -> Self {
        Self::from_slice(value.as_ref())
    }
}

impl<'a> From<&'a BString> for StrView<'a> {
    #[inline]
    fn from(value: &'a BString) -> Self {
        Self::from_slice(value.as_ref())
    }
}

impl From<StrView<'_>> for BString {
    #[inline]
    fn from(value: StrView<'_>) -> Self {
        Self::from(value.as_slice())
    }
}

impl PartialEq<BStr> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &BStr) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl PartialEq<StrView<'_>> for BStr {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<'b> PartialEq<&'b BStr> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &&'b BStr) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl PartialEq<StrView<'_>> for &BStr {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<BString> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &BString) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<StrView<'_>> for BString {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialOrd<BStr> for StrView<'_> {
    #[inline]
    fn partial_cmp(&self, other: &BStr) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_bytes())
    }
}

impl PartialOrd<StrView<'_>> for BStr {
    #[inline]
    fn partial_cmp(&self, other: &StrView<'_>) -> Option<Ordering> {
        self.as_bytes().partial_cmp(other.as_slice())
    }
}

/// Lossy display through [`BStr`]: invalid UTF-8 sequences are shown with
/// the replacement character.
impl fmt::Display for StrView<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

#[cfg(test)]
mod tests {
    use bstr::{BStr, BString, ByteSlice};

    use crate::StrView;

    #[test]
    fn test_as_bstr() {
        let v = StrView::from("Hello, World!");
        let s: &BStr = v.as_bstr();
        assert_eq!(s, "Hello, World!");
        assert!(s.contains_str("World"));
    }

    #[test]
    fn test_from_bstr() {
        let v = StrView::from(BStr::new("Hello, World!"));
        assert_eq!(v, "Hello, World!");
    }

    #[test]
    fn test_from_bstring() {
        let owned = BString::from("Hello, World!");
        let v = StrView::from(&owned);
        assert_eq!(v, "Hello, World!");
    }

    #[test]
    fn test_into_bstring() {
        let v = StrView::from("Hello, World!");
        let bstring: BString = v.into();
        assert_eq!(bstring, "Hello, World!");
    }

    #[test]
    fn test_eq() {
        for (a, b) in [("abc", "abc"), ("abc", "def")] {
            let view = StrView::from(a);
            let bstr = BStr::new(b);
            let bstring = BString::from(b);

            let expected = a == b;
            assert_eq!(view == *bstr, expected);
            assert_eq!(view == bstr, expected);
            assert_eq!(*bstr == view, expected);
            assert_eq!(view == bstring, expected);
            assert_eq!(bstring == view, expected);
        }
    }

    #[test]
    fn test_display() {
        let v = StrView::from("héllo");
        assert_eq!(format!("{v}"), "héllo");

        let v = StrView::from_slice(b"a\xFFb");
        assert_eq!(format!("{v}"), "a\u{FFFD}b");
    }
}
