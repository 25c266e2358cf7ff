//! Conversion trait implementations for `StrView`.

use crate::alloc::borrow::Cow;
use crate::alloc::boxed::Box;
use crate::alloc::string::String;
use crate::alloc::vec::Vec;

use super::StrView;

impl AsRef<[u8]> for StrView<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl core::borrow::Borrow<[u8]> for StrView<'_> {
    #[inline]
    fn borrow(&self) -> &[u8] {
        self.as_slice()
    }
}

// Infallible conversions from string-like sources
//
// Each captures the source's current data pointer and length; the borrow is
// tracked by the view's lifetime.

impl<'a> From<&'a [u8]> for StrView<'a> {
    #[inline]
    fn from(value: &'a [u8]) -> Self {
        Self::from_slice(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for StrView<'a> {
    #[inline]
    fn from(value: &'a [u8; N]) -> Self {
        Self::from_slice(value)
    }
}

impl<'a> From<&'a str> for StrView<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::from_slice(value.as_bytes())
    }
}

impl<'a> From<&'a String> for StrView<'a> {
    #[inline]
    fn from(value: &'a String) -> Self {
        Self::from_slice(value.as_bytes())
    }
}

impl<'a> From<&'a Vec<u8>> for StrView<'a> {
    #[inline]
    fn from(value: &'a Vec<u8>) -> Self {
        Self::from_slice(value)
    }
}

impl<'a> From<&'a Box<[u8]>> for StrView<'a> {
    #[inline]
    fn from(value: &'a Box<[u8]>) -> Self {
        Self::from_slice(value)
    }
}

impl<'a> From<&'a Cow<'_, [u8]>> for StrView<'a> {
    #[inline]
    fn from(value: &'a Cow<'_, [u8]>) -> Self {
        Self::from_slice(value.as_ref())
    }
}

// Conversions to owned or borrowed forms

impl From<StrView<'_>> for Vec<u8> {
    #[inline]
    fn from(value: StrView<'_>) -> Self {
        value.to_vec()
    }
}

impl<'a> From<StrView<'a>> for &'a [u8] {
    #[inline]
    fn from(value: StrView<'a>) -> Self {
        value.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::StrView;

    #[test]
    fn test_as_ref() {
        let v = StrView::from("abc");
        assert!(std::ptr::eq(v.as_slice(), v.as_ref()));
    }

    #[test]
    fn test_from() {
        let a = [32u8; 32];
        let vec = Vec::from(a);
        let boxed: Box<[u8]> = a.into();
        let string = String::from_utf8(vec.clone()).unwrap();
        let cow: Cow<[u8]> = a.as_slice().into();

        let fa = StrView::from(&a);
        assert_eq!(fa.as_slice(), &a);

        let fs = StrView::from(a.as_slice());
        assert_eq!(fs.as_slice(), &a);
        assert!(std::ptr::eq(fs.as_ptr(), a.as_ptr()));

        let fv = StrView::from(&vec);
        assert_eq!(fv.as_slice(), &a);
        assert!(std::ptr::eq(fv.as_ptr(), vec.as_ptr()));

        let fb = StrView::from(&boxed);
        assert_eq!(fb.as_slice(), &a);
        assert!(std::ptr::eq(fb.as_ptr(), boxed.as_ptr()));

        let fstr = StrView::from(string.as_str());
        assert_eq!(fstr.as_slice(), &a);

        let fstring = StrView::from(&string);
        assert_eq!(fstring.as_slice(), &a);
        assert!(std::ptr::eq(fstring.as_ptr(), string.as_ptr()));

        let fc = StrView::from(&cow);
        assert_eq!(fc.as_slice(), &a);
    }

    #[test]
    fn test_into() {
        let v = StrView::from("abc");
        let owned: Vec<u8> = v.into();
        assert_eq!(owned, b"abc");

        let s: &[u8] = v.into();
        assert!(std::ptr::eq(s, v.as_slice()));
    }
}
