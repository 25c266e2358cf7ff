//! Comparison trait implementations for `StrView`

use core::cmp::Ordering;

use crate::alloc::borrow::Cow;
use crate::alloc::boxed::Box;
use crate::alloc::string::String;
use crate::alloc::vec::Vec;

use super::StrView;

// Equality
//
// Content-based: two views are equal iff their lengths and bytes are equal,
// regardless of which storage they point into.

impl Eq for StrView<'_> {}

impl PartialEq for StrView<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<[u8]> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<StrView<'_>> for [u8] {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self == other.as_slice()
    }
}

impl<'b> PartialEq<&'b [u8]> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &&'b [u8]) -> bool {
        self.as_slice() == *other
    }
}

impl PartialEq<StrView<'_>> for &[u8] {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        *self == other.as_slice()
    }
}

impl<const N: usize> PartialEq<[u8; N]> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<StrView<'_>> for [u8; N] {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'b, const N: usize> PartialEq<&'b [u8; N]> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &&'b [u8; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<StrView<'_>> for &[u8; N] {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<Vec<u8>> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<StrView<'_>> for Vec<u8> {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<Box<[u8]>> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &Box<[u8]>) -> bool {
        self.as_slice() == other.as_ref()
    }
}

impl PartialEq<StrView<'_>> for Box<[u8]> {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_ref() == other.as_slice()
    }
}

impl<'b> PartialEq<Cow<'b, [u8]>> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &Cow<'b, [u8]>) -> bool {
        self.as_slice() == other.as_ref()
    }
}

impl PartialEq<StrView<'_>> for Cow<'_, [u8]> {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_ref() == other.as_slice()
    }
}

impl PartialEq<str> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl PartialEq<StrView<'_>> for str {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<'b> PartialEq<&'b str> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &&'b str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl PartialEq<StrView<'_>> for &str {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<String> for StrView<'_> {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl PartialEq<StrView<'_>> for String {
    #[inline]
    fn eq(&self, other: &StrView<'_>) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

// Order
//
// Lexicographic byte order, so views can key ordered containers.

impl Ord for StrView<'_> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for StrView<'_> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
