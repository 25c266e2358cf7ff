//! Byte string views.
//!
//! This module provides the [`StrView`] type as well as the associated helper
//! and error types.

use core::ffi::{c_char, CStr};
use core::hash::{Hash, Hasher};
use core::ops::{Bound, Index, Range, RangeBounds};
use core::slice;
use core::str::Utf8Error;

use crate::alloc::fmt;
use crate::alloc::vec::Vec;

mod cmp;
mod convert;

#[cfg(feature = "serde")]
pub mod serde;

#[cfg(feature = "bstr")]
mod bstr;


/// A non-owning, read-only view over a contiguous run of bytes.
///
/// A `StrView` is a (pointer, length) descriptor of a window into externally
/// owned storage. It never allocates and never copies: constructing a view,
/// sub-slicing it, or searching through it only reads the borrowed bytes.
/// The borrow is tracked by the lifetime parameter `'a`, so a view can never
/// outlive the storage it refers to.
///
/// The view is encoding-agnostic: every operation is byte-wise, and the
/// referenced range is **not** guaranteed to be null-terminated or valid
/// UTF-8.
///
/// # Examples
///
/// You can create a `StrView` from a string slice, a byte slice, or any
/// owned string-like value with [`From`]:
///
/// ```
/// # use strview::StrView;
/// let greeting = StrView::from("hello world");
/// assert_eq!(greeting.len(), 11);
/// ```
///
/// Sub-slicing and searching derive new views over the same storage:
///
/// ```
/// # use strview::StrView;
/// let greeting = StrView::from("hello world");
/// assert_eq!(greeting.find("world"), Some(6));
/// assert_eq!(greeting.substr(6..), StrView::from("world"));
/// ```
#[derive(Clone, Copy)]
pub struct StrView<'a> {
    slice: &'a [u8],
}

impl<'a> StrView<'a> {
    /// Creates the canonical empty view.
    ///
    /// The empty view references no storage and is always valid to use.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::new();
    /// assert!(v.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { slice: &[] }
    }

    /// Creates a view over an existing byte slice.
    ///
    /// No copy is performed; the view captures the slice's data pointer and
    /// length.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from_slice(b"hello\0");
    /// assert_eq!(v.len(), 6);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_slice(bytes: &'a [u8]) -> Self {
        Self { slice: bytes }
    }

    /// Creates a view from an explicit pointer and length pair.
    ///
    /// Neither the pointer nor the length is validated.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `len` contiguous initialized bytes that
    /// remain valid and unmodified for the lifetime `'a`. The caller chooses
    /// `'a`; picking one longer than the actual storage lifetime makes every
    /// later use of the view undefined behavior.
    #[inline]
    #[must_use]
    pub const unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Self {
        Self {
            // SAFETY: forwarded to the caller
            slice: unsafe { slice::from_raw_parts(ptr, len) },
        }
    }

    /// Creates a view over a null-terminated byte sequence.
    ///
    /// The length is the number of bytes before the first null terminator,
    /// computed by an O(length) scan at construction time. The terminator
    /// itself is not part of the view.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and point to a sequence of initialized bytes
    /// ending in a null byte, all valid and unmodified for the lifetime `'a`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let raw = c"hello".as_ptr();
    /// let v = unsafe { StrView::from_ptr(raw) };
    /// assert_eq!(v, "hello");
    /// ```
    #[must_use]
    pub unsafe fn from_ptr(ptr: *const c_char) -> Self {
        Self {
            // SAFETY: forwarded to the caller
            slice: unsafe { CStr::from_ptr(ptr) }.to_bytes(),
        }
    }

    /// Returns the length of this view in bytes.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from_slice(b"\xDE\xAD\xBE\xEF");
    /// assert_eq!(v.len(), 4);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slice.len()
    }

    /// Returns `true` if this view has a length of zero, and `false`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// assert!(StrView::new().is_empty());
    /// assert!(!StrView::from("ab").is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Extracts the underlying byte slice.
    ///
    /// The returned slice borrows the original storage directly (lifetime
    /// `'a`, not the lifetime of `self`).
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from("foobar");
    /// assert_eq!(v.as_slice(), b"foobar");
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [u8] {
        self.slice
    }

    /// Returns a raw pointer to the first byte of the view.
    ///
    /// Reading `len()` bytes from the returned pointer is valid while the
    /// underlying storage lives. The range is **not** guaranteed to be
    /// null-terminated.
    #[inline]
    #[must_use]
    pub const fn as_ptr(&self) -> *const u8 {
        self.slice.as_ptr()
    }

    /// Returns the byte at position `pos`, or `None` if `pos` is out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from("abc");
    /// assert_eq!(v.get(1), Some(b'b'));
    /// assert_eq!(v.get(3), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<u8> {
        self.slice.get(pos).copied()
    }

    /// Returns the byte at position `pos` without bounds checking.
    ///
    /// For a checked alternative see [`get`](Self::get).
    ///
    /// # Safety
    ///
    /// `pos` must be strictly less than [`len()`](Self::len).
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, pos: usize) -> u8 {
        // SAFETY: forwarded to the caller
        unsafe { *self.slice.get_unchecked(pos) }
    }

    /// Returns the first byte of the view, or `None` if it is empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<u8> {
        self.slice.first().copied()
    }

    /// Returns the last byte of the view, or `None` if it is empty.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<u8> {
        self.slice.last().copied()
    }

    /// Returns an iterator over the bytes of the view.
    ///
    /// The iterator borrows the original storage directly (lifetime `'a`).
    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, u8> {
        self.slice.iter()
    }

    /// Empties the view.
    ///
    /// Only the descriptor changes: the length becomes zero while the start
    /// address is left untouched. The referenced storage is not modified.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let mut v = StrView::from("abc");
    /// let p = v.as_ptr();
    /// v.clear();
    /// assert!(v.is_empty());
    /// assert_eq!(v.as_ptr(), p);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.slice = &self.slice[..0];
    }

    /// Advances the start of the view by `n` bytes.
    ///
    /// `n` is clamped at [`len()`](Self::len): removing more than the view
    /// holds empties it without error.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let mut v = StrView::from("hello world");
    /// v.remove_prefix(6);
    /// assert_eq!(v, "world");
    /// v.remove_prefix(10);
    /// assert!(v.is_empty());
    /// ```
    #[inline]
    pub fn remove_prefix(&mut self, n: usize) {
        let n = n.min(self.slice.len());
        self.slice = &self.slice[n..];
    }

    /// Shrinks the view by `n` bytes from the end.
    ///
    /// `n` is clamped at [`len()`](Self::len); the start address is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let mut v = StrView::from("hello world");
    /// v.remove_suffix(6);
    /// assert_eq!(v, "hello");
    /// ```
    #[inline]
    pub fn remove_suffix(&mut self, n: usize) {
        let n = n.min(self.slice.len());
        self.slice = &self.slice[..self.slice.len() - n];
    }

    /// Exchanges the descriptors of two views in O(1).
    ///
    /// The referenced storage is not touched.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Extracts a sub-view.
    ///
    /// The sentinel "to the end" of positional APIs is the unbounded range
    /// end: `v.substr(pos..)`. An end bound past [`len()`](Self::len) is
    /// clamped, not an error.
    ///
    /// # Panics
    ///
    /// Panics if the range start is out of bounds or greater than its end.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from("hello world");
    /// assert_eq!(v.substr(..5), "hello");
    /// assert_eq!(v.substr(6..), "world");
    /// assert_eq!(v.substr(6..100), "world"); // end clamped
    /// ```
    #[must_use]
    #[track_caller]
    pub fn substr(&self, range: impl RangeBounds<usize>) -> Self {
        match self.try_substr(range) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    /// Extracts a sub-view, if the range start is valid.
    ///
    /// A start equal to [`len()`](Self::len) is legal and yields an empty
    /// view; an end bound past `len()` is clamped to `len()`.
    ///
    /// # Errors
    ///
    /// Returns a [`SubstrError`] if the range start exceeds `len()` or is
    /// greater than the range end.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from("abc");
    /// assert_eq!(v.try_substr(1..), Ok(StrView::from("bc")));
    /// assert_eq!(v.try_substr(3..), Ok(StrView::new()));
    /// assert!(v.try_substr(4..).is_err());
    /// ```
    pub fn try_substr(&self, range: impl RangeBounds<usize>) -> Result<Self, SubstrError<'a>> {
        let range = substr_range(range, self.slice.len())
            .map_err(|(start, end, kind)| SubstrError::new(kind, start, end, *self))?;
        Ok(Self {
            slice: &self.slice[range],
        })
    }

    /// Returns `true` if the view begins with the given byte string.
    ///
    /// An empty `prefix` matches vacuously; a `prefix` longer than the view
    /// never matches.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from("hello world");
    /// assert!(v.starts_with("hell"));
    /// assert!(v.starts_with(""));
    /// assert!(!v.starts_with("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.slice.starts_with(prefix.as_ref())
    }

    /// Returns `true` if the view is non-empty and begins with the given
    /// byte.
    #[inline]
    #[must_use]
    pub fn starts_with_byte(&self, byte: u8) -> bool {
        self.slice.first() == Some(&byte)
    }

    /// Returns `true` if the view ends with the given byte string.
    ///
    /// An empty `suffix` matches vacuously; a `suffix` longer than the view
    /// never matches.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from("hello world");
    /// assert!(v.ends_with("rld"));
    /// assert!(!v.ends_with("hello"));
    /// ```
    #[inline]
    #[must_use]
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        self.slice.ends_with(suffix.as_ref())
    }

    /// Returns `true` if the view is non-empty and ends with the given byte.
    #[inline]
    #[must_use]
    pub fn ends_with_byte(&self, byte: u8) -> bool {
        self.slice.last() == Some(&byte)
    }

    /// Returns the byte offset of the first occurrence of `needle`, or
    /// `None` if the view does not contain it.
    ///
    /// Equivalent to [`find_from`](Self::find_from) with a start position of
    /// zero.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from("hello world");
    /// assert_eq!(v.find("world"), Some(6));
    /// assert_eq!(v.find("xyz"), None);
    /// assert_eq!(v.find(""), Some(0));
    /// ```
    #[inline]
    #[must_use]
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        self.find_from(needle, 0)
    }

    /// Returns the lowest byte offset at or after `pos` where `needle`
    /// occurs, or `None`.
    ///
    /// Searching past the end never succeeds: if `pos > len()` the result is
    /// `None` even for an empty needle. An empty needle otherwise matches at
    /// the search origin, so the result is `Some(pos)`. Resuming from an
    /// arbitrary position allows overlapping matches.
    ///
    /// Worst-case running time is O(`len()` · `needle.len()`); the scan is
    /// allocation-free and intended for short inputs.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from("aaa");
    /// assert_eq!(v.find_from("aa", 0), Some(0));
    /// assert_eq!(v.find_from("aa", 1), Some(1)); // overlapping match
    /// assert_eq!(v.find_from("aa", 2), None);
    /// assert_eq!(v.find_from("", 3), Some(3));
    /// assert_eq!(v.find_from("", 4), None); // past the end
    /// ```
    #[must_use]
    pub fn find_from(&self, needle: impl AsRef<[u8]>, pos: usize) -> Option<usize> {
        let needle = needle.as_ref();
        if pos > self.slice.len() {
            return None;
        }
        if needle.is_empty() {
            return Some(pos);
        }
        let haystack = &self.slice[pos..];
        if needle.len() > haystack.len() {
            return None;
        }
        // Naive leftmost-match scan: every candidate window is compared
        // byte by byte.
        haystack
            .windows(needle.len())
            .position(|candidate| candidate == needle)
            .map(|offset| offset + pos)
    }

    /// Returns the byte offset of the first occurrence of `byte`, or `None`.
    #[inline]
    #[must_use]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        self.find_from([byte], 0)
    }

    /// Returns the lowest byte offset at or after `pos` where `byte` occurs,
    /// or `None`.
    #[inline]
    #[must_use]
    pub fn find_byte_from(&self, byte: u8, pos: usize) -> Option<usize> {
        self.find_from([byte], pos)
    }

    /// Copies the viewed bytes into a freshly allocated vector.
    ///
    /// The copy has independent lifetime and ownership: mutating it never
    /// affects the storage the view references.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use strview::StrView;
    /// let v = StrView::from("abc");
    /// let owned = v.to_vec();
    /// assert_eq!(owned, b"abc");
    /// ```
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.slice.to_vec()
    }

    /// Reinterprets the view as a string slice if its bytes are valid UTF-8.
    ///
    /// No allocation; the result borrows the original storage.
    ///
    /// # Errors
    ///
    /// Returns a [`Utf8Error`] if the viewed bytes are not valid UTF-8.
    #[inline]
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        core::str::from_utf8(self.slice)
    }

    /// Writes the viewed bytes to a byte sink.
    ///
    /// Emits exactly [`len()`](Self::len) raw bytes, with no delimiter,
    /// quoting, or terminator.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    #[cfg(feature = "std")]
    #[inline]
    pub fn write_to(&self, mut sink: impl std::io::Write) -> std::io::Result<()> {
        sink.write_all(self.slice)
    }
}

impl Default for StrView<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for StrView<'_> {
    type Output = u8;

    #[inline]
    fn index(&self, pos: usize) -> &u8 {
        &self.slice[pos]
    }
}

impl<'a> IntoIterator for StrView<'a> {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<'a> IntoIterator for &StrView<'a> {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl Hash for StrView<'_> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slice.hash(state);
    }
}

impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.slice.escape_ascii())
    }
}

/// Sub-slicing error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubstrErrorKind {
    /// Start index should be less or equal to the end index
    StartGreaterThanEnd,

    /// Start index out of bounds
    StartOutOfBounds,
}

/// Normalizes any [`RangeBounds`] to a [`Range`], clamping the end bound.
///
/// Only the start is validated: an end past `len` is reduced to `len`.
fn substr_range(
    range: impl RangeBounds<usize>,
    len: usize,
) -> Result<Range<usize>, (usize, usize, SubstrErrorKind)> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end + 1,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    let end = end.min(len);
    if start > len {
        Err((start, end, SubstrErrorKind::StartOutOfBounds))
    } else if start > end {
        Err((start, end, SubstrErrorKind::StartGreaterThanEnd))
    } else {
        Ok(Range { start, end })
    }
}

/// A possible error value when sub-slicing a [`StrView`].
///
/// This type is the error type for [`StrView::try_substr`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SubstrError<'a> {
    kind: SubstrErrorKind,
    start: usize,
    end: usize,
    view: StrView<'a>,
}

impl<'a> SubstrError<'a> {
    const fn new(kind: SubstrErrorKind, start: usize, end: usize, view: StrView<'a>) -> Self {
        Self {
            kind,
            start,
            end,
            view,
        }
    }

    /// Returns the kind of error.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> SubstrErrorKind {
        self.kind
    }

    /// Returns the start of the requested range.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the end of the requested range, after clamping.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the _normalized_ requested range.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the source view being sub-sliced.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> StrView<'a> {
        self.view
    }
}

impl fmt::Debug for SubstrError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstrError")
            .field("kind", &self.kind)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("view", &self.view)
            .finish()
    }
}

impl fmt::Display for SubstrError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SubstrErrorKind::StartGreaterThanEnd => {
                write!(f, "range starts at {} but ends at {}", self.start, self.end)
            }
            SubstrErrorKind::StartOutOfBounds => write!(
                f,
                "range start index {} out of bounds for view of length {}",
                self.start,
                self.view.len()
            ),
        }
    }
}

impl core::error::Error for SubstrError<'_> {}
