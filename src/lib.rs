//! A non-owning **byte string view** for Rust 🦀
//!
//! * zero-cost (pointer, length) window into existing storage
//! * allocation-free slicing, prefix/suffix tests, and substring search
//! * **zero dependency**, except for optional `serde` and `bstr` support
//!
//! A [`StrView`] lets an interface accept string-like data — owned strings,
//! literals, buffer ranges — through a single lightweight type, without
//! copying and without committing to any particular owned string type. It is
//! the borrowed-slice contract made explicit: the view is valid exactly as
//! long as the storage it points into, and the lifetime parameter lets the
//! compiler enforce that.
//!
//! # Examples
//!
//! ```rust
//! use strview::StrView;
//!
//! let greetings = String::from("hello world");
//! let view = StrView::from(&greetings); // no copy
//!
//! assert_eq!(view.find("world"), Some(6));
//! assert_eq!(view.substr(6..), "world");
//! assert!(view.starts_with("hell"));
//!
//! let owned = view.substr(6..).to_vec(); // the only allocating operation
//! assert_eq!(owned, b"world");
//! ```
//!
//! # Encoding
//!
//! The view is encoding-agnostic: it operates on raw bytes, makes no UTF-8
//! guarantee, and performs no locale-sensitive comparison. [`StrView::to_str`]
//! checks UTF-8 on demand; the `bstr` feature adds conventionally-UTF-8
//! formatting.
//!
//! # Checked and unchecked access
//!
//! Indexed access comes in three explicit flavors: [`StrView::get`] (checked,
//! `Option`), `view[pos]` (panicking, like slice indexing), and the unsafe
//! [`StrView::get_unchecked`]. Sub-slicing reports a start offset past the
//! end through [`StrView::try_substr`]; every other out-of-domain request
//! (over-large `remove_prefix`, overlong sub-slice end, search past the end)
//! is clamped or answered with `None` rather than reported.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(not(feature = "std"))]
pub(crate) extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std as alloc;

pub mod view;

pub use view::{StrView, SubstrError, SubstrErrorKind};
