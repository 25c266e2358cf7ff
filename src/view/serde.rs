//! Serde support for `StrView`.
//!
//! A view serializes as a byte string. Deserialization can only **borrow**:
//! a view has nowhere to store owned data, so the input must outlive the
//! view (`'de: 'a`) and hand out borrowed bytes, as `serde_json::from_str`
//! or `serde_test`'s borrowed tokens do.

use serde::de::{Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::alloc::fmt;

use super::StrView;

impl Serialize for StrView<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(self.as_slice())
    }
}

struct StrViewVisitor;

impl<'de> Visitor<'de> for StrViewVisitor {
    type Value = StrView<'de>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a borrowed byte string")
    }

    fn visit_borrowed_bytes<E>(self, v: &'de [u8]) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(StrView::from_slice(v))
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(StrView::from(v))
    }
}

impl<'de: 'a, 'a> Deserialize<'de> for StrView<'a> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(StrViewVisitor)
    }
}
