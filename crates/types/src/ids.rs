//! Newtype wrappers for semantic IDs
//!
//! These types provide compile-time type safety to prevent mixing up
//! the different kinds of record identifiers handed out by the data
//! store (tissue IDs, color IDs, link IDs, etc.).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

macro_rules! semantic_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Eq, PartialEq, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Creates a new ID from a string
            pub fn new(id: impl Into<Arc<str>>) -> Self {
                Self(id.into())
            }

            /// Returns the string representation of this ID
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.into())
            }
        }

        impl From<Arc<str>> for $name {
            fn from(s: Arc<str>) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self(s.into()))
            }
        }
    };
}

semantic_id!(
    /// An identifier for a tissue (fabric type) record
    TissueId
);

semantic_id!(
    /// An identifier for a color record
    ColorId
);

semantic_id!(
    /// An identifier for a tissue-color link, the sellable SKU unit
    LinkId
);

semantic_id!(
    /// An identifier for an append-only stock movement record
    MovementId
);

semantic_id!(
    /// An identifier for the acting user on a stock movement
    UserId
);
