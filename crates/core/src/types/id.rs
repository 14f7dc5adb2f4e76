//! Newtype IDs for type-safe entity references.
//!
//! Backend identifiers are opaque strings (UUIDs on the wire, but nothing
//! here depends on that). Use the `define_id!` macro to create wrappers
//! that prevent accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper around an opaque string.
///
/// Creates a newtype with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()`, `as_str()` and `Display`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use casabnb_core::define_id;
/// define_id!(PlaceId);
/// define_id!(UserId);
///
/// let place_id = PlaceId::new("a1b2");
/// let user_id = UserId::new("a1b2");
///
/// // These are different types, so this won't compile:
/// // let _: PlaceId = user_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(PlaceId);
define_id!(ReviewId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_as_str() {
        let id = PlaceId::new("abc-123");
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: UserId = serde_json::from_str("\"u-42\"").unwrap();
        assert_eq!(id, UserId::new("u-42"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u-42\"");
    }
}
