use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a room, e.g. `"living-room"`.
    RoomId
);

string_id!(
    /// Stable identifier of an item, e.g. `"lamp"`.
    ItemId
);

string_id!(
    /// Stable identifier of an actor, e.g. `"troll"`.
    ActorId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_identifier() {
        assert_eq!(RoomId::from("west-of-house").to_string(), "west-of-house");
        assert_eq!(ItemId::new("lamp").as_str(), "lamp");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ActorId::from("troll")).unwrap();
        assert_eq!(json, "\"troll\"");
        let back: ActorId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ActorId::from("troll"));
    }
}
