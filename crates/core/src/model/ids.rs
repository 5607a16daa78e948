use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-issued identifiers are opaque strings (Mongo-style object ids).
/// Each entity gets its own newtype so ids cannot be mixed up across calls.
macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw server id.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the underlying id string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

string_id!(
    /// Unique identifier for a User
    UserId
);
string_id!(
    /// Unique identifier for a Quiz
    QuizId
);
string_id!(
    /// Unique identifier for a Course
    CourseId
);
string_id!(
    /// Unique identifier for a forum post
    PostId
);
string_id!(
    /// Unique identifier for a forum reply
    ReplyId
);
string_id!(
    /// Unique identifier for a coin transaction
    TransactionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_display() {
        let id = CourseId::new("64f0c2");
        assert_eq!(id.as_str(), "64f0c2");
        assert_eq!(id.to_string(), "64f0c2");
        assert_eq!(format!("{id:?}"), "CourseId(64f0c2)");
    }

    #[test]
    fn ids_of_different_entities_are_distinct_types() {
        // Compile-time property; keep a runtime sanity check for equality.
        assert_eq!(UserId::from("a"), UserId::new("a"));
        assert_ne!(UserId::from("a"), UserId::from("b"));
    }
}
