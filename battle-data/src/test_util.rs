use std::fmt::Debug;

use pretty_assertions::assert_eq;
use serde::{
    Serialize,
    de::DeserializeOwned,
};

/// Asserts that the value serializes to the given JSON string.
pub fn test_string_serialization<T>(value: T, want: &str)
where
    T: Serialize,
{
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        format!("\"{want}\"")
    );
}

/// Asserts that the JSON string deserializes to the given value.
pub fn test_string_deserialization<T>(s: &str, want: T)
where
    T: DeserializeOwned + Debug + PartialEq,
{
    assert_eq!(
        serde_json::from_str::<T>(&format!("\"{s}\"")).unwrap(),
        want
    );
}
