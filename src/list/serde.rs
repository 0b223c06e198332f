//! Serialization support, mirroring how the standard collections
//! serialize: a list is represented as a sequence of its elements.

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::List;

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

struct ListVisitor<T> {
    marker: PhantomData<List<T>>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
    type Value = List<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut list = List::new();
        while let Some(element) = seq.next_element()? {
            list.push_back(element);
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn list_serializes_as_a_sequence() {
        let list = List::from_iter([1, 2, 3]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[1,2,3]");

        let empty: List<i32> = List::new();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn list_deserializes_from_a_sequence() {
        let list: List<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(list, List::from_iter([1, 2, 3]));

        let empty: List<i32> = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());

        // Nested lists follow element deserialization.
        let nested: List<List<i32>> = serde_json::from_str("[[1],[2,3]]").unwrap();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested.front(), Some(&List::from_iter([1])));
    }
}
