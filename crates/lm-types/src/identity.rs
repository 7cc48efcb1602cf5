use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a record.
///
/// Every source that overrides a record refers to it by the same key, so the
/// key is what groups variants into a [`Chain`](crate::Chain).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordKey({})", self.0)
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identity of a contributing source (a plugin in the load order).
///
/// Sources declare their masters by `SourceId`; the dependency graph is an
/// adjacency map keyed by this type rather than a graph of live references.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceId({})", self.0)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Reference to a track record, the element type of a record's track list.
///
/// Only equality matters. The merge core never resolves or validates the
/// referenced record.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackRef(String);

impl TrackRef {
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrackRef({})", self.0)
    }
}

impl fmt::Display for TrackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_value() {
        assert_eq!(RecordKey::new("0001A3:Skyrim.esm").to_string(), "0001A3:Skyrim.esm");
        assert_eq!(SourceId::from("Update.esm").to_string(), "Update.esm");
        assert_eq!(TrackRef::from("MUSExploreA").to_string(), "MUSExploreA");
    }

    #[test]
    fn debug_names_the_kind() {
        assert_eq!(format!("{:?}", SourceId::from("A.esp")), "SourceId(A.esp)");
        assert_eq!(format!("{:?}", TrackRef::from("T")), "TrackRef(T)");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&TrackRef::from("MUSCombat01")).unwrap();
        assert_eq!(json, "\"MUSCombat01\"");
        let back: SourceId = serde_json::from_str("\"Dawnguard.esm\"").unwrap();
        assert_eq!(back, SourceId::from("Dawnguard.esm"));
    }

    #[test]
    fn ordering_follows_string_order() {
        let mut ids = vec![SourceId::from("b"), SourceId::from("a"), SourceId::from("c")];
        ids.sort();
        assert_eq!(ids, vec![SourceId::from("a"), SourceId::from("b"), SourceId::from("c")]);
    }
}
