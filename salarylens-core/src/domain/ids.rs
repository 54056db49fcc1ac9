use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix for ids assigned to records submitted through a [`RecordStore`](crate::store::RecordStore).
pub const LOCAL_ID_PREFIX: &str = "local-";

/// Unique, immutable record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive a local id from arbitrary content bytes.
    ///
    /// Uses BLAKE3 so the id is stable across builds/platforms for the same
    /// input; only the first 16 hex characters are kept.
    pub fn local_from_content(content: &[u8]) -> Self {
        let hash = blake3::hash(content);
        let hex = hash.to_hex();
        Self(format!("{LOCAL_ID_PREFIX}{}", &hex.as_str()[..16]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_local(&self) -> bool {
        self.0.starts_with(LOCAL_ID_PREFIX)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_id_is_deterministic() {
        let a = RecordId::local_from_content(b"engineer|acme|1200000");
        let b = RecordId::local_from_content(b"engineer|acme|1200000");
        assert_eq!(a, b);
        assert!(a.is_local());
        assert_eq!(a.as_str().len(), LOCAL_ID_PREFIX.len() + 16);
    }

    #[test]
    fn local_id_changes_with_content() {
        let a = RecordId::local_from_content(b"a");
        let b = RecordId::local_from_content(b"b");
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::new("json-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"json-7\"");
    }
}
