use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Correlates one in-flight chat request with its completion event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn new_id_is_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }

    #[test]
    fn request_id_new() {
        let rid = RequestId::new();
        let parsed = uuid::Uuid::parse_str(rid.as_str());
        assert!(parsed.is_ok());
    }

    #[test]
    fn request_id_display() {
        let rid = RequestId::new();
        assert_eq!(rid.to_string(), rid.as_str());
    }

    #[test]
    fn request_id_equality() {
        let rid = RequestId::new();
        let cloned = rid.clone();
        assert_eq!(rid, cloned);

        let other = RequestId::new();
        assert_ne!(rid, other);
    }

    #[test]
    fn request_id_serialization() {
        let rid = RequestId::new();
        let json = serde_json::to_string(&rid).unwrap();
        let deserialized: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(rid, deserialized);
    }
}
