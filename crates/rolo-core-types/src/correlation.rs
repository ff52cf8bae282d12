//! Correlation types for request tracking
//!
//! A session spans one run of the interactive prompt; a request is one
//! submitted command line within it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a single submitted command line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for one interactive session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new SessionId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried with each submitted line for log correlation
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub session_id: Option<SessionId>,
}

impl RequestContext {
    /// Create a new context with a fresh RequestId
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            session_id: None,
        }
    }

    /// Create a context for the next line of an existing session
    pub fn in_session(session_id: &SessionId) -> Self {
        Self {
            request_id: RequestId::new(),
            session_id: Some(session_id.clone()),
        }
    }

    /// The session id as a string, or `"-"` outside a session
    pub fn session_str(&self) -> &str {
        self.session_id.as_ref().map_or("-", SessionId::as_str)
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_contexts_in_one_session_share_session_id() {
        let session = SessionId::new();
        let first = RequestContext::in_session(&session);
        let second = RequestContext::in_session(&session);

        assert_ne!(first.request_id, second.request_id);
        assert_eq!(first.session_str(), session.as_str());
        assert_eq!(second.session_str(), session.as_str());
    }

    #[test]
    fn test_context_without_session() {
        let ctx = RequestContext::new();
        assert!(ctx.session_id.is_none());
        assert_eq!(ctx.session_str(), "-");
    }

    #[test]
    fn test_serialization() {
        let id = RequestId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
