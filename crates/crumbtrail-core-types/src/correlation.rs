//! Request correlation
//!
//! Every resolution request carries one `RequestId`. The outer boundary (a
//! CLI invocation, a service handler) either mints a fresh one or adopts the
//! id its own caller supplied, then attaches it to the request span and to
//! any error reported back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Longest id accepted from an upstream caller
pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlation id for a single resolution request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Mint a time-ordered id (UUIDv7)
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why an upstream request id was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequestId {
    Empty,
    TooLong(usize),
    /// Whitespace or control characters would break log lines
    BadChar(char),
}

impl fmt::Display for InvalidRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidRequestId::Empty => f.write_str("request id must not be empty"),
            InvalidRequestId::TooLong(len) => write!(
                f,
                "request id is {} characters, at most {} allowed",
                len, MAX_REQUEST_ID_LEN
            ),
            InvalidRequestId::BadChar(c) => write!(f, "request id contains {:?}", c),
        }
    }
}

impl std::error::Error for InvalidRequestId {}

/// Adopt an id supplied by an upstream caller
impl FromStr for RequestId {
    type Err = InvalidRequestId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidRequestId::Empty);
        }
        let len = s.chars().count();
        if len > MAX_REQUEST_ID_LEN {
            return Err(InvalidRequestId::TooLong(len));
        }
        if let Some(c) = s.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidRequestId::BadChar(c));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct_uuids() {
        let id1 = RequestId::generate();
        let id2 = RequestId::generate();

        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.as_str()).is_ok());
    }

    #[test]
    fn test_upstream_id_is_adopted_verbatim() {
        let id: RequestId = "req-7f3a".parse().unwrap();
        assert_eq!(id.to_string(), "req-7f3a");
    }

    #[test]
    fn test_upstream_id_rejections() {
        assert_eq!("".parse::<RequestId>(), Err(InvalidRequestId::Empty));
        assert_eq!(
            "req 1".parse::<RequestId>(),
            Err(InvalidRequestId::BadChar(' '))
        );
        assert_eq!(
            "a\nb".parse::<RequestId>(),
            Err(InvalidRequestId::BadChar('\n'))
        );

        let long = "x".repeat(MAX_REQUEST_ID_LEN + 1);
        assert_eq!(
            long.parse::<RequestId>(),
            Err(InvalidRequestId::TooLong(MAX_REQUEST_ID_LEN + 1))
        );
        assert!("x"
            .repeat(MAX_REQUEST_ID_LEN)
            .parse::<RequestId>()
            .is_ok());
    }

    #[test]
    fn test_serde_is_transparent_string() {
        let id: RequestId = "req-42".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"req-42\"");

        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
