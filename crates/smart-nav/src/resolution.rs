//! Resolution types
//!
//! Defines the closed set of destinations a navigation string can resolve to,
//! along with the reasons a navigation request is skipped.

use serde::{Deserialize, Serialize};

/// Where a navigation request sends the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum Destination {
    /// In-page anchor; holds the element id without the leading `#`
    Anchor(String),

    /// Absolute or protocol-relative URL that leaves the application
    External(String),

    /// Client-side route within the application
    Internal(String),
}

impl Destination {
    /// The raw target (anchor id, url or route)
    pub fn target(&self) -> &str {
        match self {
            Destination::Anchor(id) => id,
            Destination::External(url) => url,
            Destination::Internal(route) => route,
        }
    }

    /// Whether dispatching this destination adds a history entry
    pub fn pushes_history(&self) -> bool {
        matches!(self, Destination::Internal(_))
    }

    /// Machine-readable form, e.g. "ANCHOR:pricing", "INTERNAL:/signup"
    pub fn to_machine_string(&self) -> String {
        match self {
            Destination::Anchor(id) => format!("ANCHOR:{}", id),
            Destination::External(url) => format!("EXTERNAL:{}", url),
            Destination::Internal(route) => format!("INTERNAL:{}", route),
        }
    }
}

/// Why a navigation request did nothing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Destination was missing, empty or whitespace only
    Empty,

    /// Destination was a bare `#` with no element id
    EmptyFragment,
}

/// Outcome of classifying a destination string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "resolution", rename_all = "lowercase")]
pub enum Resolution {
    /// Dispatch to the host
    Navigate { destination: Destination },

    /// Do nothing
    Skip { reason: SkipReason },
}

impl Resolution {
    pub(crate) fn navigate(destination: Destination) -> Self {
        Resolution::Navigate { destination }
    }

    pub(crate) fn skip(reason: SkipReason) -> Self {
        Resolution::Skip { reason }
    }

    /// The destination, if this resolution navigates anywhere
    pub fn destination(&self) -> Option<&Destination> {
        match self {
            Resolution::Navigate { destination } => Some(destination),
            Resolution::Skip { .. } => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Resolution::Skip { .. })
    }

    /// Human-readable one-line description
    pub fn describe(&self) -> String {
        match self {
            Resolution::Navigate {
                destination: Destination::Anchor(id),
            } => format!("Scroll to element '#{}' (no history entry)", id),
            Resolution::Navigate {
                destination: Destination::External(url),
            } => format!("Full browser navigation to '{}'", url),
            Resolution::Navigate {
                destination: Destination::Internal(route),
            } => format!("Client-side route transition to '{}' (history entry added)", route),
            Resolution::Skip {
                reason: SkipReason::Empty,
            } => "No destination; nothing to do".to_string(),
            Resolution::Skip {
                reason: SkipReason::EmptyFragment,
            } => "Bare '#' fragment; nothing to do".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_string() {
        assert_eq!(
            Destination::Anchor("pricing".to_string()).to_machine_string(),
            "ANCHOR:pricing"
        );
        assert_eq!(
            Destination::Internal("/signup".to_string()).to_machine_string(),
            "INTERNAL:/signup"
        );
    }

    #[test]
    fn test_only_internal_pushes_history() {
        assert!(Destination::Internal("/a".to_string()).pushes_history());
        assert!(!Destination::Anchor("a".to_string()).pushes_history());
        assert!(!Destination::External("https://a.example".to_string()).pushes_history());
    }

    #[test]
    fn test_serialize_resolution() {
        let resolution = Resolution::navigate(Destination::Anchor("pricing".to_string()));
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["resolution"], "navigate");
        assert_eq!(json["destination"]["kind"], "anchor");
        assert_eq!(json["destination"]["target"], "pricing");

        let skip = serde_json::to_value(Resolution::skip(SkipReason::EmptyFragment)).unwrap();
        assert_eq!(skip["resolution"], "skip");
        assert_eq!(skip["reason"], "empty_fragment");
    }
}
