//! Smart navigation for configuration-driven links.
//!
//! A destination string taken from section configuration is classified once
//! into an in-page anchor, an external URL or an internal route, then
//! dispatched to the host. Navigation is a UI-polish operation: host failures
//! are logged and absorbed, never returned.

mod host;
pub mod mock;
mod resolution;

pub use host::{HostError, NavigationHost};
pub use resolution::{Destination, Resolution, SkipReason};

use regex_lite::Regex;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Schemes that leave the application without a `//` authority.
const OPAQUE_SCHEMES: &[&str] = &["mailto:", "tel:"];

/// `scheme://...` or protocol-relative `//...`
fn external_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//").expect("external url pattern is valid")
    })
}

/// Whether a destination leaves the application.
pub fn is_external(destination: &str) -> bool {
    if external_url_re().is_match(destination) {
        return true;
    }
    let lower = destination.to_ascii_lowercase();
    OPAQUE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

/// Classify a destination string.
///
/// Precedence: empty → skip, `#fragment` → anchor, external pattern →
/// external, anything else → internal route. Surrounding whitespace is
/// ignored. A bare `#` is skipped rather than scrolling to the top.
pub fn resolve(destination: Option<&str>) -> Resolution {
    let destination = match destination.map(str::trim) {
        Some(d) if !d.is_empty() => d,
        _ => return Resolution::skip(SkipReason::Empty),
    };

    if let Some(fragment) = destination.strip_prefix('#') {
        if fragment.is_empty() {
            return Resolution::skip(SkipReason::EmptyFragment);
        }
        return Resolution::navigate(Destination::Anchor(fragment.to_string()));
    }

    if is_external(destination) {
        return Resolution::navigate(Destination::External(destination.to_string()));
    }

    Resolution::navigate(Destination::Internal(destination.to_string()))
}

/// Classify-then-dispatch navigator bound to a host.
///
/// Each call issues a fresh command; nothing is queued or debounced.
#[derive(Debug, Default)]
pub struct SmartNavigator<H> {
    host: H,
}

impl<H: NavigationHost> SmartNavigator<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Move the user to `destination`. Never fails.
    pub fn navigate(&mut self, destination: Option<&str>) {
        self.navigate_explained(destination);
    }

    /// Like [`navigate`](Self::navigate), returning the resolution that was dispatched.
    pub fn navigate_explained(&mut self, destination: Option<&str>) -> Resolution {
        let resolution = resolve(destination);
        trace!(?destination, ?resolution, "resolved navigation target");

        let Some(target) = resolution.destination() else {
            return resolution;
        };

        let result = match target {
            Destination::Anchor(id) => self.host.scroll_into_view(id),
            Destination::External(url) => self.host.assign_location(url),
            Destination::Internal(route) => self.host.push_route(route),
        };

        if let Err(err) = result {
            debug!(
                destination = %target.to_machine_string(),
                error = %err,
                "navigation absorbed host failure"
            );
        }

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{HostCall, RecordingHost};

    #[test]
    fn test_anchor() {
        assert_eq!(
            resolve(Some("#pricing")),
            Resolution::navigate(Destination::Anchor("pricing".to_string()))
        );
    }

    #[test]
    fn test_bare_fragment_is_skipped() {
        assert_eq!(resolve(Some("#")), Resolution::skip(SkipReason::EmptyFragment));
    }

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(resolve(None), Resolution::skip(SkipReason::Empty));
        assert_eq!(resolve(Some("")), Resolution::skip(SkipReason::Empty));
        assert_eq!(resolve(Some("   ")), Resolution::skip(SkipReason::Empty));
    }

    #[test]
    fn test_external_patterns() {
        assert!(is_external("https://example.com"));
        assert!(is_external("http://example.com/a?b=c"));
        assert!(is_external("//cdn.example.com/x.js"));
        assert!(is_external("ftp://files.example.com"));
        assert!(is_external("mailto:sales@example.com"));
        assert!(is_external("TEL:+15551234"));
        assert!(!is_external("/signup"));
        assert!(!is_external("signup?plan=starter"));
        assert!(!is_external("http:/missing-slash"));
        assert!(!is_external("1http://bad-scheme"));
    }

    #[test]
    fn test_malformed_url_falls_through_to_internal() {
        assert_eq!(
            resolve(Some("http:/broken")),
            Resolution::navigate(Destination::Internal("http:/broken".to_string()))
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            resolve(Some("  #hero ")),
            Resolution::navigate(Destination::Anchor("hero".to_string()))
        );
    }

    #[test]
    fn test_navigator_dispatches_by_kind() {
        let mut nav = SmartNavigator::new(RecordingHost::new().with_anchor("pricing"));
        nav.navigate(Some("#pricing"));
        nav.navigate(Some("/signup"));
        nav.navigate(Some("https://example.com"));

        let host = nav.into_host();
        assert_eq!(
            host.calls(),
            &[
                HostCall::ScrollIntoView("pricing".to_string()),
                HostCall::PushRoute("/signup".to_string()),
                HostCall::AssignLocation("https://example.com".to_string()),
            ]
        );
        assert_eq!(host.history(), &["/signup".to_string()]);
    }

    #[test]
    fn test_navigate_explained_returns_dispatched_resolution() {
        let mut nav = SmartNavigator::new(RecordingHost::new().with_anchor("pricing"));

        let resolution = nav.navigate_explained(Some(" #pricing "));
        assert_eq!(
            resolution,
            Resolution::navigate(Destination::Anchor("pricing".to_string()))
        );
        assert_eq!(nav.host().calls(), &[HostCall::ScrollIntoView("pricing".to_string())]);

        let skipped = nav.navigate_explained(Some("#"));
        assert_eq!(skipped, Resolution::skip(SkipReason::EmptyFragment));
        assert_eq!(nav.host().calls().len(), 1);
    }

    #[test]
    fn test_navigate_explained_reports_absorbed_failure_target() {
        let mut nav = SmartNavigator::new(RecordingHost::new().failing());
        let resolution = nav.navigate_explained(Some("https://example.com"));
        assert_eq!(
            resolution.destination(),
            Some(&Destination::External("https://example.com".to_string()))
        );
        assert!(nav.host().location().is_none());
    }

    #[test]
    fn test_navigator_absorbs_failures() {
        let mut nav = SmartNavigator::new(RecordingHost::new().failing());
        nav.navigate(Some("/signup"));
        nav.navigate(Some("#missing"));
        assert_eq!(nav.host().calls().len(), 2);
        assert!(nav.host().history().is_empty());
    }
}
