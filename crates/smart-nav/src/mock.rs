//! Recording host
//!
//! An in-memory [`NavigationHost`] that records every command it receives.
//! Anchor lookups only succeed for ids registered with [`RecordingHost::with_anchor`],
//! and failures can be injected for every command.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::host::{HostError, NavigationHost};

/// A command observed by the recording host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", content = "target", rename_all = "snake_case")]
pub enum HostCall {
    ScrollIntoView(String),
    AssignLocation(String),
    PushRoute(String),
}

/// Recording host with a simulated document and history
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    anchors: BTreeSet<String>,
    fail_all: bool,
    calls: Vec<HostCall>,
    history: Vec<String>,
    location: Option<String>,
    scrolled_to: Option<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element id that scrolling can find
    pub fn with_anchor(mut self, id: impl Into<String>) -> Self {
        self.anchors.insert(id.into());
        self
    }

    /// Make every command fail with [`HostError::Rejected`]
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Every command received, in order, including failed ones
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Routes pushed onto the simulated history stack
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Last external URL the page was sent to
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Id of the element most recently scrolled into view
    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }

    fn check_injected(&self, target: &str) -> Result<(), HostError> {
        if self.fail_all {
            return Err(HostError::Rejected(format!("injected failure for '{}'", target)));
        }
        Ok(())
    }
}

impl NavigationHost for RecordingHost {
    fn scroll_into_view(&mut self, id: &str) -> Result<(), HostError> {
        self.calls.push(HostCall::ScrollIntoView(id.to_string()));
        self.check_injected(id)?;
        if !self.anchors.contains(id) {
            return Err(HostError::ElementNotFound(id.to_string()));
        }
        self.scrolled_to = Some(id.to_string());
        Ok(())
    }

    fn assign_location(&mut self, url: &str) -> Result<(), HostError> {
        self.calls.push(HostCall::AssignLocation(url.to_string()));
        self.check_injected(url)?;
        self.location = Some(url.to_string());
        Ok(())
    }

    fn push_route(&mut self, route: &str) -> Result<(), HostError> {
        self.calls.push(HostCall::PushRoute(route.to_string()));
        self.check_injected(route)?;
        self.history.push(route.to_string());
        Ok(())
    }
}
