//! Host framework seam
//!
//! The navigator never touches a browser directly; it issues one of three
//! primitive commands against a host.

use thiserror::Error;

/// Errors a host may report. The navigator absorbs all of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No element carries the requested id
    #[error("no element with id '{0}'")]
    ElementNotFound(String),

    /// The host refused or failed to perform the command
    #[error("host rejected navigation: {0}")]
    Rejected(String),
}

/// Primitive navigation commands exposed by the hosting page/router.
pub trait NavigationHost {
    /// Smooth-scroll the element with this id into view without touching history
    fn scroll_into_view(&mut self, id: &str) -> Result<(), HostError>;

    /// Full browser navigation away from the application
    fn assign_location(&mut self, url: &str) -> Result<(), HostError>;

    /// Client-side route transition that pushes a history entry
    fn push_route(&mut self, route: &str) -> Result<(), HostError>;
}

impl<H: NavigationHost + ?Sized> NavigationHost for &mut H {
    fn scroll_into_view(&mut self, id: &str) -> Result<(), HostError> {
        (**self).scroll_into_view(id)
    }

    fn assign_location(&mut self, url: &str) -> Result<(), HostError> {
        (**self).assign_location(url)
    }

    fn push_route(&mut self, route: &str) -> Result<(), HostError> {
        (**self).push_route(route)
    }
}
