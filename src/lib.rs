//! Landing Sections - editable marketing-page sections
//!
//! This crate renders configurable page sections (hero banner, pricing
//! table). Content comes from built-in defaults merged with partial
//! overrides, every rendered value is addressable by a field path for inline
//! editing, and every call to action navigates through the smart navigator.

pub mod config;
pub mod edit;
pub mod field_path;
pub mod render;

/// Navigation resolution, re-exported from `smart-nav`
pub use smart_nav as navigation;

pub use config::{EffectiveConfig, SectionConfig, SectionKind};
pub use edit::{apply_edits, override_for_edit, EditError, EditRequest};
pub use field_path::{FieldPath, FieldRole, PathError, PathSegment};
pub use render::{BillingPeriod, Hero, Pricing, RenderedSection, Section};
pub use smart_nav::{Destination, NavigationHost, Resolution, SmartNavigator};

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins; otherwise `default_filter` is used.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
