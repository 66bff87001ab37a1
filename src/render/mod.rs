//! Section rendering
//!
//! Sections merge their configuration, emit markup tagged with field paths
//! and bind each interactive element to the smart navigator.

mod hero;
mod markup;
mod pricing;
mod reveal;

pub use hero::Hero;
pub use markup::{display_text, escape_html, is_truthy, Action, EditableField, Markup};
pub use pricing::{display_price, BillingPeriod, Pricing, YEARLY_DISCOUNT};
pub use reveal::{Reveal, RevealState};

use serde::Serialize;
use smart_nav::{NavigationHost, SmartNavigator};
use tracing::debug;

use crate::config::{SectionConfig, SectionKind};
use crate::field_path::FieldPath;

/// A renderable page section
pub trait Section {
    fn kind(&self) -> SectionKind;

    /// The merged configuration this section renders
    fn config(&self) -> &SectionConfig;

    fn render(&self) -> RenderedSection;
}

/// Output of one render pass
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub html: String,
    /// Every editable value, label and destination alike
    pub fields: Vec<EditableField>,
    /// Interactive elements in document order
    pub actions: Vec<Action>,
}

impl RenderedSection {
    pub fn field(&self, path: &FieldPath) -> Option<&EditableField> {
        self.fields.iter().find(|f| &f.path == path)
    }

    pub fn action(&self, href_path: &FieldPath) -> Option<&Action> {
        self.actions.iter().find(|a| &a.href_path == href_path)
    }

    /// Click the element whose destination lives at `href_path`.
    ///
    /// Returns false when no such element was rendered. Navigation itself
    /// never fails.
    pub fn activate<H: NavigationHost>(
        &self,
        href_path: &FieldPath,
        navigator: &mut SmartNavigator<H>,
    ) -> bool {
        let Some(action) = self.action(href_path) else {
            debug!(section = %self.kind, path = %href_path, "no interactive element at path");
            return false;
        };
        navigator.navigate(action.destination.as_deref());
        true
    }
}

/// Concatenate several sections into one page body
pub fn render_page(sections: &[&dyn Section]) -> String {
    sections
        .iter()
        .map(|section| section.render().html)
        .collect::<Vec<_>>()
        .join("\n")
}
