//! Hero banner section

use serde_json::Value;

use crate::config::{SectionConfig, SectionKind};
use crate::field_path::FieldPath;

use super::markup::Markup;
use super::reveal::Reveal;
use super::{RenderedSection, Section};

/// Hero banner: badge, headline copy, two calls to action, features, stats
#[derive(Debug, Clone)]
pub struct Hero {
    config: SectionConfig,
    reveal: Reveal,
}

impl Hero {
    /// Defaults merged with a partial override
    pub fn new(overrides: &Value) -> Self {
        Self::from_config(SectionConfig::merge(SectionKind::Hero, overrides))
    }

    pub fn from_config(config: SectionConfig) -> Self {
        Self {
            config,
            reveal: Reveal::default(),
        }
    }

    pub fn with_reveal(mut self, reveal: Reveal) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn reveal_mut(&mut self) -> &mut Reveal {
        &mut self.reveal
    }
}

impl Section for Hero {
    fn kind(&self) -> SectionKind {
        SectionKind::Hero
    }

    fn config(&self) -> &SectionConfig {
        &self.config
    }

    fn render(&self) -> RenderedSection {
        let config = &self.config;
        let vis = self.reveal.state();
        let root = FieldPath::root();
        let mut m = Markup::new();

        m.open(
            "section",
            &[
                ("id", "hero"),
                ("class", "bg-background text-foreground min-h-screen flex items-center"),
            ],
        );
        m.open("div", &[("class", "container mx-auto px-4 sm:px-6 lg:px-8 py-20")]);
        m.open("div", &[("class", "max-w-4xl mx-auto text-center")]);

        m.open("div", &[("class", &vis.classes("mb-8"))]);
        m.open("div", &[("class", "badge badge-secondary")]);
        m.icon("zap");
        leaf(&mut m, "span", &[], config, root.key("badgeText"));
        m.close("div");
        m.close("div");

        m.open("div", &[("class", &vis.classes("mb-6 delay-150"))]);
        leaf(
            &mut m,
            "h1",
            &[("class", "text-4xl sm:text-5xl lg:text-7xl font-bold tracking-tight")],
            config,
            root.key("title"),
        );
        m.close("div");

        m.open("div", &[("class", &vis.classes("mb-6 delay-300"))]);
        leaf(
            &mut m,
            "h2",
            &[("class", "text-xl sm:text-2xl lg:text-3xl text-muted-foreground font-medium")],
            config,
            root.key("subtitle"),
        );
        m.close("div");

        m.open("div", &[("class", &vis.classes("mb-12 delay-450"))]);
        leaf(
            &mut m,
            "p",
            &[("class", "text-lg text-muted-foreground max-w-2xl mx-auto leading-relaxed")],
            config,
            root.key("description"),
        );
        m.close("div");

        m.open("div", &[("class", &vis.classes("mb-16 delay-600"))]);
        m.open(
            "div",
            &[("class", "flex flex-col sm:flex-row gap-4 justify-center items-center")],
        );
        cta(
            &mut m,
            config,
            ("ctaText", "ctaHref"),
            "button button-lg button-primary",
            Some("arrow-right"),
        );
        cta(
            &mut m,
            config,
            ("secondaryCtaText", "secondaryCtaHref"),
            "button button-lg button-outline",
            None,
        );
        m.close("div");
        m.close("div");

        m.open("div", &[("class", &vis.classes("mb-16 delay-750"))]);
        m.open("div", &[("class", "flex flex-wrap justify-center gap-6 sm:gap-8")]);
        if let Some(features) = config.field("features").as_array() {
            let base = root.key("features");
            for (idx, feature) in features.iter().enumerate() {
                m.open("div", &[("class", "flex items-center text-muted-foreground")]);
                m.element("div", &[("class", "w-2 h-2 bg-primary rounded-full mr-3")], "");
                m.editable(
                    "span",
                    &[("class", "text-sm sm:text-base font-medium")],
                    &base.index(idx),
                    feature,
                );
                m.close("div");
            }
        }
        m.close("div");
        m.close("div");

        m.open("div", &[("class", &vis.classes("delay-900"))]);
        m.open("div", &[("class", "card")]);
        m.open("div", &[("class", "grid grid-cols-1 sm:grid-cols-3 gap-8")]);
        if let Some(stats) = config.field("stats").as_array() {
            let base = root.key("stats");
            for (idx, stat) in stats.iter().enumerate() {
                let stat_path = base.index(idx);
                m.open("div", &[("class", "text-center")]);
                if let Some(value) = stat.get("value") {
                    m.editable(
                        "div",
                        &[("class", "text-2xl sm:text-3xl font-bold mb-2")],
                        &stat_path.key("value"),
                        value,
                    );
                }
                if let Some(label) = stat.get("label") {
                    m.editable(
                        "div",
                        &[("class", "text-sm text-muted-foreground font-medium")],
                        &stat_path.key("label"),
                        label,
                    );
                }
                m.close("div");
            }
        }
        m.close("div");
        m.close("div");
        m.close("div");

        m.close("div");
        m.close("div");
        m.close("section");

        m.finish(SectionKind::Hero)
    }
}

/// Editable top-level leaf; absent keys render nothing
fn leaf(
    m: &mut Markup,
    tag: &str,
    attrs: &[(&str, &str)],
    config: &SectionConfig,
    path: FieldPath,
) {
    if let Some(value) = config.get(&path) {
        m.editable(tag, attrs, &path, value);
    }
}

/// Call-to-action button from a `(label key, destination key)` pair
fn cta(
    m: &mut Markup,
    config: &SectionConfig,
    (text_key, href_key): (&str, &str),
    class: &str,
    icon: Option<&str>,
) {
    let label_path = FieldPath::root().key(text_key);
    let href_path = FieldPath::root().key(href_key);
    let label = config.get(&label_path);
    let href = config.get(&href_path);
    m.action_button(&[("class", class)], (&label_path, label), (&href_path, href), icon);
}

impl Default for Hero {
    fn default() -> Self {
        Self::from_config(SectionConfig::defaults(SectionKind::Hero))
    }
}
