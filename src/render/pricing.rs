//! Pricing table section

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

use crate::config::{SectionConfig, SectionKind};
use crate::field_path::FieldPath;

use super::markup::{display_text, is_truthy, Markup};
use super::{RenderedSection, Section};

/// Discount applied to every plan when billed yearly
pub const YEARLY_DISCOUNT: f64 = 0.8;

/// Billing toggle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn toggle(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        }
    }

    /// Unit shown after the price
    pub fn unit(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "month",
            BillingPeriod::Yearly => "year",
        }
    }
}

/// Price shown for a plan: the base price, or `floor(base * 0.8)` when yearly
pub fn display_price(base: f64, period: BillingPeriod) -> f64 {
    match period {
        BillingPeriod::Monthly => base,
        BillingPeriod::Yearly => (base * YEARLY_DISCOUNT).floor(),
    }
}

/// Pricing table with a monthly/yearly toggle
#[derive(Debug, Clone)]
pub struct Pricing {
    config: SectionConfig,
    billing: BillingPeriod,
}

impl Pricing {
    /// Defaults merged with a partial override
    pub fn new(overrides: &Value) -> Self {
        Self::from_config(SectionConfig::merge(SectionKind::Pricing, overrides))
    }

    pub fn from_config(config: SectionConfig) -> Self {
        Self {
            config,
            billing: BillingPeriod::default(),
        }
    }

    pub fn billing(&self) -> BillingPeriod {
        self.billing
    }

    pub fn set_billing(&mut self, billing: BillingPeriod) {
        self.billing = billing;
    }

    /// Flip between monthly and yearly billing
    pub fn toggle_billing(&mut self) {
        self.billing = self.billing.toggle();
    }

    /// Displayed price of every plan, in order. Plans without a numeric price yield `None`.
    pub fn prices(&self) -> Vec<Option<f64>> {
        self.config
            .field("plans")
            .as_array()
            .map(|plans| {
                plans
                    .iter()
                    .map(|plan| {
                        plan.get("price")
                            .and_then(Value::as_f64)
                            .map(|base| display_price(base, self.billing))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn render_toggle(&self, m: &mut Markup) {
        let yearly = self.billing == BillingPeriod::Yearly;
        let active = "text-sm text-foreground";
        let muted = "text-sm text-muted-foreground";

        m.open("div", &[("class", "flex items-center justify-center gap-4 mb-8")]);
        m.element("span", &[("class", if yearly { muted } else { active })], "Monthly");
        m.element(
            "button",
            &[
                ("type", "button"),
                ("class", if yearly { "toggle bg-primary" } else { "toggle bg-muted" }),
                ("aria-label", "Toggle billing period"),
                ("aria-pressed", if yearly { "true" } else { "false" }),
                ("data-billing", self.billing.unit()),
            ],
            "",
        );
        m.element("span", &[("class", if yearly { active } else { muted })], "Yearly");
        if yearly {
            m.element("span", &[("class", "badge badge-secondary ml-2")], "Save 20%");
        }
        m.close("div");
    }

    fn render_plan(&self, m: &mut Markup, plan_path: &FieldPath, plan: &Value) {
        let popular = plan.get("popular").is_some_and(is_truthy);
        let plan_id = plan.get("id").map(display_text).unwrap_or_default();
        let card_class = if popular {
            "card relative border-primary shadow-lg scale-105"
        } else {
            "card relative"
        };

        m.open("div", &[("class", card_class), ("data-plan-id", &plan_id)]);
        if popular {
            m.open("div", &[("class", "absolute -top-3 left-1/2 transform -translate-x-1/2")]);
            m.open("span", &[("class", "badge bg-primary text-primary-foreground px-4 py-1")]);
            m.icon("star");
            m.element("span", &[], "Most Popular");
            m.close("span");
            m.close("div");
        }

        m.open("div", &[("class", "card-header text-center pb-8")]);
        if let Some(name) = plan.get("name") {
            m.editable(
                "h3",
                &[("class", "text-xl font-semibold mb-2")],
                &plan_path.key("name"),
                name,
            );
        }
        if let Some(description) = plan.get("description") {
            m.editable(
                "p",
                &[("class", "text-muted-foreground mb-4")],
                &plan_path.key("description"),
                description,
            );
        }
        m.open("div", &[("class", "mb-4")]);
        let price = plan
            .get("price")
            .and_then(Value::as_f64)
            .map(|base| format!("${}", display_price(base, self.billing)))
            .unwrap_or_default();
        m.element("span", &[("class", "text-4xl font-bold")], &price);
        m.element(
            "span",
            &[("class", "text-muted-foreground")],
            &format!("/{}", self.billing.unit()),
        );
        m.close("div");
        m.close("div");

        m.open("div", &[("class", "card-content pt-0")]);
        m.open("ul", &[("class", "space-y-3 mb-8")]);
        if let Some(features) = plan.get("features").and_then(Value::as_array) {
            let base = plan_path.key("features");
            for (idx, feature) in features.iter().enumerate() {
                m.open("li", &[("class", "flex items-start gap-3")]);
                m.icon("check");
                m.editable("span", &[("class", "text-sm")], &base.index(idx), feature);
                m.close("li");
            }
        }
        m.close("ul");

        let button_class = if popular {
            "button w-full bg-primary text-primary-foreground"
        } else {
            "button w-full bg-secondary text-secondary-foreground"
        };
        m.action_button(
            &[("class", button_class)],
            (&plan_path.key("ctaText"), plan.get("ctaText")),
            (&plan_path.key("ctaHref"), plan.get("ctaHref")),
            None,
        );
        m.close("div");
        m.close("div");
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::from_config(SectionConfig::defaults(SectionKind::Pricing))
    }
}

impl Section for Pricing {
    fn kind(&self) -> SectionKind {
        SectionKind::Pricing
    }

    fn config(&self) -> &SectionConfig {
        &self.config
    }

    fn render(&self) -> RenderedSection {
        let config = &self.config;
        let root = FieldPath::root();
        let mut m = Markup::new();

        m.open(
            "section",
            &[("id", "pricing"), ("class", "bg-background text-foreground py-20")],
        );
        m.open("div", &[("class", "container mx-auto px-4 sm:px-6 lg:px-8")]);

        m.open("div", &[("class", "text-center mb-16")]);
        let title_path = root.key("sectionTitle");
        if let Some(title) = config.get(&title_path) {
            m.editable(
                "h2",
                &[("class", "text-3xl sm:text-4xl lg:text-5xl font-bold mb-4")],
                &title_path,
                title,
            );
        }
        let subtitle_path = root.key("sectionSubtitle");
        if let Some(subtitle) = config.get(&subtitle_path) {
            m.editable(
                "p",
                &[("class", "text-lg text-muted-foreground max-w-2xl mx-auto mb-8")],
                &subtitle_path,
                subtitle,
            );
        }
        self.render_toggle(&mut m);
        m.close("div");

        m.open("div", &[("class", "grid gap-8 lg:grid-cols-3 max-w-7xl mx-auto")]);
        if let Some(plans) = config.field("plans").as_array() {
            let base = root.key("plans");
            for (idx, plan) in plans.iter().enumerate() {
                if plan.is_object() {
                    self.render_plan(&mut m, &base.index(idx), plan);
                }
            }
        }
        m.close("div");

        m.open("div", &[("class", "text-center mt-16 space-y-4")]);
        for key in ["guarantee", "note"] {
            let path = root.key(key);
            if let Some(value) = config.get(&path) {
                m.editable("p", &[("class", "text-sm text-muted-foreground")], &path, value);
            }
        }
        m.close("div");

        m.close("div");
        m.close("section");

        m.finish(SectionKind::Pricing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yearly_price_is_floored_discount() {
        assert_eq!(display_price(79.0, BillingPeriod::Yearly), 63.0);
        assert_eq!(display_price(199.0, BillingPeriod::Yearly), 159.0);
        assert_eq!(display_price(29.0, BillingPeriod::Yearly), 23.0);
        assert_eq!(display_price(79.0, BillingPeriod::Monthly), 79.0);
    }

    #[test]
    fn test_toggle() {
        let mut pricing = Pricing::default();
        assert_eq!(pricing.billing(), BillingPeriod::Monthly);
        pricing.toggle_billing();
        assert_eq!(pricing.billing(), BillingPeriod::Yearly);
        assert_eq!(pricing.prices(), vec![Some(23.0), Some(63.0), Some(159.0)]);
        pricing.toggle_billing();
        assert_eq!(pricing.prices(), vec![Some(29.0), Some(79.0), Some(199.0)]);
    }

    #[test]
    fn test_render_yearly() {
        let mut pricing = Pricing::default();
        pricing.set_billing(BillingPeriod::Yearly);
        let rendered = pricing.render();

        assert!(rendered.html.contains("$63"));
        assert!(rendered.html.contains("$159"));
        assert!(rendered.html.contains("/year"));
        assert!(rendered.html.contains("Save 20%"));
        assert!(!rendered.html.contains("$79"));
    }

    #[test]
    fn test_render_monthly_has_no_savings_badge() {
        let rendered = Pricing::default().render();
        assert!(rendered.html.contains("$79"));
        assert!(rendered.html.contains("/month"));
        assert!(!rendered.html.contains("Save 20%"));
    }

    #[test]
    fn test_popular_badge_once() {
        let rendered = Pricing::default().render();
        assert_eq!(rendered.html.matches("Most Popular").count(), 1);
    }

    #[test]
    fn test_plan_paths() {
        let rendered = Pricing::default().render();
        let paths: Vec<String> = rendered.fields.iter().map(|f| f.path.to_string()).collect();
        assert!(paths.contains(&"plans[2].features[6]".to_string()));
        assert!(paths.contains(&"plans[2].ctaText".to_string()));
        assert!(paths.contains(&"plans[2].ctaHref".to_string()));
        assert!(paths.contains(&"sectionTitle".to_string()));
        assert!(paths.contains(&"note".to_string()));
        // Computed prices are not editable
        assert!(!paths.iter().any(|p| p.ends_with(".price")));
        assert_eq!(rendered.actions.len(), 3);
    }

    #[test]
    fn test_override_plans_wholesale() {
        let pricing = Pricing::new(&json!({
            "plans": [{
                "id": "solo",
                "name": "Solo",
                "price": 10,
                "features": [],
                "ctaText": "Go",
                "ctaHref": "#signup"
            }]
        }));
        let rendered = pricing.render();
        assert_eq!(rendered.actions.len(), 1);
        assert_eq!(rendered.actions[0].destination.as_deref(), Some("#signup"));
        assert!(rendered.html.contains("data-plan-id=\"solo\""));
        assert_eq!(rendered.html.matches("data-plan-id").count(), 1);
    }

    #[test]
    fn test_plan_without_href_keeps_label_and_navigates_nowhere() {
        let pricing = Pricing::new(&json!({
            "plans": [{"id": "draft", "name": "Draft", "price": 5, "ctaText": "Soon"}]
        }));
        let rendered = pricing.render();

        let label = rendered.field(&"plans[0].ctaText".parse().unwrap()).unwrap();
        assert_eq!(label.value, json!("Soon"));
        assert!(rendered.field(&"plans[0].ctaHref".parse().unwrap()).is_none());

        let action = rendered.action(&"plans[0].ctaHref".parse().unwrap()).unwrap();
        assert_eq!(action.destination, None);

        let mut nav = smart_nav::SmartNavigator::new(smart_nav::mock::RecordingHost::new());
        assert!(rendered.activate(&"plans[0].ctaHref".parse().unwrap(), &mut nav));
        assert!(nav.host().calls().is_empty());
    }

    #[test]
    fn test_popular_flag_is_truthy() {
        let plan = |popular: Value| {
            json!({"id": "p", "name": "P", "price": 1, "popular": popular, "ctaText": "Go"})
        };
        let rendered = Pricing::new(&json!({
            "plans": [plan(json!(1)), plan(json!("yes")), plan(json!(0)), plan(json!(""))]
        }))
        .render();
        assert_eq!(rendered.html.matches("Most Popular").count(), 2);
    }
}
