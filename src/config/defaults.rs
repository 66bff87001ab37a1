//! Built-in section defaults (layer 1)
//!
//! Hardcoded copy for every section. Every field has a default, so any
//! partial override merged onto these yields a fully-populated section.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A headline statistic shown under the hero
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Hero banner copy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroDefaults {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
    pub cta_href: String,
    pub secondary_cta_text: String,
    pub secondary_cta_href: String,
    pub features: Vec<String>,
    pub stats: Vec<Stat>,
    pub badge_text: String,
}

impl Default for HeroDefaults {
    fn default() -> Self {
        Self {
            title: "Build the Future".to_string(),
            subtitle: "Ship faster with our minimal tech stack".to_string(),
            description: "The only platform you need to launch, scale, and grow your startup. \
                          Built for developers who value simplicity and speed."
                .to_string(),
            cta_text: "Start Building".to_string(),
            cta_href: "/signup".to_string(),
            secondary_cta_text: "View Demo".to_string(),
            secondary_cta_href: "/demo".to_string(),
            features: vec![
                "Deploy in seconds".to_string(),
                "Scale automatically".to_string(),
                "Monitor everything".to_string(),
            ],
            stats: vec![
                stat("Deployments", "10M+"),
                stat("Uptime", "99.9%"),
                stat("Developers", "50K+"),
            ],
            badge_text: "Now in Beta".to_string(),
        }
    }
}

/// One pricing plan card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    /// Monthly base price in whole currency units
    pub price: u64,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
    pub cta_text: String,
    pub cta_href: String,
}

/// Pricing table copy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingDefaults {
    pub section_title: String,
    pub section_subtitle: String,
    pub guarantee: String,
    pub note: String,
    pub plans: Vec<Plan>,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            section_title: "Choose Your Plan".to_string(),
            section_subtitle: "Flexible pricing that grows with your business".to_string(),
            guarantee: "30-day money-back guarantee".to_string(),
            note: "All plans include free onboarding and migration assistance".to_string(),
            plans: vec![
                Plan {
                    id: "starter".to_string(),
                    name: "Starter".to_string(),
                    price: 29,
                    period: "month".to_string(),
                    description: "Perfect for small teams getting started".to_string(),
                    features: strings(&[
                        "Up to 5 team members",
                        "10GB storage",
                        "Basic analytics",
                        "Email support",
                        "Core integrations",
                    ]),
                    popular: false,
                    cta_text: "Start Free Trial".to_string(),
                    cta_href: "/signup?plan=starter".to_string(),
                },
                Plan {
                    id: "professional".to_string(),
                    name: "Professional".to_string(),
                    price: 79,
                    period: "month".to_string(),
                    description: "Advanced features for growing businesses".to_string(),
                    features: strings(&[
                        "Up to 25 team members",
                        "100GB storage",
                        "Advanced analytics",
                        "Priority support",
                        "All integrations",
                        "Custom workflows",
                    ]),
                    popular: true,
                    cta_text: "Start Free Trial".to_string(),
                    cta_href: "/signup?plan=professional".to_string(),
                },
                Plan {
                    id: "enterprise".to_string(),
                    name: "Enterprise".to_string(),
                    price: 199,
                    period: "month".to_string(),
                    description: "Complete solution for large organizations".to_string(),
                    features: strings(&[
                        "Unlimited team members",
                        "Unlimited storage",
                        "Enterprise analytics",
                        "24/7 phone support",
                        "Custom integrations",
                        "Advanced security",
                        "Dedicated account manager",
                    ]),
                    popular: false,
                    cta_text: "Contact Sales".to_string(),
                    cta_href: "/contact?plan=enterprise".to_string(),
                },
            ],
        }
    }
}

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Convert a typed default record to a JSON Value for merging
fn to_value<T: Serialize>(defaults: &T) -> Value {
    // Plain structs of strings, numbers and vectors always serialize
    serde_json::to_value(defaults).unwrap_or(Value::Null)
}

impl HeroDefaults {
    pub fn to_value(&self) -> Value {
        to_value(self)
    }
}

impl PricingDefaults {
    pub fn to_value(&self) -> Value {
        to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_defaults() {
        let value = HeroDefaults::default().to_value();
        assert_eq!(value["title"], "Build the Future");
        assert_eq!(value["ctaHref"], "/signup");
        assert_eq!(value["secondaryCtaHref"], "/demo");
        assert_eq!(value["stats"][1]["value"], "99.9%");
        assert_eq!(value["features"].as_array().unwrap().len(), 3);
        assert_eq!(value["badgeText"], "Now in Beta");
    }

    #[test]
    fn test_pricing_defaults() {
        let value = PricingDefaults::default().to_value();
        assert_eq!(value["sectionTitle"], "Choose Your Plan");
        assert_eq!(value["plans"][0]["price"], 29);
        assert_eq!(value["plans"][1]["popular"], true);
        assert_eq!(value["plans"][2]["ctaHref"], "/contact?plan=enterprise");
        assert_eq!(value["plans"][2]["features"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_defaults_round_trip_through_value() {
        let value = PricingDefaults::default().to_value();
        let back: PricingDefaults = serde_json::from_value(value).unwrap();
        assert_eq!(back, PricingDefaults::default());
    }
}
