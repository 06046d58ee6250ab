//! Sales enablement kit: one-pager, demo deck, objection handling guide.

use crate::input::{GtmInput, PricingStrategy};
use crate::plan::SalesAsset;

use super::clause;

/// The objection each pricing model invites, paired with its answer.
fn pricing_objection(pricing: PricingStrategy) -> &'static str {
    match pricing {
        PricingStrategy::Freemium => {
            "\"Why pay if the free plan works?\" Paid tiers unlock team scale, admin controls and support."
        }
        PricingStrategy::Premium => {
            "\"It's expensive.\" Anchor on hours saved and the cost of the status quo."
        }
        PricingStrategy::UsageBased => {
            "\"Costs are unpredictable.\" Show spend caps, alerts and a usage forecast."
        }
        PricingStrategy::OneTime => {
            "\"What about updates?\" Explain the update policy and optional support plan."
        }
        PricingStrategy::Custom => {
            "\"We need a long procurement cycle.\" Offer a scoped pilot with success criteria."
        }
    }
}

pub fn sales_enablement(input: &GtmInput) -> Vec<SalesAsset> {
    let name = &input.product_name;
    let edge = clause(&input.differentiation);
    let pricing = input.pricing_strategy;

    vec![
        SalesAsset {
            asset: "One-Pager".to_string(),
            primary_use: format!("Leave-behind that explains {name} in 60 seconds"),
            key_points: vec![
                format!("Core differentiator: {edge}"),
                format!("Pricing model: {}", pricing.label()),
                format!("Works with: {}", input.integrations),
            ],
            delivery_format: "PDF + shareable web page".to_string(),
        },
        SalesAsset {
            asset: "Demo Deck".to_string(),
            primary_use: "Guide first calls from pain to live product moment".to_string(),
            key_points: vec![
                "Open with the cost of the status quo".to_string(),
                format!("Live moment: {edge}"),
                format!("Integration walkthrough: {}", input.integrations),
                "Close with a mutual success plan".to_string(),
            ],
            delivery_format: "10-slide deck with embedded demo video".to_string(),
        },
        SalesAsset {
            asset: "Objection Handling Guide".to_string(),
            primary_use: "Arm founders and reps with crisp answers to common pushback".to_string(),
            key_points: vec![
                pricing_objection(pricing).to_string(),
                format!(
                    "\"We already have a tool for this.\" Show how {name} plugs into {} instead of replacing it.",
                    input.integrations
                ),
                format!("\"Why now?\" {edge}, and every week without it has a cost."),
            ],
            delivery_format: "Internal wiki page + call cheat sheet".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize::fixtures::acme;

    #[test]
    fn three_assets_in_order() {
        let assets: Vec<String> = sales_enablement(&acme()).into_iter().map(|a| a.asset).collect();
        assert_eq!(assets, vec!["One-Pager", "Demo Deck", "Objection Handling Guide"]);
    }

    #[test]
    fn key_points_reference_inputs() {
        let kit = sales_enablement(&acme());
        assert_eq!(
            kit[0].key_points[0],
            "Core differentiator: Clusters feedback automatically with zero setup"
        );
        assert_eq!(kit[0].key_points[1], "Pricing model: Freemium");
        assert!(kit[1].key_points.iter().any(|p| p.contains("Slack, Jira")));
    }

    #[test]
    fn objection_guide_tracks_pricing() {
        let mut input = acme();
        input.pricing_strategy = PricingStrategy::UsageBased;
        let guide = &sales_enablement(&input)[2];
        assert!(guide.key_points[0].contains("spend caps"));
    }
}
