//! Value matrix: one row per pillar (Efficiency, Trust, Differentiation).

use crate::input::{GtmInput, PricingStrategy};
use crate::plan::ValueMatrixRow;

use super::{clause, lower_first, sentence};

/// How the pricing model lowers the barrier to trying the product.
fn pricing_message(pricing: PricingStrategy) -> &'static str {
    match pricing {
        PricingStrategy::Freemium => "Start free and upgrade only when the team is hooked.",
        PricingStrategy::Premium => "Premium pricing that pays for itself in saved hours.",
        PricingStrategy::UsageBased => "Pay only for the value you actually use.",
        PricingStrategy::OneTime => "One purchase, no recurring bill to defend.",
        PricingStrategy::Custom => "Packaging tailored to your rollout and compliance needs.",
    }
}

/// Evidence that backs the trust pillar for each pricing model.
fn pricing_proof(pricing: PricingStrategy) -> &'static str {
    match pricing {
        PricingStrategy::Freemium => "Free tier usage data showing organic team expansion",
        PricingStrategy::Premium => "ROI calculator and customer payback stories",
        PricingStrategy::UsageBased => "Transparent usage dashboard and spend alerts",
        PricingStrategy::OneTime => "Total cost of ownership comparison against subscriptions",
        PricingStrategy::Custom => "Security documentation, SLAs and reference customers",
    }
}

pub fn value_matrix(input: &GtmInput) -> Vec<ValueMatrixRow> {
    let name = &input.product_name;
    let problem = clause(&input.description);
    let edge = clause(&input.differentiation);

    vec![
        ValueMatrixRow {
            pillar: "Efficiency".to_string(),
            benefit: format!("{problem}, with less manual effort."),
            message: format!(
                "{name} removes the busywork so teams ship outcomes faster. {}",
                pricing_message(input.pricing_strategy)
            ),
            proof: "Time-to-value benchmark from beta cohorts".to_string(),
        },
        ValueMatrixRow {
            pillar: "Trust".to_string(),
            benefit: format!(
                "Works inside the tools teams already rely on: {}.",
                input.integrations
            ),
            message: format!(
                "Adopting {name} is low-risk: it plugs into the existing stack and earns trust \
                 before it asks for commitment."
            ),
            proof: pricing_proof(input.pricing_strategy).to_string(),
        },
        ValueMatrixRow {
            pillar: "Differentiation".to_string(),
            benefit: sentence(edge),
            message: format!(
                "Unlike generic alternatives, {name} stands out on one point: {}",
                sentence(&lower_first(edge))
            ),
            proof: "Side-by-side comparison demo against the status quo".to_string(),
        },
    ]
}
