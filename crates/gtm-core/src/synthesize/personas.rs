//! Buyer personas derived from the audience and goal.
//!
//! Always three personas, in order: economic buyer, hands-on champion,
//! operations stakeholder. Pains, triggers and proof points are assembled
//! from the description, differentiation and integrations.

use crate::input::{GtmInput, PrimaryGoal};
use crate::plan::Persona;

use super::{clause, lower_first};

pub fn personas(input: &GtmInput) -> Vec<Persona> {
    vec![economic_buyer(input), champion(input), operations(input)]
}

fn economic_buyer(input: &GtmInput) -> Persona {
    let audience = &input.target_audience;
    let problem = lower_first(clause(&input.description));
    let edge = lower_first(clause(&input.differentiation));

    let trigger = match input.primary_goal {
        PrimaryGoal::AcquireUsers => "Team adoption of current tooling is stalling",
        PrimaryGoal::GenerateRevenue => "Budget review demands a clear payback period",
        PrimaryGoal::DriveAwareness => "Peers are publicly talking about a new approach",
    };

    Persona {
        title: format!("Budget Owner leading {audience}"),
        description: format!(
            "Owns the outcome and the budget. Needs confidence that {} {problem} without \
             adding risk or headcount.",
            input.product_name
        ),
        pains: vec![
            "Spend is rising without a visible return".to_string(),
            format!("Status quo fails to deliver on: {problem}"),
            "Every new vendor adds security and procurement overhead".to_string(),
        ],
        triggers: vec![
            trigger.to_string(),
            "A new quarterly goal lands without extra headcount".to_string(),
            "A competitor ships faster with a leaner team".to_string(),
        ],
        proof_points: vec![
            format!("Unique edge: {edge}"),
            "Payback visible inside the first billing cycle".to_string(),
            format!("Fits the existing stack: {}", input.integrations),
        ],
    }
}

fn champion(input: &GtmInput) -> Persona {
    let audience = &input.target_audience;
    let edge = lower_first(clause(&input.differentiation));

    let (title, trigger) = match input.primary_goal {
        PrimaryGoal::AcquireUsers => (
            format!("Power User among {audience}"),
            "Hits the limits of spreadsheets and manual workarounds",
        ),
        PrimaryGoal::GenerateRevenue => (
            format!("Internal Champion among {audience}"),
            "Asked to build the business case for a paid tool",
        ),
        PrimaryGoal::DriveAwareness => (
            format!("Early Evangelist among {audience}"),
            "Looking for something worth sharing with their network",
        ),
    };

    Persona {
        title,
        description: format!(
            "Lives in the workflow every day and will adopt {} first if it saves real time.",
            input.product_name
        ),
        pains: vec![
            "Repetitive manual work crowds out high-impact tasks".to_string(),
            "Context is scattered across too many tools".to_string(),
            "Hard to prove personal impact to leadership".to_string(),
        ],
        triggers: vec![
            trigger.to_string(),
            "Onboarding a new teammate exposes broken processes".to_string(),
            "Sees a peer demo a faster workflow".to_string(),
        ],
        proof_points: vec![
            format!("Hands-on demo of the core edge: {edge}"),
            "Productive in under ten minutes".to_string(),
            "Templates that mirror their current workflow".to_string(),
        ],
    }
}

fn operations(input: &GtmInput) -> Persona {
    let integrations = input.integration_list();
    let stack = if integrations.is_empty() {
        input.integrations.clone()
    } else {
        integrations.join(", ")
    };

    Persona {
        title: "Operations & Systems Owner".to_string(),
        description: format!(
            "Guards the tool stack for {}. Approves anything that touches {stack}.",
            input.target_audience
        ),
        pains: vec![
            "Integrations that break silently".to_string(),
            "Shadow IT and duplicated data".to_string(),
            "Rollouts that need weeks of configuration".to_string(),
        ],
        triggers: vec![
            format!("A request to connect {stack}"),
            "Security review or vendor consolidation cycle".to_string(),
            "Data quality complaints from downstream teams".to_string(),
        ],
        proof_points: vec![
            format!("Native integrations with {stack}"),
            "Clear permissions model and audit trail".to_string(),
            "Rollback plan and admin controls from day one".to_string(),
        ],
    }
}
