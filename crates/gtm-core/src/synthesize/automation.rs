//! Automation ideas: one per named integration (up to three), then three
//! goal-specific plays.

use crate::input::{GtmInput, PrimaryGoal};

const MAX_INTEGRATION_IDEAS: usize = 3;

pub fn automation_ideas(input: &GtmInput) -> Vec<String> {
    let name = &input.product_name;
    let integrations = input.integration_list();

    let mut ideas: Vec<String> = integrations
        .iter()
        .take(MAX_INTEGRATION_IDEAS)
        .map(|tool| {
            format!(
                "Trigger a {tool} alert when an account hits its first {name} milestone so the \
                 team can follow up within the hour."
            )
        })
        .collect();

    if integrations.is_empty() {
        ideas.push(format!(
            "Sync {name} activity into {} to keep the team's existing workflow in the loop.",
            input.integrations
        ));
    }

    let goal_ideas: [&str; 3] = match input.primary_goal {
        PrimaryGoal::AcquireUsers => [
            "Send behaviour-based onboarding nudges to users who stall before activation.",
            "Auto-invite teammates mentioned in shared workspaces with a one-click join link.",
            "Score new sign-ups by fit and route the top decile to a founder welcome call.",
        ],
        PrimaryGoal::GenerateRevenue => [
            "Flag accounts nearing plan limits and open an upgrade task in the CRM.",
            "Enrich inbound leads and route qualified ones to sales within five minutes.",
            "Trigger win-back sequences for trials that expire without converting.",
        ],
        PrimaryGoal::DriveAwareness => [
            "Repurpose every long-form post into social snippets on a weekly schedule.",
            "Alert the team to brand and category mentions for same-day engagement.",
            "Auto-generate shareable result cards from product usage milestones.",
        ],
    };
    ideas.extend(goal_ideas.iter().map(|s| s.to_string()));

    ideas.push(
        "Compile a weekly GTM digest from dashboard metrics and post it to the team channel."
            .to_string(),
    );

    ideas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize::fixtures::acme;

    #[test]
    fn one_idea_per_integration_capped_at_three() {
        let ideas = automation_ideas(&acme());
        assert!(ideas[0].contains("Slack"));
        assert!(ideas[1].contains("Jira"));
        assert!(ideas[2].contains("Intercom"));
        assert!(!ideas.iter().any(|i| i.contains("Zendesk")));
        assert_eq!(ideas.len(), 3 + 3 + 1);
    }

    #[test]
    fn unsplittable_integrations_still_yield_an_idea() {
        let mut input = acme();
        input.integrations = " , ;".to_string();
        let ideas = automation_ideas(&input);
        assert!(ideas[0].starts_with("Sync Acme activity"));
    }

    #[test]
    fn goal_changes_plays() {
        let mut input = acme();
        input.integrations = "Slack".to_string();
        input.primary_goal = PrimaryGoal::GenerateRevenue;
        let ideas = automation_ideas(&input);
        assert!(ideas[1].contains("CRM"));
        input.primary_goal = PrimaryGoal::DriveAwareness;
        assert!(automation_ideas(&input)[1].contains("social snippets"));
    }
}
