//! Channel operations for Content & SEO, Community, Outbound and
//! Product-Led Growth, in that order.
//!
//! Objectives follow the primary goal; cadence intensity follows the
//! launch stage.

use crate::input::{GtmInput, LaunchStage, PrimaryGoal};
use crate::plan::ChannelPlan;

/// Stage-specific lead cadence for each channel.
struct Rhythm {
    content: &'static str,
    community: &'static str,
    outbound: &'static str,
    product: &'static str,
}

fn rhythm(stage: LaunchStage) -> Rhythm {
    match stage {
        LaunchStage::Idea => Rhythm {
            content: "1 problem-framing post every two weeks",
            community: "Weekly listening session in 2 niche communities",
            outbound: "10 discovery conversations per week",
            product: "Waitlist with a qualifying survey",
        },
        LaunchStage::Beta => Rhythm {
            content: "1 deep-dive article per week",
            community: "Bi-weekly beta office hours",
            outbound: "25 targeted early-adopter invites per week",
            product: "Weekly in-app release notes to beta cohort",
        },
        LaunchStage::Ga => Rhythm {
            content: "2 SEO articles and 1 customer story per week",
            community: "Monthly live event plus always-on community forum",
            outbound: "Multi-touch sequences to 150 accounts per week",
            product: "Lifecycle emails triggered by product usage",
        },
    }
}

pub fn channel_plan(input: &GtmInput) -> Vec<ChannelPlan> {
    let category = &input.category;
    let audience = &input.target_audience;
    let name = &input.product_name;
    let rhythm = rhythm(input.launch_stage);

    let (content_obj, community_obj, outbound_obj, product_obj) = match input.primary_goal {
        PrimaryGoal::AcquireUsers => (
            "Drive qualified sign-ups",
            "Turn early users into advocates",
            "Book activation-focused demos",
            "Maximize activation and habit formation",
        ),
        PrimaryGoal::GenerateRevenue => (
            "Capture high-intent buyers",
            "Surface expansion and upsell signals",
            "Build pipeline with qualified opportunities",
            "Convert free usage into paid plans",
        ),
        PrimaryGoal::DriveAwareness => (
            "Own category search and thought leadership",
            "Spark conversation and word of mouth",
            "Seed the story with analysts and partners",
            "Make every shared artifact a billboard",
        ),
    };

    vec![
        ChannelPlan {
            channel: "Content & SEO".to_string(),
            objective: content_obj.to_string(),
            narrative: format!(
                "Publish opinionated {category} playbooks that answer the questions {audience} \
                 search for, each ending with a clear path into {name}."
            ),
            cadences: vec![
                rhythm.content.to_string(),
                "Monthly refresh of top-performing pages".to_string(),
            ],
            success_signals: vec![
                "Organic sessions from target keywords".to_string(),
                "Content-assisted sign-ups".to_string(),
            ],
        },
        ChannelPlan {
            channel: "Community".to_string(),
            objective: community_obj.to_string(),
            narrative: format!(
                "Show up where {audience} already gather, share behind-the-scenes progress and \
                 let early users teach each other."
            ),
            cadences: vec![
                rhythm.community.to_string(),
                "Weekly highlight of a community member win".to_string(),
            ],
            success_signals: vec![
                "Active members and repeat participants".to_string(),
                "Inbound mentions and referrals".to_string(),
            ],
        },
        ChannelPlan {
            channel: "Outbound".to_string(),
            objective: outbound_obj.to_string(),
            narrative: format!(
                "Reach {audience} with trigger-based outreach tied to a specific pain {name} \
                 removes, never a generic pitch."
            ),
            cadences: vec![
                rhythm.outbound.to_string(),
                "Weekly sequence review and copy iteration".to_string(),
            ],
            success_signals: vec![
                "Positive reply rate".to_string(),
                "Meetings booked per 100 contacts".to_string(),
            ],
        },
        ChannelPlan {
            channel: "Product-Led Growth".to_string(),
            objective: product_obj.to_string(),
            narrative: format!(
                "Let the product sell itself: a frictionless first run, built-in sharing and \
                 upgrade moments that appear exactly when {name} has proven value."
            ),
            cadences: vec![
                rhythm.product.to_string(),
                "Bi-weekly onboarding funnel experiment".to_string(),
            ],
            success_signals: vec![
                "Activation rate within the first week".to_string(),
                "Invites sent per active account".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize::fixtures::acme;

    #[test]
    fn four_channels_in_fixed_order() {
        let names: Vec<String> = channel_plan(&acme()).into_iter().map(|c| c.channel).collect();
        assert_eq!(
            names,
            vec!["Content & SEO", "Community", "Outbound", "Product-Led Growth"]
        );
    }

    #[test]
    fn objectives_follow_goal() {
        let mut input = acme();
        input.primary_goal = PrimaryGoal::GenerateRevenue;
        let plan = channel_plan(&input);
        assert_eq!(plan[2].objective, "Build pipeline with qualified opportunities");
        assert_eq!(plan[3].objective, "Convert free usage into paid plans");
    }

    #[test]
    fn cadence_follows_stage() {
        let mut input = acme();
        input.launch_stage = LaunchStage::Idea;
        let idea = channel_plan(&input);
        input.launch_stage = LaunchStage::Ga;
        let ga = channel_plan(&input);
        assert_ne!(idea[0].cadences[0], ga[0].cadences[0]);
        assert!(ga[2].cadences[0].contains("150 accounts"));
    }

    #[test]
    fn every_channel_has_cadence_and_signals() {
        for channel in channel_plan(&acme()) {
            assert!(!channel.cadences.is_empty());
            assert!(!channel.success_signals.is_empty());
            assert!(!channel.narrative.is_empty());
        }
    }
}
