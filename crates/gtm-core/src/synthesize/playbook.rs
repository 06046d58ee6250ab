//! Launch playbook phases: Pre-Launch, Launch Day, Post-Launch.
//!
//! The launch date is embedded verbatim in each timeline; it is never
//! parsed, so "Q3" and "2025-01-01" are equally valid.

use crate::input::{GtmInput, LaunchStage};
use crate::plan::LaunchPhase;

/// One extra checklist item per phase that only applies at this stage.
fn stage_items(stage: LaunchStage) -> [&'static str; 3] {
    match stage {
        LaunchStage::Idea => [
            "Validate the problem with 15 discovery interviews",
            "Open the waitlist and announce the validation sprint",
            "Decide go or no-go on the MVP scope from interview data",
        ],
        LaunchStage::Beta => [
            "Recruit and onboard the first beta cohort",
            "Open public beta sign-ups with a referral incentive",
            "Convert beta feedback into a GA readiness list",
        ],
        LaunchStage::Ga => [
            "Brief sales, support and partners on GA packaging",
            "Coordinate press, analyst and partner announcements",
            "Launch expansion campaigns to existing accounts",
        ],
    }
}

pub fn launch_playbook(input: &GtmInput) -> Vec<LaunchPhase> {
    let date = &input.launch_date;
    let name = &input.product_name;
    let [pre, day, post] = stage_items(input.launch_stage);

    vec![
        LaunchPhase {
            phase: "Pre-Launch".to_string(),
            owner: "Founder + Product Marketing".to_string(),
            timeline: format!("4 weeks before {date}"),
            checklist: vec![
                pre.to_string(),
                format!("Finalize {name} positioning and messaging"),
                "Prepare launch assets, landing page and demo video".to_string(),
                "Line up 5 customer or design-partner quotes".to_string(),
            ],
        },
        LaunchPhase {
            phase: "Launch Day".to_string(),
            owner: "Growth Lead".to_string(),
            timeline: date.to_string(),
            checklist: vec![
                day.to_string(),
                "Publish announcement across owned channels".to_string(),
                "Staff live support and community channels all day".to_string(),
                "Monitor sign-ups and activation in real time".to_string(),
            ],
        },
        LaunchPhase {
            phase: "Post-Launch".to_string(),
            owner: "Customer Success + Growth".to_string(),
            timeline: format!("Weeks 1-6 after {date}"),
            checklist: vec![
                post.to_string(),
                "Run a launch retrospective within 7 days".to_string(),
                "Publish the first customer story".to_string(),
                "Review metrics weekly and reallocate channel spend".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize::fixtures::acme;

    #[test]
    fn three_phases_in_order() {
        let phases: Vec<String> = launch_playbook(&acme()).into_iter().map(|p| p.phase).collect();
        assert_eq!(phases, vec!["Pre-Launch", "Launch Day", "Post-Launch"]);
    }

    #[test]
    fn timelines_embed_launch_date_verbatim() {
        let mut input = acme();
        input.launch_date = "early spring".to_string();
        let playbook = launch_playbook(&input);
        assert_eq!(playbook[0].timeline, "4 weeks before early spring");
        assert_eq!(playbook[1].timeline, "early spring");
        assert!(playbook[2].timeline.ends_with("early spring"));
    }

    #[test]
    fn stage_drives_first_checklist_item() {
        let mut input = acme();
        input.launch_stage = LaunchStage::Idea;
        assert!(launch_playbook(&input)[0].checklist[0].contains("discovery interviews"));
        input.launch_stage = LaunchStage::Ga;
        assert!(launch_playbook(&input)[1].checklist[0].contains("press"));
    }

    #[test]
    fn every_phase_has_owner_and_checklist() {
        for phase in launch_playbook(&acme()) {
            assert!(!phase.owner.is_empty());
            assert_eq!(phase.checklist.len(), 4);
        }
    }
}
