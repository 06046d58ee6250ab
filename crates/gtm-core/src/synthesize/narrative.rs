//! North-star narrative and market summary.

use crate::input::{GtmInput, LaunchStage, PrimaryGoal, Tone};

use super::{clause, lower_first, sentence};

/// Outcome clause for the positioning statement, keyed by goal.
fn goal_outcome(goal: PrimaryGoal) -> &'static str {
    match goal {
        PrimaryGoal::AcquireUsers => "turn early adopters into a vocal base of power users",
        PrimaryGoal::GenerateRevenue => "convert proven value into predictable, expanding revenue",
        PrimaryGoal::DriveAwareness => "become the name the market reaches for first",
    }
}

/// Positioning statement built from productName, category,
/// differentiation and primaryGoal. `tone` picks the phrasing template.
pub fn north_star(input: &GtmInput) -> String {
    let name = &input.product_name;
    let category = &input.category;
    let edge = sentence(&lower_first(clause(&input.differentiation)));
    let outcome = goal_outcome(input.primary_goal);

    match input.tone {
        Tone::Visionary => format!(
            "{name} is redefining what {category} can be, built on one clear edge: {edge} \
             Teams stop settling for incremental tools and start building the future they \
             imagined. Our north star: {outcome}, and make {name} the movement every {category} \
             team wants to join."
        ),
        Tone::Pragmatic => format!(
            "{name} gives {category} teams a measurable return from day one. The edge is \
             concrete: {edge} That cuts wasted hours and shortens time-to-value. The plan is \
             simple: {outcome} by proving ROI in every conversation and every onboarding."
        ),
        Tone::Playful => format!(
            "Meet {name}, the {category} sidekick you didn't know you were missing. Secret \
             sauce: {edge} The boring bits disappear and the fun work gets all the attention. \
             Mission: {outcome}, and have a great time doing it."
        ),
        Tone::DataDriven => format!(
            "{name} is a {category} platform built to move the numbers that matter. \
             Differentiator under test: {edge} Every claim is backed by instrumented \
             before-and-after benchmarks. Target state: {outcome}, tracked weekly against a \
             published baseline."
        ),
    }
}

/// Contextual paragraph from targetAudience, category and launchStage.
/// The launch date is quoted as given.
pub fn market_summary(input: &GtmInput) -> String {
    let audience = &input.target_audience;
    let category = &input.category;
    let date = &input.launch_date;

    match input.launch_stage {
        LaunchStage::Idea => format!(
            "{audience} are actively searching for better {category} options, but the problem \
             still needs validation. Before {date}, prioritize discovery interviews and \
             smoke-test landing pages to confirm willingness to adopt and pay."
        ),
        LaunchStage::Beta => format!(
            "{audience} are open to trying new {category} tools when the payoff is obvious. \
             With a beta underway ahead of {date}, recruit early adopters, tighten the feedback \
             loop and turn the first wins into referenceable stories."
        ),
        LaunchStage::Ga => format!(
            "{audience} now expect {category} products to prove value fast and scale with them. \
             Heading into general availability on {date}, focus on repeatable acquisition, \
             expansion motions and category leadership."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize::fixtures::acme;

    #[test]
    fn north_star_mentions_name_category_and_edge() {
        let text = north_star(&acme());
        assert!(text.contains("Acme"));
        assert!(text.contains("SaaS"));
        assert!(text.contains("clusters feedback automatically with zero setup"));
        assert!(!text.contains("setup.."), "trailing period should be stripped: {text}");
    }

    #[test]
    fn noun_phrase_edge_reads_as_its_own_sentence() {
        let mut input = acme();
        input.differentiation = "Only platform with native ERP sync".to_string();
        for tone in Tone::ALL {
            input.tone = tone;
            let text = north_star(&input);
            assert!(
                text.contains(": only platform with native ERP sync. "),
                "tone {tone}: {text}"
            );
        }
    }

    #[test]
    fn every_tone_produces_distinct_phrasing() {
        let mut input = acme();
        let mut seen = Vec::new();
        for tone in Tone::ALL {
            input.tone = tone;
            let text = north_star(&input);
            assert!(!seen.contains(&text), "tone {tone} repeated another tone's text");
            seen.push(text);
        }
    }

    #[test]
    fn pragmatic_tone_is_roi_centric() {
        let mut input = acme();
        input.tone = Tone::Pragmatic;
        assert!(north_star(&input).contains("ROI"));
        input.tone = Tone::DataDriven;
        assert!(north_star(&input).contains("benchmarks"));
    }

    #[test]
    fn goal_changes_outcome_clause() {
        let mut input = acme();
        input.primary_goal = PrimaryGoal::GenerateRevenue;
        assert!(north_star(&input).contains("predictable, expanding revenue"));
    }

    #[test]
    fn market_summary_frames_by_stage() {
        let mut input = acme();
        input.launch_stage = LaunchStage::Idea;
        assert!(market_summary(&input).contains("validation"));
        input.launch_stage = LaunchStage::Beta;
        assert!(market_summary(&input).contains("early adopters"));
        input.launch_stage = LaunchStage::Ga;
        assert!(market_summary(&input).contains("scale"));
    }

    #[test]
    fn market_summary_quotes_launch_date_verbatim() {
        let mut input = acme();
        input.launch_date = "sometime in Q3".to_string();
        let text = market_summary(&input);
        assert!(text.contains("PMs"));
        assert!(text.contains("sometime in Q3"));
    }
}
