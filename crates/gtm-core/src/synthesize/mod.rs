//! Plan synthesis: deterministic template expansion over a [`GtmInput`].
//!
//! Each submodule derives one section of the plan from a documented subset
//! of the input fields. None of them share state, perform I/O, or can fail.

pub mod automation;
pub mod calendar;
pub mod channels;
pub mod enablement;
pub mod metrics;
pub mod narrative;
pub mod personas;
pub mod playbook;
pub mod value_matrix;

use crate::input::GtmInput;
use crate::plan::GtmPlan;

/// Build the full go-to-market plan for a validated brief.
pub fn synthesize(input: &GtmInput) -> GtmPlan {
    let plan = GtmPlan {
        north_star: narrative::north_star(input),
        market_summary: narrative::market_summary(input),
        personas: personas::personas(input),
        value_matrix: value_matrix::value_matrix(input),
        channel_plan: channels::channel_plan(input),
        content_calendar: calendar::content_calendar(input),
        launch_playbook: playbook::launch_playbook(input),
        sales_enablement: enablement::sales_enablement(input),
        metrics_dashboard: metrics::metrics_dashboard(input),
        automation_ideas: automation::automation_ideas(input),
        founder_notes: input.founder_notes.clone(),
    };

    tracing::debug!(
        product = %input.product_name,
        stage = %input.launch_stage,
        goal = %input.primary_goal,
        tone = %input.tone,
        personas = plan.personas.len(),
        channels = plan.channel_plan.len(),
        metrics = plan.metrics_dashboard.len(),
        "synthesized GTM plan"
    );

    plan
}

/// Lowercase the first character, for splicing a phrase mid-sentence.
pub(crate) fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip trailing sentence punctuation so a phrase can be embedded.
///
/// Text made only of terminators is returned trimmed but otherwise intact.
pub(crate) fn clause(s: &str) -> &str {
    let trimmed = s.trim();
    match trimmed.trim_end_matches(['.', '!', '?']) {
        "" => trimmed,
        stripped => stripped,
    }
}

/// Close a phrase with a period unless it already ends in a terminator.
pub(crate) fn sentence(s: &str) -> String {
    if s.ends_with(['.', '!', '?']) {
        s.to_string()
    } else {
        format!("{s}.")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_first_handles_empty_and_ascii() {
        assert_eq!(lower_first(""), "");
        assert_eq!(lower_first("Clusters feedback"), "clusters feedback");
    }

    #[test]
    fn clause_strips_terminal_punctuation() {
        assert_eq!(clause(" Zero setup!. "), "Zero setup");
        assert_eq!(clause("No punctuation"), "No punctuation");
    }

    #[test]
    fn sentence_adds_a_single_period() {
        assert_eq!(sentence("zero setup"), "zero setup.");
        assert_eq!(sentence("..."), "...");
    }

    #[test]
    fn clause_keeps_punctuation_only_text() {
        assert_eq!(clause("..."), "...");
        assert_eq!(clause("  ?! "), "?!");
    }

    #[test]
    fn punctuation_only_brief_text_survives_synthesis() {
        let mut input = fixtures::acme();
        input.description = "...".to_string();
        input.differentiation = "...".to_string();
        let plan = synthesize(&input);

        assert!(plan.north_star.contains(": ... "), "{}", plan.north_star);
        assert!(plan.value_matrix[0].benefit.starts_with("..."));
        assert!(plan.value_matrix[2].message.ends_with(": ..."));
        assert_eq!(plan.value_matrix[2].benefit, "...");
        assert_eq!(plan.sales_enablement[0].key_points[0], "Core differentiator: ...");
        assert!(plan.personas[0].proof_points[0].ends_with("..."));
    }

    #[test]
    fn synthesize_carries_founder_notes_verbatim() {
        let input = fixtures::acme();
        let plan = synthesize(&input);
        assert_eq!(plan.founder_notes, input.founder_notes);
    }

    #[test]
    fn synthesize_fills_every_section() {
        let plan = synthesize(&fixtures::acme());
        assert!(!plan.north_star.is_empty());
        assert!(!plan.market_summary.is_empty());
        for (name, len) in plan.section_sizes() {
            assert!(len > 0, "section {name} should not be empty");
        }
    }
}
