//! Markdown rendering of a [`GtmPlan`].
//!
//! Produces one heading per plan section in plan order, so the output can
//! be pasted straight into a wiki or shared doc.

use std::fmt::{self, Write};

use crate::plan::GtmPlan;

/// Section headings, in the order they are rendered.
pub const SECTION_TITLES: [&str; 11] = [
    "North Star",
    "Market Pulse",
    "Persona Intelligence",
    "Value Matrix",
    "Channel Operations",
    "Content Calendar",
    "Launch Plays",
    "Sales Enablement",
    "Metrics Dashboard",
    "Automation Track",
    "Founder Notes",
];

/// Render a plan as a Markdown document titled with `product_name`.
pub fn render_markdown(product_name: &str, plan: &GtmPlan) -> String {
    let mut out = String::with_capacity(8192);
    write_markdown(&mut out, product_name, plan).expect("writing to a String cannot fail");
    out
}

fn write_list<W: Write>(out: &mut W, title: &str, items: &[String]) -> fmt::Result {
    writeln!(out, "*{title}:*")?;
    for item in items {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}

/// Write the Markdown rendering of `plan` into any formatter sink.
pub fn write_markdown<W: Write>(out: &mut W, product_name: &str, plan: &GtmPlan) -> fmt::Result {
    let [
        north,
        market,
        personas,
        matrix,
        channels,
        calendar,
        launch,
        sales,
        metrics,
        automation,
        notes,
    ] = SECTION_TITLES;

    writeln!(out, "# {product_name} go-to-market plan\n")?;

    writeln!(out, "## {north}\n\n{}\n", plan.north_star)?;
    writeln!(out, "## {market}\n\n{}\n", plan.market_summary)?;

    writeln!(out, "## {personas}\n")?;
    for persona in &plan.personas {
        writeln!(out, "### {}\n\n{}\n", persona.title, persona.description)?;
        write_list(out, "Pains", &persona.pains)?;
        write_list(out, "Triggers", &persona.triggers)?;
        write_list(out, "Proof", &persona.proof_points)?;
        writeln!(out)?;
    }

    writeln!(out, "## {matrix}\n")?;
    writeln!(out, "| Pillar | Benefit | Message | Proof |")?;
    writeln!(out, "|---|---|---|---|")?;
    for row in &plan.value_matrix {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            row.pillar,
            escape_cell(&row.benefit),
            escape_cell(&row.message),
            escape_cell(&row.proof)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## {channels}\n")?;
    for channel in &plan.channel_plan {
        writeln!(
            out,
            "### {} ({})\n\n{}\n",
            channel.channel, channel.objective, channel.narrative
        )?;
        write_list(out, "Cadence", &channel.cadences)?;
        write_list(out, "Signals", &channel.success_signals)?;
        writeln!(out)?;
    }

    writeln!(out, "## {calendar}\n")?;
    writeln!(out, "| Week | Format | Theme | CTA |")?;
    writeln!(out, "|---|---|---|---|")?;
    for entry in &plan.content_calendar {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            entry.label,
            entry.content_type,
            escape_cell(&entry.theme),
            entry.call_to_action
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## {launch}\n")?;
    for phase in &plan.launch_playbook {
        writeln!(
            out,
            "### {}\n\nOwner: {}  \nTimeline: {}\n",
            phase.phase, phase.owner, phase.timeline
        )?;
        for item in &phase.checklist {
            writeln!(out, "- [ ] {item}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "## {sales}\n")?;
    for asset in &plan.sales_enablement {
        writeln!(
            out,
            "### {}\n\n{} ({})\n",
            asset.asset, asset.primary_use, asset.delivery_format
        )?;
        for point in &asset.key_points {
            writeln!(out, "- {point}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "## {metrics}\n")?;
    writeln!(out, "| Metric | Definition | Target | Instrumentation |")?;
    writeln!(out, "|---|---|---|---|")?;
    for metric in &plan.metrics_dashboard {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            metric.label,
            escape_cell(&metric.definition),
            escape_cell(&metric.target),
            escape_cell(&metric.instrumentation)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## {automation}\n")?;
    for idea in &plan.automation_ideas {
        writeln!(out, "- {idea}")?;
    }
    writeln!(out)?;

    writeln!(out, "## {notes}\n\n{}", plan.founder_notes)?;
    Ok(())
}

/// Keep free text from breaking a Markdown table row.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize::{fixtures::acme, synthesize};

    #[test]
    fn headings_appear_in_plan_order() {
        let md = render_markdown("Acme", &synthesize(&acme()));
        let mut last = 0;
        for title in SECTION_TITLES {
            let heading = format!("## {title}\n");
            let pos = md
                .find(&heading)
                .unwrap_or_else(|| panic!("missing heading {title:?}"));
            assert!(pos >= last, "heading {title:?} out of order");
            last = pos;
        }
        assert!(md.starts_with("# Acme go-to-market plan"));
    }

    #[test]
    fn table_cells_escape_pipes() {
        assert_eq!(escape_cell("a | b\nc"), "a \\| b c");
    }

    #[test]
    fn rendering_is_deterministic() {
        let plan = synthesize(&acme());
        assert_eq!(render_markdown("Acme", &plan), render_markdown("Acme", &plan));
    }

    struct FullSink;

    impl Write for FullSink {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn write_markdown_propagates_sink_errors() {
        let plan = synthesize(&acme());
        assert!(write_markdown(&mut FullSink, "Acme", &plan).is_err());
    }

    #[test]
    fn write_markdown_matches_render_markdown() {
        let plan = synthesize(&acme());
        let mut out = String::new();
        write_markdown(&mut out, "Acme", &plan).unwrap();
        assert_eq!(out, render_markdown("Acme", &plan));
    }

    #[test]
    fn founder_notes_close_the_document() {
        let md = render_markdown("Acme", &synthesize(&acme()));
        assert!(md.trim_end().ends_with("Stay self-serve until we hit 500 teams."));
    }
}
