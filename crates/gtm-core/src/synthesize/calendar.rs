//! Six-week content calendar.
//!
//! Content formats and calls to action rotate by tone; every theme is
//! anchored in the product category.

use crate::input::{GtmInput, Tone};
use crate::plan::ContentCalendarEntry;

const WEEKS: u32 = 6;

/// Content formats for each tone, one per week.
fn formats(tone: Tone) -> [&'static str; WEEKS as usize] {
    match tone {
        Tone::Visionary => [
            "Manifesto essay",
            "Founder keynote video",
            "Future-of-work report",
            "Customer vision story",
            "Live fireside chat",
            "Roadmap reveal",
        ],
        Tone::Pragmatic => [
            "How-to guide",
            "ROI calculator",
            "Workflow teardown",
            "Customer case study",
            "Implementation checklist",
            "Live product walkthrough",
        ],
        Tone::Playful => [
            "Meme thread",
            "Behind-the-scenes reel",
            "Interactive quiz",
            "Community challenge",
            "Blooper-style demo",
            "Launch party stream",
        ],
        Tone::DataDriven => [
            "Benchmark report",
            "Data teardown",
            "Metrics dashboard tour",
            "Quantified case study",
            "Survey results",
            "Experiment recap",
        ],
    }
}

fn call_to_action(tone: Tone, week: u32) -> &'static str {
    let ctas: [&str; 3] = match tone {
        Tone::Visionary => ["Join the movement", "Reserve your spot", "Shape the roadmap"],
        Tone::Pragmatic => ["Start a free trial", "Book a 20-minute demo", "Download the template"],
        Tone::Playful => ["Jump in for free", "Share it with your crew", "Take the challenge"],
        Tone::DataDriven => ["Get the full report", "Benchmark your team", "See the numbers live"],
    };
    ctas[((week - 1) % 3) as usize]
}

pub fn content_calendar(input: &GtmInput) -> Vec<ContentCalendarEntry> {
    let category = &input.category;
    let name = &input.product_name;

    let themes = [
        format!("Why {category} is broken today"),
        format!("The new playbook for {category}"),
        format!("Inside {name}: how it works"),
        format!("Proof: early wins with {name}"),
        format!("Scaling {category} without extra headcount"),
        format!("What's next for {name}"),
    ];

    formats(input.tone)
        .into_iter()
        .zip(themes)
        .enumerate()
        .map(|(i, (content_type, theme))| {
            let week = i as u32 + 1;
            ContentCalendarEntry {
                week,
                label: format!("Week {week}"),
                content_type: content_type.to_string(),
                theme,
                call_to_action: call_to_action(input.tone, week).to_string(),
            }
        })
        .collect()
}
