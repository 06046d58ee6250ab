//! Metrics dashboard.
//!
//! The primary goal selects which four metrics are tracked; the launch
//! stage selects how ambitious each target is.

use crate::input::{GtmInput, LaunchStage, PrimaryGoal};
use crate::plan::Metric;

/// Static description of one metric with a target per stage.
struct MetricSpec {
    label: &'static str,
    definition: &'static str,
    /// Targets for idea, beta and ga, in that order.
    targets: [&'static str; 3],
    instrumentation: &'static str,
}

static ACQUISITION: [MetricSpec; 4] = [
    MetricSpec {
        label: "Activation Rate",
        definition: "Share of new sign-ups that reach the first meaningful outcome",
        targets: ["30% of waitlist testers", "40% within 7 days", "55% within 7 days"],
        instrumentation: "Product analytics funnel from sign-up to first outcome event",
    },
    MetricSpec {
        label: "Week-4 Retention",
        definition: "Share of activated accounts still active four weeks later",
        targets: ["20% of testers", "35% of beta accounts", "45% of new accounts"],
        instrumentation: "Cohort retention report keyed on weekly active usage",
    },
    MetricSpec {
        label: "Weekly Active Users",
        definition: "Unique users performing a core action each week",
        targets: ["50 engaged testers", "500 weekly actives", "5,000 weekly actives"],
        instrumentation: "Core action events tracked per user per week",
    },
    MetricSpec {
        label: "Referral Rate",
        definition: "Share of active users who invite at least one teammate",
        targets: ["10% of testers", "15% of active users", "25% of active users"],
        instrumentation: "Invite sent and accepted events with attribution",
    },
];

static REVENUE: [MetricSpec; 4] = [
    MetricSpec {
        label: "Monthly Recurring Revenue",
        definition: "Normalized monthly revenue from active paid accounts",
        targets: ["5 letters of intent", "$10k MRR", "$100k MRR"],
        instrumentation: "Billing system synced to the revenue dashboard",
    },
    MetricSpec {
        label: "Trial-to-Paid Conversion",
        definition: "Share of trials or free accounts that upgrade to paid",
        targets: ["3 pilot commitments", "8% conversion", "12% conversion"],
        instrumentation: "Upgrade events joined to trial start cohort",
    },
    MetricSpec {
        label: "Average Contract Value",
        definition: "Mean annualized value of new paid contracts",
        targets: ["Validated price point", "$2k ACV", "$8k ACV"],
        instrumentation: "CRM closed-won records with contract value",
    },
    MetricSpec {
        label: "Pipeline Coverage",
        definition: "Qualified pipeline value relative to the revenue target",
        targets: ["10 qualified conversations", "2x coverage", "3x coverage"],
        instrumentation: "CRM opportunity stages with weighted forecasting",
    },
];

static AWARENESS: [MetricSpec; 4] = [
    MetricSpec {
        label: "Audience Reach",
        definition: "Unique people exposed to launch content across channels",
        targets: ["5k impressions", "50k impressions", "500k impressions"],
        instrumentation: "Channel analytics rolled up in a weekly reach report",
    },
    MetricSpec {
        label: "Engagement Rate",
        definition: "Interactions divided by impressions on owned content",
        targets: ["3% engagement", "5% engagement", "6% engagement"],
        instrumentation: "Social and content platform engagement exports",
    },
    MetricSpec {
        label: "Share of Voice",
        definition: "Brand mentions relative to named alternatives in the category",
        targets: ["First 20 organic mentions", "10% share of voice", "25% share of voice"],
        instrumentation: "Social listening tool tracking brand and competitor terms",
    },
    MetricSpec {
        label: "Branded Search Volume",
        definition: "Monthly searches for the product name",
        targets: ["Baseline established", "500 searches per month", "5k searches per month"],
        instrumentation: "Search console and keyword tool trend tracking",
    },
];

fn specs(goal: PrimaryGoal) -> &'static [MetricSpec; 4] {
    match goal {
        PrimaryGoal::AcquireUsers => &ACQUISITION,
        PrimaryGoal::GenerateRevenue => &REVENUE,
        PrimaryGoal::DriveAwareness => &AWARENESS,
    }
}

pub fn metrics_dashboard(input: &GtmInput) -> Vec<Metric> {
    let stage = match input.launch_stage {
        LaunchStage::Idea => 0,
        LaunchStage::Beta => 1,
        LaunchStage::Ga => 2,
    };

    specs(input.primary_goal)
        .iter()
        .map(|spec| Metric {
            label: spec.label.to_string(),
            definition: spec.definition.to_string(),
            target: spec.targets[stage].to_string(),
            instrumentation: spec.instrumentation.to_string(),
        })
        .collect()
}
