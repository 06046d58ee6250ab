//! Go-to-market plan output types.
//!
//! These serialize to the camelCase JSON returned by `POST /api/generate`.
//! Field order is fixed, so serialization of a given plan is stable.

use serde::{Deserialize, Serialize};

/// The complete go-to-market plan for one product brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmPlan {
    /// One-paragraph positioning statement.
    pub north_star: String,
    pub market_summary: String,
    pub personas: Vec<Persona>,
    pub value_matrix: Vec<ValueMatrixRow>,
    pub channel_plan: Vec<ChannelPlan>,
    pub content_calendar: Vec<ContentCalendarEntry>,
    pub launch_playbook: Vec<LaunchPhase>,
    pub sales_enablement: Vec<SalesAsset>,
    pub metrics_dashboard: Vec<Metric>,
    pub automation_ideas: Vec<String>,
    /// Founder context, carried through from the brief untouched.
    pub founder_notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub title: String,
    pub description: String,
    pub pains: Vec<String>,
    pub triggers: Vec<String>,
    pub proof_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueMatrixRow {
    pub pillar: String,
    pub benefit: String,
    pub message: String,
    pub proof: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPlan {
    pub channel: String,
    pub objective: String,
    pub narrative: String,
    pub cadences: Vec<String>,
    pub success_signals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCalendarEntry {
    /// 1-based week number.
    pub week: u32,
    /// Display label, e.g. `Week 1`.
    pub label: String,
    pub content_type: String,
    pub theme: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPhase {
    pub phase: String,
    pub owner: String,
    pub timeline: String,
    pub checklist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAsset {
    pub asset: String,
    pub primary_use: String,
    pub key_points: Vec<String>,
    pub delivery_format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub definition: String,
    pub target: String,
    pub instrumentation: String,
}

impl GtmPlan {
    /// Names and lengths of every list section, in plan order.
    pub fn section_sizes(&self) -> [(&'static str, usize); 8] {
        [
            ("personas", self.personas.len()),
            ("valueMatrix", self.value_matrix.len()),
            ("channelPlan", self.channel_plan.len()),
            ("contentCalendar", self.content_calendar.len()),
            ("launchPlaybook", self.launch_playbook.len()),
            ("salesEnablement", self.sales_enablement.len()),
            ("metricsDashboard", self.metrics_dashboard.len()),
            ("automationIdeas", self.automation_ideas.len()),
        ]
    }
}
