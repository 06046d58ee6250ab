//! Core of gtm: product brief validation and go-to-market plan synthesis.
//!
//! Everything here is pure. The CLI and HTTP server live in `gtm-cli`.

pub mod input;
pub mod plan;
pub mod render;
pub mod synthesize;

pub use input::{
    EnumParseError, GtmInput, InputError, LaunchStage, PricingStrategy, PrimaryGoal,
    REQUIRED_FIELDS, Tone,
};
pub use plan::{
    ChannelPlan, ContentCalendarEntry, GtmPlan, LaunchPhase, Metric, Persona, SalesAsset,
    ValueMatrixRow,
};
pub use render::{render_markdown, write_markdown};
pub use synthesize::synthesize;
