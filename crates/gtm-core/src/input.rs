//! Product brief input: closed enumerations, the typed record, and
//! validation of raw JSON payloads.
//!
//! Validation mirrors the request contract of `POST /api/generate`:
//! fields are checked in declaration order and the first missing one is
//! reported. Enum fields fail closed on unknown values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Error returned when parsing an enum field from its wire value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} {value:?} (expected one of: {expected})")]
pub struct EnumParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// How far along the product is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchStage {
    Idea,
    Beta,
    Ga,
}

impl LaunchStage {
    pub const ALL: [Self; 3] = [Self::Idea, Self::Beta, Self::Ga];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Beta => "beta",
            Self::Ga => "ga",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idea => "Idea Validation",
            Self::Beta => "Private/Public Beta",
            Self::Ga => "General Availability",
        }
    }
}

impl fmt::Display for LaunchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaunchStage {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idea" => Ok(Self::Idea),
            "beta" => Ok(Self::Beta),
            "ga" => Ok(Self::Ga),
            other => Err(EnumParseError {
                kind: "launch stage",
                value: other.to_owned(),
                expected: "idea, beta, ga",
            }),
        }
    }
}

// ---------------------------------------------------------------------------

/// The single outcome the launch is optimised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryGoal {
    AcquireUsers,
    GenerateRevenue,
    DriveAwareness,
}

impl PrimaryGoal {
    pub const ALL: [Self; 3] = [
        Self::AcquireUsers,
        Self::GenerateRevenue,
        Self::DriveAwareness,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AcquireUsers => "acquire-users",
            Self::GenerateRevenue => "generate-revenue",
            Self::DriveAwareness => "drive-awareness",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AcquireUsers => "Acquire Power Users",
            Self::GenerateRevenue => "Generate Revenue",
            Self::DriveAwareness => "Drive Awareness",
        }
    }
}

impl fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimaryGoal {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "acquire-users" => Ok(Self::AcquireUsers),
            "generate-revenue" => Ok(Self::GenerateRevenue),
            "drive-awareness" => Ok(Self::DriveAwareness),
            other => Err(EnumParseError {
                kind: "primary goal",
                value: other.to_owned(),
                expected: "acquire-users, generate-revenue, drive-awareness",
            }),
        }
    }
}

// ---------------------------------------------------------------------------

/// Commercial model the product is sold under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingStrategy {
    Freemium,
    Premium,
    UsageBased,
    OneTime,
    Custom,
}

impl PricingStrategy {
    pub const ALL: [Self; 5] = [
        Self::Freemium,
        Self::Premium,
        Self::UsageBased,
        Self::OneTime,
        Self::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Freemium => "freemium",
            Self::Premium => "premium",
            Self::UsageBased => "usage-based",
            Self::OneTime => "one-time",
            Self::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Freemium => "Freemium",
            Self::Premium => "Premium",
            Self::UsageBased => "Usage Based",
            Self::OneTime => "One-time Purchase",
            Self::Custom => "Custom / Enterprise",
        }
    }
}

impl fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingStrategy {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "freemium" => Ok(Self::Freemium),
            "premium" => Ok(Self::Premium),
            "usage-based" => Ok(Self::UsageBased),
            "one-time" => Ok(Self::OneTime),
            "custom" => Ok(Self::Custom),
            other => Err(EnumParseError {
                kind: "pricing strategy",
                value: other.to_owned(),
                expected: "freemium, premium, usage-based, one-time, custom",
            }),
        }
    }
}

// ---------------------------------------------------------------------------

/// Brand voice used for narrative and content phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Visionary,
    Pragmatic,
    Playful,
    DataDriven,
}

impl Tone {
    pub const ALL: [Self; 4] = [
        Self::Visionary,
        Self::Pragmatic,
        Self::Playful,
        Self::DataDriven,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visionary => "visionary",
            Self::Pragmatic => "pragmatic",
            Self::Playful => "playful",
            Self::DataDriven => "data-driven",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Visionary => "Visionary",
            Self::Pragmatic => "Pragmatic",
            Self::Playful => "Playful",
            Self::DataDriven => "Data Driven",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visionary" => Ok(Self::Visionary),
            "pragmatic" => Ok(Self::Pragmatic),
            "playful" => Ok(Self::Playful),
            "data-driven" => Ok(Self::DataDriven),
            other => Err(EnumParseError {
                kind: "tone",
                value: other.to_owned(),
                expected: "visionary, pragmatic, playful, data-driven",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Input record
// ---------------------------------------------------------------------------

/// A validated product brief. Text fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtmInput {
    pub product_name: String,
    /// Problem statement and the outcome the product delivers.
    pub description: String,
    pub category: String,
    pub target_audience: String,
    pub launch_stage: LaunchStage,
    pub primary_goal: PrimaryGoal,
    pub pricing_strategy: PricingStrategy,
    pub tone: Tone,
    /// Free-form launch date text. Never parsed.
    pub launch_date: String,
    pub differentiation: String,
    /// Systems the product plugs into, usually a comma-separated list.
    pub integrations: String,
    pub founder_notes: String,
}

/// Required payload fields, in the order they are validated.
pub const REQUIRED_FIELDS: [&str; 12] = [
    "productName",
    "description",
    "category",
    "targetAudience",
    "launchStage",
    "primaryGoal",
    "pricingStrategy",
    "tone",
    "launchDate",
    "differentiation",
    "integrations",
    "founderNotes",
];

/// Errors produced while turning a raw payload into a [`GtmInput`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {field} must be a string")]
    InvalidType { field: &'static str },

    #[error("Invalid value for {field}: {value:?} (expected one of: {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl InputError {
    /// The payload field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field)
            | Self::InvalidType { field }
            | Self::InvalidValue { field, .. } => field,
        }
    }
}

/// Whether a payload value counts as absent.
///
/// Null, `false`, zero and blank strings are all treated as not provided.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

impl GtmInput {
    /// Validate a raw JSON payload and build the typed input.
    ///
    /// Presence of all twelve fields is checked first, in
    /// [`REQUIRED_FIELDS`] order, before any type or enum checks run.
    /// A payload that is not an object has no fields, so it reports
    /// `productName` as missing.
    pub fn from_payload(payload: &Value) -> Result<Self, InputError> {
        let empty = Map::new();
        let obj = payload.as_object().unwrap_or(&empty);

        for field in REQUIRED_FIELDS {
            if is_missing(obj.get(field)) {
                return Err(InputError::MissingField(field));
            }
        }

        let text = |field: &'static str| -> Result<String, InputError> {
            match obj.get(field) {
                Some(Value::String(s)) => Ok(s.trim().to_owned()),
                _ => Err(InputError::InvalidType { field }),
            }
        };

        fn choice<T>(field: &'static str, raw: &str) -> Result<T, InputError>
        where
            T: FromStr<Err = EnumParseError>,
        {
            raw.parse().map_err(|e: EnumParseError| InputError::InvalidValue {
                field,
                value: e.value,
                expected: e.expected,
            })
        }

        Ok(Self {
            product_name: text("productName")?,
            description: text("description")?,
            category: text("category")?,
            target_audience: text("targetAudience")?,
            launch_stage: choice("launchStage", &text("launchStage")?)?,
            primary_goal: choice("primaryGoal", &text("primaryGoal")?)?,
            pricing_strategy: choice("pricingStrategy", &text("pricingStrategy")?)?,
            tone: choice("tone", &text("tone")?)?,
            launch_date: text("launchDate")?,
            differentiation: text("differentiation")?,
            integrations: text("integrations")?,
            founder_notes: text("founderNotes")?,
        })
    }

    /// Integrations split on commas, semicolons and newlines, trimmed, with
    /// blanks dropped. Order is preserved. Names containing "and" stay whole.
    pub fn integration_list(&self) -> Vec<&str> {
        self.integrations
            .split([',', ';', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
