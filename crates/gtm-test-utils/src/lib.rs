//! Shared request-payload fixtures for gtm integration tests.
//!
//! Payloads are raw `serde_json::Value`s so that the same fixtures drive
//! both the core validator and the HTTP endpoint.

use serde_json::{Value, json};

/// Required payload fields, in validation order.
pub const FIELDS: [&str; 12] = [
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

/// The canonical Acme beta brief.
pub fn acme_payload() -> Value {
    json!({
        "productName": "Acme",
        "description": "Turns scattered customer feedback into a prioritized roadmap.",
        "category": "SaaS",
        "targetAudience": "PMs",
        "launchStage": "beta",
        "primaryGoal": "acquire-users",
        "pricingStrategy": "freemium",
        "tone": "pragmatic",
        "launchDate": "2025-01-01",
        "differentiation": "Clusters feedback automatically with zero setup.",
        "integrations": "Slack",
        "founderNotes": "Stay self-serve until we hit 500 teams.",
    })
}

/// A GA-stage revenue brief with several integrations.
pub fn ledgerly_payload() -> Value {
    json!({
        "productName": "Ledgerly",
        "description": "Closes the books in days instead of weeks.",
        "category": "Finance automation",
        "targetAudience": "Controllers at mid-market companies",
        "launchStage": "ga",
        "primaryGoal": "generate-revenue",
        "pricingStrategy": "usage-based",
        "tone": "data-driven",
        "launchDate": "Q3 2025",
        "differentiation": "Reconciles every transaction with an audit trail.",
        "integrations": "NetSuite, QuickBooks, Stripe, Salesforce",
        "founderNotes": "SOC 2 report lands in August.",
    })
}

/// `base` with `field` removed.
pub fn payload_without(base: Value, field: &str) -> Value {
    let mut payload = base;
    if let Some(obj) = payload.as_object_mut() {
        obj.remove(field);
    }
    payload
}

/// `base` with `field` replaced by `value`.
pub fn payload_with(base: Value, field: &str, value: Value) -> Value {
    let mut payload = base;
    if let Some(obj) = payload.as_object_mut() {
        obj.insert(field.to_string(), value);
    }
    payload
}
