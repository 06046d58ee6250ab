use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use clap::ValueEnum;
use serde_json::Value;

use gtm_core::{GtmInput, render_markdown, synthesize};

/// Output format for `gtm generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}

/// Read a brief from a `.json` or `.toml` file into a raw payload.
///
/// TOML briefs use the same camelCase keys as the JSON request body.
pub fn load_payload(path: &Path) -> anyhow::Result<Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read brief file at {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            let value: toml::Value = toml::from_str(&contents)
                .with_context(|| format!("failed to parse TOML brief {}", path.display()))?;
            serde_json::to_value(value).context("failed to convert TOML brief to JSON")
        }
        Some("json") | None => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON brief {}", path.display())),
        Some(other) => bail!("unsupported brief format {other:?} (expected .json or .toml)"),
    }
}

/// Execute `gtm generate`: validate the brief, synthesize, and write the plan.
pub fn run_generate(file: &str, format: OutputFormat, output: Option<&str>) -> anyhow::Result<()> {
    let payload = load_payload(Path::new(file))?;
    let input = GtmInput::from_payload(&payload)
        .with_context(|| format!("invalid brief in {file}"))?;

    let plan = synthesize(&input);
    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&plan).context("failed to serialize plan")?
        }
        OutputFormat::Markdown => render_markdown(&input.product_name, &plan),
    };

    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {path}"))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };
    writeln!(writer, "{rendered}")?;
    writer.flush()?;

    tracing::debug!(product = %input.product_name, ?format, "plan written");
    if let Some(path) = output {
        println!("Wrote {} plan for {} to {path}", format_name(format), input.product_name);
    }

    Ok(())
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json => "JSON",
        OutputFormat::Markdown => "Markdown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TOML_BRIEF: &str = r#"
productName = "Acme"
description = "Turns scattered customer feedback into a prioritized roadmap."
category = "SaaS"
targetAudience = "PMs"
launchStage = "beta"
primaryGoal = "acquire-users"
pricingStrategy = "freemium"
tone = "pragmatic"
launchDate = "2025-01-01"
differentiation = "Clusters feedback automatically."
integrations = "Slack"
founderNotes = "Stay self-serve."
"#;

    #[test]
    fn load_toml_brief_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brief.toml");
        std::fs::write(&path, TOML_BRIEF).unwrap();

        let payload = load_payload(&path).unwrap();
        let input = GtmInput::from_payload(&payload).unwrap();
        assert_eq!(input.product_name, "Acme");
    }

    #[test]
    fn load_json_brief() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brief.json");
        std::fs::write(&path, gtm_test_utils::acme_payload().to_string()).unwrap();

        let payload = load_payload(&path).unwrap();
        assert_eq!(payload["productName"], "Acme");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brief.yaml");
        std::fs::write(&path, "productName: Acme").unwrap();

        let msg = load_payload(&path).unwrap_err().to_string();
        assert!(msg.contains("unsupported brief format"), "unexpected error: {msg}");
    }

    #[test]
    fn run_generate_writes_markdown_file() {
        let dir = TempDir::new().unwrap();
        let brief = dir.path().join("brief.toml");
        let out = dir.path().join("plan.md");
        std::fs::write(&brief, TOML_BRIEF).unwrap();

        run_generate(
            brief.to_str().unwrap(),
            OutputFormat::Markdown,
            Some(out.to_str().unwrap()),
        )
        .unwrap();

        let md = std::fs::read_to_string(&out).unwrap();
        assert!(md.starts_with("# Acme go-to-market plan"));
        assert!(md.contains("## Metrics Dashboard"));
    }

    #[test]
    fn run_generate_reports_missing_field() {
        let dir = TempDir::new().unwrap();
        let brief = dir.path().join("brief.json");
        let payload = gtm_test_utils::payload_without(gtm_test_utils::acme_payload(), "tone");
        std::fs::write(&brief, payload.to_string()).unwrap();

        let err = run_generate(brief.to_str().unwrap(), OutputFormat::Json, None).unwrap_err();
        assert!(
            format!("{err:#}").contains("Missing required field: tone"),
            "unexpected error: {err:#}"
        );
    }
}
