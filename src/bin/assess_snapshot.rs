//! Assess nutrition snapshots from a JSON file
//!
//! Prints the recommendation report for each snapshot in the file (a single
//! object or an array of objects). Use `-` to read from stdin.
//!
//! Run with: cargo run --bin assess_snapshot -- snapshot.json [--format text|markdown|json] [--seed N]
//! (`--json` and `--markdown` are accepted as shorthands)

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nutrition_advisor::{
    AssessorConfig, JsonFormatter, MarkdownFormatter, NutrientSnapshot, NutritionAssessor,
};
use std::fs;
use std::io::Read;

#[derive(Parser)]
#[command(name = "assess_snapshot")]
#[command(about = "Assess nutrition snapshots and print recommendations", long_about = None)]
struct Cli {
    /// Snapshot JSON file (`-` for stdin)
    input: String,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Shorthand for `--format json`
    #[arg(long, conflicts_with_all = ["format", "markdown"])]
    json: bool,

    /// Shorthand for `--format markdown`
    #[arg(long, conflicts_with = "format")]
    markdown: bool,

    /// Seed for reproducible jitter (overrides NUTRITION_SEED)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.markdown {
            OutputFormat::Markdown
        } else {
            self.format
        }
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read snapshot from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read snapshot file: {}", input))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AssessorConfig::from_env()?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let assessor = NutritionAssessor::from_config(&config)?;

    let contents = read_input(&cli.input)?;
    let value: serde_json::Value =
        serde_json::from_str(&contents).context("Snapshot file is not valid JSON")?;
    let snapshots = NutrientSnapshot::batch_from_json(&value)?;

    let assessments = assessor.assess_batch(&snapshots);

    for (i, assessment) in assessments.iter().enumerate() {
        if assessments.len() > 1 {
            println!("--- Snapshot {} of {} ---\n", i + 1, assessments.len());
        }

        let rendered = match cli.output_format() {
            OutputFormat::Text => assessor.report(assessment),
            OutputFormat::Markdown => MarkdownFormatter::format(assessment),
            OutputFormat::Json => JsonFormatter::format(assessment)?,
        };
        println!("{}", rendered);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_flags() {
        let cli = Cli::try_parse_from(["assess_snapshot", "day.json"]).unwrap();
        assert!(matches!(cli.output_format(), OutputFormat::Text));
        assert_eq!(cli.seed, None);

        let cli = Cli::try_parse_from(["assess_snapshot", "-", "--json", "--seed", "7"]).unwrap();
        assert!(matches!(cli.output_format(), OutputFormat::Json));
        assert_eq!(cli.input, "-");
        assert_eq!(cli.seed, Some(7));

        let cli = Cli::try_parse_from(["assess_snapshot", "day.json", "--format", "markdown"]).unwrap();
        assert!(matches!(cli.output_format(), OutputFormat::Markdown));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["assess_snapshot"]).is_err());
        assert!(Cli::try_parse_from(["assess_snapshot", "a.json", "--json", "--markdown"]).is_err());
        assert!(Cli::try_parse_from(["assess_snapshot", "a.json", "--seed", "-3"]).is_err());
        assert!(Cli::try_parse_from(["assess_snapshot", "a.json", "--verbose"]).is_err());
    }
}
