//! Aggregate an effect fixture
//!
//! Reads resolved effect records from a RON fixture, collapses them with the
//! selected rule table and prints the canonical records.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use effect_content::EffectLoader;
use effect_core::{AggregationReport, Aggregator, SchemaEffect};

use crate::utils;

/// Aggregate effect records
#[derive(Parser)]
pub struct Aggregate {
    /// Effect fixture file (RON)
    #[arg(value_name = "EFFECTS")]
    effects: PathBuf,

    /// Rule table file (RON). Defaults to $EFFECT_RULES_PATH, then the built-in table
    #[arg(short, long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Aggregation config file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per record plus run counters
    Summary,
    /// RON, same shape as the input fixture
    Ron,
    /// Full JSON output
    Json,
}

impl Aggregate {
    pub fn execute(self) -> Result<()> {
        let config = utils::load_config(self.config.as_deref())?;
        let rules_path = utils::resolve_rules_path(self.rules);
        let table = utils::load_rules(rules_path.as_deref(), &config)?;

        let effects = EffectLoader::load(&self.effects)?;
        let (aggregated, report) = Aggregator::new(&table).aggregate_with_report(&effects);

        match self.format {
            OutputFormat::Summary => print_summary(&aggregated, &report),
            OutputFormat::Ron => print_ron(aggregated)?,
            OutputFormat::Json => print_json(&aggregated)?,
        }

        Ok(())
    }
}

fn print_summary(effects: &[SchemaEffect], report: &AggregationReport) {
    println!("{}", style("=== Aggregated Effects ===").bold().green());
    println!();

    for effect in effects {
        let values = &effect.values;
        print!(
            "  {} {} {}",
            style(format!("{:<24}", effect.attribute.to_string())).cyan(),
            values.model,
            values.magnitude
        );
        if let Some(duration) = values.duration {
            print!(" for {duration}s");
        }
        println!(" ({:?})", values.trigger);
    }
    println!();

    println!("{}", style("Report:").bold().yellow());
    println!("  Input records:  {}", report.input);
    println!("  Value groups:   {}", report.groups);
    println!("  Rules fired:    {}", report.rules_fired);
    println!("  Output records: {}", report.output);
    println!("  Collapsed:      {}", report.collapsed());
}

fn print_ron(effects: Vec<SchemaEffect>) -> Result<()> {
    let catalog = effect_content::EffectCatalog { effects };
    let text = ron::ser::to_string_pretty(&catalog, ron::ser::PrettyConfig::default())
        .context("Failed to serialize effects to RON")?;
    println!("{}", text);
    Ok(())
}

fn print_json(effects: &[SchemaEffect]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(effects).context("Failed to serialize effects to JSON")?;
    println!("{}", json);
    Ok(())
}
