//! Validate a rule table file
//!
//! Loads the table, runs hard validation and prints every lint with its code.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use effect_core::AggregationConfig;

use crate::utils;

/// Validate a rule table
#[derive(Parser, Debug)]
pub struct ValidateRules {
    /// Rule table file (RON). Defaults to $EFFECT_RULES_PATH, then the built-in table
    #[arg(short, long, value_name = "FILE")]
    path: Option<PathBuf>,

    /// Aggregation config file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Treat lints as errors, overriding the config file
    #[arg(long)]
    deny_lints: bool,
}

impl ValidateRules {
    pub fn execute(self) -> Result<()> {
        let mut config: AggregationConfig = utils::load_config(self.config.as_deref())?;
        config.deny_lints |= self.deny_lints;

        let path = utils::resolve_rules_path(self.path);
        let table = utils::load_rules(path.as_deref(), &config)?;

        println!(
            "{} {}",
            style("Rule table:").bold().cyan(),
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
        println!("{} {}", style("Rules:").bold().cyan(), table.len());
        println!();

        for (index, rule) in table.iter().enumerate() {
            let base: Vec<_> = rule.base().iter().map(|a| a.to_string()).collect();
            println!(
                "  #{index} [{}] -> {}",
                base.join(", "),
                style(rule.effective()).green()
            );
        }
        println!();

        if table.lints().is_empty() {
            println!("{} no lints", style("✓").green().bold());
        } else {
            for lint in table.lints() {
                println!(
                    "{} {} {}",
                    style("!").yellow().bold(),
                    style(lint.error_code()).yellow(),
                    lint
                );
            }
        }

        Ok(())
    }
}
