//! `sst catalog` command - rule catalog inspection

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::catalog::RuleCatalog;
use crate::cli::commands::{catalog_path, load_catalog, resolve_format};
use crate::cli::helpers::{format_money, truncate_str};
use crate::cli::table::Table;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List all rules in the active catalog
    List,

    /// Show full details for one rule
    Show(ShowArgs),

    /// Validate a catalog file
    Validate(ValidateArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Rule code (e.g. PRESS-TEST)
    pub code: String,
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file to validate (default: the active catalog)
    pub path: Option<PathBuf>,
}

pub fn run(cmd: CatalogCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CatalogCommands::List => run_list(global),
        CatalogCommands::Show(args) => run_show(args, global),
        CatalogCommands::Validate(args) => run_validate(args, global),
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = load_catalog(global, &config)?;

    match resolve_format(global, &config) {
        OutputFormat::Auto | OutputFormat::Table => {
            let mut table = Table::new(["CODE", "TEST", "SCHEDULE", "COST", "NORM"]);
            for rule in catalog.rules() {
                table.row(vec![
                    style(&rule.code).cyan().to_string(),
                    rule.name.clone(),
                    rule.condition.to_string(),
                    format_money(rule.cost_amount, &rule.currency),
                    truncate_str(&rule.norm_reference, 36),
                ]);
            }
            print!("{}", table.render());
            if !global.quiet {
                println!("\n{} rule(s)", catalog.len());
            }
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&catalog.rules()).into_diagnostic()?)
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(catalog.rules()).into_diagnostic()?
        ),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer
                .write_record(["code", "name", "schedule", "cost_amount", "currency", "norm"])
                .into_diagnostic()?;
            for rule in catalog.rules() {
                writer
                    .write_record([
                        rule.code.as_str(),
                        rule.name.as_str(),
                        rule.condition.to_string().as_str(),
                        format!("{:.2}", rule.cost_amount).as_str(),
                        rule.currency.as_str(),
                        rule.norm_reference.as_str(),
                    ])
                    .into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
    }
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = load_catalog(global, &config)?;

    let rule = catalog
        .get(&args.code)
        .ok_or_else(|| miette::miette!("no rule with code {} in the active catalog", args.code))?;

    print!("{}", serde_yml::to_string(rule).into_diagnostic()?);
    Ok(())
}

fn run_validate(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = match args.path.or_else(|| catalog_path(global, &config)) {
        Some(path) => RuleCatalog::from_path(&path).into_diagnostic()?,
        None => RuleCatalog::builtin().into_diagnostic()?,
    };

    println!(
        "{} catalog valid, {} rule(s)",
        style("✓").green(),
        catalog.len()
    );
    Ok(())
}
