//! `sst forecast` command - due tests by age
//!
//! The planning table the service stations pin to the wall: for each age
//! from 0 to the horizon, which tests fall due on that anniversary and what
//! the visit costs. Ages are evaluated directly, so the table is free of
//! day-count boundary noise.

use chrono::{Datelike, NaiveDate};
use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::catalog::RuleCatalog;
use crate::cli::commands::{load_catalog, resolve_format};
use crate::cli::helpers::format_money;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, EquipmentAge};
use crate::schedule::evaluate;

#[derive(Args, Debug)]
pub struct ForecastArgs {
    /// Manufacture date (YYYY-MM-DD)
    #[arg(long, short = 'm')]
    pub manufactured: NaiveDate,

    /// Number of years to project
    #[arg(long, short = 'y', default_value_t = 10)]
    pub years: u32,
}

/// One age row of the forecast
#[derive(Debug, Serialize)]
struct ForecastRow {
    age_years: u32,
    year: i32,
    due_codes: Vec<String>,
    total_cost: f64,
}

pub fn run(args: ForecastArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = load_catalog(global, &config)?;
    let rows = forecast_rows(&catalog, args.manufactured, args.years);

    match resolve_format(global, &config) {
        OutputFormat::Auto | OutputFormat::Table => print_table(&rows, &catalog, global.quiet),
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(&rows).into_diagnostic()?),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?)
        }
        OutputFormat::Csv => print_csv(&rows)?,
    }
    Ok(())
}

fn forecast_rows(catalog: &RuleCatalog, manufactured: NaiveDate, years: u32) -> Vec<ForecastRow> {
    (0..=years)
        .map(|age_years| {
            let age = EquipmentAge {
                years: age_years,
                months_remainder: 0,
            };
            let due: Vec<&crate::catalog::TestRule> = catalog
                .rules()
                .iter()
                .filter(|rule| evaluate(&rule.condition, &age).is_due_now)
                .collect();
            ForecastRow {
                age_years,
                year: manufactured.year() + age_years as i32,
                due_codes: due.iter().map(|r| r.code.clone()).collect(),
                total_cost: due.iter().map(|r| r.cost_amount).sum(),
            }
        })
        .collect()
}

fn print_table(rows: &[ForecastRow], catalog: &RuleCatalog, quiet: bool) {
    let currency = catalog
        .rules()
        .first()
        .map(|r| r.currency.as_str())
        .unwrap_or("EUR");

    let mut builder = Builder::default();
    builder.push_record(["AGE", "YEAR", "TESTS DUE", "COST"]);
    for row in rows {
        builder.push_record([
            row.age_years.to_string(),
            row.year.to_string(),
            row.due_codes.join(", "),
            format_money(row.total_cost, currency),
        ]);
    }
    println!("{}", builder.build().with(Style::markdown()));

    if !quiet {
        println!(
            "\n{}",
            style("Periodic cycles are anchored to the manufacture anniversary.").dim()
        );
    }
}

fn print_csv(rows: &[ForecastRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer
        .write_record(["age_years", "year", "due_codes", "total_cost"])
        .into_diagnostic()?;
    for row in rows {
        writer
            .write_record([
                row.age_years.to_string().as_str(),
                row.year.to_string().as_str(),
                row.due_codes.join(" ").as_str(),
                format!("{:.2}", row.total_cost).as_str(),
            ])
            .into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;
    Ok(())
}
