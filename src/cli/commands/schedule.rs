//! `sst schedule` command - compute the mandatory test schedule

use chrono::NaiveDate;
use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::{load_catalog, resolve_format};
use crate::cli::helpers::{format_money, truncate_str};
use crate::cli::table::Table;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, EquipmentProfile};
use crate::schedule::{compute_schedule, ScheduleResult};

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Manufacture date (YYYY-MM-DD)
    #[arg(long, short = 'm')]
    pub manufactured: Option<NaiveDate>,

    /// Evaluation date (default: today)
    #[arg(long)]
    pub on: Option<NaiveDate>,

    /// Rated capacity in persons (reporting only)
    #[arg(long, short = 'c')]
    pub capacity: Option<u32>,

    /// Equipment serial number (reporting only)
    #[arg(long, short = 's')]
    pub serial: Option<String>,

    /// Read the equipment profile from a YAML file; explicit flags override
    /// fields from the file
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}

pub fn run(args: ScheduleArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let catalog = load_catalog(global, &config)?;
    let profile = build_profile(&args)?;

    let result = compute_schedule(&catalog, &profile).into_diagnostic()?;

    match resolve_format(global, &config) {
        OutputFormat::Auto | OutputFormat::Table => print_report(&result, global.quiet),
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&result).into_diagnostic()?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
        }
        OutputFormat::Csv => print_invoice_lines(&result)?,
    }
    Ok(())
}

fn build_profile(args: &ScheduleArgs) -> Result<EquipmentProfile> {
    let mut profile = match &args.input {
        Some(path) => {
            let contents = std::fs::read_to_string(path).into_diagnostic()?;
            serde_yml::from_str::<EquipmentProfile>(&contents).into_diagnostic()?
        }
        None => EquipmentProfile::default(),
    };

    if args.manufactured.is_some() {
        profile.manufacture_date = args.manufactured;
    }
    if args.on.is_some() {
        profile.evaluation_date = args.on;
    }
    if args.capacity.is_some() {
        profile.capacity = args.capacity;
    }
    if args.serial.is_some() {
        profile.identifier = args.serial.clone();
    }
    Ok(profile)
}

fn print_report(result: &ScheduleResult, quiet: bool) {
    if !quiet {
        let label = match (&result.identifier, result.capacity) {
            (Some(id), Some(cap)) => format!("{} ({} persons)", id, cap),
            (Some(id), None) => id.clone(),
            (None, Some(cap)) => format!("unidentified equipment ({} persons)", cap),
            (None, None) => "equipment".to_string(),
        };
        println!("{}", style(label).bold());
        println!(
            "Manufactured {}, surveyed {}: age {} years {} months\n",
            result.manufacture_date,
            result.evaluation_date,
            result.age_years,
            result.age_months_remainder
        );
    }

    println!("{}", style("DUE NOW").bold().underlined());
    if result.due_now.is_empty() {
        println!("(no tests due at this evaluation)");
    } else {
        let mut table = Table::new(["CODE", "TEST", "NORM", "COST", "DURATION", "REASON"]);
        for test in &result.due_now {
            table.row(vec![
                style(&test.rule.code).cyan().to_string(),
                test.rule.name.clone(),
                truncate_str(&test.rule.norm_reference, 32),
                format_money(test.rule.cost_amount, &test.rule.currency),
                test.rule.duration_hours.to_string(),
                test.reason.clone(),
            ]);
        }
        print!("{}", table.render());
    }

    if !quiet {
        let currency = result
            .due_now
            .first()
            .map(|t| t.rule.currency.as_str())
            .unwrap_or("EUR");
        println!(
            "\n{} test(s) due, total {}, about {:.0} h",
            result.due_now.len(),
            style(format_money(result.total_cost, currency)).green().bold(),
            result.total_duration_hours_estimate.ceil()
        );
    }

    if !result.not_yet_due.is_empty() {
        println!("\n{}", style("NOT YET DUE").bold().underlined());
        let mut table = Table::new(["CODE", "TEST", "NEXT DUE", "REASON"]);
        for test in &result.not_yet_due {
            let next = test
                .next_due_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string());
            table.row(vec![
                style(&test.rule.code).cyan().to_string(),
                test.rule.name.clone(),
                next,
                test.reason.clone(),
            ]);
        }
        print!("{}", table.render());
    }
}

/// Emit the due-now set as CSV line items for the invoicing side
fn print_invoice_lines(result: &ScheduleResult) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer
        .write_record([
            "evaluation_date",
            "identifier",
            "code",
            "name",
            "norm_reference",
            "cost_amount",
            "currency",
        ])
        .into_diagnostic()?;
    for test in &result.due_now {
        writer
            .write_record([
                result.evaluation_date.to_string().as_str(),
                result.identifier.as_deref().unwrap_or(""),
                test.rule.code.as_str(),
                test.rule.name.as_str(),
                test.rule.norm_reference.as_str(),
                format!("{:.2}", test.rule.cost_amount).as_str(),
                test.rule.currency.as_str(),
            ])
            .into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;
    Ok(())
}
