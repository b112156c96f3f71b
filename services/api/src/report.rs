use crate::cli::ReportCommand;
use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use paint_office::config::AppConfig;
use paint_office::db::connect_and_migrate;
use paint_office::error::AppError;
use paint_office::records::{ChangeNotifier, OfficeServices};
use paint_office::reports::{
    write_aging_csv, AgingFilter, AgingReport, PayrollReport, ReceivableReport, ReportService,
    SalesReport,
};
use paint_office::telemetry;

#[derive(Args, Debug, Default)]
pub(crate) struct AgingArgs {
    /// Only invoices billed to this company
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Only invoices at properties run by this supervisor
    #[arg(long)]
    pub(crate) supervisor: Option<String>,
    /// Earliest work date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) from: Option<NaiveDate>,
    /// Latest work date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) to: Option<NaiveDate>,
    /// Age invoices as of this date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Emit CSV instead of a table
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReceivableArgs {
    /// Only invoices billed to this company
    #[arg(long)]
    pub(crate) company: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct PayrollArgs {
    /// Contractor name exactly as entered on invoices
    #[arg(long)]
    pub(crate) contractor: String,
    /// First work date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) from: NaiveDate,
    /// Last work date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) to: NaiveDate,
}

#[derive(Args, Debug)]
pub(crate) struct SalesArgs {
    /// First work date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) from: NaiveDate,
    /// Last work date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) to: NaiveDate,
}

pub(crate) async fn run_report(command: ReportCommand) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let db = connect_and_migrate(&config.database).await?;
    let reports = ReportService::new(&OfficeServices::new(db, ChangeNotifier::default()));

    match command {
        ReportCommand::Aging(args) => {
            let today = args.today.unwrap_or_else(|| Local::now().date_naive());
            let filter = AgingFilter {
                company: args.company,
                supervisor: args.supervisor,
                from: args.from,
                to: args.to,
            };
            let report = reports.aging(&filter, today).await?;
            if args.csv {
                write_aging_csv(&report, std::io::stdout().lock())?;
            } else {
                render_aging(&report);
            }
        }
        ReportCommand::Receivable(args) => {
            let report = reports.receivable(args.company.as_deref()).await?;
            render_receivable(&report);
        }
        ReportCommand::Payroll(args) => {
            let report = reports.payroll(&args.contractor, args.from, args.to).await?;
            render_payroll(&report);
        }
        ReportCommand::Sales(args) => {
            let report = reports.sales(args.from, args.to).await?;
            render_sales(&report);
        }
    }
    Ok(())
}

fn render_aging(report: &AgingReport) {
    println!("Aging report as of {}", report.as_of);
    if report.rows.is_empty() {
        println!("\nNo unpaid invoices match.");
    } else {
        println!();
        for row in &report.rows {
            println!(
                "#{:<6} {:<28} {:<20} {:>4} days  {:<13} ${:>9}",
                row.invoice_number,
                row.company_name,
                row.supervisor_name.as_deref().unwrap_or("-"),
                row.days_outstanding,
                row.bucket.label(),
                row.balance
            );
        }
    }

    println!("\nBuckets");
    for total in &report.buckets {
        println!(
            "- {:<13} {:>3} invoice(s)  ${:>9}",
            total.bucket.label(),
            total.count,
            total.balance
        );
    }
    println!("Total outstanding: ${}", report.total_balance);
}

fn render_receivable(report: &ReceivableReport) {
    match &report.company {
        Some(company) => println!("Receivables for {company}"),
        None => println!("Receivables for all companies"),
    }
    for row in &report.rows {
        println!(
            "#{:<6} {} {:<28} {:<24} cost ${:>8} paid ${:>8} due ${:>8}",
            row.invoice_number,
            row.work_date,
            row.company_name,
            row.property_address,
            row.amount_cost,
            row.total_paid,
            row.balance
        );
    }
    println!(
        "\n{} invoice(s): cost ${}, paid ${}, balance ${}",
        report.rows.len(),
        report.total_cost,
        report.total_paid,
        report.total_balance
    );
}

fn render_payroll(report: &PayrollReport) {
    println!(
        "Payroll for {} ({} to {})",
        report.contractor, report.from, report.to
    );
    match report.percent {
        Some(percent) => println!("Rate: {percent}%"),
        None => println!("Rate: not set; pay cannot be computed"),
    }
    for row in &report.rows {
        let pay = row
            .pay
            .map(|pay| format!("${pay:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "#{:<6} {} {:<28} {:<24} ${:>8} pay {}",
            row.invoice_number,
            row.work_date,
            row.company_name,
            row.property_address,
            row.amount_cost,
            pay
        );
    }
    println!("\nTotal job cost: ${}", report.total_cost);
    if let Some(total) = report.total_pay {
        println!("Total pay: ${total:.2}");
    }
}

fn render_sales(report: &SalesReport) {
    println!("Sales from {} to {}", report.from, report.to);
    for company in &report.companies {
        println!(
            "- {:<28} {:>3} invoice(s)  billed ${:>9}  collected ${:>9}",
            company.company_name, company.invoice_count, company.total_cost, company.total_paid
        );
    }
    println!(
        "\n{} paid invoice(s): billed ${}, collected ${}",
        report.invoice_count, report.total_cost, report.total_paid
    );
}
