use chrono::NaiveDate;
use serde::Serialize;

use super::round_cents;
use crate::records::{Contractor, Invoice};

/// Reads a payroll percent typed as `"25"`, `"25%"`, or `"12.5"`.
///
/// Returns `None` for blank, negative, or non-numeric input.
pub fn parse_payroll_percent(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let percent: f64 = number.parse().ok()?;
    (percent.is_finite() && percent >= 0.0).then_some(percent)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollRow {
    pub invoice_id: i32,
    pub invoice_number: i32,
    pub work_date: NaiveDate,
    pub company_name: String,
    pub property_address: String,
    pub unit: String,
    pub job_description: String,
    pub amount_cost: i64,
    /// Absent when the contractor has no usable payroll percent.
    pub pay: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollReport {
    pub contractor: String,
    pub percent: Option<f64>,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub rows: Vec<PayrollRow>,
    pub total_cost: i64,
    pub total_pay: Option<f64>,
}

impl PayrollReport {
    /// The contractor's jobs worked in `from..=to`, with pay at their payroll percent.
    pub fn build<'a>(
        contractor: &Contractor,
        invoices: impl IntoIterator<Item = &'a Invoice>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Self {
        let percent = contractor
            .payroll_percent
            .as_deref()
            .and_then(parse_payroll_percent);
        let pay_for = |cost: i64| percent.map(|percent| round_cents(cost as f64 * percent / 100.0));

        let rows: Vec<PayrollRow> = invoices
            .into_iter()
            .filter(|invoice| invoice.is_for_contractor(&contractor.name))
            .filter(|invoice| invoice.worked_between(from, to))
            .map(|invoice| PayrollRow {
                invoice_id: invoice.id,
                invoice_number: invoice.invoice_number(),
                work_date: invoice.work_date,
                company_name: invoice.company_name.clone(),
                property_address: invoice.property_address.clone(),
                unit: invoice.unit.clone(),
                job_description: invoice.job_description_choice.clone(),
                amount_cost: invoice.amount_cost,
                pay: pay_for(invoice.amount_cost),
            })
            .collect();

        let total_cost: i64 = rows.iter().map(|row| row.amount_cost).sum();
        // Summed from the rounded rows so the sheet adds up.
        let total_pay = percent.map(|_| round_cents(rows.iter().filter_map(|row| row.pay).sum()));
        Self {
            contractor: contractor.name.clone(),
            percent,
            from,
            to,
            total_pay,
            total_cost,
            rows,
        }
    }
}
