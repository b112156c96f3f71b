use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::records::{Invoice, InvoiceStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanySales {
    pub company_name: String,
    pub invoice_count: usize,
    pub total_cost: i64,
    pub total_paid: i64,
}

/// Paid work in a date range, grouped by billing company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Sorted by company name.
    pub companies: Vec<CompanySales>,
    pub invoice_count: usize,
    pub total_cost: i64,
    pub total_paid: i64,
}

impl SalesReport {
    pub fn build<'a>(
        invoices: impl IntoIterator<Item = &'a Invoice>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Self {
        let mut grouped: BTreeMap<&str, CompanySales> = BTreeMap::new();
        for invoice in invoices {
            if invoice.status != InvoiceStatus::Paid || !invoice.worked_between(from, to) {
                continue;
            }
            let entry = grouped
                .entry(invoice.company_name.as_str())
                .or_insert_with(|| CompanySales {
                    company_name: invoice.company_name.clone(),
                    ..CompanySales::default()
                });
            entry.invoice_count += 1;
            entry.total_cost += invoice.amount_cost;
            entry.total_paid += invoice.total_paid();
        }

        let companies: Vec<CompanySales> = grouped.into_values().collect();
        Self {
            from,
            to,
            invoice_count: companies.iter().map(|company| company.invoice_count).sum(),
            total_cost: companies.iter().map(|company| company.total_cost).sum(),
            total_paid: companies.iter().map(|company| company.total_paid).sum(),
            companies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).expect("valid date")
    }

    fn paid(company: &str, day: u32, cost: i64) -> Invoice {
        Invoice {
            company_name: company.to_string(),
            amount_cost: cost,
            first_payment: cost,
            status: InvoiceStatus::Paid,
            work_date: date(day),
            ..Invoice::new(date(day))
        }
    }

    #[test]
    fn groups_paid_invoices_by_company() {
        let mut open = paid("Acme", 4, 999);
        open.status = InvoiceStatus::Open;
        let invoices = vec![
            paid("Harbor", 2, 300),
            paid("Acme", 3, 1000),
            paid("Acme", 5, 500),
            open,
            paid("Acme", 28, 800),
        ];

        let report = SalesReport::build(&invoices, date(1), date(20));

        let names: Vec<&str> = report
            .companies
            .iter()
            .map(|company| company.company_name.as_str())
            .collect();
        assert_eq!(names, ["Acme", "Harbor"]);
        assert_eq!(report.companies[0].invoice_count, 2);
        assert_eq!(report.companies[0].total_cost, 1500);
        assert_eq!(report.invoice_count, 3);
        assert_eq!(report.total_paid, 1800);
    }
}
