use chrono::NaiveDate;
use serde::Serialize;

use crate::records::Invoice;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceivableRow {
    pub invoice_id: i32,
    pub invoice_number: i32,
    pub company_name: String,
    pub property_address: String,
    pub unit: String,
    pub work_date: NaiveDate,
    pub amount_cost: i64,
    pub total_paid: i64,
    pub balance: i64,
}

impl From<&Invoice> for ReceivableRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            invoice_id: invoice.id,
            invoice_number: invoice.invoice_number(),
            company_name: invoice.company_name.clone(),
            property_address: invoice.property_address.clone(),
            unit: invoice.unit.clone(),
            work_date: invoice.work_date,
            amount_cost: invoice.amount_cost,
            total_paid: invoice.total_paid(),
            balance: invoice.balance(),
        }
    }
}

/// Outstanding invoices with their balances, optionally limited to one company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReceivableReport {
    pub company: Option<String>,
    pub rows: Vec<ReceivableRow>,
    pub total_cost: i64,
    pub total_paid: i64,
    pub total_balance: i64,
}

impl ReceivableReport {
    /// Settled invoices are skipped even when present in `invoices`.
    pub fn build<'a>(
        invoices: impl IntoIterator<Item = &'a Invoice>,
        company: Option<&str>,
    ) -> Self {
        let rows: Vec<ReceivableRow> = invoices
            .into_iter()
            .filter(|invoice| invoice.is_receivable())
            .filter(|invoice| company.map_or(true, |name| invoice.company_name == name))
            .map(ReceivableRow::from)
            .collect();

        Self {
            company: company.map(str::to_string),
            total_cost: rows.iter().map(|row| row.amount_cost).sum(),
            total_paid: rows.iter().map(|row| row.total_paid).sum(),
            total_balance: rows.iter().map(|row| row.balance).sum(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
