//! Receivable aging: how long each unpaid balance has been outstanding.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::directory::Directory;
use crate::records::{Invoice, InvoiceStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBucket {
    Current,
    #[serde(rename = "days_31_to_60")]
    Days31To60,
    #[serde(rename = "days_61_to_90")]
    Days61To90,
    #[serde(rename = "over_90")]
    Over90,
}

impl AgingBucket {
    pub const ALL: [AgingBucket; 4] = [
        AgingBucket::Current,
        AgingBucket::Days31To60,
        AgingBucket::Days61To90,
        AgingBucket::Over90,
    ];

    /// Work dates in the future count as current.
    pub fn classify(days: i64) -> Self {
        match days {
            i64::MIN..=30 => Self::Current,
            31..=60 => Self::Days31To60,
            61..=90 => Self::Days61To90,
            _ => Self::Over90,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Days31To60 => "31-60 days",
            Self::Days61To90 => "61-90 days",
            Self::Over90 => "Over 90 days",
        }
    }
}

impl fmt::Display for AgingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Row filters; every field is optional and names must match exactly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgingFilter {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub supervisor: Option<String>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl AgingFilter {
    fn admits(&self, invoice: &Invoice, supervisor: Option<&str>) -> bool {
        if let Some(company) = &self.company {
            if &invoice.company_name != company {
                return false;
            }
        }
        if let Some(wanted) = &self.supervisor {
            if supervisor != Some(wanted.as_str()) {
                return false;
            }
        }
        if self.from.is_some_and(|from| invoice.work_date < from) {
            return false;
        }
        !self.to.is_some_and(|to| invoice.work_date > to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgingRow {
    pub invoice_id: i32,
    pub invoice_number: i32,
    pub company_name: String,
    pub supervisor_name: Option<String>,
    pub property_address: String,
    pub unit: String,
    pub work_date: NaiveDate,
    pub days_outstanding: i64,
    pub bucket: AgingBucket,
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketTotal {
    pub bucket: AgingBucket,
    pub count: usize,
    pub balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgingReport {
    pub as_of: NaiveDate,
    pub rows: Vec<AgingRow>,
    /// One entry per bucket in [`AgingBucket::ALL`] order, including empty buckets.
    pub buckets: Vec<BucketTotal>,
    pub total_balance: i64,
}

impl AgingReport {
    /// Buckets every outstanding, unpaid invoice by its age on `today`.
    pub fn build<'a>(
        invoices: impl IntoIterator<Item = &'a Invoice>,
        directory: &Directory,
        filter: &AgingFilter,
        today: NaiveDate,
    ) -> Self {
        let mut rows = Vec::new();
        for invoice in invoices {
            if invoice.status == InvoiceStatus::Paid || !invoice.is_receivable() {
                continue;
            }
            let supervisor = directory.supervisor_name(invoice);
            if !filter.admits(invoice, supervisor) {
                continue;
            }

            let days_outstanding = invoice.days_since_work(today);
            rows.push(AgingRow {
                invoice_id: invoice.id,
                invoice_number: invoice.invoice_number(),
                company_name: invoice.company_name.clone(),
                supervisor_name: supervisor.map(str::to_string),
                property_address: invoice.property_address.clone(),
                unit: invoice.unit.clone(),
                work_date: invoice.work_date,
                days_outstanding,
                bucket: AgingBucket::classify(days_outstanding),
                balance: invoice.balance(),
            });
        }
        rows.sort_by(|a, b| {
            b.days_outstanding
                .cmp(&a.days_outstanding)
                .then(a.invoice_id.cmp(&b.invoice_id))
        });

        let buckets = AgingBucket::ALL
            .iter()
            .map(|&bucket| {
                let (count, balance) = rows
                    .iter()
                    .filter(|row| row.bucket == bucket)
                    .fold((0, 0), |(count, balance), row| (count + 1, balance + row.balance));
                BucketTotal {
                    bucket,
                    count,
                    balance,
                }
            })
            .collect();

        Self {
            as_of: today,
            total_balance: rows.iter().map(|row| row.balance).sum(),
            rows,
            buckets,
        }
    }

    pub fn bucket(&self, bucket: AgingBucket) -> BucketTotal {
        self.buckets
            .iter()
            .copied()
            .find(|total| total.bucket == bucket)
            .unwrap_or(BucketTotal {
                bucket,
                count: 0,
                balance: 0,
            })
    }
}
