use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Offset added to an invoice's row id to produce the printed invoice number.
pub const INVOICE_NUMBER_OFFSET: i32 = 10_000;

/// Client company with its supervisors (and their properties) when loaded as a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub special_note: Option<String>,
    #[serde(default)]
    pub supervisors: Vec<Supervisor>,
}

impl Company {
    /// Stand-in used when an invoice names a company that is not on file.
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supervisor {
    #[serde(default)]
    pub id: i32,
    pub company_id: i32,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Filled in by listings; ignored on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Supervisor {
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub id: i32,
    pub supervisor_id: i32,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub gate_code: Option<String>,
    #[serde(default)]
    pub lock_box: Option<String>,
    #[serde(default)]
    pub garage_remote_code: Option<String>,
    #[serde(default)]
    pub manager_name: Option<String>,
    #[serde(default)]
    pub manager_phone: Option<String>,
    #[serde(default)]
    pub manager_email: Option<String>,
    #[serde(default)]
    pub special_note: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Property {
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contractor {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub social_security_number: Option<String>,
    #[serde(default)]
    pub contractor_number: Option<String>,
    /// Free-form as entered ("25", "25%", "12.5").
    #[serde(default)]
    pub payroll_percent: Option<String>,
    #[serde(default)]
    pub cell_phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub special_note: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// One price-list row. The list is always replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    #[serde(default)]
    pub id: i32,
    pub description: String,
    #[serde(default)]
    pub size_bedroom: i32,
    #[serde(default)]
    pub size_bathroom: i32,
    #[serde(default)]
    pub price: i64,
}

/// The contractor's own business details printed on invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyCompanyInfo {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub zip: String,
    pub license_number: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Open,
    Paid,
}

impl InvoiceStatus {
    pub const fn code(self) -> i32 {
        match self {
            Self::Open => 0,
            Self::Paid => 1,
        }
    }

    /// Anything other than 1 is treated as open.
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Paid,
            _ => Self::Open,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Paid => "Paid",
        }
    }
}

/// A job invoice. Links to company, contractor, and property are by name/address only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub work_order: Option<String>,
    #[serde(default)]
    pub job_description_choice: String,
    #[serde(default)]
    pub contractor_name: Option<String>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub property_address: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub amount_cost: i64,
    #[serde(default)]
    pub first_payment: i64,
    #[serde(default)]
    pub first_check_number: Option<String>,
    #[serde(default)]
    pub first_paid_on: Option<NaiveDate>,
    #[serde(default)]
    pub second_payment: i64,
    #[serde(default)]
    pub second_check_number: Option<String>,
    #[serde(default)]
    pub second_paid_on: Option<NaiveDate>,
    pub todays_date: NaiveDate,
    pub work_date: NaiveDate,
    pub created_date: NaiveDate,
    #[serde(default)]
    pub special_note: Option<String>,
    #[serde(default)]
    pub gate_code: Option<String>,
    #[serde(default)]
    pub lock_box: Option<String>,
    #[serde(default)]
    pub garage_remote_code: Option<String>,
    #[serde(default)]
    pub size_bedroom: i32,
    #[serde(default)]
    pub size_bathroom: i32,
    #[serde(default)]
    pub status: InvoiceStatus,
}

impl Invoice {
    /// A blank open invoice dated `on`.
    pub fn new(on: NaiveDate) -> Self {
        Self {
            id: 0,
            work_order: None,
            job_description_choice: String::new(),
            contractor_name: None,
            company_name: String::new(),
            property_address: String::new(),
            unit: String::new(),
            amount_cost: 0,
            first_payment: 0,
            first_check_number: None,
            first_paid_on: None,
            second_payment: 0,
            second_check_number: None,
            second_paid_on: None,
            todays_date: on,
            work_date: on,
            created_date: on,
            special_note: None,
            gate_code: None,
            lock_box: None,
            garage_remote_code: None,
            size_bedroom: 0,
            size_bathroom: 0,
            status: InvoiceStatus::Open,
        }
    }

    pub fn invoice_number(&self) -> i32 {
        self.id + INVOICE_NUMBER_OFFSET
    }

    pub fn total_paid(&self) -> i64 {
        self.first_payment.saturating_add(self.second_payment)
    }

    pub fn balance(&self) -> i64 {
        self.amount_cost.saturating_sub(self.total_paid())
    }

    /// Payments recorded so far are less than the cost.
    pub fn is_receivable(&self) -> bool {
        self.amount_cost > self.total_paid()
    }

    pub fn is_settled(&self) -> bool {
        !self.is_receivable()
    }

    /// Whole days between the work date and `today`; negative for future work dates.
    pub fn days_since_work(&self, today: NaiveDate) -> i64 {
        (today - self.work_date).num_days()
    }

    pub fn worked_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.work_date >= start && self.work_date <= end
    }

    pub fn is_for_contractor(&self, name: &str) -> bool {
        self.contractor_name.as_deref() == Some(name)
    }
}
