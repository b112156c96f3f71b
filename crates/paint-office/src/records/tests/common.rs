use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::config::DatabaseConfig;
use crate::db::connect_and_migrate;
use crate::records::{
    ChangeNotifier, Company, Contractor, Invoice, OfficeServices, Property, Supervisor,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) async fn services() -> OfficeServices {
    let db = connect_and_migrate(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    OfficeServices::new(db, ChangeNotifier::default())
}

pub(super) fn company(name: &str) -> Company {
    Company {
        name: name.to_string(),
        owner: Some("Pat Morgan".to_string()),
        phone: Some("(515) 555-0100".to_string()),
        email: Some("office@example.com".to_string()),
        city: Some("Des Moines".to_string()),
        ..Company::default()
    }
}

pub(super) fn supervisor(company_id: i32, name: &str) -> Supervisor {
    Supervisor {
        company_id,
        name: name.to_string(),
        phone: Some("515-555-0111".to_string()),
        ..Supervisor::default()
    }
}

pub(super) fn property(supervisor_id: i32, name: &str, address: &str) -> Property {
    Property {
        supervisor_id,
        name: name.to_string(),
        address: Some(address.to_string()),
        gate_code: Some("#4410".to_string()),
        is_active: Some(true),
        ..Property::default()
    }
}

pub(super) fn contractor(name: &str, percent: &str) -> Contractor {
    Contractor {
        name: name.to_string(),
        payroll_percent: Some(percent.to_string()),
        cell_phone: Some("515-555-0199".to_string()),
        is_active: Some(true),
        ..Contractor::default()
    }
}

pub(super) fn invoice(company: &str, address: &str, cost: i64, work_date: NaiveDate) -> Invoice {
    Invoice {
        company_name: company.to_string(),
        property_address: address.to_string(),
        unit: "2B".to_string(),
        job_description_choice: "Full repaint".to_string(),
        amount_cost: cost,
        work_date,
        ..Invoice::new(date(2025, 6, 1))
    }
}

/// Company "Acme Property Group" with one supervisor owning one property at "12 Oak Ave".
pub(super) async fn seeded_tree(services: &OfficeServices) -> (Company, Supervisor, Property) {
    let company = services
        .companies
        .save(company("Acme Property Group"))
        .await
        .expect("company saved");
    let supervisor = services
        .supervisors
        .save(supervisor(company.id, "Dana Reyes"))
        .await
        .expect("supervisor saved");
    let property = services
        .properties
        .save(property(supervisor.id, "Oak Court", "12 Oak Ave"))
        .await
        .expect("property saved");
    (company, supervisor, property)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
