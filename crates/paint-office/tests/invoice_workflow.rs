use chrono::NaiveDate;
use paint_office::config::DatabaseConfig;
use paint_office::db::connect_and_migrate;
use paint_office::directory::{Directory, InvoiceDocument};
use paint_office::records::{
    ChangeAction, ChangeNotifier, Company, EntityKind, Invoice, InvoiceStatus, MyCompanyInfo,
    OfficeServices, Property, Supervisor,
};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid date")
}

async fn office() -> OfficeServices {
    let db = connect_and_migrate(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    OfficeServices::new(db, ChangeNotifier::default())
}

#[tokio::test]
async fn invoice_lifecycle_from_draft_to_paid() {
    let office = office().await;
    let mut events = office.notifier.subscribe();

    let company = office
        .companies
        .save(Company {
            name: "Riverside Management".to_string(),
            ..Company::default()
        })
        .await
        .expect("company saved");
    let supervisor = office
        .supervisors
        .save(Supervisor {
            company_id: company.id,
            name: "Jordan Blake".to_string(),
            ..Supervisor::default()
        })
        .await
        .expect("supervisor saved");
    office
        .properties
        .save(Property {
            supervisor_id: supervisor.id,
            name: "Riverside Lofts".to_string(),
            address: Some("400 River Rd".to_string()),
            ..Property::default()
        })
        .await
        .expect("property saved");
    office
        .my_company
        .update(MyCompanyInfo {
            name: "Brightline Painting".to_string(),
            phone: "515-555-0142".to_string(),
            email: "billing@brightline.example".to_string(),
            address: "400 Locust St".to_string(),
            zip: "50309".to_string(),
            license_number: "IA-PC-2231".to_string(),
            ..MyCompanyInfo::default()
        })
        .await
        .expect("letterhead saved");

    let draft = Invoice {
        company_name: company.name.clone(),
        property_address: "400 River Rd".to_string(),
        unit: "305".to_string(),
        contractor_name: Some("Rosa Vega".to_string()),
        job_description_choice: "2 bed / 1 bath repaint".to_string(),
        amount_cost: 1450,
        work_date: date(3, 10),
        ..Invoice::new(date(3, 12))
    };
    let mut invoice = office.invoices.add(draft).await.expect("invoice added");
    assert!(office
        .invoices
        .list_receivable()
        .await
        .expect("receivable")
        .iter()
        .any(|listed| listed.id == invoice.id));

    invoice.first_payment = 1000;
    invoice.first_check_number = Some("5521".to_string());
    invoice.first_paid_on = Some(date(4, 1));
    let invoice = office.invoices.update(invoice).await.expect("partial payment");
    assert_eq!(invoice.balance(), 450);

    let directory = Directory::new(office.companies.list_all().await.expect("tree"));
    let issuer = office.my_company.get().await.expect("issuer");
    let document = InvoiceDocument::assemble(&directory, issuer, invoice.clone());
    assert_eq!(document.invoice_number, invoice.id + 10_000);
    assert_eq!(document.supervisor.name, "Jordan Blake");
    assert_eq!(document.property.name, "Riverside Lofts");
    assert_eq!(document.balance, 450);

    let mut settled = invoice;
    settled.second_payment = 450;
    settled.second_paid_on = Some(date(4, 15));
    settled.status = InvoiceStatus::Paid;
    let settled = office.invoices.update(settled).await.expect("settled");
    assert!(settled.is_settled());
    assert!(office
        .invoices
        .list_receivable()
        .await
        .expect("receivable")
        .is_empty());
    assert_eq!(office.invoices.list_paid().await.expect("paid").len(), 1);

    let mut invoice_events = 0;
    while let Ok(event) = events.try_recv() {
        if event.entity == EntityKind::Invoice {
            assert_eq!(event.action, ChangeAction::Saved);
            invoice_events += 1;
        }
    }
    assert_eq!(invoice_events, 3);
}

#[tokio::test]
async fn renamed_company_leaves_invoice_with_placeholders() {
    let office = office().await;
    let mut company = office
        .companies
        .save(Company {
            name: "Old Name LLC".to_string(),
            ..Company::default()
        })
        .await
        .expect("company saved");

    let invoice = office
        .invoices
        .add(Invoice {
            company_name: company.name.clone(),
            property_address: "9 Elm St".to_string(),
            amount_cost: 300,
            ..Invoice::new(date(5, 1))
        })
        .await
        .expect("invoice added");

    company.name = "New Name LLC".to_string();
    office.companies.save(company).await.expect("renamed");

    let directory = Directory::new(office.companies.list_all().await.expect("tree"));
    let links = directory.resolve(&invoice);
    assert!(!links.resolved);
    assert_eq!(links.company.id, 0);
    assert_eq!(links.company.name, "Old Name LLC");
    assert_eq!(links.supervisor.name, "Old Name LLC");
}
