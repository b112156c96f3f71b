use super::common::*;
use crate::records::{EntityKind, ServiceError};

#[tokio::test]
async fn contractors_list_in_name_order() {
    let services = services().await;
    for name in ["Rosa Vega", "Ali Khan", "Mo Greene"] {
        services
            .contractors
            .save(contractor(name, "25"))
            .await
            .expect("saved");
    }

    let names: Vec<String> = services
        .contractors
        .list_all()
        .await
        .expect("list")
        .into_iter()
        .map(|contractor| contractor.name)
        .collect();
    assert_eq!(names, ["Ali Khan", "Mo Greene", "Rosa Vega"]);
}

#[tokio::test]
async fn duplicate_contractor_name_is_rejected() {
    let services = services().await;
    services
        .contractors
        .save(contractor("Rosa Vega", "25"))
        .await
        .expect("first");

    let error = services
        .contractors
        .save(contractor("Rosa Vega", "30"))
        .await
        .expect_err("duplicate");
    assert!(matches!(
        error,
        ServiceError::DuplicateName { entity: EntityKind::Contractor, .. }
    ));
}

#[tokio::test]
async fn find_by_name_and_delete() {
    let services = services().await;
    let saved = services
        .contractors
        .save(contractor("Rosa Vega", "12.5%"))
        .await
        .expect("saved");

    let found = services
        .contractors
        .find_by_name("Rosa Vega")
        .await
        .expect("lookup")
        .expect("present");
    assert_eq!(found.id, saved.id);
    assert_eq!(found.payroll_percent.as_deref(), Some("12.5%"));

    assert!(services.contractors.delete(saved.id).await.expect("delete"));
    assert!(services
        .contractors
        .find_by_name("Rosa Vega")
        .await
        .expect("lookup")
        .is_none());
}
