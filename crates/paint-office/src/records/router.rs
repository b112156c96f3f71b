use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    Company, Contractor, Invoice, InvoiceStatus, JobDescription, MyCompanyInfo, Property,
    Supervisor,
};
use super::error::ServiceError;
use super::invoice::InvoiceSearch;
use super::OfficeServices;
use crate::directory::{Directory, InvoiceDocument};

type Services = Arc<OfficeServices>;

/// Router exposing CRUD endpoints for every record type.
pub fn records_router(services: OfficeServices) -> Router {
    Router::new()
        .route(
            "/api/v1/companies",
            get(list_companies).post(save_company),
        )
        .route("/api/v1/companies/:id", delete(delete_company))
        .route(
            "/api/v1/companies/:id/properties",
            get(list_company_properties),
        )
        .route(
            "/api/v1/supervisors",
            get(list_supervisors).post(save_supervisor),
        )
        .route("/api/v1/supervisors/:id", delete(delete_supervisor))
        .route(
            "/api/v1/properties",
            get(list_properties).post(save_property),
        )
        .route("/api/v1/properties/:id", delete(delete_property))
        .route(
            "/api/v1/contractors",
            get(list_contractors).post(save_contractor),
        )
        .route("/api/v1/contractors/:id", delete(delete_contractor))
        .route(
            "/api/v1/invoices",
            get(list_invoices).post(add_invoice).put(update_invoices),
        )
        .route(
            "/api/v1/invoices/:id",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
        .route("/api/v1/invoices/:id/document", get(invoice_document))
        .route(
            "/api/v1/job-descriptions",
            get(list_job_descriptions).put(replace_job_descriptions),
        )
        .route(
            "/api/v1/my-company",
            get(get_my_company).put(update_my_company),
        )
        .with_state(Arc::new(services))
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::DuplicateName { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } | Self::UnknownName { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let payload = json!({
            "error": self.to_string(),
        });
        (self.status_code(), Json(payload)).into_response()
    }
}

fn respond<T: serde::Serialize>(result: Result<T, ServiceError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(error) => error.into_response(),
    }
}

fn respond_deleted(result: Result<bool, ServiceError>) -> Response {
    respond(result.map(|deleted| json!({ "deleted": deleted })))
}

async fn list_companies(State(services): State<Services>) -> Response {
    respond(services.companies.list_all().await)
}

async fn save_company(State(services): State<Services>, Json(company): Json<Company>) -> Response {
    respond(services.companies.save(company).await)
}

async fn delete_company(State(services): State<Services>, Path(id): Path<i32>) -> Response {
    respond_deleted(services.companies.delete(id).await)
}

async fn list_company_properties(
    State(services): State<Services>,
    Path(id): Path<i32>,
) -> Response {
    respond(services.properties.list_by_company(id).await)
}

async fn list_supervisors(State(services): State<Services>) -> Response {
    respond(services.supervisors.list_all().await)
}

async fn save_supervisor(
    State(services): State<Services>,
    Json(supervisor): Json<Supervisor>,
) -> Response {
    respond(services.supervisors.save(supervisor).await)
}

async fn delete_supervisor(State(services): State<Services>, Path(id): Path<i32>) -> Response {
    respond_deleted(services.supervisors.delete(id).await)
}

async fn list_properties(State(services): State<Services>) -> Response {
    respond(services.properties.list_all().await)
}

async fn save_property(
    State(services): State<Services>,
    Json(property): Json<Property>,
) -> Response {
    respond(services.properties.save(property).await)
}

async fn delete_property(State(services): State<Services>, Path(id): Path<i32>) -> Response {
    respond_deleted(services.properties.delete(id).await)
}

async fn list_contractors(State(services): State<Services>) -> Response {
    respond(services.contractors.list_all().await)
}

async fn save_contractor(
    State(services): State<Services>,
    Json(contractor): Json<Contractor>,
) -> Response {
    respond(services.contractors.save(contractor).await)
}

async fn delete_contractor(State(services): State<Services>, Path(id): Path<i32>) -> Response {
    respond_deleted(services.contractors.delete(id).await)
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StatusFilter {
    Open,
    Paid,
    Receivable,
}

#[derive(Debug, Default, Deserialize)]
struct InvoiceQuery {
    status: Option<StatusFilter>,
    contractor: Option<String>,
    company: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

async fn list_invoices(
    State(services): State<Services>,
    Query(query): Query<InvoiceQuery>,
) -> Response {
    let search = InvoiceSearch {
        status: match query.status {
            Some(StatusFilter::Open) => Some(InvoiceStatus::Open),
            Some(StatusFilter::Paid) => Some(InvoiceStatus::Paid),
            Some(StatusFilter::Receivable) | None => None,
        },
        contractor: query.contractor,
        company: query.company,
        from: query.from,
        to: query.to,
    };
    let receivable_only = matches!(query.status, Some(StatusFilter::Receivable));

    respond(services.invoices.search(&search).await.map(|mut invoices| {
        if receivable_only {
            invoices.retain(Invoice::is_receivable);
        }
        invoices
    }))
}

async fn add_invoice(State(services): State<Services>, Json(invoice): Json<Invoice>) -> Response {
    match services.invoices.add(invoice).await {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(error) => error.into_response(),
    }
}

async fn update_invoices(
    State(services): State<Services>,
    Json(invoices): Json<Vec<Invoice>>,
) -> Response {
    respond(
        services
            .invoices
            .update_many(invoices)
            .await
            .map(|updated| json!({ "updated": updated })),
    )
}

async fn get_invoice(State(services): State<Services>, Path(id): Path<i32>) -> Response {
    respond(services.invoices.get(id).await)
}

async fn update_invoice(
    State(services): State<Services>,
    Path(id): Path<i32>,
    Json(mut invoice): Json<Invoice>,
) -> Response {
    invoice.id = id;
    respond(services.invoices.update(invoice).await)
}

async fn delete_invoice(State(services): State<Services>, Path(id): Path<i32>) -> Response {
    respond_deleted(services.invoices.delete(id).await)
}

async fn invoice_document(State(services): State<Services>, Path(id): Path<i32>) -> Response {
    respond(build_document(&services, id).await)
}

async fn build_document(
    services: &OfficeServices,
    id: i32,
) -> Result<InvoiceDocument, ServiceError> {
    let invoice = services.invoices.get(id).await?;
    let directory = Directory::new(services.companies.list_all().await?);
    let issuer = services.my_company.get().await?;
    Ok(InvoiceDocument::assemble(&directory, issuer, invoice))
}

async fn list_job_descriptions(State(services): State<Services>) -> Response {
    respond(services.job_descriptions.list_all().await)
}

async fn replace_job_descriptions(
    State(services): State<Services>,
    Json(jobs): Json<Vec<JobDescription>>,
) -> Response {
    respond(services.job_descriptions.replace_all(jobs).await)
}

async fn get_my_company(State(services): State<Services>) -> Response {
    respond(services.my_company.get().await)
}

async fn update_my_company(
    State(services): State<Services>,
    Json(info): Json<MyCompanyInfo>,
) -> Response {
    respond(services.my_company.update(info).await)
}
