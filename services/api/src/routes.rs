use crate::infra::{deserialize_date, deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use paint_office::error::AppError;
use paint_office::records::{records_router, OfficeServices};
use paint_office::reports::{
    aging_csv_string, AgingFilter, PayrollReport, ReceivableReport, SalesReport,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReceivableQuery {
    #[serde(default)]
    pub(crate) company: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ReportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AgingQuery {
    #[serde(default)]
    pub(crate) company: Option<String>,
    #[serde(default)]
    pub(crate) supervisor: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) to: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) format: ReportFormat,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PayrollQuery {
    pub(crate) contractor: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) from: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) to: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SalesQuery {
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) from: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) to: NaiveDate,
}

pub(crate) fn with_office_routes(services: OfficeServices) -> Router {
    records_router(services)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/reports/receivable", get(receivable_report_endpoint))
        .route("/api/v1/reports/aging", get(aging_report_endpoint))
        .route("/api/v1/reports/payroll", get(payroll_report_endpoint))
        .route("/api/v1/reports/sales", get(sales_report_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn receivable_report_endpoint(
    Extension(state): Extension<AppState>,
    axum::extract::Query(query): axum::extract::Query<ReceivableQuery>,
) -> Result<Json<ReceivableReport>, AppError> {
    let report = state.reports.receivable(query.company.as_deref()).await?;
    Ok(Json(report))
}

pub(crate) async fn aging_report_endpoint(
    Extension(state): Extension<AppState>,
    axum::extract::Query(query): axum::extract::Query<AgingQuery>,
) -> Result<Response, AppError> {
    let today = query.today.unwrap_or_else(|| Local::now().date_naive());
    let filter = AgingFilter {
        company: query.company,
        supervisor: query.supervisor,
        from: query.from,
        to: query.to,
    };
    let report = state.reports.aging(&filter, today).await?;

    let response = match query.format {
        ReportFormat::Json => Json(report).into_response(),
        ReportFormat::Csv => {
            let csv = aging_csv_string(&report)?;
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"aging-report.csv\"",
                    ),
                ],
                csv,
            )
                .into_response()
        }
    };
    Ok(response)
}

pub(crate) async fn payroll_report_endpoint(
    Extension(state): Extension<AppState>,
    axum::extract::Query(query): axum::extract::Query<PayrollQuery>,
) -> Result<Json<PayrollReport>, AppError> {
    let report = state
        .reports
        .payroll(&query.contractor, query.from, query.to)
        .await?;
    Ok(Json(report))
}

pub(crate) async fn sales_report_endpoint(
    Extension(state): Extension<AppState>,
    axum::extract::Query(query): axum::extract::Query<SalesQuery>,
) -> Result<Json<SalesReport>, AppError> {
    let report = state.reports.sales(query.from, query.to).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use paint_office::config::DatabaseConfig;
    use paint_office::db::connect_and_migrate;
    use paint_office::records::{ChangeNotifier, Contractor, Invoice, InvoiceStatus};
    use paint_office::reports::ReportService;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).expect("valid date")
    }

    async fn app(ready: bool) -> (Router, OfficeServices) {
        let db = connect_and_migrate(&DatabaseConfig::in_memory())
            .await
            .expect("in-memory database");
        let services = OfficeServices::new(db, ChangeNotifier::default());
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            reports: ReportService::new(&services),
        };
        let router = with_office_routes(services.clone()).layer(Extension(state));
        (router, services)
    }

    async fn seed(services: &OfficeServices) {
        services
            .contractors
            .save(Contractor {
                name: "Rosa Vega".to_string(),
                payroll_percent: Some("20".to_string()),
                ..Contractor::default()
            })
            .await
            .expect("contractor");

        for (day, cost, paid) in [(2, 1000, 0), (20, 500, 500)] {
            services
                .invoices
                .add(Invoice {
                    company_name: "Acme Property Group".to_string(),
                    property_address: "12 Oak Ave".to_string(),
                    contractor_name: Some("Rosa Vega".to_string()),
                    amount_cost: cost,
                    first_payment: paid,
                    status: if paid >= cost {
                        InvoiceStatus::Paid
                    } else {
                        InvoiceStatus::Open
                    },
                    work_date: date(5, day),
                    ..Invoice::new(date(5, day))
                })
                .await
                .expect("invoice");
        }
    }

    async fn get_response(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router responds")
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body")
            .to_vec()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(response).await).expect("json payload")
    }

    #[tokio::test]
    async fn health_and_readiness() {
        let (router, _) = app(false).await;
        let response = get_response(router.clone(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_response(router, "/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["status"], "initializing");

        let (router, _) = app(true).await;
        let response = get_response(router, "/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn record_routes_are_mounted() {
        let (router, _) = app(true).await;
        let response = get_response(router, "/api/v1/companies").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn aging_report_as_json_and_csv() {
        let (router, services) = app(true).await;
        seed(&services).await;

        let response =
            get_response(router.clone(), "/api/v1/reports/aging?today=2025-07-15").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["rows"].as_array().expect("rows").len(), 1);
        assert_eq!(body["rows"][0]["bucket"], "days_61_to_90");
        assert_eq!(body["total_balance"], 1000);

        let response = get_response(
            router,
            "/api/v1/reports/aging?today=2025-07-15&format=csv",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        let csv = String::from_utf8(body_bytes(response).await).expect("utf-8");
        assert!(csv.starts_with("Invoice,Company,"));
        assert_eq!(csv.lines().count(), 2);
    }

    #[tokio::test]
    async fn receivable_payroll_and_sales_reports() {
        let (router, services) = app(true).await;
        seed(&services).await;

        let response = get_response(router.clone(), "/api/v1/reports/receivable").await;
        let body = body_json(response).await;
        assert_eq!(body["total_balance"], 1000);

        let response = get_response(
            router.clone(),
            "/api/v1/reports/payroll?contractor=Rosa%20Vega&from=2025-05-01&to=2025-05-31",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total_cost"], 1500);
        assert_eq!(body["total_pay"], 300.0);

        let response = get_response(
            router.clone(),
            "/api/v1/reports/payroll?contractor=Nobody&from=2025-05-01&to=2025-05-31",
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = get_response(
            router,
            "/api/v1/reports/sales?from=2025-05-01&to=2025-05-31",
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["invoice_count"], 1);
        assert_eq!(body["companies"][0]["company_name"], "Acme Property Group");
    }

    #[tokio::test]
    async fn malformed_dates_are_rejected() {
        let (router, _) = app(true).await;
        let response = get_response(
            router,
            "/api/v1/reports/sales?from=05/01/2025&to=2025-05-31",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
