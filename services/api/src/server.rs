use crate::cli::ServeArgs;
use crate::infra::{spawn_change_log, AppState};
use crate::routes::with_office_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use paint_office::config::AppConfig;
use paint_office::db::connect_and_migrate;
use paint_office::error::AppError;
use paint_office::records::{ChangeNotifier, OfficeServices};
use paint_office::reports::ReportService;
use paint_office::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let db = connect_and_migrate(&config.database).await?;
    let notifier = ChangeNotifier::default();
    let services = OfficeServices::new(db, notifier.clone());
    let _change_log = spawn_change_log(&notifier);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        reports: ReportService::new(&services),
    };

    let app = with_office_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "paint office api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
