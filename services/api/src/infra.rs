use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use paint_office::records::{ChangeEvent, ChangeNotifier};
use paint_office::reports::ReportService;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) reports: ReportService,
}

/// Logs every record change until the notifier is dropped.
pub(crate) fn spawn_change_log(notifier: &ChangeNotifier) -> JoinHandle<()> {
    let mut events = notifier.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(ChangeEvent { entity, action, id }) => {
                    debug!(%entity, ?action, ?id, "record changed");
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "change log fell behind; events dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_office::records::EntityKind;

    #[test]
    fn parse_date_accepts_padded_iso_dates() {
        assert_eq!(
            parse_date(" 2025-03-09 "),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 9).expect("valid date"))
        );
        assert!(parse_date("03/09/2025").is_err());
    }

    #[tokio::test]
    async fn change_log_stops_when_notifier_is_dropped() {
        let notifier = ChangeNotifier::default();
        let handle = spawn_change_log(&notifier);
        assert_eq!(notifier.notify(ChangeEvent::replaced(EntityKind::JobDescription)), 1);

        drop(notifier);
        handle.await.expect("change log exits cleanly");
    }
}
