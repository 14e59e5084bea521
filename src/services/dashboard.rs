//! Dashboard aggregation: entity counts with status breakdowns, optionally
//! scoped to a time window. The four counts are separate reads and make no
//! cross-entity consistency promise under concurrent writes.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

use crate::errors::ServiceError;
use crate::storage::{GorevFilter, ProjeFilter, Storage, TeklifFilter};

/// Reporting window, anchored to the server's current UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
}

impl Period {
    /// Start instant of the window containing `now`. Weeks start on Monday.
    pub fn window_start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let midnight = |date: chrono::NaiveDate| {
            date.and_time(NaiveTime::MIN).and_utc()
        };
        let today = now.date_naive();
        match self {
            Period::Today => midnight(today),
            Period::ThisWeek => {
                let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
                midnight(monday)
            }
            Period::ThisMonth => midnight(today.with_day(1).unwrap_or(today)),
            Period::ThisYear => {
                midnight(today.with_day(1).and_then(|d| d.with_month(1)).unwrap_or(today))
            }
        }
    }
}

#[derive(Debug, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub cari_hesap_sayisi: u64,
    pub teklif_sayisi: u64,
    pub teklif_durumlari: BTreeMap<String, u64>,
    pub proje_sayisi: u64,
    pub proje_durumlari: BTreeMap<String, u64>,
    pub gorev_sayisi: u64,
    pub gorev_durumlari: BTreeMap<String, u64>,
}

#[derive(Clone)]
pub struct DashboardService {
    storage: Arc<dyn Storage>,
}

impl DashboardService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self, period: Option<Period>) -> Result<DashboardStats, ServiceError> {
        let since = period.map(|p| p.window_start(Utc::now()));
        let in_window = |created_at: DateTime<Utc>| since.map_or(true, |s| created_at >= s);

        let mut stats = DashboardStats::default();

        for hesap in self.storage.list_cari_hesaplar(None).await? {
            if in_window(hesap.created_at) {
                stats.cari_hesap_sayisi += 1;
            }
        }

        for teklif in self
            .storage
            .list_teklifler(&TeklifFilter::default())
            .await?
        {
            if in_window(teklif.created_at) {
                stats.teklif_sayisi += 1;
                *stats
                    .teklif_durumlari
                    .entry(status_key(&teklif.durum))
                    .or_default() += 1;
            }
        }

        for proje in self.storage.list_projeler(&ProjeFilter::default()).await? {
            if in_window(proje.created_at) {
                stats.proje_sayisi += 1;
                *stats
                    .proje_durumlari
                    .entry(status_key(&proje.durum))
                    .or_default() += 1;
            }
        }

        for gorev in self.storage.list_gorevler(&GorevFilter::default()).await? {
            if in_window(gorev.created_at) {
                stats.gorev_sayisi += 1;
                *stats
                    .gorev_durumlari
                    .entry(status_key(&gorev.durum))
                    .or_default() += 1;
            }
        }

        Ok(stats)
    }
}

/// Wire name of a status value, e.g. `devam_ediyor`.
fn status_key<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => "bilinmiyor".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn today_window_starts_at_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 0).unwrap();
        let start = Period::Today.window_start(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn week_window_starts_on_monday() {
        // 2024-06-15 is a Saturday.
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 0).unwrap();
        let start = Period::ThisWeek.window_start(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn month_and_year_windows() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 0).unwrap();
        assert_eq!(
            Period::ThisMonth.window_start(now),
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            Period::ThisYear.window_start(now),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
