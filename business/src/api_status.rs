use crate::api::BookmarksClient;
use chrono::{DateTime, Utc};
use log::{error, info};

/// Minimum interval between two health probes.
pub const REFRESH_MINUTES: i64 = 5;

#[derive(Default, Debug)]
pub struct ApiStatus {
    last_update_time: Option<DateTime<Utc>>,
    // Set when the last probe failed or the server reported itself unhealthy
    last_error: Option<String>,
    version: Option<String>,
}

pub enum APIAvailability<'a> {
    Available(DateTime<Utc>),
    Unavailable((DateTime<Utc>, &'a str)),
    Unknown,
}

impl ApiStatus {
    pub fn api_availability(&self) -> APIAvailability<'_> {
        match (self.last_update_time, &self.last_error) {
            (None, _) => APIAvailability::Unknown,
            (Some(time), None) => APIAvailability::Available(time),
            (Some(time), Some(err)) => APIAvailability::Unavailable((time, err.as_str())),
        }
    }

    /// Server version from the last successful probe.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn should_refresh(&self, now: DateTime<Utc>) -> bool {
        match self.last_update_time {
            Some(last) => now.signed_duration_since(last).num_minutes() >= REFRESH_MINUTES,
            None => true,
        }
    }

    /// Probe `/is-health` unless the last probe is still fresh.
    pub async fn refresh(&mut self, client: &BookmarksClient, now: DateTime<Utc>) {
        if !self.should_refresh(now) {
            return;
        }

        info!("Get API Status at {now:?}");
        match client.health().await {
            Ok(health) if health.healthy => {
                info!("BackEnd Available, checked at {now:?}");
                self.last_error = None;
                self.version = health.version;
            }
            Ok(_) => {
                info!("BackEnd reported unhealthy");
                self.last_error = Some("service unhealthy".to_string());
            }
            Err(e) => {
                error!("API status check failed: {e}");
                self.last_error = Some(e.to_string());
            }
        }
        self.last_update_time = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_unknown_until_first_probe() {
        let status = ApiStatus::default();
        assert!(matches!(status.api_availability(), APIAvailability::Unknown));
        assert!(status.should_refresh(Utc::now()));
    }

    #[test]
    fn test_refresh_interval() {
        let checked = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let status = ApiStatus {
            last_update_time: Some(checked),
            ..ApiStatus::default()
        };
        assert!(!status.should_refresh(checked + Duration::minutes(4)));
        assert!(status.should_refresh(checked + Duration::minutes(REFRESH_MINUTES)));
        assert!(matches!(
            status.api_availability(),
            APIAvailability::Available(t) if t == checked
        ));
    }
}
