//! Alarm-to-alert transformation
//!
//! Turns one received alarm into at most one postable alert: severity
//! filtering, the stale-alarm gate, label construction, the optional
//! generator URL, and start/end time derivation.

use crate::alert::PostableAlert;
use crate::queue::InstanceAlarm;
use crate::resolve::join_url_path;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use onms_core::Severity;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::error;

/// Default window after which a non-cleared alarm is considered stale
pub const DEFAULT_STALE_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Default horizon for `ends_at` on non-cleared alerts
pub const DEFAULT_RESOLVE_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Per-alarm decision procedure producing zero or one alert.
pub struct AlarmTransformer {
    /// instance_id -> base URL of that instance's web UI
    url_map: HashMap<String, String>,
    stale_window: Duration,
    resolve_window: Duration,
}

impl AlarmTransformer {
    pub fn new(url_map: HashMap<String, String>) -> Self {
        Self {
            url_map,
            stale_window: DEFAULT_STALE_WINDOW,
            resolve_window: DEFAULT_RESOLVE_WINDOW,
        }
    }

    /// Override the stale-alarm window.
    pub fn stale_window(mut self, window: Duration) -> Self {
        self.stale_window = window;
        self
    }

    /// Override the `ends_at` horizon for non-cleared alerts.
    pub fn resolve_window(mut self, window: Duration) -> Self {
        self.resolve_window = window;
        self
    }

    /// Apply the filter and build rules to one alarm.
    ///
    /// Returns `None` for NORMAL alarms, stale non-CLEARED alarms, and
    /// alarms whose generator URL cannot be composed.
    pub fn transform(&self, ia: &InstanceAlarm) -> Option<PostableAlert> {
        let alarm = &ia.alarm;

        // Normal severity means "nothing wrong"; never forwarded
        if alarm.severity() == Severity::Normal {
            return None;
        }

        let first_event_time = datetime_from_ms(alarm.first_event_time);
        let last_event_time = datetime_from_ms(alarm.last_event_time);

        let stale = chrono_duration(self.stale_window);
        if alarm.severity() != Severity::Cleared && last_event_time < ia.received_at - stale {
            // stale non-cleared alarms are not forwarded
            return None;
        }

        let node = alarm.node_criteria.clone().unwrap_or_default();

        let mut labels = BTreeMap::new();
        labels.insert("alertname".to_string(), alarm.uei.clone());
        labels.insert("alarm_id".to_string(), alarm.id.to_string());
        labels.insert("node_id".to_string(), node.id.to_string());
        labels.insert("node_name".to_string(), node.node_label.clone());
        labels.insert("instance_id".to_string(), ia.instance_id.clone());
        labels.insert("instance_name".to_string(), ia.instance_name.clone());
        labels.insert(
            "severity".to_string(),
            alarm.severity().as_str_name().to_lowercase(),
        );

        if !alarm.service_name.is_empty() {
            labels.insert("service".to_string(), alarm.service_name.clone());
        }
        if !alarm.ip_address.is_empty() {
            labels.insert("ip_address".to_string(), alarm.ip_address.clone());
        }
        if !node.location.is_empty() {
            labels.insert("site".to_string(), node.location.clone());
        }
        if !alarm.reduction_key.is_empty() {
            labels.insert("reduction_key".to_string(), alarm.reduction_key.clone());
        }
        if !alarm.clear_key.is_empty() {
            labels.insert("clear_key".to_string(), alarm.clear_key.clone());
        }

        let generator_url = match self.url_map.get(&ia.instance_id) {
            Some(base) => match join_url_path(base, "/alarm/detail.htm") {
                Ok(url) => Some(format!("{url}?id={}", alarm.id)),
                Err(e) => {
                    error!(error = %e, instance_id = %ia.instance_id, "problem creating generator URL");
                    return None;
                }
            },
            None => None,
        };

        // start at the first event; resolve after the window unless cleared
        let ends_at = if alarm.severity() == Severity::Cleared {
            last_event_time
        } else {
            Utc::now() + chrono_duration(self.resolve_window)
        };

        Some(PostableAlert {
            labels,
            generator_url,
            starts_at: first_event_time,
            ends_at,
        })
    }
}

fn datetime_from_ms(ms: u64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms as i64).unwrap_or_default()
}

fn chrono_duration(d: Duration) -> ChronoDuration {
    ChronoDuration::from_std(d).unwrap_or_else(|_| ChronoDuration::seconds(300))
}
