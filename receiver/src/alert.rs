//! Alertmanager v2 wire model
//!
//! The downstream API accepts `POST {base}/api/v2/alerts` with a JSON array
//! of alert objects. Only the fields this receiver produces are modeled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One postable alert in the Alertmanager v2 API shape.
///
/// `labels` is ordered so serialized payloads are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostableAlert {
    pub labels: BTreeMap<String, String>,
    #[serde(
        rename = "generatorURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub generator_url: Option<String>,
    #[serde(rename = "startsAt")]
    pub starts_at: DateTime<Utc>,
    #[serde(rename = "endsAt")]
    pub ends_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn alert(labels: &[(&str, &str)]) -> PostableAlert {
        PostableAlert {
            labels: labels
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            generator_url: None,
            starts_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            ends_at: Utc.timestamp_millis_opt(1_700_000_300_000).unwrap(),
        }
    }

    #[test]
    fn serializes_with_alertmanager_field_names() {
        let mut alert = alert(&[("alertname", "uei.opennms.org/nodes/nodeDown")]);
        alert.generator_url = Some("http://horizon/alarm/detail.htm?id=7".to_string());

        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["labels"]["alertname"], "uei.opennms.org/nodes/nodeDown");
        assert_eq!(json["generatorURL"], "http://horizon/alarm/detail.htm?id=7");
        // RFC 3339 timestamps
        assert!(json["startsAt"]
            .as_str()
            .unwrap()
            .starts_with("2023-11-14T22:13:20"));
        assert!(json["endsAt"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn generator_url_omitted_when_absent() {
        let json = serde_json::to_value(alert(&[("alertname", "x")])).unwrap();
        assert!(json.get("generatorURL").is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let alert = alert(&[("alertname", "a"), ("severity", "major")]);
        let text = serde_json::to_string(&vec![alert.clone()]).unwrap();
        let parsed: Vec<PostableAlert> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![alert]);
    }
}
