//! onms-core - Wire types for the OpenNMS inventory sync stream protocol
//!
//! This crate provides the types shared between the receiver and anything
//! that speaks the `spog.v1.NmsInventoryServiceSync` protocol (test clients,
//! load tools):
//!
//! - [`AlarmUpdateList`] / [`Alarm`] / [`NodeCriteria`] - alarm stream payloads
//! - [`HeartBeat`] / [`MonitoringInstance`] - heartbeat stream payloads
//! - [`EventUpdateList`] / [`NmsInventoryUpdateList`] - streams the receiver
//!   consumes and discards
//! - [`Severity`] - the alarm severity enumeration
//! - generated client/server stubs under [`proto`]
//!
//! The generated file is committed so downstream builds do not need `protoc`;
//! `build.rs` regenerates it when the central proto repo is checked out next
//! to this workspace.

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]

// Proto types generated from spog/v1/spog.proto
pub mod proto {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::derive_partial_eq_without_eq)]

    include!("proto/spog.v1.rs");
}

pub use proto::nms_inventory_service_sync_client::NmsInventoryServiceSyncClient;
pub use proto::nms_inventory_service_sync_server::{
    NmsInventoryServiceSync, NmsInventoryServiceSyncServer,
};
pub use proto::{
    Alarm, AlarmUpdateList, Event, EventUpdateList, HeartBeat, MonitoringInstance, NmsInventory,
    NmsInventoryUpdateList, NodeCriteria, Severity,
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn alarm_default_is_empty() {
        let alarm = Alarm::default();
        assert_eq!(alarm.id, 0);
        assert!(alarm.uei.is_empty());
        assert!(alarm.node_criteria.is_none());
        assert_eq!(alarm.severity(), Severity::Indeterminate);
    }

    #[test]
    fn severity_getter_tolerates_unknown_values() {
        let mut alarm = Alarm {
            severity: 42,
            ..Default::default()
        };
        // Unknown wire values fall back to the default variant
        assert_eq!(alarm.severity(), Severity::Indeterminate);

        alarm.set_severity(Severity::Major);
        assert_eq!(alarm.severity(), Severity::Major);
        assert_eq!(alarm.severity, Severity::Major as i32);
    }

    #[test]
    fn severity_str_names_round_trip() {
        for sev in [
            Severity::Indeterminate,
            Severity::Cleared,
            Severity::Normal,
            Severity::Warning,
            Severity::Minor,
            Severity::Major,
            Severity::Critical,
        ] {
            assert_eq!(Severity::from_str_name(sev.as_str_name()), Some(sev));
        }
        assert_eq!(Severity::from_str_name("BOGUS"), None);
    }

    #[test]
    fn alarm_update_list_encodes_and_decodes() {
        use prost::Message;

        let list = AlarmUpdateList {
            instance_id: "horizon-a".to_string(),
            instance_name: "Horizon A".to_string(),
            snapshot: true,
            alarms: vec![Alarm {
                id: 17,
                uei: "uei.opennms.org/nodes/nodeDown".to_string(),
                node_criteria: Some(NodeCriteria {
                    id: 4,
                    node_label: "host1".to_string(),
                    location: "east".to_string(),
                    ..Default::default()
                }),
                severity: Severity::Major as i32,
                ..Default::default()
            }],
        };

        let bytes = list.encode_to_vec();
        let decoded = AlarmUpdateList::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, list);
        assert_eq!(decoded.alarms[0].severity(), Severity::Major);
    }

    #[test]
    fn heartbeat_carries_monitoring_instance() {
        let hb = HeartBeat {
            message: "still here".to_string(),
            timestamp: 1_700_000_000_000,
            monitoring_instance: Some(MonitoringInstance {
                instance_id: "minion-1".to_string(),
                instance_name: "Minion 1".to_string(),
                instance_type: "MINION".to_string(),
            }),
        };
        let instance = hb.monitoring_instance.unwrap();
        assert_eq!(instance.instance_id, "minion-1");
    }
}
