//! Monitoring data types: resource time series and alarms

use serde::{Deserialize, Serialize};

/// One point in a resource-usage time series.
///
/// `timestamp` is an opaque display string; ordering is assumed to be
/// established by the backend and is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetric {
    pub timestamp: String,
    pub value: f64,
}

/// The full metrics payload returned by `GET /metrics`.
///
/// Four fixed series; values are usage percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricData {
    #[serde(default)]
    pub cpu: Vec<ResourceMetric>,
    #[serde(default)]
    pub memory: Vec<ResourceMetric>,
    #[serde(default)]
    pub disk: Vec<ResourceMetric>,
    #[serde(default)]
    pub network: Vec<ResourceMetric>,
}

impl MetricData {
    /// True when no series has any points yet.
    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
            && self.memory.is_empty()
            && self.disk.is_empty()
            && self.network.is_empty()
    }
}

/// Threshold comparison direction for an alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmCondition {
    Above,
    Below,
}

impl AlarmCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlarmCondition::Above => "above",
            AlarmCondition::Below => "below",
        }
    }
}

/// Alarm lifecycle state, rendered as-is (no client-side transitions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmStatus {
    Active,
    Resolved,
}

impl AlarmStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AlarmStatus::Active)
    }
}

/// A threshold alarm reported by the monitoring endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: String,
    pub resource: String,
    pub threshold: f64,
    pub condition: AlarmCondition,
    pub status: AlarmStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Alarm {
    /// Display line in the dashboard alarm list, e.g. "cpu above 90%".
    pub fn summary(&self) -> String {
        format!(
            "{} {} {}%",
            self.resource,
            self.condition.as_str(),
            self.threshold
        )
    }
}
