//! Typed resources for the StatusGator API v3.
//!
//! Response structs mirror the v3 payload shapes; request structs use
//! `Option` fields with `skip_serializing_if` so unset fields stay off the
//! wire entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a monitor or component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorStatus {
    Up,
    Down,
    Warn,
    Maintenance,
    #[serde(other)]
    Unknown,
}

impl MonitorStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitorStatus::Up => "up",
            MonitorStatus::Down => "down",
            MonitorStatus::Warn => "warn",
            MonitorStatus::Maintenance => "maintenance",
            MonitorStatus::Unknown => "unknown",
        }
    }
}

/// Kind of monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorType {
    WebsiteMonitor,
    PingMonitor,
    ServiceMonitor,
    CustomMonitor,
}

/// A StatusGator dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Nested group information in a monitor response.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: i32,
}

/// Nested service information in a monitor response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub home_page_url: String,
    #[serde(default)]
    pub status_page_url: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub landing_page_url: String,
    #[serde(default)]
    pub official: bool,
}

/// A monitor as returned by `/boards/{id}/monitors`.
#[derive(Debug, Clone, Deserialize)]
pub struct Monitor {
    pub id: String,
    pub display_name: String,
    pub monitor_type: MonitorType,
    pub filtered_status: MonitorStatus,
    pub unfiltered_status: MonitorStatus,
    pub description: Option<String>,
    pub last_message: Option<String>,
    pub last_details: Option<String>,
    pub overridden_message: Option<String>,
    pub overridden_status: Option<MonitorStatus>,
    pub overrides_locked_at: Option<DateTime<Utc>>,
    pub paused_at: Option<DateTime<Utc>>,
    pub checked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub filter_count: i32,
    #[serde(default)]
    pub icon_url: String,
    pub position: Option<i32>,
    #[serde(default)]
    pub early_warning_signal: bool,
    pub service: Option<ServiceInfo>,
    pub group: Option<GroupInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Monitor {
    /// True if the monitor is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }
}

/// A website HTTP monitor.
#[derive(Debug, Clone, Deserialize)]
pub struct WebsiteMonitor {
    #[serde(flatten)]
    pub monitor: Monitor,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub check_interval: i32,
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub check_content: bool,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub alert_content_found: bool,
    #[serde(default)]
    pub check_regions: Vec<String>,
    #[serde(default)]
    pub alert_any_location: bool,
    #[serde(default)]
    pub response_codes: Vec<i32>,
    #[serde(default)]
    pub follow_redirects: bool,
    #[serde(default)]
    pub timeout: i32,
    #[serde(default)]
    pub retry_count: i32,
    #[serde(default)]
    pub request_body: String,
    #[serde(default)]
    pub http_auth_username: String,
    #[serde(default)]
    pub request_headers: Vec<String>,
}

/// Request to create or update a website monitor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebsiteMonitorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<std::collections::HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth_pass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// A ping/ICMP monitor.
#[derive(Debug, Clone, Deserialize)]
pub struct PingMonitor {
    #[serde(flatten)]
    pub monitor: Monitor,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub interval: i32,
    #[serde(default)]
    pub timeout: i32,
    #[serde(default)]
    pub regions: Vec<String>,
}

/// Request to create or update a ping monitor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PingMonitorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// A subscription to an external status page.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceMonitor {
    #[serde(flatten)]
    pub monitor: Monitor,
}

impl ServiceMonitor {
    /// Service ID from the nested service object, if present.
    pub fn service_id(&self) -> Option<&str> {
        self.monitor.service.as_ref().map(|s| s.id.as_str())
    }

    /// Service name from the nested service object, if present.
    pub fn service_name(&self) -> Option<&str> {
        self.monitor.service.as_ref().map(|s| s.name.as_str())
    }
}

/// Request to create or update a service monitor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceMonitorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// A manually-managed monitor.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomMonitor {
    #[serde(flatten)]
    pub monitor: Monitor,
}

/// Request to create or update a custom monitor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomMonitorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MonitorStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// A group of monitors on a board.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub collapsed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create or update a monitor group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonitorGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

/// A component of an external service.
#[derive(Debug, Clone, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub service_id: String,
    pub status: MonitorStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Severity of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentSeverity {
    Minor,
    Major,
    Maintenance,
}

/// Phase of an incident or maintenance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentPhase {
    Investigating,
    Identified,
    Monitoring,
    Resolved,
    Scheduled,
    InProgress,
    Verifying,
    Completed,
}

/// An incident or maintenance window on a board.
#[derive(Debug, Clone, Deserialize)]
pub struct Incident {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub details: String,
    pub severity: IncidentSeverity,
    pub phase: IncidentPhase,
    pub started_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub will_start_at: Option<DateTime<Utc>>,
    pub will_end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auto_complete_maintenance: bool,
    #[serde(default)]
    pub board_id: String,
    pub duration: Option<String>,
    pub maintenance_duration: Option<String>,
    #[serde(default)]
    pub scheduled_maintenance: bool,
    #[serde(default)]
    pub resolved_or_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A status update posted to an incident.
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentUpdate {
    pub id: String,
    #[serde(default)]
    pub incident_id: String,
    #[serde(default)]
    pub details: String,
    pub phase: IncidentPhase,
    pub severity: IncidentSeverity,
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notify_subscribers: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create an incident.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentRequest {
    pub name: String,
    pub details: String,
    pub severity: IncidentSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<IncidentPhase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_start_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_end_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_complete_maintenance: Option<bool>,
}

/// Request to add an update to an incident.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentUpdateRequest {
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<IncidentPhase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<IncidentSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_subscribers: Option<bool>,
}

/// An external service in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub home_page_url: String,
    #[serde(default)]
    pub status_page_url: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub landing_page_url: String,
    #[serde(default)]
    pub official: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A status page email subscriber.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub confirmed: bool,
    pub confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub monitor_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to add a status page subscriber.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriberRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_confirmation: Option<bool>,
}

/// An organization user.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    pub job_title: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl User {
    /// The user's full name.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// A geographic monitoring region.
#[derive(Debug, Clone, Deserialize)]
pub struct Region {
    pub region_id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub dns_name: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub color: String,
}

/// A historical status event from board history.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEvent {
    pub monitor_id: String,
    pub name: String,
    #[serde(default)]
    pub icon_url: String,
    pub status: MonitorStatus,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub early_warning_signal: bool,
}

/// Filters for board history queries.
#[derive(Debug, Clone, Default)]
pub struct HistoryOptions {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub monitor_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitor_status_deserializes_unknown_values() {
        let s: MonitorStatus = serde_json::from_str(r#""degraded""#).unwrap();
        assert_eq!(s, MonitorStatus::Unknown);
        let s: MonitorStatus = serde_json::from_str(r#""down""#).unwrap();
        assert_eq!(s, MonitorStatus::Down);
    }

    #[test]
    fn request_omits_unset_fields() {
        let req = CustomMonitorRequest {
            status: Some(MonitorStatus::Down),
            ..CustomMonitorRequest::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"status":"down"}"#);
    }

    #[test]
    fn website_monitor_flattens_base_fields() {
        let json = r#"{
            "id": "wm-1",
            "display_name": "Homepage",
            "monitor_type": "WebsiteMonitor",
            "filtered_status": "up",
            "unfiltered_status": "up",
            "description": null,
            "last_message": null,
            "last_details": null,
            "overridden_message": null,
            "overridden_status": null,
            "overrides_locked_at": null,
            "paused_at": null,
            "checked_at": null,
            "position": null,
            "service": null,
            "group": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
            "url": "https://example.com",
            "check_interval": 60
        }"#;
        let m: WebsiteMonitor = serde_json::from_str(json).unwrap();
        assert_eq!(m.monitor.id, "wm-1");
        assert_eq!(m.url, "https://example.com");
        assert!(!m.monitor.is_paused());
    }

    #[test]
    fn user_full_name_handles_missing_last_name() {
        let json = r#"{
            "id": "u-1",
            "email": "jo@example.com",
            "first_name": "Jo",
            "job_title": null,
            "created_at": "2024-01-01T00:00:00Z",
            "last_sign_in_at": null
        }"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.full_name(), "Jo");
    }
}
