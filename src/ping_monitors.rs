//! Ping monitor operations.

use crate::client::Client;
use crate::envelope::{decode, ItemEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{PingMonitor, PingMonitorRequest};

/// Ping (ICMP) monitor operations.
pub struct PingMonitorsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Ping monitor operations.
    pub fn ping_monitors(&self) -> PingMonitorsService<'_> {
        PingMonitorsService { client: self }
    }
}

impl PingMonitorsService<'_> {
    /// Create a new ping monitor.
    pub async fn create(
        &self,
        board_id: &str,
        req: &PingMonitorRequest,
    ) -> Result<PingMonitor, Error> {
        validate_id(board_id, "board_id")?;

        let path = format!("/boards/{}/ping_monitors", urlencoding::encode(board_id));
        let body = self.client.post(&path, Some(req)).await?;
        let resp: ItemEnvelope<PingMonitor> = decode(&body, "ping monitor")?;
        Ok(resp.data)
    }

    /// Update an existing ping monitor.
    pub async fn update(
        &self,
        board_id: &str,
        monitor_id: &str,
        req: &PingMonitorRequest,
    ) -> Result<PingMonitor, Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let path = format!(
            "/boards/{}/ping_monitors/{}",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        let body = self.client.patch(&path, Some(req)).await?;
        let resp: ItemEnvelope<PingMonitor> = decode(&body, "ping monitor")?;
        Ok(resp.data)
    }

    /// Pause the ping monitor.
    pub async fn pause(&self, board_id: &str, monitor_id: &str) -> Result<(), Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let path = format!(
            "/boards/{}/ping_monitors/{}/pause",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        self.client.post::<()>(&path, None).await?;
        Ok(())
    }

    /// Resume the ping monitor.
    pub async fn unpause(&self, board_id: &str, monitor_id: &str) -> Result<(), Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let path = format!(
            "/boards/{}/ping_monitors/{}/unpause",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        self.client.post::<()>(&path, None).await?;
        Ok(())
    }
}
