//! Custom monitor operations.

use crate::client::Client;
use crate::envelope::{decode, ItemEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{CustomMonitor, CustomMonitorRequest, MonitorStatus};

/// Operations for manually-managed monitors.
pub struct CustomMonitorsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Custom monitor operations.
    pub fn custom_monitors(&self) -> CustomMonitorsService<'_> {
        CustomMonitorsService { client: self }
    }
}

impl CustomMonitorsService<'_> {
    /// Create a new custom monitor.
    pub async fn create(
        &self,
        board_id: &str,
        req: &CustomMonitorRequest,
    ) -> Result<CustomMonitor, Error> {
        validate_id(board_id, "board_id")?;

        let path = format!("/boards/{}/custom_monitors", urlencoding::encode(board_id));
        let body = self.client.post(&path, Some(req)).await?;
        let resp: ItemEnvelope<CustomMonitor> = decode(&body, "custom monitor")?;
        Ok(resp.data)
    }

    /// Update a custom monitor.
    pub async fn update(
        &self,
        board_id: &str,
        monitor_id: &str,
        req: &CustomMonitorRequest,
    ) -> Result<CustomMonitor, Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let path = format!(
            "/boards/{}/custom_monitors/{}",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        let body = self.client.patch(&path, Some(req)).await?;
        let resp: ItemEnvelope<CustomMonitor> = decode(&body, "custom monitor")?;
        Ok(resp.data)
    }

    /// Set the status of a custom monitor.
    pub async fn set_status(
        &self,
        board_id: &str,
        monitor_id: &str,
        status: MonitorStatus,
    ) -> Result<(), Error> {
        let req = CustomMonitorRequest {
            status: Some(status),
            ..CustomMonitorRequest::default()
        };
        self.update(board_id, monitor_id, &req).await?;
        Ok(())
    }
}
