//! Service monitor operations.

use crate::client::Client;
use crate::envelope::{decode, ItemEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{ServiceMonitor, ServiceMonitorRequest};

/// Operations for monitors that subscribe to external status pages.
pub struct ServiceMonitorsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Service monitor operations.
    pub fn service_monitors(&self) -> ServiceMonitorsService<'_> {
        ServiceMonitorsService { client: self }
    }
}

impl ServiceMonitorsService<'_> {
    /// Subscribe to an external status page.
    pub async fn create(
        &self,
        board_id: &str,
        req: &ServiceMonitorRequest,
    ) -> Result<ServiceMonitor, Error> {
        validate_id(board_id, "board_id")?;

        let path = format!("/boards/{}/service_monitors", urlencoding::encode(board_id));
        let body = self.client.post(&path, Some(req)).await?;
        let resp: ItemEnvelope<ServiceMonitor> = decode(&body, "service monitor")?;
        Ok(resp.data)
    }

    /// Update a service monitor.
    pub async fn update(
        &self,
        board_id: &str,
        monitor_id: &str,
        req: &ServiceMonitorRequest,
    ) -> Result<ServiceMonitor, Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let path = format!(
            "/boards/{}/service_monitors/{}",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        let body = self.client.patch(&path, Some(req)).await?;
        let resp: ItemEnvelope<ServiceMonitor> = decode(&body, "service monitor")?;
        Ok(resp.data)
    }
}
