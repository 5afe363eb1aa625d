//! Website monitor operations.

use crate::client::Client;
use crate::envelope::{decode, ItemEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{WebsiteMonitor, WebsiteMonitorRequest};

/// Website (HTTP) monitor operations.
pub struct WebsiteMonitorsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Website monitor operations.
    pub fn website_monitors(&self) -> WebsiteMonitorsService<'_> {
        WebsiteMonitorsService { client: self }
    }
}

impl WebsiteMonitorsService<'_> {
    /// Create a new website monitor.
    pub async fn create(
        &self,
        board_id: &str,
        req: &WebsiteMonitorRequest,
    ) -> Result<WebsiteMonitor, Error> {
        validate_id(board_id, "board_id")?;

        let path = format!("/boards/{}/website_monitors", urlencoding::encode(board_id));
        let body = self.client.post(&path, Some(req)).await?;
        let resp: ItemEnvelope<WebsiteMonitor> = decode(&body, "website monitor")?;
        Ok(resp.data)
    }

    /// Update an existing website monitor.
    pub async fn update(
        &self,
        board_id: &str,
        monitor_id: &str,
        req: &WebsiteMonitorRequest,
    ) -> Result<WebsiteMonitor, Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let path = format!(
            "/boards/{}/website_monitors/{}",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        let body = self.client.patch(&path, Some(req)).await?;
        let resp: ItemEnvelope<WebsiteMonitor> = decode(&body, "website monitor")?;
        Ok(resp.data)
    }

    /// Pause the website monitor.
    pub async fn pause(&self, board_id: &str, monitor_id: &str) -> Result<(), Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let path = format!(
            "/boards/{}/website_monitors/{}/pause",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        self.client.post::<()>(&path, None).await?;
        Ok(())
    }

    /// Resume the website monitor.
    pub async fn unpause(&self, board_id: &str, monitor_id: &str) -> Result<(), Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let path = format!(
            "/boards/{}/website_monitors/{}/unpause",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        self.client.post::<()>(&path, None).await?;
        Ok(())
    }
}
