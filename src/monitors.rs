//! Common monitor operations across all monitor types.

use crate::client::Client;
use crate::envelope::{decode, ListEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{Monitor, MonitorStatus};
use crate::pagination::{append_query, ListOptions, Pagination, MAX_PER_PAGE};

/// Operations on the monitors of a board, regardless of monitor type.
pub struct MonitorsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Monitor operations.
    pub fn monitors(&self) -> MonitorsService<'_> {
        MonitorsService { client: self }
    }
}

impl MonitorsService<'_> {
    /// List monitors for a board with pagination.
    pub async fn list(
        &self,
        board_id: &str,
        opts: Option<ListOptions>,
    ) -> Result<(Vec<Monitor>, Pagination), Error> {
        validate_id(board_id, "board_id")?;

        let mut path = format!("/boards/{}/monitors", urlencoding::encode(board_id));
        if let Some(opts) = opts {
            append_query(&mut path, &opts.query());
        }

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Monitor> = decode(&body, "monitors")?;
        Ok((resp.data, resp.pagination))
    }

    /// List all monitors for a board across all pages.
    pub async fn list_all(&self, board_id: &str) -> Result<Vec<Monitor>, Error> {
        let mut all = Vec::new();
        let mut opts = ListOptions {
            page: 1,
            per_page: MAX_PER_PAGE,
        };

        loop {
            let (monitors, pagination) = self.list(board_id, Some(opts)).await?;
            all.extend(monitors);
            if !pagination.has_next_page() {
                break;
            }
            opts.page += 1;
        }

        Ok(all)
    }

    /// List monitors filtered by status.
    pub async fn list_by_status(
        &self,
        board_id: &str,
        status: MonitorStatus,
    ) -> Result<Vec<Monitor>, Error> {
        validate_id(board_id, "board_id")?;

        let mut path = format!("/boards/{}/monitors", urlencoding::encode(board_id));
        append_query(&mut path, &[("status", status.as_str().to_string())]);

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Monitor> = decode(&body, "monitors")?;
        Ok(resp.data)
    }

    /// Remove a monitor by ID.
    pub async fn delete(&self, board_id: &str, monitor_id: &str) -> Result<(), Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let path = format!(
            "/boards/{}/monitors/{}",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        self.client.delete(&path).await
    }
}
