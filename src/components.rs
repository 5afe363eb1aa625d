//! Component operations for monitors.

use crate::client::Client;
use crate::envelope::{decode, ListEnvelope};
use crate::error::{validate_id, Error};
use crate::models::Component;
use crate::pagination::{append_query, ListOptions, Pagination, MAX_PER_PAGE};

/// Operations on the components tracked by a monitor.
pub struct ComponentsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Component operations.
    pub fn components(&self) -> ComponentsService<'_> {
        ComponentsService { client: self }
    }
}

impl ComponentsService<'_> {
    /// List components for a monitor with pagination.
    pub async fn list_for_monitor(
        &self,
        board_id: &str,
        monitor_id: &str,
        opts: Option<ListOptions>,
    ) -> Result<(Vec<Component>, Pagination), Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let mut path = format!(
            "/boards/{}/monitors/{}/components",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        if let Some(opts) = opts {
            append_query(&mut path, &opts.query());
        }

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Component> = decode(&body, "components")?;
        Ok((resp.data, resp.pagination))
    }

    /// List all components for a monitor across all pages.
    pub async fn list_all_for_monitor(
        &self,
        board_id: &str,
        monitor_id: &str,
    ) -> Result<Vec<Component>, Error> {
        let mut all = Vec::new();
        let mut opts = ListOptions {
            page: 1,
            per_page: MAX_PER_PAGE,
        };

        loop {
            let (components, pagination) = self
                .list_for_monitor(board_id, monitor_id, Some(opts))
                .await?;
            all.extend(components);
            if !pagination.has_next_page() {
                break;
            }
            opts.page += 1;
        }

        Ok(all)
    }

    /// List components filtered by status.
    ///
    /// Use `"affected"` for all non-up components, or comma-separated status
    /// values such as `"down,warn"`.
    pub async fn list_by_status(
        &self,
        board_id: &str,
        monitor_id: &str,
        status: &str,
    ) -> Result<Vec<Component>, Error> {
        validate_id(board_id, "board_id")?;
        validate_id(monitor_id, "monitor_id")?;

        let mut path = format!(
            "/boards/{}/monitors/{}/components",
            urlencoding::encode(board_id),
            urlencoding::encode(monitor_id)
        );
        append_query(&mut path, &[("status", status.to_string())]);

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Component> = decode(&body, "components")?;
        Ok(resp.data)
    }
}
