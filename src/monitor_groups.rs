//! Monitor group operations.

use crate::client::Client;
use crate::envelope::{decode, ItemEnvelope, ListEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{MonitorGroup, MonitorGroupRequest};

/// Monitor group operations.
pub struct MonitorGroupsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Monitor group operations.
    pub fn monitor_groups(&self) -> MonitorGroupsService<'_> {
        MonitorGroupsService { client: self }
    }
}

impl MonitorGroupsService<'_> {
    /// List all monitor groups for a board.
    pub async fn list(&self, board_id: &str) -> Result<Vec<MonitorGroup>, Error> {
        validate_id(board_id, "board_id")?;

        let path = format!("/boards/{}/monitor_groups", urlencoding::encode(board_id));
        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<MonitorGroup> = decode(&body, "monitor groups")?;
        Ok(resp.data)
    }

    /// Get a specific monitor group.
    pub async fn get(&self, board_id: &str, group_id: &str) -> Result<MonitorGroup, Error> {
        validate_id(board_id, "board_id")?;
        validate_id(group_id, "group_id")?;

        let path = format!(
            "/boards/{}/monitor_groups/{}",
            urlencoding::encode(board_id),
            urlencoding::encode(group_id)
        );
        let body = self.client.get(&path).await?;
        let resp: ItemEnvelope<MonitorGroup> = decode(&body, "monitor group")?;
        Ok(resp.data)
    }

    /// Create a new monitor group.
    pub async fn create(
        &self,
        board_id: &str,
        req: &MonitorGroupRequest,
    ) -> Result<MonitorGroup, Error> {
        validate_id(board_id, "board_id")?;

        let path = format!("/boards/{}/monitor_groups", urlencoding::encode(board_id));
        let body = self.client.post(&path, Some(req)).await?;
        let resp: ItemEnvelope<MonitorGroup> = decode(&body, "monitor group")?;
        Ok(resp.data)
    }

    /// Update a monitor group.
    pub async fn update(
        &self,
        board_id: &str,
        group_id: &str,
        req: &MonitorGroupRequest,
    ) -> Result<MonitorGroup, Error> {
        validate_id(board_id, "board_id")?;
        validate_id(group_id, "group_id")?;

        let path = format!(
            "/boards/{}/monitor_groups/{}",
            urlencoding::encode(board_id),
            urlencoding::encode(group_id)
        );
        let body = self.client.patch(&path, Some(req)).await?;
        let resp: ItemEnvelope<MonitorGroup> = decode(&body, "monitor group")?;
        Ok(resp.data)
    }

    /// Remove a monitor group.
    pub async fn delete(&self, board_id: &str, group_id: &str) -> Result<(), Error> {
        validate_id(board_id, "board_id")?;
        validate_id(group_id, "group_id")?;

        let path = format!(
            "/boards/{}/monitor_groups/{}",
            urlencoding::encode(board_id),
            urlencoding::encode(group_id)
        );
        self.client.delete(&path).await
    }
}
