//! Incident operations.

use crate::client::Client;
use crate::envelope::{decode, ItemEnvelope, ListEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{Incident, IncidentRequest, IncidentUpdate, IncidentUpdateRequest};
use crate::pagination::{append_query, ListOptions, Pagination, MAX_PER_PAGE};

/// Incident and maintenance window operations.
pub struct IncidentsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Incident operations.
    pub fn incidents(&self) -> IncidentsService<'_> {
        IncidentsService { client: self }
    }
}

impl IncidentsService<'_> {
    /// List incidents for a board with pagination.
    pub async fn list(
        &self,
        board_id: &str,
        opts: Option<ListOptions>,
    ) -> Result<(Vec<Incident>, Pagination), Error> {
        validate_id(board_id, "board_id")?;

        let mut path = format!("/boards/{}/incidents", urlencoding::encode(board_id));
        if let Some(opts) = opts {
            append_query(&mut path, &opts.query());
        }

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Incident> = decode(&body, "incidents")?;
        Ok((resp.data, resp.pagination))
    }

    /// List all incidents for a board across all pages.
    pub async fn list_all(&self, board_id: &str) -> Result<Vec<Incident>, Error> {
        let mut all = Vec::new();
        let mut opts = ListOptions {
            page: 1,
            per_page: MAX_PER_PAGE,
        };

        loop {
            let (incidents, pagination) = self.list(board_id, Some(opts)).await?;
            all.extend(incidents);
            if !pagination.has_next_page() {
                break;
            }
            opts.page += 1;
        }

        Ok(all)
    }

    /// Create a new incident or maintenance window.
    pub async fn create(&self, board_id: &str, req: &IncidentRequest) -> Result<Incident, Error> {
        validate_id(board_id, "board_id")?;

        let path = format!("/boards/{}/incidents", urlencoding::encode(board_id));
        let body = self.client.post(&path, Some(req)).await?;
        let resp: ItemEnvelope<Incident> = decode(&body, "incident")?;
        Ok(resp.data)
    }

    /// Add a status update to an incident.
    pub async fn add_update(
        &self,
        board_id: &str,
        incident_id: &str,
        req: &IncidentUpdateRequest,
    ) -> Result<IncidentUpdate, Error> {
        validate_id(board_id, "board_id")?;
        validate_id(incident_id, "incident_id")?;

        let path = format!(
            "/boards/{}/incidents/{}/incident_updates",
            urlencoding::encode(board_id),
            urlencoding::encode(incident_id)
        );
        let body = self.client.post(&path, Some(req)).await?;
        let resp: ItemEnvelope<IncidentUpdate> = decode(&body, "incident update")?;
        Ok(resp.data)
    }
}
