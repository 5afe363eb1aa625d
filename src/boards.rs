//! Board operations.

use crate::client::Client;
use crate::envelope::{decode, ItemEnvelope, ListEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{Board, HistoryEvent, HistoryOptions};
use crate::pagination::{append_query, ListOptions, Pagination, MAX_PER_PAGE};

/// Board-related API operations.
pub struct BoardsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Board operations.
    pub fn boards(&self) -> BoardsService<'_> {
        BoardsService { client: self }
    }
}

impl BoardsService<'_> {
    /// List boards with pagination.
    pub async fn list(&self, opts: Option<ListOptions>) -> Result<(Vec<Board>, Pagination), Error> {
        let mut path = String::from("/boards");
        if let Some(opts) = opts {
            append_query(&mut path, &opts.query());
        }

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Board> = decode(&body, "boards")?;
        Ok((resp.data, resp.pagination))
    }

    /// List all boards across all pages.
    pub async fn list_all(&self) -> Result<Vec<Board>, Error> {
        let mut all = Vec::new();
        let mut opts = ListOptions {
            page: 1,
            per_page: MAX_PER_PAGE,
        };

        loop {
            let (boards, pagination) = self.list(Some(opts)).await?;
            all.extend(boards);
            if !pagination.has_next_page() {
                break;
            }
            opts.page += 1;
        }

        Ok(all)
    }

    /// Get a specific board by ID.
    pub async fn get(&self, board_id: &str) -> Result<Board, Error> {
        validate_id(board_id, "board_id")?;

        let path = format!("/boards/{}", urlencoding::encode(board_id));
        let body = self.client.get(&path).await?;
        let resp: ItemEnvelope<Board> = decode(&body, "board")?;
        Ok(resp.data)
    }

    /// Get historical status events for a board.
    pub async fn history(
        &self,
        board_id: &str,
        opts: Option<&HistoryOptions>,
    ) -> Result<Vec<HistoryEvent>, Error> {
        validate_id(board_id, "board_id")?;

        let mut params = Vec::new();
        if let Some(opts) = opts {
            if let Some(start) = &opts.start_date {
                params.push(("start_date", start.clone()));
            }
            if let Some(end) = &opts.end_date {
                params.push(("end_date", end.clone()));
            }
            if let Some(monitor_id) = &opts.monitor_id {
                params.push(("monitor_id", monitor_id.clone()));
            }
        }

        let mut path = format!("/boards/{}/history", urlencoding::encode(board_id));
        append_query(&mut path, &params);

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<HistoryEvent> = decode(&body, "board history")?;
        Ok(resp.data)
    }
}
