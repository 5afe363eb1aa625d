//! Status page subscriber operations.

use crate::client::Client;
use crate::envelope::{decode, ItemEnvelope, ListEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{Subscriber, SubscriberRequest};
use crate::pagination::{append_query, ListOptions, Pagination, MAX_PER_PAGE};

/// Status page subscriber operations.
pub struct SubscribersService<'c> {
    client: &'c Client,
}

impl Client {
    /// Status page subscriber operations.
    pub fn subscribers(&self) -> SubscribersService<'_> {
        SubscribersService { client: self }
    }
}

impl SubscribersService<'_> {
    /// List subscribers for a board with pagination.
    pub async fn list(
        &self,
        board_id: &str,
        opts: Option<ListOptions>,
    ) -> Result<(Vec<Subscriber>, Pagination), Error> {
        validate_id(board_id, "board_id")?;

        let mut path = format!(
            "/boards/{}/status_page_subscribers",
            urlencoding::encode(board_id)
        );
        if let Some(opts) = opts {
            append_query(&mut path, &opts.query());
        }

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Subscriber> = decode(&body, "subscribers")?;
        Ok((resp.data, resp.pagination))
    }

    /// List all subscribers for a board across all pages.
    pub async fn list_all(&self, board_id: &str) -> Result<Vec<Subscriber>, Error> {
        let mut all = Vec::new();
        let mut opts = ListOptions {
            page: 1,
            per_page: MAX_PER_PAGE,
        };

        loop {
            let (subscribers, pagination) = self.list(board_id, Some(opts)).await?;
            all.extend(subscribers);
            if !pagination.has_next_page() {
                break;
            }
            opts.page += 1;
        }

        Ok(all)
    }

    /// Add a new subscriber to a board.
    pub async fn add(&self, board_id: &str, req: &SubscriberRequest) -> Result<Subscriber, Error> {
        validate_id(board_id, "board_id")?;

        let path = format!(
            "/boards/{}/status_page_subscribers",
            urlencoding::encode(board_id)
        );
        let body = self.client.post(&path, Some(req)).await?;
        let resp: ItemEnvelope<Subscriber> = decode(&body, "subscriber")?;
        Ok(resp.data)
    }

    /// Remove a subscriber by ID.
    pub async fn delete_by_id(&self, board_id: &str, subscriber_id: &str) -> Result<(), Error> {
        validate_id(board_id, "board_id")?;
        validate_id(subscriber_id, "subscriber_id")?;

        let mut path = format!(
            "/boards/{}/status_page_subscribers",
            urlencoding::encode(board_id)
        );
        append_query(&mut path, &[("id", subscriber_id.to_string())]);
        self.client.delete(&path).await
    }

    /// Remove a subscriber by email.
    pub async fn delete_by_email(&self, board_id: &str, email: &str) -> Result<(), Error> {
        validate_id(board_id, "board_id")?;
        if email.is_empty() {
            return Err(Error::EmptyEmail);
        }

        let mut path = format!(
            "/boards/{}/status_page_subscribers",
            urlencoding::encode(board_id)
        );
        append_query(&mut path, &[("email", email.to_string())]);
        self.client.delete(&path).await
    }
}
