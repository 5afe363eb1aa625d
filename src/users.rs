//! Organization user operations.

use crate::client::Client;
use crate::envelope::{decode, ListEnvelope};
use crate::error::Error;
use crate::models::User;

/// Organization user operations.
pub struct UsersService<'c> {
    client: &'c Client,
}

impl Client {
    /// User operations.
    pub fn users(&self) -> UsersService<'_> {
        UsersService { client: self }
    }
}

impl UsersService<'_> {
    /// List all organization users.
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        let body = self.client.get("/users").await?;
        let resp: ListEnvelope<User> = decode(&body, "users")?;
        Ok(resp.data)
    }
}
