//! Monitoring region operations.

use crate::client::Client;
use crate::envelope::{decode, ListEnvelope};
use crate::error::Error;
use crate::models::Region;

/// Monitoring region operations.
pub struct RegionsService<'c> {
    client: &'c Client,
}

impl Client {
    /// Monitoring region operations.
    pub fn regions(&self) -> RegionsService<'_> {
        RegionsService { client: self }
    }
}

impl RegionsService<'_> {
    /// List all available monitoring regions.
    pub async fn list(&self) -> Result<Vec<Region>, Error> {
        let body = self.client.get("/monitoring_regions").await?;
        let resp: ListEnvelope<Region> = decode(&body, "regions")?;
        Ok(resp.data)
    }
}
