//! Service catalog operations.
//!
//! Catalog-wide listing requires Firehose access on the account; the API
//! responds with 403 otherwise.

use crate::client::Client;
use crate::envelope::{decode, ListEnvelope};
use crate::error::{validate_id, Error};
use crate::models::{Component, Service};
use crate::pagination::{append_query, ListOptions, Pagination, MAX_PER_PAGE};

/// External service catalog operations.
pub struct ServicesService<'c> {
    client: &'c Client,
}

impl Client {
    /// Service catalog operations.
    pub fn services(&self) -> ServicesService<'_> {
        ServicesService { client: self }
    }
}

impl ServicesService<'_> {
    /// List available services with pagination. Requires Firehose access.
    pub async fn list(
        &self,
        opts: Option<ListOptions>,
    ) -> Result<(Vec<Service>, Pagination), Error> {
        let mut path = String::from("/services");
        if let Some(opts) = opts {
            append_query(&mut path, &opts.query());
        }

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Service> = decode(&body, "services")?;
        Ok((resp.data, resp.pagination))
    }

    /// List all available services across all pages. Requires Firehose access.
    pub async fn list_all(&self) -> Result<Vec<Service>, Error> {
        let mut all = Vec::new();
        let mut opts = ListOptions {
            page: 1,
            per_page: MAX_PER_PAGE,
        };

        loop {
            let (services, pagination) = self.list(Some(opts)).await?;
            all.extend(services);
            if !pagination.has_next_page() {
                break;
            }
            opts.page += 1;
        }

        Ok(all)
    }

    /// Search for services by query.
    pub async fn search(&self, query: &str) -> Result<Vec<Service>, Error> {
        let mut path = String::from("/services/search");
        append_query(&mut path, &[("query", query.to_string())]);

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Service> = decode(&body, "services")?;
        Ok(resp.data)
    }

    /// List components for a service with pagination.
    pub async fn list_components(
        &self,
        service_id: &str,
        opts: Option<ListOptions>,
    ) -> Result<(Vec<Component>, Pagination), Error> {
        validate_id(service_id, "service_id")?;

        let mut path = format!("/services/{}/components", urlencoding::encode(service_id));
        if let Some(opts) = opts {
            append_query(&mut path, &opts.query());
        }

        let body = self.client.get(&path).await?;
        let resp: ListEnvelope<Component> = decode(&body, "service components")?;
        Ok((resp.data, resp.pagination))
    }

    /// List all components for a service across all pages.
    pub async fn list_all_components(&self, service_id: &str) -> Result<Vec<Component>, Error> {
        let mut all = Vec::new();
        let mut opts = ListOptions {
            page: 1,
            per_page: MAX_PER_PAGE,
        };

        loop {
            let (components, pagination) = self.list_components(service_id, Some(opts)).await?;
            all.extend(components);
            if !pagination.has_next_page() {
                break;
            }
            opts.page += 1;
        }

        Ok(all)
    }
}
