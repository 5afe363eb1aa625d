//! Response envelopes shared by all resource services.
//!
//! Every endpoint wraps its payload as `{"success": bool, "data": ...}`,
//! with list endpoints adding an optional `"pagination"` object.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Error;
use crate::pagination::Pagination;

#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    #[serde(default)]
    #[allow(dead_code)]
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemEnvelope<T> {
    #[serde(default)]
    #[allow(dead_code)]
    pub success: bool,
    pub data: T,
}

/// Decode a response body, naming the failing response on error.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8], context: &'static str) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|source| Error::Decode { context, source })
}
