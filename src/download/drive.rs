//! Google Drive's export endpoint and its large-file confirmation quirk.
//!
//! Files too big for the virus scanner come back as a warning page along with
//! a `download_warning*` cookie. Repeating the request with the cookie's value
//! as `confirm` returns the real content.

use anyhow::Result;
use tracing::debug;
use url::Url;

use crate::download::blocking::{FetchedResponse, Transport};

pub const DEFAULT_ENDPOINT: &str = "https://docs.google.com/uc?export=download";

const WARNING_COOKIE_PREFIX: &str = "download_warning";

/// Appends the file id, and the confirm token if any, to the endpoint query.
pub fn export_url(endpoint: &Url, remote_id: &str, confirm: Option<&str>) -> Url {
    let mut url = endpoint.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("id", remote_id);
        if let Some(token) = confirm {
            query.append_pair("confirm", token);
        }
    }
    url
}

pub fn confirm_token(cookies: &[(String, String)]) -> Option<String> {
    cookies
        .iter()
        .find(|(name, _)| name.starts_with(WARNING_COOKIE_PREFIX))
        .map(|(_, value)| value.clone())
        .filter(|value| !value.is_empty())
}

/// Returns the response carrying the file body, following the confirmation
/// step when the host asks for it.
pub fn resolve<T: Transport>(
    transport: &T,
    endpoint: &Url,
    remote_id: &str,
) -> Result<T::Response> {
    let response = transport.get(&export_url(endpoint, remote_id, None))?;
    match confirm_token(&response.cookie_pairs()) {
        Some(token) => {
            debug!(remote_id, "Large file warning, confirming download");
            transport.get(&export_url(endpoint, remote_id, Some(&token)))
        }
        None => Ok(response),
    }
}
