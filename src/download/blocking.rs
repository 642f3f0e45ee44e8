use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use std::io;
use std::path::Path;
use tracing::info;
use url::Url;

use crate::download::{drive, utils};

pub const CHUNK_SIZE: usize = 32_768;

pub type Chunks = Box<dyn Iterator<Item = io::Result<Vec<u8>>>>;

/// What the downloader needs from an HTTP response.
pub trait FetchedResponse {
    /// Name/value pairs from the response's `Set-Cookie` headers.
    fn cookie_pairs(&self) -> Vec<(String, String)>;

    fn into_chunks(self, chunk_size: usize) -> Chunks;
}

/// A GET-only HTTP session. Cookies set by one response are sent on later
/// requests made through the same transport.
pub trait Transport {
    type Response: FetchedResponse;

    fn get(&self, url: &Url) -> Result<Self::Response>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    type Response = Response;

    fn get(&self, url: &Url) -> Result<Response> {
        let resp = self.client.get(url.clone()).send()?;
        Ok(resp.error_for_status()?)
    }
}

impl FetchedResponse for Response {
    fn cookie_pairs(&self) -> Vec<(String, String)> {
        self.cookies()
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect()
    }

    fn into_chunks(self, chunk_size: usize) -> Chunks {
        Box::new(utils::ReadChunks::new(self, chunk_size))
    }
}

/// Fetches a drive file into `destination` over a fresh HTTP session.
pub fn download_file_blocking(
    endpoint: &Url,
    remote_id: &str,
    destination: &Path,
) -> Result<u64> {
    let transport = ReqwestTransport::new()?;
    download_with(&transport, endpoint, remote_id, destination)
}

pub fn download_with<T: Transport>(
    transport: &T,
    endpoint: &Url,
    remote_id: &str,
    destination: &Path,
) -> Result<u64> {
    let response = drive::resolve(transport, endpoint, remote_id)
        .with_context(|| format!("Failed to fetch drive file '{}'", remote_id))?;
    let written = utils::save_response_content(response.into_chunks(CHUNK_SIZE), destination)?;
    info!(
        remote_id,
        destination = %destination.display(),
        bytes = written,
        "Download complete"
    );
    Ok(written)
}
