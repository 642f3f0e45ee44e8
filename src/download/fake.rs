//! In-memory transport that replays scripted responses and records requests.

use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::collections::VecDeque;
use url::Url;

use crate::download::blocking::{Chunks, FetchedResponse, Transport};

pub struct FakeResponse {
    cookies: Vec<(String, String)>,
    chunks: Vec<Vec<u8>>,
}

impl FakeResponse {
    pub fn new(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            cookies: Vec::new(),
            chunks,
        }
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(&self) -> Vec<u8> {
        self.chunks.concat()
    }
}

impl FetchedResponse for FakeResponse {
    fn cookie_pairs(&self) -> Vec<(String, String)> {
        self.cookies.clone()
    }

    fn into_chunks(self, _chunk_size: usize) -> Chunks {
        Box::new(self.chunks.into_iter().map(Ok))
    }
}

pub struct FakeTransport {
    responses: RefCell<VecDeque<FakeResponse>>,
    requests: RefCell<Vec<Url>>,
}

impl FakeTransport {
    pub fn new(responses: Vec<FakeResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    type Response = FakeResponse;

    fn get(&self, url: &Url) -> Result<FakeResponse> {
        self.requests.borrow_mut().push(url.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("connection refused: {}", url))
    }
}
