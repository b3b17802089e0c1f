//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::error::Result;
use crate::interface::{ApiRequest, ApiResponse, HttpClient, Method, RequestApi};
use reqwest::{header::CONTENT_TYPE, Client};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
}

impl HttpClient for NoWasmClient {
    async fn new() -> Result<Self> {
        // 不设置超时，沿用默认行为
        let client = Client::builder().build()?;

        Ok(Self { client })
    }
}

impl RequestApi for NoWasmClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        log::debug!("{} {} -> {}", request.method.as_str(), request.url, status);

        Ok(ApiResponse { status, body })
    }
}
