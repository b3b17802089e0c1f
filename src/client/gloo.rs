//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::error::Result;
use crate::interface::{ApiRequest, ApiResponse, HttpClient, Method, RequestApi};
use gloo_net::http::{Request, RequestBuilder};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone, Default)]
pub struct WasmClient;

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl WasmClient {
    fn build_request(method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };

        builder.header("Accept", "application/json")
    }
}

impl RequestApi for WasmClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let builder = Self::build_request(request.method, &request.url);

        // json() also sets Content-Type: application/json
        let resp = match &request.body {
            Some(body) => builder.json(body)?.send().await?,
            None => builder.send().await?,
        };

        let status = resp.status();
        let body = resp.text().await?;

        log::debug!("{} {} -> {}", request.method.as_str(), request.url, status);

        Ok(ApiResponse { status, body })
    }
}
