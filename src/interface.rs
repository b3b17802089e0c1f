#![allow(async_fn_in_trait)] // 允许在内部 trait 中使用 async fn

use crate::error::{ErrorKind, Result};
use crate::view::{Field, FormKind, ListView, Section, SelectOption};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One call to the records service. Bodies are always JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            body: None,
        }
    }

    pub fn delete(url: String) -> Self {
        Self {
            method: Method::Delete,
            url,
            body: None,
        }
    }

    pub fn with_json(method: Method, url: String, body: Value) -> Self {
        Self {
            method,
            url,
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Non-2xx statuses become `failure()`; the service's own error body is
    /// only logged.
    pub fn ensure_success(self, failure: impl FnOnce() -> String) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            log::debug!("HTTP {} with body: {}", self.status, self.body);
            Err(ErrorKind::ApiError(failure()).into())
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// Transport seam between the typed API and the platform HTTP stack
pub trait RequestApi {
    /// Send one request and hand back status and body. Only failures to get
    /// a response at all are errors here.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Everything the managers need from the page they draw on.
///
/// Implementations use interior mutability: the browser DOM is mutable
/// through shared references anyway, and the managers hold `&self` across
/// awaits.
pub trait Page {
    /// Whatever identifies a tab control on this page.
    type Control;

    /// Show `section`, hide the others.
    fn show_section(&self, section: Section);
    /// Clear the active mark from every tab, then set it on `control`.
    fn mark_tab_active(&self, control: &Self::Control);

    fn render_list(&self, section: Section, view: &ListView);
    /// Replace a select's options with `placeholder` followed by `options`.
    fn set_select_options(&self, field: Field, placeholder: &str, options: &[SelectOption]);

    fn field_value(&self, field: Field) -> String;
    /// On a select, a value without a matching option leaves nothing selected.
    fn set_field_value(&self, field: Field, value: &str);
    fn reset_form(&self, form: FormKind);
    fn set_form_visible(&self, form: FormKind, visible: bool);

    /// Blocking notice.
    fn alert(&self, message: &str);
    /// Blocking yes/no question.
    fn confirm(&self, message: &str) -> bool;
}
