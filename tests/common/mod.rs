//! Scripted records service for driving `RecordsApp` against `HeadlessPage`

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Once;
use std::time::Duration;

use log::Log;

use records_admin::app::{HeadlessPage, RecordsApp};
use records_admin::client::RecordsApi;
use records_admin::config::ApiConfig;
use records_admin::error::{ErrorKind, Result};
use records_admin::interface::{ApiRequest, ApiResponse, Method, RequestApi};
use records_admin::view::{Card, ListView, Section};
use serde_json::Value;

pub const BASE_URL: &str = "http://records.test";

#[derive(Debug, Clone)]
enum Reply {
    Respond { status: u16, body: String },
    NetworkError(String),
}

#[derive(Debug, Clone)]
struct Route {
    reply: Reply,
    delay: Option<Duration>,
}

/// Unrouted requests get a 404.
#[derive(Debug, Default)]
pub struct MockApi {
    routes: RefCell<HashMap<(Method, String), Route>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.set(
            method,
            path,
            Reply::Respond {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn empty(self, method: Method, path: &str, status: u16) -> Self {
        self.set(
            method,
            path,
            Reply::Respond {
                status,
                body: String::new(),
            },
        );
        self
    }

    pub fn network_error(self, method: Method, path: &str, message: &str) -> Self {
        self.set(method, path, Reply::NetworkError(message.to_string()));
        self
    }

    /// Hold the response to an already scripted route for `delay`.
    pub fn delayed(self, method: Method, path: &str, delay: Duration) -> Self {
        if let Some(route) = self
            .routes
            .borrow_mut()
            .get_mut(&(method, path.to_string()))
        {
            route.delay = Some(delay);
        }
        self
    }

    fn set(&self, method: Method, path: &str, reply: Reply) {
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), Route { reply, delay: None });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// (method, path) of every request so far, in order.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests
            .borrow()
            .iter()
            .map(|r| (r.method, path_of(&r.url).to_string()))
            .collect()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.requests.borrow().iter().rev().find_map(|r| r.body.clone())
    }
}

fn path_of(url: &str) -> &str {
    url.strip_prefix(BASE_URL).unwrap_or(url)
}

impl RequestApi for MockApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        let key = (request.method, path_of(&request.url).to_string());
        let route = self.routes.borrow().get(&key).cloned();

        let Some(route) = route else {
            return Ok(ApiResponse {
                status: 404,
                body: String::new(),
            });
        };
        if let Some(delay) = route.delay {
            tokio::time::sleep(delay).await;
        }

        match route.reply {
            Reply::Respond { status, body } => Ok(ApiResponse { status, body }),
            Reply::NetworkError(message) => Err(ErrorKind::NetworkError(message).into()),
        }
    }
}

pub type TestApp = RecordsApp<MockApi, HeadlessPage>;

pub fn app(api: MockApi) -> TestApp {
    init_logging();
    let config = ApiConfig::new(BASE_URL).expect("valid base url");
    RecordsApp::new(RecordsApi::new(api, config), HeadlessPage::new())
}

pub fn mock(app: &TestApp) -> &MockApi {
    app.api().client()
}

static INIT: Once = Once::new();

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Keeps every record on the thread that logged it and passes it on to
/// `env_logger` in test mode.
struct CapturingLogger {
    inner: env_logger::Logger,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
        if self.inner.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn init_logging() {
    INIT.call_once(|| {
        let inner = env_logger::builder().is_test(true).build();
        if log::set_boxed_logger(Box::new(CapturingLogger { inner })).is_ok() {
            log::set_max_level(log::LevelFilter::Debug);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Messages logged at `level` on this test's thread since `app` was built.
pub fn logged(level: log::Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

pub fn cards(app: &TestApp, section: Section) -> Vec<Card> {
    match app.page().list(section) {
        Some(ListView::Cards(cards)) => cards,
        other => panic!("expected cards in {section}, got {other:?}"),
    }
}

pub fn field<'a>(card: &'a Card, label: &str) -> &'a str {
    card.fields
        .iter()
        .find(|f| f.label == label)
        .map(|f| f.value.as_str())
        .unwrap_or_else(|| panic!("card has no {label} field"))
}
