//! Application module - handles core application logic
//!
//! [`RecordsApp`] owns the typed API client and the page, and implements the
//! section router plus the department, student and enrollment managers. The
//! page is abstract: the browser build draws on the DOM (`gloo`), the
//! terminal build on an in-memory page it prints afterwards (`terminal`).

mod crud;
mod departments;
mod enrollments;
pub mod headless;
pub mod navigation;
mod router;
mod students;

#[cfg(feature = "no-wasm")]
pub mod terminal;

#[cfg(feature = "wasm")]
pub mod gloo;

use crate::client::RecordsApi;
use crate::interface::{Page, RequestApi};

pub use enrollments::STUDENT_PLACEHOLDER;
pub use headless::{HeadlessPage, PageState};
pub use navigation::{NavToken, Navigation};
pub use students::DEPARTMENT_PLACEHOLDER;

/// How a page operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The result reached the page.
    Applied,
    /// The request failed and the failure was shown.
    Failed,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// A later navigation superseded this one; the response was dropped.
    Discarded,
}

pub struct RecordsApp<C, P> {
    api: RecordsApi<C>,
    page: P,
    navigation: Navigation,
}

impl<C: RequestApi, P: Page> RecordsApp<C, P> {
    pub fn new(api: RecordsApi<C>, page: P) -> Self {
        Self {
            api,
            page,
            navigation: Navigation::default(),
        }
    }

    pub fn api(&self) -> &RecordsApi<C> {
        &self.api
    }

    pub fn page(&self) -> &P {
        &self.page
    }
}
