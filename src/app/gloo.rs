//! WASM application implementation
//!
//! This module contains the browser side: a [`Page`] over the live DOM,
//! a `log` sink writing to the browser console, and the entry point that
//! wires tab, card and form events to [`RecordsApp`].

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

use super::RecordsApp;
use crate::client::gloo::WasmClient;
use crate::client::RecordsApi;
use crate::config::ApiConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::Page;
use crate::view::{html, Field, FormKind, ListView, Section, SelectOption};

type BrowserApp = RecordsApp<WasmClient, BrowserPage>;

pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| ErrorKind::ParseError("No window object".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ErrorKind::ParseError("No document object".to_string()))?;
        Ok(Self { window, document })
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            // 响应到达时元素可能已不存在
            log::debug!("element #{id} not found");
        }
        element
    }
}

impl Page for BrowserPage {
    type Control = Element;

    fn show_section(&self, section: Section) {
        for candidate in Section::ALL {
            if let Some(el) = self.element(candidate.dom_id()) {
                let _ = el
                    .class_list()
                    .toggle_with_force("active", candidate == section);
            }
        }
    }

    fn mark_tab_active(&self, control: &Element) {
        if let Ok(tabs) = self.document.query_selector_all(".tab-btn") {
            for i in 0..tabs.length() {
                if let Some(tab) = tabs.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    let _ = tab.class_list().remove_1("active");
                }
            }
        }
        let _ = control.class_list().add_1("active");
    }

    fn render_list(&self, section: Section, view: &ListView) {
        if let Some(el) = self.element(section.list_id()) {
            el.set_inner_html(&html::render_list(section, view));
        }
    }

    fn set_select_options(&self, field: Field, placeholder: &str, options: &[SelectOption]) {
        if let Some(el) = self.element(field.dom_id()) {
            el.set_inner_html(&html::render_options(placeholder, options));
        }
    }

    fn field_value(&self, field: Field) -> String {
        let Some(el) = self.element(field.dom_id()) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_field_value(&self, field: Field, value: &str) {
        let Some(el) = self.element(field.dom_id()) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn reset_form(&self, form: FormKind) {
        if let Some(el) = self.element(form.element_id()) {
            if let Some(form) = el.dyn_ref::<HtmlFormElement>() {
                form.reset();
            }
        }
    }

    fn set_form_visible(&self, form: FormKind, visible: bool) {
        if let Some(el) = self.element(form.container_id()) {
            if let Some(el) = el.dyn_ref::<HtmlElement>() {
                let display = if visible { "block" } else { "none" };
                let _ = el.style().set_property("display", display);
            }
        }
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn install_console_logger() {
    if log::set_logger(&CONSOLE_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

fn on_click(app: &Rc<BrowserApp>, event: &Event) {
    if let Some(tab) = closest(event, ".tab-btn[data-section]") {
        let Some(section) = tab
            .get_attribute("data-section")
            .and_then(|s| s.parse::<Section>().ok())
        else {
            return;
        };
        let app = Rc::clone(app);
        spawn_local(async move {
            app.activate_section(section, &tab).await;
        });
        return;
    }

    let Some(button) = closest(event, "[data-action]") else {
        return;
    };
    let action = button.get_attribute("data-action").unwrap_or_default();
    let section = button
        .get_attribute("data-section")
        .and_then(|s| s.parse::<Section>().ok());
    let form = button
        .get_attribute("data-form")
        .and_then(|s| s.parse::<FormKind>().ok());
    let id = button
        .get_attribute("data-id")
        .and_then(|s| s.parse::<i64>().ok());

    let app = Rc::clone(app);
    match (action.as_str(), section, form, id) {
        ("edit", Some(section), _, Some(id)) => spawn_local(async move {
            app.edit_record(section, id).await;
        }),
        ("delete", Some(section), _, Some(id)) => spawn_local(async move {
            app.delete_record(section, id).await;
        }),
        ("new", _, Some(form), _) => spawn_local(async move {
            app.open_form(form).await;
        }),
        ("cancel", _, Some(form), _) => app.close_form(form),
        _ => log::debug!("unhandled action {action:?}"),
    }
}

fn on_submit(app: &Rc<BrowserApp>, event: &Event) {
    let Some(form) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| FormKind::from_element_id(&el.id()))
    else {
        return;
    };
    event.prevent_default();

    let app = Rc::clone(app);
    spawn_local(async move {
        app.save_form(form).await;
    });
}

/// WASM entry point
#[wasm_bindgen(start)]
pub fn start() -> core::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    install_console_logger();

    let config = ApiConfig::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("records service at {}", config.base_url());

    let page = BrowserPage::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let document = page.document.clone();
    let app = Rc::new(RecordsApp::new(RecordsApi::new(WasmClient, config), page));

    let click_app = Rc::clone(&app);
    let click_handler = Closure::wrap(Box::new(move |event: Event| {
        on_click(&click_app, &event);
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("click", click_handler.as_ref().unchecked_ref())?;
    click_handler.forget();

    let submit_app = Rc::clone(&app);
    let submit_handler = Closure::wrap(Box::new(move |event: Event| {
        on_submit(&submit_app, &event);
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("submit", submit_handler.as_ref().unchecked_ref())?;
    submit_handler.forget();

    spawn_local(async move {
        app.start().await;
    });

    Ok(())
}
