//! In-memory page
//!
//! Mirrors the parts of the browser page the managers touch: which section
//! and tab are active, what each list shows, field and select state, form
//! visibility, and the alerts raised. Selects follow browser rules: new
//! options reset the selection, and an unknown value selects nothing.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::interface::Page;
use crate::view::{Field, FormKind, ListView, Section, SelectOption};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub active_section: Option<Section>,
    pub active_tab: Option<Section>,
    pub lists: HashMap<Section, ListView>,
    pub fields: HashMap<Field, String>,
    pub select_options: HashMap<Field, Vec<SelectOption>>,
    pub select_placeholders: HashMap<Field, String>,
    pub visible_forms: HashSet<FormKind>,
    pub alerts: Vec<String>,
    pub confirmations: Vec<String>,
}

#[derive(Debug, Default)]
pub struct HeadlessPage {
    state: RefCell<PageState>,
    confirm_answer: Cell<bool>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// What every later `confirm` returns. Starts out as "no".
    pub fn answer_confirmations(&self, yes: bool) {
        self.confirm_answer.set(yes);
    }

    pub fn snapshot(&self) -> PageState {
        self.state.borrow().clone()
    }

    pub fn list(&self, section: Section) -> Option<ListView> {
        self.state.borrow().lists.get(&section).cloned()
    }

    pub fn is_form_visible(&self, form: FormKind) -> bool {
        self.state.borrow().visible_forms.contains(&form)
    }

    pub fn options(&self, field: Field) -> Vec<SelectOption> {
        self.state
            .borrow()
            .select_options
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.state.borrow().confirmations.clone()
    }
}

impl Page for HeadlessPage {
    type Control = Section;

    fn show_section(&self, section: Section) {
        self.state.borrow_mut().active_section = Some(section);
    }

    fn mark_tab_active(&self, control: &Section) {
        self.state.borrow_mut().active_tab = Some(*control);
    }

    fn render_list(&self, section: Section, view: &ListView) {
        self.state.borrow_mut().lists.insert(section, view.clone());
    }

    fn set_select_options(&self, field: Field, placeholder: &str, options: &[SelectOption]) {
        let mut state = self.state.borrow_mut();
        state.select_options.insert(field, options.to_vec());
        state
            .select_placeholders
            .insert(field, placeholder.to_string());
        // replacing the options selects the placeholder again
        state.fields.insert(field, String::new());
    }

    fn field_value(&self, field: Field) -> String {
        self.state
            .borrow()
            .fields
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn set_field_value(&self, field: Field, value: &str) {
        let mut state = self.state.borrow_mut();
        let value = if field.is_select() && !value.is_empty() {
            let known = state
                .select_options
                .get(&field)
                .is_some_and(|options| options.iter().any(|o| o.value == value));
            if known {
                value.to_string()
            } else {
                String::new()
            }
        } else {
            value.to_string()
        };
        state.fields.insert(field, value);
    }

    fn reset_form(&self, form: FormKind) {
        let mut state = self.state.borrow_mut();
        for field in form.fields() {
            state.fields.insert(*field, String::new());
        }
    }

    fn set_form_visible(&self, form: FormKind, visible: bool) {
        let mut state = self.state.borrow_mut();
        if visible {
            state.visible_forms.insert(form);
        } else {
            state.visible_forms.remove(&form);
        }
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.state
            .borrow_mut()
            .confirmations
            .push(message.to_string());
        self.confirm_answer.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str) -> SelectOption {
        SelectOption {
            value: value.to_string(),
            label: format!("label {value}"),
        }
    }

    #[test]
    fn select_ignores_values_without_an_option() {
        let page = HeadlessPage::new();
        page.set_field_value(Field::StudentDepartment, "2");
        assert_eq!(page.field_value(Field::StudentDepartment), "");

        page.set_select_options(Field::StudentDepartment, "Select Department", &[option("1"), option("2")]);
        page.set_field_value(Field::StudentDepartment, "2");
        assert_eq!(page.field_value(Field::StudentDepartment), "2");
    }

    #[test]
    fn new_options_reset_the_selection() {
        let page = HeadlessPage::new();
        page.set_select_options(Field::EnrollmentStudent, "Select Student", &[option("5")]);
        page.set_field_value(Field::EnrollmentStudent, "5");

        page.set_select_options(Field::EnrollmentStudent, "Select Student", &[option("5"), option("6")]);
        assert_eq!(page.field_value(Field::EnrollmentStudent), "");
    }

    #[test]
    fn reset_clears_only_that_form() {
        let page = HeadlessPage::new();
        page.set_field_value(Field::DeptName, "Physics");
        page.set_field_value(Field::StudentEmail, "a@b.c");

        page.reset_form(FormKind::Department);
        assert_eq!(page.field_value(Field::DeptName), "");
        assert_eq!(page.field_value(Field::StudentEmail), "a@b.c");
    }

    #[test]
    fn confirm_records_question() {
        let page = HeadlessPage::new();
        assert!(!page.confirm("Sure?"));
        page.answer_confirmations(true);
        assert!(page.confirm("Really?"));
        assert_eq!(page.confirmations(), ["Sure?", "Really?"]);
    }
}
