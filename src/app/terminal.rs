//! Terminal front end
//!
//! Wraps the in-memory page: alerts go to stderr, confirmations are asked
//! on stdin (or pre-answered with `--yes`), and lists and forms are printed
//! as plain text once a command has run.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use super::headless::HeadlessPage;
use crate::error::{ErrorKind, Result};
use crate::interface::Page;
use crate::view::{Field, FormKind, ListView, Section, SelectOption};

pub struct TerminalPage {
    inner: HeadlessPage,
    assume_yes: bool,
}

impl TerminalPage {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            inner: HeadlessPage::new(),
            assume_yes,
        }
    }

    pub fn inner(&self) -> &HeadlessPage {
        &self.inner
    }

    pub fn print_list(&self, section: Section) {
        if let Some(view) = self.inner.list(section) {
            print!("{}", render_list_text(section, &view));
        }
    }

    /// Apply a `key=value` assignment from the command line to `form`.
    ///
    /// A select only takes a value one of its options carries; anything
    /// else is an error here rather than a silently cleared relation.
    pub fn assign(&self, form: FormKind, key: &str, value: &str) -> Result<()> {
        let field = Field::lookup(form, key).ok_or_else(|| {
            ErrorKind::ParseError(format!("unknown field `{key}` for {}", form.section()))
        })?;

        if field.is_select()
            && !value.is_empty()
            && !self.inner.options(field).iter().any(|o| o.value == value)
        {
            return Err(ErrorKind::ParseError(format!("unknown {key} {value}")).into());
        }

        self.inner.set_field_value(field, value);
        Ok(())
    }

    /// Print `form` if it is open.
    pub fn print_form(&self, form: FormKind) {
        if !self.inner.is_form_visible(form) {
            return;
        }
        let values: Vec<(Field, String)> = form
            .fields()
            .iter()
            .map(|field| (*field, self.inner.field_value(*field)))
            .collect();
        print!("{}", render_form_text(form, &values));
    }
}

pub fn render_list_text(section: Section, view: &ListView) -> String {
    let mut out = format!("== {} ==\n", section.title());
    match view {
        ListView::Loading(message) | ListView::Empty(message) => {
            let _ = writeln!(out, "{message}");
        }
        ListView::Error(message) => {
            let _ = writeln!(out, "!! {message}");
        }
        ListView::Cards(cards) => {
            for card in cards {
                match card.id {
                    Some(id) => {
                        let _ = writeln!(out, "[#{id}] {}", card.title);
                    }
                    None => {
                        let _ = writeln!(out, "[#-] {}", card.title);
                    }
                }
                for field in &card.fields {
                    let _ = writeln!(out, "    {}: {}", field.label, field.value);
                }
            }
        }
    }
    out
}

pub fn render_form_text(form: FormKind, values: &[(Field, String)]) -> String {
    let mut out = format!("-- {} form --\n", form.section().title());
    for (field, value) in values {
        let _ = writeln!(out, "    {:<12} {}", field.key(), value);
    }
    out
}

fn prompt_yes_no(question: &str) -> io::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}

impl Page for TerminalPage {
    type Control = Section;

    fn show_section(&self, section: Section) {
        self.inner.show_section(section);
    }

    fn mark_tab_active(&self, control: &Section) {
        self.inner.mark_tab_active(control);
    }

    fn render_list(&self, section: Section, view: &ListView) {
        self.inner.render_list(section, view);
    }

    fn set_select_options(&self, field: Field, placeholder: &str, options: &[SelectOption]) {
        self.inner.set_select_options(field, placeholder, options);
    }

    fn field_value(&self, field: Field) -> String {
        self.inner.field_value(field)
    }

    fn set_field_value(&self, field: Field, value: &str) {
        self.inner.set_field_value(field, value);
    }

    fn reset_form(&self, form: FormKind) {
        self.inner.reset_form(form);
    }

    fn set_form_visible(&self, form: FormKind, visible: bool) {
        self.inner.set_form_visible(form, visible);
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
        self.inner.alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        self.inner.answer_confirmations(self.assume_yes);
        if self.assume_yes {
            return self.inner.confirm(message);
        }

        let answer = prompt_yes_no(message).unwrap_or_else(|e| {
            log::warn!("could not read confirmation: {e}");
            false
        });
        self.inner.answer_confirmations(answer);
        self.inner.confirm(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Card, CardField};

    #[test]
    fn cards_print_with_ids_and_fields() {
        let view = ListView::Cards(vec![Card {
            id: Some(2),
            title: "Physics".into(),
            fields: vec![CardField {
                label: "Head",
                value: "N/A".into(),
            }],
        }]);
        assert_eq!(
            render_list_text(Section::Departments, &view),
            "== Departments ==\n[#2] Physics\n    Head: N/A\n"
        );
    }

    #[test]
    fn errors_are_flagged() {
        let view = ListView::Error("Error loading students: Failed to fetch students".into());
        assert_eq!(
            render_list_text(Section::Students, &view),
            "== Students ==\n!! Error loading students: Failed to fetch students\n"
        );
    }

    #[test]
    fn unknown_select_value_is_rejected() {
        let page = TerminalPage::new(true);
        page.set_select_options(
            Field::StudentDepartment,
            "Select Department",
            &[SelectOption {
                value: "2".into(),
                label: "Computing".into(),
            }],
        );
        page.assign(FormKind::Student, "department", "2").unwrap();

        let err = page.assign(FormKind::Student, "department", "99").unwrap_err();
        assert_eq!(err.to_string(), "unknown department 99");
        // the bound department survives
        assert_eq!(page.field_value(Field::StudentDepartment), "2");

        page.assign(FormKind::Student, "department", "").unwrap();
        assert_eq!(page.field_value(Field::StudentDepartment), "");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let page = TerminalPage::new(true);
        assert!(page.assign(FormKind::Department, "email", "x").is_err());
        page.assign(FormKind::Department, "name", "Physics").unwrap();
        assert_eq!(page.field_value(Field::DeptName), "Physics");
    }

    #[test]
    fn assumed_yes_skips_the_prompt() {
        let page = TerminalPage::new(true);
        assert!(page.confirm("Are you sure you want to delete this student?"));
        assert_eq!(page.inner().confirmations().len(), 1);
    }
}
