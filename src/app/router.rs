//! Section switching and the dispatchers both front ends call into

use super::{Outcome, RecordsApp};
use crate::interface::{Page, RequestApi};
use crate::model::structs::{Department, Enrollment, Student};
use crate::view::{FormKind, Section};

impl<C: RequestApi, P: Page> RecordsApp<C, P> {
    /// Initial page load: the departments section.
    pub async fn start(&self) -> Outcome {
        let token = self.navigation.begin();
        self.page.show_section(Section::Departments);
        self.load_list::<Department>(&token).await
    }

    /// Show `section`, mark `control` as the active tab, and load the
    /// section's data. Students and enrollments refresh their dependent
    /// select before the list.
    pub async fn activate_section(&self, section: Section, control: &P::Control) -> Outcome {
        self.page.show_section(section);
        self.page.mark_tab_active(control);

        let token = self.navigation.begin();
        log::debug!("section {} active (generation {})", section, token.generation());

        match section {
            Section::Departments => self.load_list::<Department>(&token).await,
            Section::Students => {
                if self.refresh_department_select(&token).await == Outcome::Discarded {
                    return Outcome::Discarded;
                }
                self.load_list::<Student>(&token).await
            }
            Section::Enrollments => {
                if self.refresh_student_select(&token).await == Outcome::Discarded {
                    return Outcome::Discarded;
                }
                self.load_list::<Enrollment>(&token).await
            }
        }
    }

    pub async fn edit_record(&self, section: Section, id: i64) -> Outcome {
        match section {
            Section::Departments => self.edit_department(id).await,
            Section::Students => self.edit_student(id).await,
            Section::Enrollments => self.edit_enrollment(id).await,
        }
    }

    pub async fn delete_record(&self, section: Section, id: i64) -> Outcome {
        match section {
            Section::Departments => self.delete_department(id).await,
            Section::Students => self.delete_student(id).await,
            Section::Enrollments => self.delete_enrollment(id).await,
        }
    }

    pub async fn open_form(&self, form: FormKind) -> Outcome {
        match form {
            FormKind::Department => {
                self.open_department_form();
                Outcome::Applied
            }
            FormKind::Student => self.open_student_form().await,
            FormKind::Enrollment => self.open_enrollment_form().await,
        }
    }

    pub fn close_form(&self, form: FormKind) {
        match form {
            FormKind::Department => self.close_department_form(),
            FormKind::Student => self.close_student_form(),
            FormKind::Enrollment => self.close_enrollment_form(),
        }
    }

    pub async fn save_form(&self, form: FormKind) -> Outcome {
        match form {
            FormKind::Department => self.save_department().await,
            FormKind::Student => self.save_student().await,
            FormKind::Enrollment => self.save_enrollment().await,
        }
    }
}
