use super::{NavToken, Outcome, RecordsApp};
use crate::interface::{Page, RequestApi};
use crate::model::dtos::StudentForm;
use crate::model::structs::{Department, Student};
use crate::view::cards::department_options;
use crate::view::{Field, FormKind};

pub const DEPARTMENT_PLACEHOLDER: &str = "Select Department";

impl<C: RequestApi, P: Page> RecordsApp<C, P> {
    pub async fn load_students(&self) -> Outcome {
        let token = self.navigation.current();
        self.load_list::<Student>(&token).await
    }

    /// Refill the student form's department select.
    pub async fn load_departments_for_select(&self) -> Outcome {
        let token = self.navigation.current();
        self.refresh_department_select(&token).await
    }

    pub(crate) async fn refresh_department_select(&self, token: &NavToken) -> Outcome {
        self.fill_select::<Department>(
            Field::StudentDepartment,
            DEPARTMENT_PLACEHOLDER,
            department_options,
            token,
        )
        .await
    }

    pub async fn open_student_form(&self) -> Outcome {
        let token = self.navigation.current();
        self.present_blank_form(FormKind::Student);
        self.refresh_department_select(&token).await
    }

    pub fn close_student_form(&self) {
        self.page.set_form_visible(FormKind::Student, false);
    }

    pub async fn edit_student(&self, id: i64) -> Outcome {
        let token = self.navigation.current();
        let student = match self.fetch_for_edit::<Student>(id, &token).await {
            Ok(student) => student,
            Err(outcome) => return outcome,
        };
        let form = StudentForm::from_record(&student);
        write_student_form(&self.page, &form);

        // The department id only binds once its option exists.
        if self.refresh_department_select(&token).await == Outcome::Discarded {
            return Outcome::Discarded;
        }
        if !form.department.is_empty() {
            self.page
                .set_field_value(Field::StudentDepartment, &form.department);
        }

        self.page.set_form_visible(FormKind::Student, true);
        Outcome::Applied
    }

    pub async fn save_student(&self) -> Outcome {
        let token = self.navigation.current();
        let form = read_student_form(&self.page);
        self.submit(FormKind::Student, form.into_record(), &token).await
    }

    pub async fn delete_student(&self, id: i64) -> Outcome {
        let token = self.navigation.current();
        self.remove::<Student>(id, &token).await
    }
}

fn read_student_form<P: Page>(page: &P) -> StudentForm {
    StudentForm {
        id: page.field_value(Field::StudentId),
        first_name: page.field_value(Field::StudentFirstName),
        last_name: page.field_value(Field::StudentLastName),
        email: page.field_value(Field::StudentEmail),
        phone: page.field_value(Field::StudentPhone),
        date_of_birth: page.field_value(Field::StudentDob),
        address: page.field_value(Field::StudentAddress),
        department: page.field_value(Field::StudentDepartment),
    }
}

/// Everything except the department select, which waits for its options.
fn write_student_form<P: Page>(page: &P, form: &StudentForm) {
    page.set_field_value(Field::StudentId, &form.id);
    page.set_field_value(Field::StudentFirstName, &form.first_name);
    page.set_field_value(Field::StudentLastName, &form.last_name);
    page.set_field_value(Field::StudentEmail, &form.email);
    page.set_field_value(Field::StudentPhone, &form.phone);
    page.set_field_value(Field::StudentDob, &form.date_of_birth);
    page.set_field_value(Field::StudentAddress, &form.address);
}
