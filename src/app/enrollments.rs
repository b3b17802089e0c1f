use super::{NavToken, Outcome, RecordsApp};
use crate::interface::{Page, RequestApi};
use crate::model::dtos::EnrollmentForm;
use crate::model::structs::{Enrollment, Student};
use crate::view::cards::student_options;
use crate::view::{Field, FormKind};

pub const STUDENT_PLACEHOLDER: &str = "Select Student";

impl<C: RequestApi, P: Page> RecordsApp<C, P> {
    pub async fn load_enrollments(&self) -> Outcome {
        let token = self.navigation.current();
        self.load_list::<Enrollment>(&token).await
    }

    /// Refill the enrollment form's student select.
    pub async fn load_students_for_select(&self) -> Outcome {
        let token = self.navigation.current();
        self.refresh_student_select(&token).await
    }

    pub(crate) async fn refresh_student_select(&self, token: &NavToken) -> Outcome {
        self.fill_select::<Student>(
            Field::EnrollmentStudent,
            STUDENT_PLACEHOLDER,
            student_options,
            token,
        )
        .await
    }

    pub async fn open_enrollment_form(&self) -> Outcome {
        let token = self.navigation.current();
        self.present_blank_form(FormKind::Enrollment);
        self.refresh_student_select(&token).await
    }

    pub fn close_enrollment_form(&self) {
        self.page.set_form_visible(FormKind::Enrollment, false);
    }

    pub async fn edit_enrollment(&self, id: i64) -> Outcome {
        let token = self.navigation.current();
        let enrollment = match self.fetch_for_edit::<Enrollment>(id, &token).await {
            Ok(enrollment) => enrollment,
            Err(outcome) => return outcome,
        };
        let form = EnrollmentForm::from_record(&enrollment);
        self.page.set_field_value(Field::EnrollmentId, &form.id);
        self.page.set_field_value(Field::EnrollmentStatus, &form.status);
        self.page
            .set_field_value(Field::EnrollmentCourseId, &form.course_id);

        if self.refresh_student_select(&token).await == Outcome::Discarded {
            return Outcome::Discarded;
        }
        if !form.student.is_empty() {
            self.page
                .set_field_value(Field::EnrollmentStudent, &form.student);
        }

        self.page.set_form_visible(FormKind::Enrollment, true);
        Outcome::Applied
    }

    pub async fn save_enrollment(&self) -> Outcome {
        let token = self.navigation.current();
        let form = EnrollmentForm {
            id: self.page.field_value(Field::EnrollmentId),
            student: self.page.field_value(Field::EnrollmentStudent),
            course_id: self.page.field_value(Field::EnrollmentCourseId),
            status: self.page.field_value(Field::EnrollmentStatus),
        };
        self.submit(FormKind::Enrollment, form.into_record(), &token)
            .await
    }

    pub async fn delete_enrollment(&self, id: i64) -> Outcome {
        let token = self.navigation.current();
        self.remove::<Enrollment>(id, &token).await
    }
}
