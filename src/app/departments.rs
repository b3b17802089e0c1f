use super::{Outcome, RecordsApp};
use crate::interface::{Page, RequestApi};
use crate::model::dtos::DepartmentForm;
use crate::model::structs::Department;
use crate::view::{Field, FormKind};

impl<C: RequestApi, P: Page> RecordsApp<C, P> {
    pub async fn load_departments(&self) -> Outcome {
        let token = self.navigation.current();
        self.load_list::<Department>(&token).await
    }

    pub fn open_department_form(&self) {
        self.present_blank_form(FormKind::Department);
    }

    pub fn close_department_form(&self) {
        self.page.set_form_visible(FormKind::Department, false);
    }

    pub async fn edit_department(&self, id: i64) -> Outcome {
        let token = self.navigation.current();
        let department = match self.fetch_for_edit::<Department>(id, &token).await {
            Ok(department) => department,
            Err(outcome) => return outcome,
        };

        write_department_form(&self.page, &DepartmentForm::from_record(&department));
        self.page.set_form_visible(FormKind::Department, true);
        Outcome::Applied
    }

    pub async fn save_department(&self) -> Outcome {
        let token = self.navigation.current();
        let form = read_department_form(&self.page);
        self.submit(FormKind::Department, form.into_record(), &token)
            .await
    }

    pub async fn delete_department(&self, id: i64) -> Outcome {
        let token = self.navigation.current();
        self.remove::<Department>(id, &token).await
    }
}

fn read_department_form<P: Page>(page: &P) -> DepartmentForm {
    DepartmentForm {
        id: page.field_value(Field::DeptId),
        name: page.field_value(Field::DeptName),
        location: page.field_value(Field::DeptLocation),
        phone: page.field_value(Field::DeptPhone),
        head: page.field_value(Field::DeptHead),
    }
}

fn write_department_form<P: Page>(page: &P, form: &DepartmentForm) {
    page.set_field_value(Field::DeptId, &form.id);
    page.set_field_value(Field::DeptName, &form.name);
    page.set_field_value(Field::DeptLocation, &form.location);
    page.set_field_value(Field::DeptPhone, &form.phone);
    page.set_field_value(Field::DeptHead, &form.head);
}
