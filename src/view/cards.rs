//! Record → card / option conversion with the `N/A` display fallbacks

use super::{Card, CardField, SelectOption};
use crate::model::structs::{Department, Enrollment, Student};

pub const NOT_AVAILABLE: &str = "N/A";

pub trait ToCard {
    fn to_card(&self) -> Card;
}

/// Missing and blank values both display as `N/A`.
pub fn display_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn field(label: &'static str, value: String) -> CardField {
    CardField { label, value }
}

impl ToCard for Department {
    fn to_card(&self) -> Card {
        Card {
            id: self.id_department,
            title: display_or_na(self.name.as_deref()),
            fields: vec![
                field("Location", display_or_na(self.location.as_deref())),
                field("Phone", display_or_na(self.phone.as_deref())),
                field("Head", display_or_na(self.head.as_deref())),
            ],
        }
    }
}

impl ToCard for Student {
    fn to_card(&self) -> Card {
        let department = self
            .department
            .as_ref()
            .and_then(|d| d.name.as_deref());

        Card {
            id: self.id_student,
            title: display_or_na(Some(self.full_name().as_str())),
            fields: vec![
                field("Email", display_or_na(self.email.as_deref())),
                field("Phone", display_or_na(self.phone.as_deref())),
                field("Date of Birth", display_or_na(self.date_of_birth.as_deref())),
                field("Address", display_or_na(self.address.as_deref())),
                field("Department", display_or_na(department)),
            ],
        }
    }
}

impl ToCard for Enrollment {
    fn to_card(&self) -> Card {
        let id = self
            .id_enrollment
            .map(|id| id.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let student = self.student.as_ref().map(|s| s.full_name());
        let course_id = self
            .course
            .as_ref()
            .and_then(|c| c.id_course)
            .map(|id| id.to_string());
        let course_name = self.course.as_ref().and_then(|c| c.name.as_deref());
        let grade = self.grade.map(|g| g.to_string());

        Card {
            id: self.id_enrollment,
            title: format!("Enrollment #{id}"),
            fields: vec![
                field("Student", display_or_na(student.as_deref())),
                field("Course ID", display_or_na(course_id.as_deref())),
                field("Course", display_or_na(course_name)),
                field("Status", display_or_na(self.status.as_deref())),
                field("Enrollment Date", display_or_na(self.enrollment_date.as_deref())),
                field("Grade", display_or_na(grade.as_deref())),
            ],
        }
    }
}

/// Options for the student form's department select, in server order.
/// Records without an id cannot be referenced and are skipped.
pub fn department_options(departments: &[Department]) -> Vec<SelectOption> {
    departments
        .iter()
        .filter_map(|d| {
            d.id_department.map(|id| SelectOption {
                value: id.to_string(),
                label: display_or_na(d.name.as_deref()),
            })
        })
        .collect()
}

/// Options for the enrollment form's student select, in server order.
pub fn student_options(students: &[Student]) -> Vec<SelectOption> {
    students
        .iter()
        .filter_map(|s| {
            s.id_student.map(|id| SelectOption {
                value: id.to_string(),
                label: display_or_na(Some(s.full_name().as_str())),
            })
        })
        .collect()
}
