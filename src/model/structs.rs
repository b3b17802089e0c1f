use serde::{Deserialize, Serialize};

use super::{Endpoints, Entity};
use crate::view::Section;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id_department: Option<i64>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub head: Option<String>,
}

/// Department as embedded in a student. Writes only carry the id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRef {
    pub id_department: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id_student: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub department: Option<DepartmentRef>,
}

impl Student {
    /// "First Last", skipping whichever half is missing.
    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

/// Student as embedded in an enrollment. Writes only carry the id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    pub id_student: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl StudentRef {
    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

/// The client never lists courses; it only knows the id typed into the form
/// and whatever name the service chooses to embed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub id_course: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id_enrollment: Option<i64>,
    pub student: Option<StudentRef>,
    pub course: Option<CourseRef>,
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,
    // None and Some(0.0) are different things on the wire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
}

fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Entity for Department {
    const ENDPOINTS: Endpoints = Endpoints {
        list: "/Depatment/getAllDepartment",
        get: "/Depatment/getDepartment",
        create: "/Depatment/createDepartment",
        update: "/Depatment/updateDepartment",
        delete: "/Depatment/deleteDepartment",
    };
    const SECTION: Section = Section::Departments;
    const NOUN: &'static str = "department";
    const PLURAL: &'static str = "departments";

    fn record_id(&self) -> Option<i64> {
        self.id_department
    }
}

impl Entity for Student {
    const ENDPOINTS: Endpoints = Endpoints {
        list: "/students/getAllStudents",
        get: "/students/getStudent",
        create: "/students/createStudent",
        update: "/students/updateStudent",
        delete: "/students/deleteStudent",
    };
    const SECTION: Section = Section::Students;
    const NOUN: &'static str = "student";
    const PLURAL: &'static str = "students";

    fn record_id(&self) -> Option<i64> {
        self.id_student
    }
}

impl Entity for Enrollment {
    const ENDPOINTS: Endpoints = Endpoints {
        list: "/Enrollment/getAllEnrollment",
        get: "/Enrollment/getEnrollment",
        create: "/Enrollment/createEnrollment",
        update: "/Enrollment/updateEnrollment",
        delete: "/Enrollment/deleteEnrollment",
    };
    const SECTION: Section = Section::Enrollments;
    const NOUN: &'static str = "enrollment";
    const PLURAL: &'static str = "enrollments";

    fn record_id(&self) -> Option<i64> {
        self.id_enrollment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_reads_embedded_department() {
        let student: Student = serde_json::from_value(json!({
            "idStudent": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "department": {"idDepartment": 2, "name": "Mathematics", "location": "B1"}
        }))
        .unwrap();

        let department = student.department.as_ref().unwrap();
        assert_eq!(department.id_department, Some(2));
        assert_eq!(department.name.as_deref(), Some("Mathematics"));
        assert_eq!(student.full_name(), "Ada Lovelace");
        assert_eq!(student.email, None);
    }

    #[test]
    fn enrollment_grade_zero_is_not_missing() {
        let graded: Enrollment = serde_json::from_value(json!({"idEnrollment": 1, "grade": 0})).unwrap();
        let ungraded: Enrollment = serde_json::from_value(json!({"idEnrollment": 2, "grade": null})).unwrap();

        assert_eq!(graded.grade, Some(0.0));
        assert_eq!(ungraded.grade, None);
    }

    #[test]
    fn department_ref_writes_only_the_id() {
        let reference = DepartmentRef {
            id_department: Some(4),
            name: None,
        };
        assert_eq!(serde_json::to_value(&reference).unwrap(), json!({"idDepartment": 4}));
    }

    #[test]
    fn endpoint_paths_keep_service_spelling() {
        assert_eq!(Department::ENDPOINTS.get_path(5), "/Depatment/getDepartment/5");
        assert_eq!(Student::ENDPOINTS.delete_path(9), "/students/deleteStudent/9");
        assert_eq!(Enrollment::ENDPOINTS.list, "/Enrollment/getAllEnrollment");
    }

    #[test]
    fn full_name_skips_missing_halves() {
        let reference = StudentRef {
            id_student: Some(1),
            first_name: None,
            last_name: Some("Hopper".to_string()),
        };
        assert_eq!(reference.full_name(), "Hopper");
    }
}
