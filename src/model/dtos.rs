//! Form contents as typed by the user and their conversion into records

use crate::error::{ErrorKind, Result};

use super::structs::{CourseRef, Department, DepartmentRef, Enrollment, Student, StudentRef};

/// Which path a save takes: an empty hidden id field creates, a filled one
/// updates that record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey {
    New,
    Existing(i64),
}

impl RecordKey {
    pub fn parse(raw: &str) -> Result<Self> {
        match parse_optional_id(raw, "record id")? {
            Some(id) => Ok(RecordKey::Existing(id)),
            None => Ok(RecordKey::New),
        }
    }

    pub fn id(self) -> Option<i64> {
        match self {
            RecordKey::New => None,
            RecordKey::Existing(id) => Some(id),
        }
    }
}

fn parse_optional_id(raw: &str, what: &str) -> Result<Option<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let invalid = || ErrorKind::ParseError(format!("Invalid {what}: {raw:?}"));
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid().into());
    }
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(invalid().into()),
    }
}

fn parse_required_id(raw: &str, what: &str) -> Result<i64> {
    parse_optional_id(raw, what)?
        .ok_or_else(|| ErrorKind::ParseError(format!("{what} is required")).into())
}

fn id_text(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentForm {
    pub id: String,
    pub name: String,
    pub location: String,
    pub phone: String,
    pub head: String,
}

impl DepartmentForm {
    pub fn from_record(department: &Department) -> Self {
        Self {
            id: id_text(department.id_department),
            name: department.name.clone().unwrap_or_default(),
            location: department.location.clone().unwrap_or_default(),
            phone: department.phone.clone().unwrap_or_default(),
            head: department.head.clone().unwrap_or_default(),
        }
    }

    pub fn into_record(self) -> Result<(RecordKey, Department)> {
        let key = RecordKey::parse(&self.id)?;
        let department = Department {
            id_department: key.id(),
            name: Some(self.name),
            location: Some(self.location),
            phone: Some(self.phone),
            head: Some(self.head),
        };
        Ok((key, department))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address: String,
    /// Selected department id; empty when nothing is selected.
    pub department: String,
}

impl StudentForm {
    pub fn from_record(student: &Student) -> Self {
        Self {
            id: id_text(student.id_student),
            first_name: student.first_name.clone().unwrap_or_default(),
            last_name: student.last_name.clone().unwrap_or_default(),
            email: student.email.clone().unwrap_or_default(),
            phone: student.phone.clone().unwrap_or_default(),
            date_of_birth: student.date_of_birth.clone().unwrap_or_default(),
            address: student.address.clone().unwrap_or_default(),
            department: id_text(student.department.as_ref().and_then(|d| d.id_department)),
        }
    }

    pub fn into_record(self) -> Result<(RecordKey, Student)> {
        let key = RecordKey::parse(&self.id)?;
        let department = parse_optional_id(&self.department, "department")?.map(|id| DepartmentRef {
            id_department: Some(id),
            name: None,
        });
        let student = Student {
            id_student: key.id(),
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            email: Some(self.email),
            phone: Some(self.phone),
            date_of_birth: Some(self.date_of_birth),
            address: Some(self.address),
            department,
        };
        Ok((key, student))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentForm {
    pub id: String,
    pub student: String,
    pub course_id: String,
    pub status: String,
}

impl EnrollmentForm {
    pub fn from_record(enrollment: &Enrollment) -> Self {
        Self {
            id: id_text(enrollment.id_enrollment),
            student: id_text(enrollment.student.as_ref().and_then(|s| s.id_student)),
            course_id: id_text(enrollment.course.as_ref().and_then(|c| c.id_course)),
            status: enrollment.status.clone().unwrap_or_default(),
        }
    }

    /// Student and course are mandatory; nothing is sent without both.
    pub fn into_record(self) -> Result<(RecordKey, Enrollment)> {
        let key = RecordKey::parse(&self.id)?;
        let student = parse_required_id(&self.student, "student")?;
        let course = parse_required_id(&self.course_id, "course id")?;
        let enrollment = Enrollment {
            id_enrollment: key.id(),
            student: Some(StudentRef {
                id_student: Some(student),
                ..Default::default()
            }),
            course: Some(CourseRef {
                id_course: Some(course),
                name: None,
            }),
            status: Some(self.status),
            enrollment_date: None,
            grade: None,
        };
        Ok((key, enrollment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_key_from_hidden_field() {
        assert_eq!(RecordKey::parse("").unwrap(), RecordKey::New);
        assert_eq!(RecordKey::parse("   ").unwrap(), RecordKey::New);
        assert_eq!(RecordKey::parse("17").unwrap(), RecordKey::Existing(17));
        assert!(RecordKey::parse("abc").is_err());
    }

    #[test]
    fn record_key_must_be_positive() {
        for raw in ["0", "-3", "+5", "1.5"] {
            let err = RecordKey::parse(raw).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::ParseError(_)), "{raw}");
        }
    }

    #[test]
    fn new_department_body_has_null_id() {
        let form = DepartmentForm {
            name: "CS".into(),
            ..Default::default()
        };
        let (key, department) = form.into_record().unwrap();
        assert_eq!(key, RecordKey::New);
        assert_eq!(
            serde_json::to_value(&department).unwrap(),
            json!({"idDepartment": null, "name": "CS", "location": "", "phone": "", "head": ""})
        );
    }

    #[test]
    fn student_without_department_sends_null() {
        let form = StudentForm {
            id: "4".into(),
            first_name: "Ada".into(),
            ..Default::default()
        };
        let (key, student) = form.into_record().unwrap();
        assert_eq!(key, RecordKey::Existing(4));
        let body = serde_json::to_value(&student).unwrap();
        assert_eq!(body["idStudent"], json!(4));
        assert_eq!(body["department"], json!(null));
    }

    #[test]
    fn student_department_becomes_numeric_reference() {
        let form = StudentForm {
            department: "2".into(),
            ..Default::default()
        };
        let (_, student) = form.into_record().unwrap();
        assert_eq!(
            serde_json::to_value(&student).unwrap()["department"],
            json!({"idDepartment": 2})
        );
    }

    #[test]
    fn enrollment_body_matches_service_shape() {
        let form = EnrollmentForm {
            id: String::new(),
            student: "3".into(),
            course_id: "12".into(),
            status: "ACTIVE".into(),
        };
        let (key, enrollment) = form.into_record().unwrap();
        assert_eq!(key, RecordKey::New);
        assert_eq!(
            serde_json::to_value(&enrollment).unwrap(),
            json!({
                "idEnrollment": null,
                "student": {"idStudent": 3},
                "course": {"idCourse": 12},
                "status": "ACTIVE"
            })
        );
    }

    #[test]
    fn enrollment_requires_student_and_course() {
        let missing_student = EnrollmentForm {
            course_id: "12".into(),
            ..Default::default()
        };
        assert_eq!(
            missing_student.into_record().unwrap_err().to_string(),
            "student is required"
        );

        let bad_course = EnrollmentForm {
            student: "3".into(),
            course_id: "twelve".into(),
            ..Default::default()
        };
        assert!(bad_course.into_record().is_err());
    }

    #[test]
    fn forms_from_records_use_empty_strings() {
        let form = StudentForm::from_record(&Student {
            id_student: Some(8),
            department: Some(DepartmentRef {
                id_department: Some(2),
                name: Some("Maths".into()),
            }),
            ..Default::default()
        });
        assert_eq!(form.id, "8");
        assert_eq!(form.email, "");
        assert_eq!(form.department, "2");
    }
}
