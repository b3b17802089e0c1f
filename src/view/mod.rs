//! Page vocabulary shared by every front end
//!
//! Sections, forms and fields are named after the element ids of the
//! browser page so the same values can address the DOM, the in-memory
//! page and the terminal output.

pub mod cards;
pub mod html;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Departments,
    Students,
    Enrollments,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Departments, Section::Students, Section::Enrollments];

    pub fn dom_id(self) -> &'static str {
        match self {
            Section::Departments => "departments",
            Section::Students => "students",
            Section::Enrollments => "enrollments",
        }
    }

    pub fn list_id(self) -> &'static str {
        match self {
            Section::Departments => "departmentsList",
            Section::Students => "studentsList",
            Section::Enrollments => "enrollmentsList",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Departments => "Departments",
            Section::Students => "Students",
            Section::Enrollments => "Enrollments",
        }
    }

    pub fn form(self) -> FormKind {
        match self {
            Section::Departments => FormKind::Department,
            Section::Students => FormKind::Student,
            Section::Enrollments => FormKind::Enrollment,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.dom_id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown section `{s}` (expected departments, students or enrollments)"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Department,
    Student,
    Enrollment,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Department, FormKind::Student, FormKind::Enrollment];

    /// Wrapper toggled between shown and hidden.
    pub fn container_id(self) -> &'static str {
        match self {
            FormKind::Department => "departmentForm",
            FormKind::Student => "studentForm",
            FormKind::Enrollment => "enrollmentForm",
        }
    }

    /// The `<form>` itself, target of reset and submit.
    pub fn element_id(self) -> &'static str {
        match self {
            FormKind::Department => "departmentFormElement",
            FormKind::Student => "studentFormElement",
            FormKind::Enrollment => "enrollmentFormElement",
        }
    }

    pub fn from_element_id(id: &str) -> Option<FormKind> {
        FormKind::ALL.into_iter().find(|form| form.element_id() == id)
    }

    pub fn section(self) -> Section {
        match self {
            FormKind::Department => Section::Departments,
            FormKind::Student => Section::Students,
            FormKind::Enrollment => Section::Enrollments,
        }
    }

    pub fn id_field(self) -> Field {
        match self {
            FormKind::Department => Field::DeptId,
            FormKind::Student => Field::StudentId,
            FormKind::Enrollment => Field::EnrollmentId,
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            FormKind::Department => &[
                Field::DeptId,
                Field::DeptName,
                Field::DeptLocation,
                Field::DeptPhone,
                Field::DeptHead,
            ],
            FormKind::Student => &[
                Field::StudentId,
                Field::StudentFirstName,
                Field::StudentLastName,
                Field::StudentEmail,
                Field::StudentPhone,
                Field::StudentDob,
                Field::StudentAddress,
                Field::StudentDepartment,
            ],
            FormKind::Enrollment => &[
                Field::EnrollmentId,
                Field::EnrollmentStudent,
                Field::EnrollmentCourseId,
                Field::EnrollmentStatus,
            ],
        }
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "department" => Ok(FormKind::Department),
            "student" => Ok(FormKind::Student),
            "enrollment" => Ok(FormKind::Enrollment),
            other => Err(format!("unknown form `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DeptId,
    DeptName,
    DeptLocation,
    DeptPhone,
    DeptHead,
    StudentId,
    StudentFirstName,
    StudentLastName,
    StudentEmail,
    StudentPhone,
    StudentDob,
    StudentAddress,
    StudentDepartment,
    EnrollmentId,
    EnrollmentStudent,
    EnrollmentCourseId,
    EnrollmentStatus,
}

impl Field {
    pub fn dom_id(self) -> &'static str {
        match self {
            Field::DeptId => "deptId",
            Field::DeptName => "deptName",
            Field::DeptLocation => "deptLocation",
            Field::DeptPhone => "deptPhone",
            Field::DeptHead => "deptHead",
            Field::StudentId => "studentId",
            Field::StudentFirstName => "studentFirstName",
            Field::StudentLastName => "studentLastName",
            Field::StudentEmail => "studentEmail",
            Field::StudentPhone => "studentPhone",
            Field::StudentDob => "studentDob",
            Field::StudentAddress => "studentAddress",
            Field::StudentDepartment => "studentDepartment",
            Field::EnrollmentId => "enrollmentId",
            Field::EnrollmentStudent => "enrollmentStudent",
            Field::EnrollmentCourseId => "enrollmentCourseId",
            Field::EnrollmentStatus => "enrollmentStatus",
        }
    }

    /// Short name used on the command line (`--set firstName=Ada`).
    pub fn key(self) -> &'static str {
        match self {
            Field::DeptId | Field::StudentId | Field::EnrollmentId => "id",
            Field::DeptName => "name",
            Field::DeptLocation => "location",
            Field::DeptPhone | Field::StudentPhone => "phone",
            Field::DeptHead => "head",
            Field::StudentFirstName => "firstName",
            Field::StudentLastName => "lastName",
            Field::StudentEmail => "email",
            Field::StudentDob => "dateOfBirth",
            Field::StudentAddress => "address",
            Field::StudentDepartment => "department",
            Field::EnrollmentStudent => "student",
            Field::EnrollmentCourseId => "courseId",
            Field::EnrollmentStatus => "status",
        }
    }

    pub fn lookup(form: FormKind, key: &str) -> Option<Field> {
        form.fields().iter().copied().find(|field| field.key() == key)
    }

    /// Selects only accept values that match one of their options.
    pub fn is_select(self) -> bool {
        matches!(self, Field::StudentDepartment | Field::EnrollmentStudent)
    }

    pub fn form(self) -> FormKind {
        match self {
            Field::DeptId | Field::DeptName | Field::DeptLocation | Field::DeptPhone | Field::DeptHead => {
                FormKind::Department
            }
            Field::StudentId
            | Field::StudentFirstName
            | Field::StudentLastName
            | Field::StudentEmail
            | Field::StudentPhone
            | Field::StudentDob
            | Field::StudentAddress
            | Field::StudentDepartment => FormKind::Student,
            Field::EnrollmentId | Field::EnrollmentStudent | Field::EnrollmentCourseId | Field::EnrollmentStatus => {
                FormKind::Enrollment
            }
        }
    }
}

/// What a list container currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading(String),
    Empty(String),
    Error(String),
    Cards(Vec<Card>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Target of the card's edit/delete actions; records without one get no actions.
    pub id: Option<i64>,
    pub title: String,
    pub fields: Vec<CardField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}
