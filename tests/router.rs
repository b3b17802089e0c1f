mod common;

use std::time::Duration;

use common::{app, mock, MockApi};
use records_admin::app::Outcome;
use records_admin::interface::Method;
use records_admin::view::{Field, FormKind, ListView, Section};
use rstest::rstest;
use serde_json::json;

const DEPARTMENTS: &str = "/Depatment/getAllDepartment";
const STUDENTS: &str = "/students/getAllStudents";
const ENROLLMENTS: &str = "/Enrollment/getAllEnrollment";

#[tokio::test]
async fn start_shows_departments() {
    let app = app(MockApi::new().json(
        Method::Get,
        DEPARTMENTS,
        200,
        json!([{"idDepartment": 1, "name": "Physics"}]),
    ));

    assert_eq!(app.start().await, Outcome::Applied);

    let state = app.page().snapshot();
    assert_eq!(state.active_section, Some(Section::Departments));
    assert!(matches!(
        state.lists.get(&Section::Departments),
        Some(ListView::Cards(cards)) if cards.len() == 1
    ));
}

#[tokio::test]
async fn students_tab_loads_departments_then_students() {
    let app = app(
        MockApi::new()
            .json(Method::Get, DEPARTMENTS, 200, json!([{"idDepartment": 2, "name": "Computing"}]))
            .json(Method::Get, STUDENTS, 200, json!([])),
    );

    let outcome = app.activate_section(Section::Students, &Section::Students).await;

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(
        mock(&app).calls(),
        [
            (Method::Get, DEPARTMENTS.to_string()),
            (Method::Get, STUDENTS.to_string()),
        ]
    );
    let state = app.page().snapshot();
    assert_eq!(state.active_section, Some(Section::Students));
    assert_eq!(state.active_tab, Some(Section::Students));
    assert_eq!(app.page().options(Field::StudentDepartment).len(), 1);
}

#[tokio::test]
async fn enrollments_tab_loads_students_then_enrollments() {
    let app = app(
        MockApi::new()
            .json(Method::Get, STUDENTS, 200, json!([{"idStudent": 3, "firstName": "Alan"}]))
            .json(Method::Get, ENROLLMENTS, 200, json!([])),
    );

    app.activate_section(Section::Enrollments, &Section::Enrollments)
        .await;

    assert_eq!(
        mock(&app).calls(),
        [
            (Method::Get, STUDENTS.to_string()),
            (Method::Get, ENROLLMENTS.to_string()),
        ]
    );
    assert_eq!(app.page().options(Field::EnrollmentStudent).len(), 1);
}

#[rstest]
#[case(Section::Departments, DEPARTMENTS, "No departments found. Add one to get started!")]
#[case(Section::Students, STUDENTS, "No students found. Add one to get started!")]
#[case(Section::Enrollments, ENROLLMENTS, "No enrollments found. Add one to get started!")]
#[tokio::test]
async fn empty_section_shows_placeholder(
    #[case] section: Section,
    #[case] path: &str,
    #[case] expected: &str,
) {
    let app = app(
        MockApi::new()
            .json(Method::Get, path, 200, json!([]))
            .json(Method::Get, DEPARTMENTS, 200, json!([]))
            .json(Method::Get, STUDENTS, 200, json!([])),
    );

    app.activate_section(section, &section).await;

    assert_eq!(
        app.page().list(section),
        Some(ListView::Empty(expected.to_string()))
    );
}

#[tokio::test]
async fn stale_list_does_not_draw_over_newer_section() {
    let app = app(
        MockApi::new()
            .json(Method::Get, DEPARTMENTS, 200, json!([]))
            .json(Method::Get, STUDENTS, 200, json!([{"idStudent": 1, "firstName": "Late"}]))
            .delayed(Method::Get, STUDENTS, Duration::from_millis(50)),
    );

    let (students, departments) = tokio::join!(
        app.activate_section(Section::Students, &Section::Students),
        async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            app.activate_section(Section::Departments, &Section::Departments)
                .await
        }
    );

    assert_eq!(students, Outcome::Discarded);
    assert_eq!(departments, Outcome::Applied);
    let state = app.page().snapshot();
    assert_eq!(state.active_section, Some(Section::Departments));
    assert_eq!(
        state.lists.get(&Section::Students),
        Some(&ListView::Loading("Loading students...".to_string()))
    );
    assert_eq!(
        state.lists.get(&Section::Departments),
        Some(&ListView::Empty(
            "No departments found. Add one to get started!".to_string()
        ))
    );
}

#[tokio::test]
async fn dispatchers_route_by_section() {
    let app = app(
        MockApi::new()
            .json(Method::Get, "/students/getStudent/4", 200, json!({"idStudent": 4, "firstName": "Ada"}))
            .json(Method::Get, DEPARTMENTS, 200, json!([])),
    );

    assert_eq!(app.edit_record(Section::Students, 4).await, Outcome::Applied);
    assert!(app.page().is_form_visible(FormKind::Student));

    app.close_form(FormKind::Student);
    assert!(!app.page().is_form_visible(FormKind::Student));

    assert_eq!(app.open_form(FormKind::Department).await, Outcome::Applied);
    assert!(app.page().is_form_visible(FormKind::Department));

    assert_eq!(
        app.delete_record(Section::Enrollments, 9).await,
        Outcome::Declined
    );
    assert_eq!(
        app.page().confirmations(),
        ["Are you sure you want to delete this enrollment?"]
    );
}
