use serde_json::json;

use crate::common::{TestApp, routes};

const HEADER_ROW: &str = "student_id,first_name,last_name,gender,math_score,reading_score,writing_score,average_score,grade,pass_fail";

#[tokio::test]
async fn empty_roster_exports_a_header_only_file() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::EXPORT).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.text, format!("{HEADER_ROW}\n"));
}

#[tokio::test]
async fn export_is_offered_as_a_csv_download() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::EXPORT).await;

    assert!(res.header("content-type").unwrap().starts_with("text/csv"));
    assert_eq!(
        res.header("content-disposition"),
        Some("attachment; filename=\"students_export.csv\"")
    );
}

#[tokio::test]
async fn export_contains_one_row_per_record_with_derived_fields() {
    let app = TestApp::spawn().await;
    let first = app
        .create_student(&json!({
            "first_name": "Ana",
            "last_name": "Lee",
            "gender": "Female",
            "math_score": 80,
            "reading_score": 90,
            "writing_score": 100
        }))
        .await;
    let second = app
        .create_student(&json!({
            "first_name": "Bo",
            "last_name": "Tran",
            "gender": "Male",
            "math_score": 10,
            "reading_score": 20,
            "writing_score": 30
        }))
        .await;

    let res = app.get(routes::EXPORT).await;
    let lines: Vec<&str> = res.text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER_ROW);
    assert_eq!(lines[1], format!("{first},Ana,Lee,Female,80,90,100,90,A,Pass"));
    assert_eq!(lines[2], format!("{second},Bo,Tran,Male,10,20,30,20,F,Fail"));
}

#[tokio::test]
async fn names_containing_the_delimiter_are_quoted() {
    let app = TestApp::spawn().await;
    let id = app
        .create_student(&json!({
            "first_name": "Anne, Marie",
            "last_name": "Lee",
            "gender": "Female",
            "math_score": 60,
            "reading_score": 60,
            "writing_score": 60
        }))
        .await;

    let res = app.get(routes::EXPORT).await;

    assert_eq!(
        res.text.lines().nth(1),
        Some(format!("{id},\"Anne, Marie\",Lee,Female,60,60,60,60,C,Pass").as_str())
    );
}
