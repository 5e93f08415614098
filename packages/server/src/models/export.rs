use std::borrow::Cow;
use std::fmt::Write;

use crate::entity::student;

/// Column order of the export, matching the persisted schema.
pub const CSV_HEADER: &str = "student_id,first_name,last_name,gender,math_score,reading_score,writing_score,average_score,grade,pass_fail";

/// File name offered to the browser for the download.
pub const CSV_FILENAME: &str = "students_export.csv";

/// Serializes a roster snapshot to CSV. Always emits the header row, so an
/// empty table yields a header-only file.
pub fn to_csv(rows: &[student::Model]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + rows.len() * 64);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for r in rows {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            r.student_id,
            escape_field(&r.first_name),
            escape_field(&r.last_name),
            r.gender,
            r.math_score,
            r.reading_score,
            r.writing_score,
            r.average_score,
            r.grade,
            r.pass_fail,
        );
    }
    out
}

/// RFC 4180 quoting: fields containing the delimiter, quotes or line breaks
/// are wrapped in double quotes, with embedded quotes doubled.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
