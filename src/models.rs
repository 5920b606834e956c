//! Data model for exam-schedule records and aggregate statistics.

use serde::{Deserialize, Serialize};

/// JSON envelope returned by the remote endpoint.
///
/// The response carries more fields, but only the embedded HTML fragment is
/// consumed; serde ignores the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulePayload {
    pub html: String,
}

/// One exam row extracted from the schedule table.
///
/// `students` is `None` when the cell text does not parse as a number;
/// malformed counts are a data observation, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRow {
    pub course: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub students: Option<u32>,
    /// Left as the raw cell text; no date parsing or normalization.
    pub date: String,
}

/// One subsection of a department schedule: a heading and its exam rows,
/// in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingGroup {
    pub heading: String,
    pub tests: Vec<ExamRow>,
}

/// Per-department reduction over student counts.
///
/// A department with no parseable counts has `count == 0`; its `min`/`max`
/// are zero and must not participate in a global fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub sum: u64,
    pub min: u32,
    pub max: u32,
    pub count: usize,
}

/// Global statistics across all five departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub min: u32,
    pub max: u32,
    #[serde(rename = "numTests")]
    pub num_tests: usize,
    #[serde(rename = "numStudents")]
    pub num_students: u64,
    /// Average students per test, formatted with exactly two fraction digits.
    #[serde(rename = "averageStudents")]
    pub average_students: String,
}
