//! HTML table parser for the exam-schedule fragment.
//!
//! The remote payload embeds an HTML fragment in which each academic unit is
//! a `.box` section: an `h3` heading immediately followed by a table of exam
//! rows. Rows carry five cells in fixed order (course, name, type, student
//! count, date). Rows with fewer cells fail with a malformed-payload error
//! instead of silently shifting columns; a non-numeric student count is kept
//! as `None` and is not an error.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::models::{ExamRow, HeadingGroup};

/// Cells per exam row: course, name, type, students, date.
const ROW_CELLS: usize = 5;

static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".box h3").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody tr").unwrap());
static TABLE_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".box table tbody tr").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Parse the schedule fragment into heading groups.
///
/// Heading order and row order within each heading are preserved exactly as
/// they appear in the markup. A heading with no following table yields an
/// empty group.
pub fn parse_schedule(html: &str) -> Result<Vec<HeadingGroup>> {
    let document = Html::parse_fragment(html);
    let mut groups = Vec::new();

    for heading_el in document.select(&HEADING) {
        let heading = element_text(&heading_el);
        let mut tests = Vec::new();

        // The table is the heading's next element sibling, as in the markup:
        // <h3>Deild</h3><table>...</table>
        if let Some(section) = heading_el.next_siblings().find_map(ElementRef::wrap) {
            for row in section.select(&ROW) {
                tests.push(parse_row(row)?);
            }
        }

        groups.push(HeadingGroup { heading, tests });
    }

    Ok(groups)
}

/// Collect the student-count cell of every exam row across the whole
/// fragment, ignoring heading grouping. This is the narrower scan the stats
/// aggregation runs; `None` marks a count that failed numeric coercion.
pub fn collect_student_counts(html: &str) -> Result<Vec<Option<u32>>> {
    let document = Html::parse_fragment(html);
    document
        .select(&TABLE_ROW)
        .map(|row| {
            let cells: Vec<ElementRef> = row.select(&CELL).collect();
            check_row_shape(&cells)?;
            Ok(parse_students(&cells[3]))
        })
        .collect()
}

fn parse_row(row: ElementRef) -> Result<ExamRow> {
    let cells: Vec<ElementRef> = row.select(&CELL).collect();
    check_row_shape(&cells)?;

    Ok(ExamRow {
        course: element_text(&cells[0]),
        name: element_text(&cells[1]),
        kind: element_text(&cells[2]),
        students: parse_students(&cells[3]),
        date: element_text(&cells[4]),
    })
}

fn check_row_shape(cells: &[ElementRef]) -> Result<()> {
    if cells.len() < ROW_CELLS {
        return Err(Error::malformed(format!(
            "exam row has {} cells, expected {ROW_CELLS}",
            cells.len()
        )));
    }
    Ok(())
}

fn parse_students(cell: &ElementRef) -> Option<u32> {
    element_text(cell).parse().ok()
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
