//! Global statistics across the five departments.
//!
//! The five fetches have no data dependency on each other, so they run
//! concurrently and are joined before the reduction step.

use futures::future;
use tracing::debug;

use crate::departments::DEPARTMENTS;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::models::{DepartmentStats, StatsSummary};
use crate::parse;

impl DepartmentStats {
    /// Reduce one department's student counts to `{sum, min, max, count}`.
    ///
    /// Counts that failed numeric coercion (`None`) are skipped; they would
    /// otherwise poison every aggregate. A department with no usable counts
    /// reduces to the zero value with `count == 0`.
    pub fn from_counts(counts: &[Option<u32>]) -> Self {
        let mut stats = DepartmentStats {
            sum: 0,
            min: u32::MAX,
            max: 0,
            count: 0,
        };
        for &count in counts.iter().flatten() {
            stats.sum += u64::from(count);
            stats.min = stats.min.min(count);
            stats.max = stats.max.max(count);
            stats.count += 1;
        }
        if stats.count == 0 {
            stats.min = 0;
        }
        stats
    }
}

/// Compute global exam statistics across all five departments.
///
/// Fetches (cache-first) and scans every department concurrently, then folds
/// the per-department reductions. Departments with no rows contribute
/// nothing; if every department is empty the result is
/// [`Error::EmptyDataSet`] rather than a division by zero.
pub async fn get_stats(fetcher: &Fetcher) -> Result<StatsSummary> {
    let fetches = DEPARTMENTS
        .iter()
        .map(|department| department_stats(fetcher, department.slug));
    let per_department = future::try_join_all(fetches).await?;

    summarize(&per_department)
}

async fn department_stats(fetcher: &Fetcher, slug: &str) -> Result<DepartmentStats> {
    let payload = fetcher.fetch_department(slug).await?;
    let counts = parse::collect_student_counts(&payload.html)?;
    let stats = DepartmentStats::from_counts(&counts);
    debug!(slug, count = stats.count, sum = stats.sum, "department reduced");
    Ok(stats)
}

fn summarize(per_department: &[DepartmentStats]) -> Result<StatsSummary> {
    let mut min = u32::MAX;
    let mut max = 0u32;
    let mut num_tests = 0usize;
    let mut num_students = 0u64;

    for stats in per_department.iter().filter(|s| s.count > 0) {
        min = min.min(stats.min);
        max = max.max(stats.max);
        num_tests += stats.count;
        num_students += stats.sum;
    }

    if num_tests == 0 {
        return Err(Error::EmptyDataSet);
    }

    let average = num_students as f64 / num_tests as f64;
    Ok(StatsSummary {
        min,
        max,
        num_tests,
        num_students,
        average_students: format!("{average:.2}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(sum: u64, min: u32, max: u32, count: usize) -> DepartmentStats {
        DepartmentStats {
            sum,
            min,
            max,
            count,
        }
    }

    #[test]
    fn test_from_counts_reduces_sum_min_max_count() {
        let reduced = DepartmentStats::from_counts(&[Some(10), Some(3), Some(7)]);
        assert_eq!(reduced, stats(20, 3, 10, 3));
    }

    #[test]
    fn test_from_counts_skips_unparsed_cells() {
        let reduced = DepartmentStats::from_counts(&[Some(5), None, Some(9)]);
        assert_eq!(reduced, stats(14, 5, 9, 2));
    }

    #[test]
    fn test_from_counts_of_nothing_is_zero() {
        assert_eq!(DepartmentStats::from_counts(&[]), stats(0, 0, 0, 0));
        assert_eq!(DepartmentStats::from_counts(&[None, None]), stats(0, 0, 0, 0));
    }

    #[test]
    fn test_summarize_five_departments() {
        let per_department = [
            stats(10, 1, 9, 1),
            stats(20, 2, 18, 2),
            stats(30, 3, 27, 3),
            stats(40, 4, 36, 4),
            stats(50, 5, 45, 5),
        ];
        let summary = summarize(&per_department).unwrap();
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 45);
        assert_eq!(summary.num_tests, 15);
        assert_eq!(summary.num_students, 150);
        assert_eq!(summary.average_students, "10.00");
    }

    #[test]
    fn test_summarize_ignores_empty_departments() {
        let per_department = [stats(0, 0, 0, 0), stats(12, 4, 8, 2)];
        let summary = summarize(&per_department).unwrap();
        assert_eq!(summary.min, 4);
        assert_eq!(summary.max, 8);
        assert_eq!(summary.num_tests, 2);
        assert_eq!(summary.average_students, "6.00");
    }

    #[test]
    fn test_summarize_all_empty_is_empty_data_set() {
        let per_department = [stats(0, 0, 0, 0); 5];
        assert!(matches!(
            summarize(&per_department),
            Err(Error::EmptyDataSet)
        ));
    }

    #[test]
    fn test_average_keeps_two_fraction_digits() {
        let per_department = [stats(10, 1, 9, 3)];
        let summary = summarize(&per_department).unwrap();
        assert_eq!(summary.average_students, "3.33");
    }
}
