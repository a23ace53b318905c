use crate::{date_filter::DateFilter, error::FilterError};
use std::str::FromStr;

/// Validated constraints for the lesson listing query. Every field is optional
/// and the constraints that are present are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonFilter {
    pub date: Option<DateFilter>,
    pub status: Option<String>,
    /// Keep lessons taught by at least one of these teachers
    pub teacher_ids: Option<Vec<i32>>,
    /// Keep lessons with exactly this many distinct students
    pub students_count: Option<i64>,
}

/// 1-indexed page selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Pagination {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_PER_PAGE: u64 = 5;
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// Treats empty query values the same as missing ones
pub fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Parses a strictly positive integer, falling back to `default` when absent.
///
/// The whole value has to be numeric, so `5abc` is rejected. Values are capped
/// at `u32::MAX` so the row offset always fits in a `u64`.
pub fn parse_positive(
    raw: Option<&str>,
    default: u64,
    err: FilterError,
) -> Result<u64, FilterError> {
    match non_empty(raw) {
        None => Ok(default),
        Some(value) => match u32::from_str(value) {
            Ok(n) if n >= 1 => Ok(u64::from(n)),
            _ => Err(err),
        },
    }
}

/// Parses a comma separated list of integer ids such as `1,2,3`
pub fn parse_id_list(raw: &str) -> Result<Vec<i32>, FilterError> {
    raw.split(',')
        .map(|token| i32::from_str(token.trim()).map_err(|_| FilterError::InvalidTeacherIds))
        .collect()
}

/// Parses the exact student count used by the aggregate filter
pub fn parse_count(raw: &str) -> Result<i64, FilterError> {
    match i64::from_str(raw.trim()) {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(FilterError::InvalidStudentsCount),
    }
}
