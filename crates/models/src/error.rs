use thiserror::Error;

/// Client-facing validation failures for the lesson listing parameters.
///
/// The `Display` output of each variant is sent back verbatim in the
/// `error` field of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Invalid date format.")]
    InvalidDateFormat,
    #[error("Invalid date range. Start date must be before end date.")]
    InvalidDateRange,
    #[error("Invalid page number.")]
    InvalidPage,
    #[error("Invalid lessons per page.")]
    InvalidLessonsPerPage,
    #[error("Invalid teacher IDs.")]
    InvalidTeacherIds,
    #[error("Invalid students count.")]
    InvalidStudentsCount,
}
