use models::{
    date_filter::DateFilter,
    error::FilterError,
    lesson_filter::{
        LessonFilter, Pagination, non_empty, parse_count, parse_id_list, parse_positive,
    },
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonResponse {
    pub id: i32,
    /// Formatted as `YYYY-MM-DD`
    pub date: String,
    pub title: String,
    pub status: String,
    /// Number of students that attended
    pub visit_count: usize,
    pub students: Vec<LessonStudentResponse>,
    pub teachers: Vec<LessonTeacherResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LessonStudentResponse {
    pub id: i32,
    pub name: String,
    pub visit: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LessonTeacherResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonsResponse {
    pub current_page: u64,
    /// Number of lessons on this page
    pub total_count: u64,
    pub lessons: Vec<LessonResponse>,
}

/// Raw query string values; validated by [`LessonQueryParams::into_filter`]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LessonQueryParams {
    /// `YYYY-MM-DD` or an inclusive range `YYYY-MM-DD,YYYY-MM-DD`
    pub date: Option<String>,
    pub status: Option<String>,
    /// Comma separated teacher ids, e.g. `1,2,3`
    pub teacher_ids: Option<String>,
    /// Exact number of distinct students
    pub students_count: Option<String>,
    /// 1-indexed page, defaults to 1
    pub page: Option<String>,
    /// Page size, defaults to 5
    pub lessons_per_page: Option<String>,
}

impl LessonQueryParams {
    /// Validate the raw values in order: date, page, lessonsPerPage,
    /// teacherIds, studentsCount. The first failure wins.
    pub fn into_filter(self) -> Result<(LessonFilter, Pagination), FilterError> {
        let date = non_empty(self.date.as_deref())
            .map(DateFilter::from_str)
            .transpose()?;

        let pagination = Pagination {
            page: parse_positive(
                self.page.as_deref(),
                Pagination::DEFAULT_PAGE,
                FilterError::InvalidPage,
            )?,
            per_page: parse_positive(
                self.lessons_per_page.as_deref(),
                Pagination::DEFAULT_PER_PAGE,
                FilterError::InvalidLessonsPerPage,
            )?,
        };

        let teacher_ids = non_empty(self.teacher_ids.as_deref())
            .map(parse_id_list)
            .transpose()?;

        let students_count = non_empty(self.students_count.as_deref())
            .map(parse_count)
            .transpose()?;

        let filter = LessonFilter {
            date,
            status: self.status.filter(|status| !status.is_empty()),
            teacher_ids,
            students_count,
        };

        Ok((filter, pagination))
    }
}
