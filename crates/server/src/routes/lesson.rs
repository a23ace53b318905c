use crate::{
    dtos::{
        error::ErrorResponse,
        lesson::{
            LessonQueryParams, LessonResponse, LessonStudentResponse, LessonTeacherResponse,
            LessonsResponse,
        },
    },
    error::ApiError,
};
use axum::{
    Json,
    extract::{Query, State},
};
use database::{
    entities::{lessons, teachers},
    services::lesson::{LessonService, LessonStudent},
};
use sea_orm::DatabaseConnection;

/// Get a page of lessons with their teachers and students
#[utoipa::path(
    get,
    path = "/lessons",
    params(LessonQueryParams),
    responses(
        (status = 200, description = "Lessons retrieved successfully", body = LessonsResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Lessons"
)]
pub async fn get_lessons(
    State(db): State<DatabaseConnection>,
    Query(params): Query<LessonQueryParams>,
) -> Result<Json<LessonsResponse>, ApiError> {
    let (filter, pagination) = params.into_filter()?;

    let lessons = LessonService::get_lessons_paginated(&db, &filter, pagination).await?;

    // Only the lessons on this page need their teachers and students
    let lesson_ids = lessons.iter().map(|lesson| lesson.id).collect();
    let mut members = LessonService::get_lesson_members(&db, lesson_ids).await?;

    let lessons: Vec<LessonResponse> = lessons
        .into_iter()
        .map(|lesson| {
            let (teachers, students) = members.take(lesson.id);
            convert_to_lesson_response(lesson, teachers, students)
        })
        .collect();

    Ok(Json(LessonsResponse {
        current_page: pagination.page,
        total_count: lessons.len() as u64,
        lessons,
    }))
}

/// Helper function to convert database models to API response
fn convert_to_lesson_response(
    lesson: lessons::Model,
    teachers: Vec<teachers::Model>,
    students: Vec<LessonStudent>,
) -> LessonResponse {
    let visit_count = students.iter().filter(|student| student.visit).count();

    LessonResponse {
        id: lesson.id,
        date: lesson.date.format("%Y-%m-%d").to_string(),
        title: lesson.title,
        status: lesson.status,
        visit_count,
        students: students
            .into_iter()
            .map(|student| LessonStudentResponse {
                id: student.id,
                name: student.name,
                visit: student.visit,
            })
            .collect(),
        teachers: teachers
            .into_iter()
            .map(|teacher| LessonTeacherResponse {
                id: teacher.id,
                name: teacher.name,
            })
            .collect(),
    }
}
