use crate::entities::{lesson_students, lesson_teachers, lessons, students, teachers};
use log::debug;
use models::{
    date_filter::DateFilter,
    lesson_filter::{LessonFilter, Pagination},
};
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait, Select,
    prelude::Expr,
};
use std::collections::HashMap;

/// A student attached to a lesson, with the attendance flag from the junction row
#[derive(Clone, Debug, PartialEq)]
pub struct LessonStudent {
    pub id: i32,
    pub name: String,
    pub visit: bool,
}

/// Teachers and students for a set of lessons, keyed by lesson id
#[derive(Debug, Default)]
pub struct LessonMembers {
    teachers: HashMap<i32, Vec<teachers::Model>>,
    students: HashMap<i32, Vec<LessonStudent>>,
}

impl LessonMembers {
    /// Removes and returns the teachers and students of one lesson
    pub fn take(&mut self, lesson_id: i32) -> (Vec<teachers::Model>, Vec<LessonStudent>) {
        (
            self.teachers.remove(&lesson_id).unwrap_or_default(),
            self.students.remove(&lesson_id).unwrap_or_default(),
        )
    }
}

pub struct LessonService;

impl LessonService {
    /// Build the grouped lesson query for a filter.
    ///
    /// Lessons are left-joined to their teachers and students so lessons with
    /// neither still appear, then grouped by id so the student count can be
    /// checked in `HAVING`. Filters are applied in sequence and combine with AND.
    pub fn build_lessons_query(filter: &LessonFilter) -> Select<lessons::Entity> {
        let mut query = lessons::Entity::find()
            .join(JoinType::LeftJoin, lessons::Relation::LessonTeachers.def())
            .join(JoinType::LeftJoin, lesson_teachers::Relation::Teacher.def())
            .join(JoinType::LeftJoin, lessons::Relation::LessonStudents.def())
            .join(JoinType::LeftJoin, lesson_students::Relation::Student.def())
            .group_by(lessons::Column::Id);

        match filter.date {
            Some(DateFilter::Single(date)) => {
                query = query.filter(lessons::Column::Date.eq(date));
            }
            Some(DateFilter::Range { start, end }) => {
                query = query.filter(lessons::Column::Date.between(start, end));
            }
            None => {}
        }

        if let Some(status) = &filter.status {
            query = query.filter(lessons::Column::Status.eq(status.as_str()));
        }

        // Pre-aggregation: the lesson needs at least one matching teacher row
        if let Some(teacher_ids) = &filter.teacher_ids {
            query = query.filter(lesson_teachers::Column::TeacherId.is_in(teacher_ids.clone()));
        }

        if let Some(count) = filter.students_count {
            query = query.having(Expr::cust_with_values(
                r#"COUNT(DISTINCT "students"."id") = $1"#,
                [count],
            ));
        }

        query.order_by_asc(lessons::Column::Id)
    }

    /// Query one page of lessons matching the filter
    pub async fn get_lessons_paginated(
        db: &DatabaseConnection,
        filter: &LessonFilter,
        pagination: Pagination,
    ) -> Result<Vec<lessons::Model>, DbErr> {
        let query = Self::build_lessons_query(filter);

        debug!(
            "Generated SQL: {}",
            query.build(DatabaseBackend::Postgres)
        );

        let paginator = query.paginate(db, pagination.per_page);
        paginator.fetch_page(pagination.page - 1).await // SeaORM uses 0-based pages
    }

    /// Fetch the teachers and students of the given lessons.
    ///
    /// Both junction tables are read concurrently. Rows come back ordered by
    /// lesson id and then member id, and that order is kept inside each group.
    pub async fn get_lesson_members(
        db: &DatabaseConnection,
        lesson_ids: Vec<i32>,
    ) -> Result<LessonMembers, DbErr> {
        if lesson_ids.is_empty() {
            return Ok(LessonMembers::default());
        }

        let teacher_rows = lesson_teachers::Entity::find()
            .filter(lesson_teachers::Column::LessonId.is_in(lesson_ids.clone()))
            .find_also_related(teachers::Entity)
            .order_by_asc(lesson_teachers::Column::LessonId)
            .order_by_asc(lesson_teachers::Column::TeacherId)
            .all(db);

        let student_rows = lesson_students::Entity::find()
            .filter(lesson_students::Column::LessonId.is_in(lesson_ids))
            .find_also_related(students::Entity)
            .order_by_asc(lesson_students::Column::LessonId)
            .order_by_asc(lesson_students::Column::StudentId)
            .all(db);

        let (teacher_rows, student_rows) = futures::try_join!(teacher_rows, student_rows)?;

        let mut members = LessonMembers::default();

        for (link, teacher) in teacher_rows
            .into_iter()
            .filter_map(|(link, teacher)| teacher.map(|t| (link, t)))
        {
            members
                .teachers
                .entry(link.lesson_id)
                .or_default()
                .push(teacher);
        }

        for (link, student) in student_rows
            .into_iter()
            .filter_map(|(link, student)| student.map(|s| (link, s)))
        {
            members
                .students
                .entry(link.lesson_id)
                .or_default()
                .push(LessonStudent {
                    id: student.id,
                    name: student.name,
                    visit: link.visit,
                });
        }

        Ok(members)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::MockDatabase;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sql(filter: &LessonFilter) -> String {
        LessonService::build_lessons_query(filter)
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_base_query_joins_and_groups() {
        let sql = sql(&LessonFilter::default());

        assert!(sql.starts_with("SELECT"));
        assert!(sql.contains(r#"FROM "lessons""#));
        assert!(sql.contains(
            r#"LEFT JOIN "lesson_teachers" ON "lessons"."id" = "lesson_teachers"."lesson_id""#
        ));
        assert!(sql.contains(
            r#"LEFT JOIN "teachers" ON "lesson_teachers"."teacher_id" = "teachers"."id""#
        ));
        assert!(sql.contains(
            r#"LEFT JOIN "lesson_students" ON "lessons"."id" = "lesson_students"."lesson_id""#
        ));
        assert!(sql.contains(
            r#"LEFT JOIN "students" ON "lesson_students"."student_id" = "students"."id""#
        ));
        assert!(sql.contains(r#"GROUP BY "lessons"."id""#));
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("HAVING"));
    }

    #[test]
    fn test_single_date_filter() {
        let filter = LessonFilter {
            date: Some(DateFilter::Single(date(2022, 1, 1))),
            ..Default::default()
        };

        assert!(sql(&filter).contains(r#"WHERE "lessons"."date" = '2022-01-01'"#));
    }

    #[test]
    fn test_date_range_filter() {
        let filter = LessonFilter {
            date: Some(DateFilter::Range {
                start: date(2022, 1, 1),
                end: date(2022, 1, 31),
            }),
            ..Default::default()
        };

        assert!(
            sql(&filter).contains(r#""lessons"."date" BETWEEN '2022-01-01' AND '2022-01-31'"#)
        );
    }

    #[test]
    fn test_teacher_and_status_filters_combine() {
        let filter = LessonFilter {
            status: Some("done".to_owned()),
            teacher_ids: Some(vec![1, 2]),
            ..Default::default()
        };
        let sql = sql(&filter);

        assert!(sql.contains(r#""lessons"."status" = 'done'"#));
        assert!(sql.contains(r#""lesson_teachers"."teacher_id" IN (1, 2)"#));
        assert!(sql.contains(" AND "));
        assert!(!sql.contains("HAVING"));
    }

    #[test]
    fn test_students_count_uses_having() {
        let filter = LessonFilter {
            students_count: Some(2),
            ..Default::default()
        };
        let sql = sql(&filter);

        assert!(sql.contains(r#"HAVING COUNT(DISTINCT "students"."id") = 2"#));
        let group_by = sql.find("GROUP BY").unwrap();
        let having = sql.find("HAVING").unwrap();
        assert!(group_by < having);
    }

    #[tokio::test]
    async fn test_get_lessons_paginated() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                lessons::Model {
                    id: 6,
                    date: date(2022, 1, 6),
                    title: "Geometry".to_owned(),
                    status: "planned".to_owned(),
                },
                lessons::Model {
                    id: 7,
                    date: date(2022, 1, 7),
                    title: "Physics".to_owned(),
                    status: "done".to_owned(),
                },
            ]])
            .into_connection();

        let lessons = LessonService::get_lessons_paginated(
            &db,
            &LessonFilter::default(),
            Pagination {
                page: 2,
                per_page: 5,
            },
        )
        .await
        .unwrap();

        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].id, 6);
        assert_eq!(lessons[1].title, "Physics");

        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn test_get_lesson_members_groups_by_lesson() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                (
                    lesson_teachers::Model {
                        lesson_id: 1,
                        teacher_id: 5,
                    },
                    teachers::Model {
                        id: 5,
                        name: "A".to_owned(),
                    },
                ),
                (
                    lesson_teachers::Model {
                        lesson_id: 2,
                        teacher_id: 6,
                    },
                    teachers::Model {
                        id: 6,
                        name: "D".to_owned(),
                    },
                ),
            ]])
            .append_query_results([vec![
                (
                    lesson_students::Model {
                        lesson_id: 1,
                        student_id: 9,
                        visit: true,
                    },
                    students::Model {
                        id: 9,
                        name: "B".to_owned(),
                    },
                ),
                (
                    lesson_students::Model {
                        lesson_id: 1,
                        student_id: 10,
                        visit: false,
                    },
                    students::Model {
                        id: 10,
                        name: "C".to_owned(),
                    },
                ),
            ]])
            .into_connection();

        let mut members = LessonService::get_lesson_members(&db, vec![1, 2])
            .await
            .unwrap();

        let (teachers, students) = members.take(1);
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].name, "A");
        assert_eq!(
            students,
            vec![
                LessonStudent {
                    id: 9,
                    name: "B".to_owned(),
                    visit: true
                },
                LessonStudent {
                    id: 10,
                    name: "C".to_owned(),
                    visit: false
                },
            ]
        );

        let (teachers, students) = members.take(2);
        assert_eq!(teachers[0].id, 6);
        assert!(students.is_empty());

        let (teachers, students) = members.take(3);
        assert!(teachers.is_empty());
        assert!(students.is_empty());
    }

    #[tokio::test]
    async fn test_get_lesson_members_skips_queries_for_empty_page() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let mut members = LessonService::get_lesson_members(&db, vec![])
            .await
            .unwrap();

        assert_eq!(members.take(1), (vec![], vec![]));
        assert!(db.into_transaction_log().is_empty());
    }
}
