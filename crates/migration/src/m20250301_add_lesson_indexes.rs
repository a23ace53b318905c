use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Date and status are the plain column filters on lessons
        manager
            .create_index(
                Index::create()
                    .name("idx_lessons_date")
                    .table(Lessons::Table)
                    .col(Lessons::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lessons_status")
                    .table(Lessons::Table)
                    .col(Lessons::Status)
                    .to_owned(),
            )
            .await?;

        // The composite primary keys already cover lookups by lesson_id
        manager
            .create_index(
                Index::create()
                    .name("idx_lesson_teachers_teacher_id")
                    .table(LessonTeachers::Table)
                    .col(LessonTeachers::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lesson_students_student_id")
                    .table(LessonStudents::Table)
                    .col(LessonStudents::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_lesson_students_student_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_lesson_teachers_teacher_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_lessons_status").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_lessons_date").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Lessons {
    Table,
    Date,
    Status,
}

#[derive(Iden)]
enum LessonTeachers {
    Table,
    TeacherId,
}

#[derive(Iden)]
enum LessonStudents {
    Table,
    StudentId,
}
