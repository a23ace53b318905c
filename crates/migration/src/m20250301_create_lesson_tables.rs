use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create lessons table
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lessons::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lessons::Date).date().not_null())
                    .col(ColumnDef::new(Lessons::Title).string().not_null())
                    .col(ColumnDef::new(Lessons::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create teachers table
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create lesson_teachers junction table
        manager
            .create_table(
                Table::create()
                    .table(LessonTeachers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LessonTeachers::LessonId).integer().not_null())
                    .col(
                        ColumnDef::new(LessonTeachers::TeacherId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk-lesson_teachers")
                            .col(LessonTeachers::LessonId)
                            .col(LessonTeachers::TeacherId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lesson_teachers-lesson_id")
                            .from(LessonTeachers::Table, LessonTeachers::LessonId)
                            .to(Lessons::Table, Lessons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lesson_teachers-teacher_id")
                            .from(LessonTeachers::Table, LessonTeachers::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lesson_students junction table
        manager
            .create_table(
                Table::create()
                    .table(LessonStudents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LessonStudents::LessonId).integer().not_null())
                    .col(
                        ColumnDef::new(LessonStudents::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonStudents::Visit)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk-lesson_students")
                            .col(LessonStudents::LessonId)
                            .col(LessonStudents::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lesson_students-lesson_id")
                            .from(LessonStudents::Table, LessonStudents::LessonId)
                            .to(Lessons::Table, Lessons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lesson_students-student_id")
                            .from(LessonStudents::Table, LessonStudents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop junction tables first because of foreign keys
        manager
            .drop_table(Table::drop().table(LessonStudents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LessonTeachers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Lessons::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Lessons {
    Table,
    Id,
    Date,
    Title,
    Status,
}

#[derive(Iden)]
enum Teachers {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum LessonTeachers {
    Table,
    LessonId,
    TeacherId,
}

#[derive(Iden)]
enum LessonStudents {
    Table,
    LessonId,
    StudentId,
    Visit,
}
