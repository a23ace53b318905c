use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub title: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lesson_teachers::Entity")]
    LessonTeachers,
    #[sea_orm(has_many = "super::lesson_students::Entity")]
    LessonStudents,
}

impl Related<super::lesson_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonTeachers.def()
    }
}

impl Related<super::lesson_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonStudents.def()
    }
}

// Many-to-many relationship with teachers
impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        super::lesson_teachers::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::lesson_teachers::Relation::Lesson.def().rev())
    }
}

// Many-to-many relationship with students
impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::lesson_students::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::lesson_students::Relation::Lesson.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
