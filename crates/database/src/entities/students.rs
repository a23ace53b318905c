use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lesson_students::Entity")]
    LessonStudents,
}

impl Related<super::lesson_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonStudents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
