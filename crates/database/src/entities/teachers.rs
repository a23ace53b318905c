use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lesson_teachers::Entity")]
    LessonTeachers,
}

impl Related<super::lesson_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonTeachers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
