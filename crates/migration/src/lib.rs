pub use sea_orm_migration::prelude::*;

mod m20250301_add_lesson_indexes;
mod m20250301_create_lesson_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_create_lesson_tables::Migration),
            Box::new(m20250301_add_lesson_indexes::Migration),
        ]
    }
}
