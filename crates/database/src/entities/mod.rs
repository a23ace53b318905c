pub mod lesson_students;
pub mod lesson_teachers;
pub mod lessons;
pub mod students;
pub mod teachers;
