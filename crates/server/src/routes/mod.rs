pub mod health;
pub mod lesson;
