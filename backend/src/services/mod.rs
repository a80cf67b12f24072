pub mod assignment_store;
pub mod holiday;
pub mod leader;
pub mod replacement;
pub mod rotation;
pub mod seeding;
pub mod week_clock;
