pub mod admin;
pub mod config;
pub mod holidays;
pub mod leader;
pub mod schedule;
