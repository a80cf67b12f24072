//! Administrative endpoints. They write to the assignment store and answer
//! 503 when the service runs without one.

pub mod assignments;
pub mod members;

pub use assignments::*;
pub use members::*;
