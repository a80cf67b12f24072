pub mod id;

pub use id::{AssignmentId, TeamMemberId};
