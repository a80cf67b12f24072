pub mod assignment;
pub mod team_member;

pub use assignment::AssignmentRepository;
pub use team_member::TeamMemberRepository;
