pub mod member;
pub mod model;

pub use member::{TeamMember, TeamMemberWithUser, TeamRole};
pub use model::{CreateTeam, Team, TeamWithMembers};
