pub mod model;
pub mod view;

pub use model::{CreateProject, Project};
pub use view::{BranchWithNodes, Channel, ProjectTree, ProjectView};
