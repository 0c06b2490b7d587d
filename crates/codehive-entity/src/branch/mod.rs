pub mod model;

pub use model::{Branch, CreateBranch};
