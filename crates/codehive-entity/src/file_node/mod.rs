pub mod model;
pub mod tree;

pub use model::{FileNode, NodeKind};
pub use tree::{UploadEntry, UploadEntryKind};
