//! Client-shaped project projection.
//!
//! The dashboard expects each project enriched with the folder names of
//! its main branch, the names of its side branches, and static chat and
//! video channel descriptors.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::file_node::{FileNode, NodeKind};

use super::model::Project;

/// A branch together with all of its file nodes, as fetched for projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchWithNodes {
    /// The branch record.
    #[serde(flatten)]
    pub branch: Branch,
    /// All file nodes on this branch.
    pub nodes: Vec<FileNode>,
}

/// A project with its full branch/node tree, the raw material for
/// [`ProjectView`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTree {
    /// The project record.
    #[serde(flatten)]
    pub project: Project,
    /// All branches with their nodes.
    pub branches: Vec<BranchWithNodes>,
}

/// A chat or video channel descriptor. Channels are static placeholders
/// until the realtime layer grows persistent rooms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    /// Channel ID.
    pub id: String,
    /// Channel display name.
    pub name: String,
}

impl Channel {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// The client-shaped view of a project returned by `GET /api/projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    /// The project record.
    #[serde(flatten)]
    pub project: Project,
    /// Names of FOLDER nodes on the main branch.
    pub main_code_folders: Vec<String>,
    /// Names of non-main branches.
    pub branch_code_folders: Vec<String>,
    /// Text chat channels.
    pub text_channels: Vec<Channel>,
    /// Video channels.
    pub video_channels: Vec<Channel>,
}

impl ProjectView {
    /// Shapes a project tree into the view the dashboard consumes.
    pub fn from_tree(tree: ProjectTree) -> Self {
        let main_code_folders = tree
            .branches
            .iter()
            .find(|b| b.branch.is_main)
            .map(|main| {
                main.nodes
                    .iter()
                    .filter(|n| n.kind == NodeKind::Folder)
                    .map(|n| n.name.clone())
                    .collect()
            })
            .unwrap_or_default();

        let branch_code_folders = tree
            .branches
            .iter()
            .filter(|b| !b.branch.is_main)
            .map(|b| b.branch.name.clone())
            .collect();

        Self {
            project: tree.project,
            main_code_folders,
            branch_code_folders,
            text_channels: vec![Channel::new("c3", "general"), Channel::new("c4", "random")],
            video_channels: vec![Channel::new("c5", "team-meeting")],
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::branch::Branch;
    use crate::file_node::{FileNode, NodeKind};

    use super::*;

    fn project() -> Project {
        Project {
            id: Uuid::new_v4(),
            name: "Engine".to_string(),
            description: None,
            is_private: false,
            owner_id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    fn branch(project_id: Uuid, name: &str, is_main: bool) -> Branch {
        Branch {
            id: Uuid::new_v4(),
            name: name.to_string(),
            is_main,
            project_id,
            author_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    fn node(branch_id: Uuid, name: &str, kind: NodeKind) -> FileNode {
        FileNode {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            branch_id,
            parent_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_project_shapes_to_empty_folder_lists() {
        let p = project();
        let main = branch(p.id, "main", true);
        let view = ProjectView::from_tree(ProjectTree {
            project: p,
            branches: vec![BranchWithNodes {
                branch: main,
                nodes: vec![],
            }],
        });

        assert!(view.main_code_folders.is_empty());
        assert!(view.branch_code_folders.is_empty());
        assert_eq!(view.text_channels.len(), 2);
        assert_eq!(view.video_channels.len(), 1);
    }

    #[test]
    fn main_folders_exclude_files_and_side_branches() {
        let p = project();
        let main = branch(p.id, "main", true);
        let feature = branch(p.id, "feature-x", false);
        let main_id = main.id;
        let feature_id = feature.id;

        let view = ProjectView::from_tree(ProjectTree {
            project: p,
            branches: vec![
                BranchWithNodes {
                    branch: main,
                    nodes: vec![
                        node(main_id, "src", NodeKind::Folder),
                        node(main_id, "docs", NodeKind::Folder),
                        node(main_id, "README.md", NodeKind::File),
                    ],
                },
                BranchWithNodes {
                    branch: feature,
                    nodes: vec![node(feature_id, "scratch", NodeKind::Folder)],
                },
            ],
        });

        assert_eq!(view.main_code_folders, vec!["src", "docs"]);
        assert_eq!(view.branch_code_folders, vec!["feature-x"]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let p = project();
        let view = ProjectView::from_tree(ProjectTree {
            project: p,
            branches: vec![],
        });

        let value = serde_json::to_value(&view).unwrap();
        assert!(value.get("mainCodeFolders").is_some());
        assert!(value.get("branchCodeFolders").is_some());
        assert_eq!(value["textChannels"][0]["name"], "general");
        assert_eq!(value["videoChannels"][0]["name"], "team-meeting");
    }
}
