//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use codehive_service::workspace::FolderTarget;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Username.
    #[validate(length(min = 3, max = 100, message = "Username must be at least 3 characters"))]
    pub username: String,
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create team request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamRequest {
    /// Team name.
    #[validate(length(min = 1, max = 255, message = "Team name is required"))]
    pub name: String,
}

/// Join team request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTeamRequest {
    /// Team to join.
    pub team_id: Uuid,
}

/// Create project request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name.
    #[validate(length(min = 1, max = 255, message = "Project name is required"))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the project is private. Defaults to public.
    #[serde(default)]
    pub is_private: bool,
}

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder or branch name.
    #[validate(length(min = 1, max = 255, message = "Folder name is required"))]
    pub folder_name: String,
    /// Whether the folder lands on main or becomes a branch.
    pub target_type: FolderTarget,
}

/// Create file request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    /// Relative path inside the project's upload namespace.
    #[validate(length(min = 1, message = "File path is required"))]
    pub file_path: String,
    /// UTF-8 file content.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rejects_short_username_and_bad_email() {
        let req = SignupRequest {
            username: "ab".to_string(),
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn signup_accepts_valid_input() {
        let req = SignupRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn folder_request_parses_target_type() {
        let req: CreateFolderRequest =
            serde_json::from_value(serde_json::json!({
                "folderName": "api",
                "targetType": "branch"
            }))
            .unwrap();
        assert_eq!(req.folder_name, "api");
        assert!(matches!(req.target_type, FolderTarget::Branch));
        assert!(req.validate().is_ok());
    }
}
