use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::User;

/// Error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
#[schema(example = json!({"error": "Bad Request", "message": "Invalid input data"}))]
pub struct ErrorResponse {
    /// Short error category, e.g. "Not Found"
    pub error: String,
    /// Human readable detail
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Envelope for successful write operations.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct SuccessResponse {
    #[schema(example = "Operation successful")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<User>,
}

impl SuccessResponse {
    pub fn new(message: &str, data: Option<User>) -> Self {
        SuccessResponse {
            message: message.to_string(),
            data,
        }
    }

    pub fn with_user(message: &str, user: User) -> Self {
        Self::new(message, Some(user))
    }

    pub fn message_only(message: &str) -> Self {
        Self::new(message, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_without_data_omits_field() {
        let response = SuccessResponse::message_only("User deleted successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "User deleted successfully");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_success_with_user_nests_record() {
        let response = SuccessResponse::with_user(
            "User created successfully",
            User::new(3, "John Doe", "john@example.com", 30),
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["id"], 3);
        assert_eq!(json["data"]["email"], "john@example.com");
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_string(&ErrorResponse::new("Not Found", "User not found")).unwrap();
        assert_eq!(json, r#"{"error":"Not Found","message":"User not found"}"#);
    }
}
