use log::debug;
use shared::models::user::{CreateUserRequest, User};

/// Only this id resolves on single-user lookups. The path segment is compared
/// as a string, so "01" or " 1" do not match.
pub(crate) const CANONICAL_USER_ID: &str = "1";
pub(crate) const CREATED_USER_ID: i64 = 3;
pub(crate) const UPDATED_USER_ID: i64 = 1;

/// Read-only stand-in for a user database.
///
/// Seeded once at startup and never mutated; writes fabricate a result
/// without touching the seeded records.
#[derive(Debug, Clone)]
pub struct MockUserStore {
    users: Vec<User>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self {
            users: vec![
                User::new(1, "John Doe", "john@example.com", 30),
                User::new(2, "Jane Smith", "jane@example.com", 25),
            ],
        }
    }

    pub fn get_users(&self) -> &[User] {
        &self.users
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        if id == CANONICAL_USER_ID {
            self.users.first()
        } else {
            None
        }
    }

    pub fn create_user(&self, request: CreateUserRequest) -> User {
        User::from_request(CREATED_USER_ID, request)
    }

    // The path id is not used: the fabricated record always carries UPDATED_USER_ID.
    pub fn update_user(&self, id: &str, request: CreateUserRequest) -> User {
        debug!("Update requested for user {id}, answering with id {UPDATED_USER_ID}");
        User::from_request(UPDATED_USER_ID, request)
    }

    pub fn delete_user(&self, id: &str) {
        debug!("Delete requested for user {id}, nothing is removed");
    }
}

impl Default for MockUserStore {
    fn default() -> Self {
        Self::new()
    }
}
