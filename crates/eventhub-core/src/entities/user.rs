//! User entity - an account that can sign in and register for events

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, Snowflake};

/// User account. The password hash is stored separately and never carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub plan_type: String,
    pub mobile_no: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the default `USER` role
    pub fn new(
        id: Snowflake,
        first_name: String,
        last_name: String,
        email: String,
        plan_type: String,
        mobile_no: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name,
            last_name,
            email,
            plan_type,
            mobile_no,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Display name: "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
