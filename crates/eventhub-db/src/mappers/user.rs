//! User entity <-> model mapper

use eventhub_core::{DomainError, Role, Snowflake, User};

use crate::models::UserModel;

/// Rows with an unknown role string are rejected rather than silently downgraded
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(User {
            id: Snowflake::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            plan_type: model.plan_type,
            mobile_no: model.mobile_no,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// User values bound by the insert statement
pub struct UserInsert<'a> {
    pub id: i64,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub plan_type: &'a str,
    pub mobile_no: &'a str,
    pub role: &'static str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            first_name: &user.first_name,
            last_name: &user.last_name,
            email: &user.email,
            password_hash,
            plan_type: &user.plan_type,
            mobile_no: &user.mobile_no,
            role: user.role.as_str(),
        }
    }
}
