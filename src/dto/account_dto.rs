use crate::dto::not_blank;
use crate::models::user::UserRole;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration form data. The rules here are the ones the registration
/// form enforces; `AccountService::register` itself does not validate.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPayload {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
