use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "The name field is required."))]
    pub name: String,
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,
    #[validate(
        length(min = 1, message = "The password field is required."),
        must_match = "password_confirmation"
    )]
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "The name field is required."))]
    pub name: String,
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,
    /// Only re-hashed and stored when supplied.
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}
