//! User registration API endpoints
//!
//! Demonstrates response shape projection over one validated input:
//! - POST /users/register - Both the stored shape and the public shape
//! - POST /users/register/out - The stored shape with a fixed placeholder
//! - POST /login/ - Form-encoded credential echo
//!
//! Nothing is persisted; the point is which fields each response carries.

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::ApiError;
use crate::services::password::{pseudo_hash, PLACEHOLDER_HASH};
use crate::validation::{self, body, FieldError, QueryParams};

/// Incoming registration payload, raw password included.
#[derive(Debug, Clone)]
pub struct UserIn {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
}

impl UserIn {
    /// Validate a registration body, reporting every offending field in
    /// one pass. All four fields are required; the email must also pass a
    /// syntax check.
    fn from_body(value: &Value) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();
        let Some(object) = body::require_object(value, "", &mut errors) else {
            return Err(errors);
        };
        let username = body::require_str(object, "username", "", &mut errors);
        let password = body::require_str(object, "password", "", &mut errors);
        let email = body::require_str(object, "email", "", &mut errors).and_then(|email| {
            match validation::check_email("email", &email) {
                Ok(()) => Some(email),
                Err(err) => {
                    errors.push(err);
                    None
                }
            }
        });
        let full_name = body::require_str(object, "full_name", "", &mut errors);
        match (username, password, email, full_name) {
            (Some(username), Some(password), Some(email), Some(full_name))
                if errors.is_empty() =>
            {
                Ok(Self {
                    username,
                    password,
                    email,
                    full_name,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Public shape: everything except password material
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl From<&UserIn> for UserOut {
    fn from(user: &UserIn) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}

/// Stored shape: the hash replaces the raw password
#[derive(Debug, Serialize)]
pub struct UserInDb {
    pub username: String,
    pub hashed_password: String,
    pub email: String,
    pub full_name: String,
}

impl UserInDb {
    fn project(user: &UserIn, hashed_password: String) -> Self {
        Self {
            username: user.username.clone(),
            hashed_password,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}

/// Response for full registration: both shapes side by side
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_in_db: UserInDb,
    pub user_out: UserOut,
}

/// POST /users/register - Register and show both projections
pub async fn register(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation_error(e.body_text()))?;
    let user = UserIn::from_body(&payload)?;
    let response = RegisterResponse {
        user_in_db: UserInDb::project(&user, pseudo_hash(&user.password)),
        user_out: UserOut::from(&user),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /users/register/out - The stored shape with the fixed placeholder
pub async fn register_out(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UserInDb>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation_error(e.body_text()))?;
    let user = UserIn::from_body(&payload)?;
    Ok(Json(UserInDb::project(&user, PLACEHOLDER_HASH.to_string())))
}

/// POST /login/ - Acknowledge form-encoded credentials
///
/// Both fields are required; missing ones are reported together.
pub async fn login(
    payload: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Form(pairs) = payload.map_err(|e| ApiError::validation_error(e.body_text()))?;
    let params = QueryParams::new(pairs);
    let mut errors = Vec::new();
    if !params.has("username") {
        errors.push(FieldError::missing("username"));
    }
    if !params.has("password") {
        errors.push(FieldError::missing("password"));
    }
    if !errors.is_empty() {
        return Err(errors.into());
    }
    let username = params.get("username").unwrap_or_default();
    let password = params.get("password").unwrap_or_default();
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("User {username} logged in with password {password}")
        })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ConstraintRule;

    fn valid_payload() -> Value {
        json!({
            "username": "nooshin",
            "password": "hunter2",
            "email": "nooshin@example.com",
            "full_name": "Nooshin Joon"
        })
    }

    #[test]
    fn test_from_body_accepts_complete_payload() {
        let user = UserIn::from_body(&valid_payload()).unwrap();
        assert_eq!(user.username, "nooshin");
        assert_eq!(user.email, "nooshin@example.com");
    }

    #[test]
    fn test_from_body_rejects_bad_email_syntax() {
        let mut payload = valid_payload();
        payload["email"] = json!("not-an-email");
        let errors = UserIn::from_body(&payload).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].rule, ConstraintRule::InvalidEmail);
    }

    #[test]
    fn test_from_body_lists_every_missing_field() {
        let errors = UserIn::from_body(&json!({})).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["username", "password", "email", "full_name"]);
    }

    #[test]
    fn test_user_out_carries_no_password_material() {
        let user = UserIn::from_body(&valid_payload()).unwrap();
        let value = serde_json::to_value(UserOut::from(&user)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("username"));
        assert!(object.contains_key("email"));
        assert!(object.contains_key("full_name"));
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("hashed_password"));
    }

    #[test]
    fn test_user_in_db_replaces_password_with_hash() {
        let user = UserIn::from_body(&valid_payload()).unwrap();
        let projected = UserInDb::project(&user, pseudo_hash(&user.password));
        assert_eq!(projected.hashed_password, "supersecrethunter2");
        let value = serde_json::to_value(&projected).unwrap();
        assert!(value.get("password").is_none());
    }
}
