//! Greeting API endpoints
//!
//! The query-parameter demonstration endpoints:
//! - GET / - Static welcome message
//! - GET /test - Boolean query flag coercion
//! - GET /greet/ - Optional length-bounded name
//! - GET /greets/ - Repeated names joined into one greeting
//! - GET /say-hello/ - Aliased, defaulted, pattern-checked name

use axum::{extract::Query, Json};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use crate::api::ApiError;
use crate::validation::{self, QueryParams, StringRules};

// A match anywhere in the value passes; this is a search, not a full match.
static USER_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("nooshin").unwrap());

/// GET / - Static welcome message
pub async fn root() -> Json<Value> {
    Json(json!({"message": "Welcome to the Vitrine web API!"}))
}

/// GET /test - Echo a boolean query flag
///
/// `test_var` accepts the lenient literal set (`true`/`false`, `1`/`0`,
/// `yes`/`no`, `on`/`off`, any case) and defaults to false when absent.
/// Unrecognized literals are rejected, never defaulted.
pub async fn test_flag(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<bool>, ApiError> {
    let params = QueryParams::new(pairs);
    let value = match params.get("test_var") {
        Some(raw) => validation::parse_bool("test_var", raw)?,
        None => false,
    };
    Ok(Json(value))
}

/// GET /greet/ - Greet an optional, length-bounded name
pub async fn greet(Query(pairs): Query<Vec<(String, String)>>) -> Result<Json<String>, ApiError> {
    let params = QueryParams::new(pairs);
    let name = StringRules::new("name")
        .max_length(10)
        .apply(params.get("name"))?;
    let message = match name {
        Some(name) => format!("Greetings {name}!"),
        None => "Greetings!".to_string(),
    };
    Ok(Json(message))
}

/// GET /greets/ - Greet every name in a repeatable query parameter
pub async fn greet_many(Query(pairs): Query<Vec<(String, String)>>) -> Json<String> {
    let params = QueryParams::new(pairs);
    let names = params.all("names");
    let message = if names.is_empty() {
        "Greetings!".to_string()
    } else {
        format!("Greetings {}!", names.join(", "))
    };
    Json(message)
}

/// GET /say-hello/ - Greet a name sent under the aliased key `user-name`
///
/// The parameter is deprecated for clients but still fully validated:
/// 3 to 20 characters, must contain "nooshin". Omitting it substitutes
/// the default without re-checking it.
pub async fn say_hello(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<String>, ApiError> {
    let params = QueryParams::new(pairs);
    let name = StringRules::new("user-name")
        .min_length(3)
        .max_length(20)
        .pattern(&USER_NAME_PATTERN)
        .default_value("dear nooshin joon")
        .deprecated()
        .resolve(params.get("user-name"))?;
    Ok(Json(format!("Hello {name}")))
}
