//! Request validation and coercion
//!
//! Every handler in this crate runs its raw input through this module before
//! touching a lookup table or building a response. The shape is always the
//! same: a declarative constraint descriptor (length bounds, numeric bounds,
//! pattern, default, external name) is applied to a raw value by a shared
//! validator, which either produces the typed value or a [`FieldError`]
//! naming the field, the violated rule, and the limit or allowed set.
//!
//! Two properties the validators guarantee:
//! - a declared default is substituted when the parameter is absent and is
//!   never itself validated (callers get the default unmodified)
//! - over-limit values are rejected, never truncated or clamped
//!
//! Submodules:
//! - [`body`] - typed field extraction from JSON bodies, collecting every
//!   violation in one pass instead of stopping at the first
//! - [`query`] - raw query/form pair access preserving repeated names

pub mod body;
pub mod query;

pub use query::QueryParams;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Value};

// ============================================================================
// Field Errors
// ============================================================================

/// Machine-readable identifier of the violated constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintRule {
    /// Required field or parameter was not supplied
    Missing,
    /// Value is not of the declared type
    InvalidType,
    /// String shorter than the declared minimum
    MinLength,
    /// String longer than the declared maximum
    MaxLength,
    /// Number below the declared `ge` bound
    Ge,
    /// Number at or above the declared `lt` bound
    Lt,
    /// String does not match the declared pattern
    Pattern,
    /// Value is not in the declared closed set
    InvalidChoice,
    /// Value is not a recognized boolean literal
    InvalidBool,
    /// Value does not parse as an http(s) URL
    InvalidUrl,
    /// Value is not a syntactically valid email address
    InvalidEmail,
}

/// A single violated constraint on one field.
///
/// `field` is the external field path as the client sent it (dotted for
/// nested body fields, e.g. `image.url`). `limit` carries whatever bound or
/// allowed set was violated, so callers never have to parse the message.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub rule: ConstraintRule,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,
}

impl FieldError {
    /// Create a "required field missing" error
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} is required"),
            field,
            rule: ConstraintRule::Missing,
            limit: None,
        }
    }

    /// Create an "unexpected type" error
    pub fn invalid_type(field: impl Into<String>, expected: &str) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} must be a {expected}"),
            field,
            rule: ConstraintRule::InvalidType,
            limit: None,
        }
    }

    /// Create a "too short" error
    pub fn too_short(field: impl Into<String>, min: usize) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} must be at least {min} characters"),
            field,
            rule: ConstraintRule::MinLength,
            limit: Some(json!(min)),
        }
    }

    /// Create a "too long" error
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} must be at most {max} characters"),
            field,
            rule: ConstraintRule::MaxLength,
            limit: Some(json!(max)),
        }
    }

    /// Create a "below lower bound" error
    pub fn too_small(field: impl Into<String>, ge: i64) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} must be greater than or equal to {ge}"),
            field,
            rule: ConstraintRule::Ge,
            limit: Some(json!(ge)),
        }
    }

    /// Create an "at or above upper bound" error
    pub fn too_large(field: impl Into<String>, lt: i64) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} must be less than {lt}"),
            field,
            rule: ConstraintRule::Lt,
            limit: Some(json!(lt)),
        }
    }

    /// Create a "pattern not matched" error
    pub fn pattern(field: impl Into<String>, pattern: &str) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} must match pattern \"{pattern}\""),
            field,
            rule: ConstraintRule::Pattern,
            limit: Some(json!(pattern)),
        }
    }

    /// Create a "not in closed set" error listing the allowed values
    pub fn invalid_choice(field: impl Into<String>, allowed: &[&str]) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} must be one of: {}", allowed.join(", ")),
            field,
            rule: ConstraintRule::InvalidChoice,
            limit: Some(json!(allowed)),
        }
    }

    /// Create an "unrecognized boolean literal" error
    pub fn invalid_bool(field: impl Into<String>, raw: &str) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} value \"{raw}\" is not a valid boolean"),
            field,
            rule: ConstraintRule::InvalidBool,
            limit: None,
        }
    }

    /// Create an "invalid URL" error
    pub fn invalid_url(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} must be a valid http(s) URL"),
            field,
            rule: ConstraintRule::InvalidUrl,
            limit: None,
        }
    }

    /// Create an "invalid email" error
    pub fn invalid_email(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            message: format!("{field} must be a valid email address"),
            field,
            rule: ConstraintRule::InvalidEmail,
            limit: None,
        }
    }
}

// ============================================================================
// String Constraints
// ============================================================================

/// Declarative constraints for a string parameter.
///
/// `field` is the externally visible parameter name; when it differs from
/// the Rust binding the descriptor is effectively an alias declaration
/// (e.g. query key `user-name` bound to a local `name`). Lengths count
/// characters, not bytes, so multi-byte input is measured the way a client
/// counts it.
#[derive(Debug, Clone, Copy)]
pub struct StringRules {
    pub field: &'static str,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static Regex>,
    pub default: Option<&'static str>,
    /// Documentation-only flag: the parameter is kept for compatibility and
    /// should not be used by new clients. No runtime effect.
    pub deprecated: bool,
}

impl StringRules {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            min_length: None,
            max_length: None,
            pattern: None,
            default: None,
            deprecated: false,
        }
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: &'static Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Validate a present value against the declared constraints.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        let length = value.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(FieldError::too_short(self.field, min));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Err(FieldError::too_long(self.field, max));
            }
        }
        if let Some(pattern) = self.pattern {
            if !pattern.is_match(value) {
                return Err(FieldError::pattern(self.field, pattern.as_str()));
            }
        }
        Ok(())
    }

    /// Apply the rules to an optional raw value.
    ///
    /// A present value is checked; an absent one yields the declared default
    /// (or `None`) without any checking.
    pub fn apply(&self, raw: Option<&str>) -> Result<Option<String>, FieldError> {
        match raw {
            Some(value) => {
                self.check(value)?;
                Ok(Some(value.to_owned()))
            }
            None => Ok(self.default.map(str::to_owned)),
        }
    }

    /// Like [`StringRules::apply`] for parameters that always resolve to a
    /// value. An absent parameter yields the declared default, or the empty
    /// string when no default was declared.
    pub fn resolve(&self, raw: Option<&str>) -> Result<String, FieldError> {
        Ok(self.apply(raw)?.unwrap_or_default())
    }
}

// ============================================================================
// Integer Constraints
// ============================================================================

/// Declarative bounds for an integer parameter: `ge` (inclusive lower) and
/// `lt` (exclusive upper).
#[derive(Debug, Clone, Copy)]
pub struct IntRules {
    pub field: &'static str,
    pub ge: Option<i64>,
    pub lt: Option<i64>,
}

impl IntRules {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            ge: None,
            lt: None,
        }
    }

    pub fn ge(mut self, bound: i64) -> Self {
        self.ge = Some(bound);
        self
    }

    pub fn lt(mut self, bound: i64) -> Self {
        self.lt = Some(bound);
        self
    }

    /// Check a parsed value, returning it unchanged when in range.
    pub fn check(&self, value: i64) -> Result<i64, FieldError> {
        if let Some(bound) = self.ge {
            if value < bound {
                return Err(FieldError::too_small(self.field, bound));
            }
        }
        if let Some(bound) = self.lt {
            if value >= bound {
                return Err(FieldError::too_large(self.field, bound));
            }
        }
        Ok(value)
    }
}

// ============================================================================
// Coercions and Syntax Checks
// ============================================================================

/// Coerce a raw query value into a bool.
///
/// Accepts the lenient literal set web forms conventionally send:
/// `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, case-insensitively.
/// Anything else is rejected rather than defaulted.
pub fn parse_bool(field: &'static str, raw: &str) -> Result<bool, FieldError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(FieldError::invalid_bool(field, raw)),
    }
}

/// Coerce a raw path segment or query value into an integer.
///
/// Handlers take id segments as strings and run them through here, so a
/// non-numeric segment produces the same structured rejection as any other
/// violated constraint instead of a bare client error.
pub fn parse_int(field: &'static str, raw: &str) -> Result<i64, FieldError> {
    raw.parse::<i64>()
        .map_err(|_| FieldError::invalid_type(field, "integer"))
}

// WHATWG HTML5 email pattern: practical syntax checking without the
// full RFC 5322 grammar.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Check email syntax.
pub fn check_email(field: &str, value: &str) -> Result<(), FieldError> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::invalid_email(field))
    }
}

/// Check that a string parses as an absolute http(s) URL with a host.
pub fn check_http_url(field: &str, value: &str) -> Result<(), FieldError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => Ok(()),
        _ => Err(FieldError::invalid_url(field)),
    }
}
